//! Built-in self-tests (`-t`/`--test`).
//!
//! Quick end-to-end checks of the core contracts runnable from any
//! installed binary, without the test harness. One line per check.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rs_markov_core::mode::Mode;
use rs_markov_core::model::generator::generate_chain;
use rs_markov_core::model::markov_model::MarkovModel;
use rs_markov_core::stream::tokens::TokenStream;
use rs_markov_core::stream::windows::Windows;

type Check = fn() -> Result<(), String>;

/// Runs every check, printing `ok` or `FAILED` per check.
/// Returns `false` if any check failed.
pub fn run() -> bool {
	let checks: [(&str, Check); 5] = [
		("single pair table", check_single_pair_table),
		("mambma counts", check_mambma_counts),
		("window tail", check_window_tail),
		("seeded determinism", check_determinism),
		("chain length", check_chain_length),
	];

	let mut all_ok = true;
	for (name, check) in checks {
		match check() {
			Ok(()) => println!("ok - {name}"),
			Err(reason) => {
				all_ok = false;
				println!("FAILED - {name}: {reason}");
			}
		}
	}
	all_ok
}

fn expect_eq<T: PartialEq + std::fmt::Debug>(got: T, expected: T, what: &str) -> Result<(), String> {
	if got == expected {
		Ok(())
	} else {
		Err(format!("{what}: expected {expected:?}, got {got:?}"))
	}
}

fn build(source: &[&str], order: usize, mode: Mode) -> Result<MarkovModel, String> {
	let lines: Vec<String> = source.iter().map(|s| s.to_string()).collect();
	MarkovModel::new(&lines, order, mode).map_err(|e| e.to_string())
}

fn check_single_pair_table() -> Result<(), String> {
	let model = build(&["ab"], 1, Mode::Char)?;
	let table = model.table(1).ok_or("order-1 table missing")?;
	expect_eq(table.len(), 1, "context count")?;
	expect_eq(table.count("a", "b"), 1, "count a->b")
}

fn check_mambma_counts() -> Result<(), String> {
	let model = build(&["mambma"], 1, Mode::Char)?;
	let table = model.table(1).ok_or("order-1 table missing")?;
	expect_eq(table.count("m", "a"), 2, "count m->a")?;
	expect_eq(table.count("m", "b"), 1, "count m->b")?;
	expect_eq(table.count("a", "m"), 1, "count a->m")?;
	expect_eq(table.count("b", "m"), 1, "count b->m")
}

fn check_window_tail() -> Result<(), String> {
	let lines = vec!["abcde".to_owned()];
	let stream = TokenStream::new(lines.into_iter(), Mode::Char);
	let sizes: Vec<usize> = Windows::new(stream, 3).map(|w| w.len()).collect();
	expect_eq(sizes, vec![3, 3, 3, 2, 1], "window sizes")
}

fn check_determinism() -> Result<(), String> {
	let model = build(&["find a city, find yourself a city to live in"], 1, Mode::Char)?;
	let draw = |seed: u64| -> Result<Vec<String>, String> {
		let mut rng = StdRng::seed_from_u64(seed);
		(0..10)
			.map(|_| model.predict("c", &mut rng).map_err(|e| e.to_string()))
			.collect()
	};
	expect_eq(draw(42)?, draw(42)?, "seeded draws")
}

fn check_chain_length() -> Result<(), String> {
	let model = build(&["ababababab"], 1, Mode::Char)?;
	let mut rng = StdRng::seed_from_u64(0);
	let out = generate_chain(&model, "a", 20, 1, &mut rng).map_err(|e| e.to_string())?;
	expect_eq(out.chars().count(), 21, "chain length")
}
