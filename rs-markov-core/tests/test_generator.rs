use rand::SeedableRng;
use rand::rngs::StdRng;
use rs_markov_core::error::ModelError;
use rs_markov_core::mode::Mode;
use rs_markov_core::model::generator::{DEFAULT_FEEDBACK_WIDTH, DEFAULT_STEPS, generate_chain};
use rs_markov_core::model::markov_model::MarkovModel;

fn lines(source: &[&str]) -> Vec<String> {
	source.iter().map(|s| s.to_string()).collect()
}

fn model(source: &[&str], order: usize, mode: Mode) -> MarkovModel {
	MarkovModel::new(&lines(source), order, mode).unwrap()
}

#[test]
fn chain_holds_start_plus_steps_tokens() {
	// "a" is always followed by "b" and vice versa, so the chain is the
	// full alternation and its length is exact.
	let m = model(&["ababababab"], 1, Mode::Char);
	let mut rng = StdRng::seed_from_u64(0);
	let out = generate_chain(&m, "a", DEFAULT_STEPS, DEFAULT_FEEDBACK_WIDTH, &mut rng).unwrap();
	assert_eq!(out.chars().count(), DEFAULT_STEPS + 1);
	assert_eq!(out, "ababababababababababa");
}

#[test]
fn chain_joins_words_with_spaces() {
	let m = model(&["one two one two one two"], 1, Mode::Word);
	let mut rng = StdRng::seed_from_u64(0);
	let out = generate_chain(&m, "one", 4, 1, &mut rng).unwrap();
	assert_eq!(out, "one two one two one");
	assert_eq!(out.split_whitespace().count(), 5);
}

#[test]
fn chain_propagates_first_step_error() {
	let m = model(&["ababababab"], 1, Mode::Char);
	let mut rng = StdRng::seed_from_u64(0);
	let err = generate_chain(&m, "z", DEFAULT_STEPS, 1, &mut rng).unwrap_err();
	assert_eq!(err, ModelError::MissingContext("z".to_owned()));
}

#[test]
fn chain_with_zero_steps_returns_start() {
	let m = model(&["ababababab"], 1, Mode::Char);
	let mut rng = StdRng::seed_from_u64(0);
	let out = generate_chain(&m, "a", 0, 1, &mut rng).unwrap();
	assert_eq!(out, "a");
}

#[test]
fn chain_is_deterministic_under_seed() {
	let m = model(&["mambma"], 1, Mode::Char);
	let run = |seed: u64| -> String {
		let mut rng = StdRng::seed_from_u64(seed);
		generate_chain(&m, "m", 10, 1, &mut rng).unwrap()
	};
	assert_eq!(run(42), run(42));
}

#[test]
fn wider_feedback_uses_higher_order_contexts() {
	// Every context in "abcabcabc" has a single continuation at orders 1
	// and 2, so the chain is fully determined.
	let m = model(&["abcabcabc"], 2, Mode::Char);
	let mut rng = StdRng::seed_from_u64(0);
	let out = generate_chain(&m, "ab", 6, 2, &mut rng).unwrap();
	assert_eq!(out, "abcabcab");
}
