//! Command-line boundary: argument parsing, file loading, the interactive
//! read-predict-print loop, one-shot chain generation and self-tests.
//! All prediction logic lives in `rs-markov-core`.

mod args;
mod io;
mod selftest;

use std::io::Write;

use clap::Parser;
use log::info;
use rand::Rng;
use rs_markov_core::model::generator::{DEFAULT_FEEDBACK_WIDTH, generate_chain};
use rs_markov_core::model::markov_model::MarkovModel;

use crate::args::Args;

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::init();
	let args = Args::parse();

	if args.test {
		return if selftest::run() {
			Ok(())
		} else {
			Err("self-tests failed".into())
		};
	}

	let Some(path) = &args.file else {
		return Err("no input file; pass -f/--file (or -t/--test)".into());
	};

	let lines = io::read_lines(path, &args.encoding)?;
	let model = MarkovModel::new(&lines, args.size, args.mode())?;
	info!(
		"trained {:?} model of order {} over {} lines",
		model.mode(),
		model.order(),
		lines.len()
	);

	let mut rng = rand::rng();

	if let Some(start) = &args.generate {
		let chain = generate_chain(&model, start, args.steps, DEFAULT_FEEDBACK_WIDTH, &mut rng)?;
		println!("{chain}");
		return Ok(());
	}

	repl(&model, &mut rng)
}

/// Reads one line at a time, predicts its continuation and prints it.
///
/// A failed prediction is reported and the loop continues with the next
/// line; end of input (or an interrupt at the terminal) ends the loop
/// cleanly.
fn repl<R: Rng>(model: &MarkovModel, rng: &mut R) -> Result<(), Box<dyn std::error::Error>> {
	let stdin = std::io::stdin();
	let mut line = String::new();

	loop {
		print!("> ");
		std::io::stdout().flush()?;

		line.clear();
		if stdin.read_line(&mut line)? == 0 {
			break;
		}
		let context = line.trim_end_matches(['\r', '\n']);

		match model.predict(context, rng) {
			Ok(token) => println!("{token}"),
			Err(e) => eprintln!("{e}"),
		}
	}

	Ok(())
}
