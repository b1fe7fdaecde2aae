//! Command-line argument parsing.

use clap::Parser;
use rs_markov_core::mode::Mode;
use rs_markov_core::model::generator::DEFAULT_STEPS;
use std::path::PathBuf;

/// Train a Markov chain over a text file and predict from it.
#[derive(Parser, Debug)]
#[command(name = "rs-markov")]
#[command(version)]
#[command(about = "Markov chain next-token prediction over text files")]
pub struct Args {
	/// Input training file
	#[arg(short = 'f', long = "file", value_name = "PATH")]
	pub file: Option<PathBuf>,

	/// Maximum model order (context length)
	#[arg(short = 's', long = "size", value_name = "N", default_value_t = 1)]
	pub size: usize,

	/// Input file encoding: utf-8 or latin-1
	#[arg(long, value_name = "NAME", default_value = "utf-8")]
	pub encoding: String,

	/// Split lines into whitespace-delimited words instead of characters
	#[arg(short = 'w', long = "words")]
	pub words: bool,

	/// Generate a chain from this starting context and exit, instead of
	/// entering the interactive loop
	#[arg(short = 'g', long = "generate", value_name = "START")]
	pub generate: Option<String>,

	/// Number of predictions to chain with --generate
	#[arg(long, value_name = "N", default_value_t = DEFAULT_STEPS)]
	pub steps: usize,

	/// Run the built-in self-tests and exit
	#[arg(short = 't', long = "test")]
	pub test: bool,
}

impl Args {
	/// Tokenization mode selected on the command line.
	pub fn mode(&self) -> Mode {
		if self.words { Mode::Word } else { Mode::Char }
	}
}
