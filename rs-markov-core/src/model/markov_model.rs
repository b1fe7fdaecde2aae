use log::debug;
use rand::Rng;

use super::frequency_table::FrequencyTable;
use crate::error::{ModelError, Result};
use crate::mode::Mode;
use crate::stream::tokens::TokenStream;

/// Multi-order Markov model over character or word tokens.
///
/// Owns one `FrequencyTable` per context length from 1 up to the
/// configured maximum order, built once from the training lines and
/// read-only thereafter.
///
/// # Responsibilities
/// - Build all tables from the line data, one pass per order
/// - Predict the next token for a context by exact lookup and
///   weighted random choice
///
/// # Invariants
/// - `order >= 1`; `tables[k - 1]` holds the table for context length `k`
/// - Tables are never mutated after construction, so `predict` can be
///   called from multiple readers
#[derive(Clone, Debug, PartialEq)]
pub struct MarkovModel {
	mode: Mode,
	tables: Vec<FrequencyTable>,
}

impl MarkovModel {
	/// Trains a model of maximum order `order` over `lines`.
	///
	/// Token streams are single-pass, so each order derives a fresh
	/// stream from the line data rather than materializing the full
	/// token sequence: `order` passes, each buffering only the current
	/// line.
	///
	/// # Errors
	/// Returns `ModelError::InvalidOrder` if `order < 1`.
	pub fn new(lines: &[String], order: usize, mode: Mode) -> Result<Self> {
		if order < 1 {
			return Err(ModelError::InvalidOrder(order));
		}

		let mut tables = Vec::with_capacity(order);
		for size in 1..=order {
			let tokens = TokenStream::new(lines.iter().cloned(), mode);
			let table = FrequencyTable::from_tokens(tokens, size, mode.joiner());
			debug!("order-{} table holds {} contexts", size, table.len());
			tables.push(table);
		}

		Ok(Self { mode, tables })
	}

	/// Maximum order this model was trained with.
	pub fn order(&self) -> usize {
		self.tables.len()
	}

	/// Tokenization mode this model was trained with.
	pub fn mode(&self) -> Mode {
		self.mode
	}

	/// Table for context length `size`, if `1 <= size <= order`.
	pub fn table(&self, size: usize) -> Option<&FrequencyTable> {
		if size < 1 {
			return None;
		}
		self.tables.get(size - 1)
	}

	/// Predicts the next token for `context`.
	///
	/// The context length (characters or whitespace words, per mode)
	/// selects the table; the continuation is then drawn with probability
	/// proportional to its observed count, consuming entropy from `rng`.
	/// Apart from the draw, this is a pure lookup.
	///
	/// # Errors
	/// - `OrderOutOfRange` if the context length is outside `1..=order`
	/// - `MissingContext` if the context was never observed at its order
	pub fn predict<R: Rng>(&self, context: &str, rng: &mut R) -> Result<String> {
		let len = self.mode.context_len(context);
		if len < 1 || len > self.tables.len() {
			return Err(ModelError::OrderOutOfRange { len, max: self.tables.len() });
		}

		let table = &self.tables[len - 1];
		let dist = table
			.distribution(context)
			.ok_or_else(|| ModelError::MissingContext(context.to_owned()))?;

		// Stored distributions always hold at least one count, so the
		// draw cannot come back empty.
		dist.sample(rng)
			.map(str::to_owned)
			.ok_or_else(|| ModelError::MissingContext(context.to_owned()))
	}
}
