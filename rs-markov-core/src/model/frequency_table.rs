use std::collections::HashMap;

use super::distribution::Distribution;
use crate::stream::windows::Windows;

/// Frequency table for one fixed context length.
///
/// Maps each observed context (the join of `size` consecutive tokens) to
/// the distribution of tokens seen immediately after it.
///
/// # Responsibilities
/// - Build the table from a token stream in a single pass
/// - Expose read-only counts for lookup and inspection
///
/// # Invariants
/// - Every stored context was observed with at least one continuation
/// - `size` is always >= 1
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencyTable {
	/// Context length this table was built for.
	size: usize,

	/// Mapping from a joined context to its next-token distribution.
	contexts: HashMap<String, Distribution>,
}

impl FrequencyTable {
	/// Builds a table of context length `size` from a token stream.
	///
	/// Requests windows of `size + 1` tokens; for each full window, the
	/// first `size` tokens joined with `joiner` form the context and the
	/// last token is the observed continuation.
	///
	/// The build terminates at the first window shorter than `size + 1`
	/// (the first tail window). Short windows are not skipped over: the
	/// final `size` tokens of the stream never contribute a training pair.
	///
	/// An empty token stream yields an empty table; there are no error
	/// conditions.
	pub fn from_tokens<I>(tokens: I, size: usize, joiner: &str) -> Self
	where
		I: Iterator<Item = String>,
	{
		let mut contexts: HashMap<String, Distribution> = HashMap::new();

		for window in Windows::new(tokens, size + 1) {
			if window.len() < size + 1 {
				break;
			}
			let context = window[..size].join(joiner);
			let next = &window[size];
			contexts
				.entry(context)
				.or_insert_with(Distribution::new)
				.record(next);
		}

		Self { size, contexts }
	}

	/// Context length this table was built for.
	pub fn size(&self) -> usize {
		self.size
	}

	/// Number of distinct contexts in the table.
	pub fn len(&self) -> usize {
		self.contexts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.contexts.is_empty()
	}

	/// Whether `context` was observed during training.
	pub fn contains(&self, context: &str) -> bool {
		self.contexts.contains_key(context)
	}

	/// Count recorded for `token` following `context` (0 if absent).
	pub fn count(&self, context: &str, token: &str) -> usize {
		self.contexts.get(context).map(|dist| dist.count(token)).unwrap_or(0)
	}

	/// Sum of all counts recorded for `context` (0 if unknown).
	pub fn total(&self, context: &str) -> usize {
		self.contexts.get(context).map(Distribution::total).unwrap_or(0)
	}

	/// Iterates over the contexts present in the table.
	pub fn iter_contexts(&self) -> impl Iterator<Item = &str> {
		self.contexts.keys().map(String::as_str)
	}

	pub(crate) fn distribution(&self, context: &str) -> Option<&Distribution> {
		self.contexts.get(context)
	}
}
