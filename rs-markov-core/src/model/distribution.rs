use std::collections::BTreeMap;

use rand::Rng;

/// Observed next-token counts for a single context.
///
/// Conceptually a node in the Markov chain: outgoing edges are weighted
/// by the number of observations made during training.
///
/// # Responsibilities
/// - Accumulate token occurrences during training
/// - Draw a next token with probability proportional to its count
///
/// # Invariants
/// - Every stored count is >= 1; an absent token was never observed.
/// - Iteration order is the token order (`BTreeMap`), so a seeded RNG
///   reproduces the same draw across runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Distribution {
	counts: BTreeMap<String, usize>,
}

impl Distribution {
	pub(crate) fn new() -> Self {
		Self { counts: BTreeMap::new() }
	}

	/// Records one occurrence of a transition toward `token`.
	///
	/// - If the token was already observed, its count is increased.
	/// - Otherwise it is inserted with an initial count of 1.
	pub(crate) fn record(&mut self, token: &str) {
		*self.counts.entry(token.to_owned()).or_insert(0) += 1;
	}

	/// Sum of all occurrence counts.
	pub(crate) fn total(&self) -> usize {
		self.counts.values().sum()
	}

	/// Count recorded for `token`, 0 if it was never observed.
	pub(crate) fn count(&self, token: &str) -> usize {
		self.counts.get(token).copied().unwrap_or(0)
	}

	/// Draws a token with probability `count / total`.
	///
	/// Performs an O(n) cumulative subtraction over the counts, which is
	/// equivalent to a uniform draw from the multiset where each token
	/// appears `count` times.
	///
	/// Returns `None` only if nothing was ever recorded.
	pub(crate) fn sample<R: Rng>(&self, rng: &mut R) -> Option<&str> {
		let total = self.total();
		if total == 0 {
			return None;
		}

		let mut r = rng.random_range(0..total);
		let mut fallback: Option<&str> = None;
		for (token, count) in &self.counts {
			if r < *count {
				return Some(token);
			}
			r -= count;
			fallback = Some(token);
		}

		// Unreachable while the count invariant holds, but kept for safety.
		fallback
	}
}
