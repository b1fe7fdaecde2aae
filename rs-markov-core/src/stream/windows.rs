use std::collections::VecDeque;

/// Sliding windows over a token stream.
///
/// While at least `size` tokens remain, every produced window has exactly
/// `size` tokens and slides forward by one token per step. Once the stream
/// is exhausted, the iterator emits a shrinking tail: the remaining
/// `size - 1` tokens, then `size - 2`, down to a final single-token window,
/// each consumed from the front. The tail guarantees every suffix of the
/// input, including the very end, appears in at least one window.
///
/// A stream of `n >= size` tokens therefore produces exactly
/// `n - size + 1` full windows followed by `size - 1` tail windows.
pub struct Windows<I> {
	tokens: I,
	size: usize,
	win: VecDeque<String>,
	draining: bool,
}

impl<I> Windows<I>
where
	I: Iterator<Item = String>,
{
	/// `size` must be >= 1.
	pub fn new(tokens: I, size: usize) -> Self {
		debug_assert!(size >= 1, "window size must be >= 1");
		Self {
			tokens,
			size,
			win: VecDeque::with_capacity(size),
			draining: false,
		}
	}
}

impl<I> Iterator for Windows<I>
where
	I: Iterator<Item = String>,
{
	type Item = Vec<String>;

	fn next(&mut self) -> Option<Vec<String>> {
		if !self.draining {
			for token in self.tokens.by_ref() {
				self.win.push_back(token);
				if self.win.len() == self.size {
					let out: Vec<String> = self.win.iter().cloned().collect();
					self.win.pop_front();
					return Some(out);
				}
			}
			self.draining = true;
		}

		// Shrinking tail: emit the leftover buffer, dropping one token
		// from the front per step.
		if self.win.is_empty() {
			return None;
		}
		let out: Vec<String> = self.win.iter().cloned().collect();
		self.win.pop_front();
		Some(out)
	}
}
