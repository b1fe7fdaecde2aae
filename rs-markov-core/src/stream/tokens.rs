use crate::mode::Mode;

/// Lazy token stream over an ordered sequence of lines.
///
/// Yields one `String` token at a time (characters or whitespace-split
/// words, depending on `Mode`), crossing line boundaries without inserting
/// any separator token. Only the current line's tokens are buffered, so
/// arbitrarily long line sources can be scanned without materializing
/// every token.
///
/// # Invariants
/// - Single-pass: once exhausted it stays exhausted; construct a fresh
///   stream for each independent pass.
/// - Empty lines contribute no tokens; an empty line source yields an
///   empty stream, not an error.
pub struct TokenStream<I> {
	lines: I,
	mode: Mode,
	buf: Vec<String>,
	pos: usize,
}

impl<I> TokenStream<I>
where
	I: Iterator<Item = String>,
{
	pub fn new(lines: I, mode: Mode) -> Self {
		Self { lines, mode, buf: Vec::new(), pos: 0 }
	}
}

impl<I> Iterator for TokenStream<I>
where
	I: Iterator<Item = String>,
{
	type Item = String;

	fn next(&mut self) -> Option<String> {
		loop {
			if self.pos < self.buf.len() {
				// Each slot is read exactly once, so it can be moved out.
				let token = std::mem::take(&mut self.buf[self.pos]);
				self.pos += 1;
				return Some(token);
			}
			let line = self.lines.next()?;
			self.buf = self.mode.split_line(&line);
			self.pos = 0;
		}
	}
}
