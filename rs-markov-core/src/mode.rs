/// Tokenization policy shared by the token stream and the model.
///
/// A single `Mode` value selects the line tokenizer, the join operator
/// used to materialize contexts, and the context-length function. Table
/// construction and sampling are identical across both modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
	/// Tokens are single characters; contexts join with the empty string.
	Char,
	/// Tokens are whitespace-delimited words; contexts join with a space.
	Word,
}

impl Mode {
	/// Splits one line into its tokens.
	///
	/// Character mode yields every character of the line; word mode yields
	/// its whitespace-split words. An empty line yields no tokens.
	pub(crate) fn split_line(&self, line: &str) -> Vec<String> {
		match self {
			Mode::Char => line.chars().map(String::from).collect(),
			Mode::Word => line.split_whitespace().map(str::to_owned).collect(),
		}
	}

	/// The separator inserted between tokens when building a context key.
	pub fn joiner(&self) -> &'static str {
		match self {
			Mode::Char => "",
			Mode::Word => " ",
		}
	}

	/// Joins tokens into a single string with this mode's separator.
	pub fn join(&self, tokens: &[String]) -> String {
		tokens.join(self.joiner())
	}

	/// Number of tokens a context string holds under this mode.
	pub fn context_len(&self, context: &str) -> usize {
		match self {
			Mode::Char => context.chars().count(),
			Mode::Word => context.split_whitespace().count(),
		}
	}
}
