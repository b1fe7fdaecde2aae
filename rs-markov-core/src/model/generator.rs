use rand::Rng;

use super::markov_model::MarkovModel;
use crate::error::Result;

/// Default number of predictions chained by `generate_chain`.
pub const DEFAULT_STEPS: usize = 20;

/// Default number of trailing produced tokens fed back as the next context.
pub const DEFAULT_FEEDBACK_WIDTH: usize = 1;

/// Chains `steps` predictions, feeding each result back as new context.
///
/// Starting from `start`, repeatedly asks the model for a continuation,
/// appends it to the produced sequence, then uses the join of the last
/// `feedback_width` produced tokens as the next context. Returns the start
/// plus every prediction, joined with the mode's join operator, so the
/// result holds exactly `steps` tokens more than `start`.
///
/// `feedback_width` must be >= 1; with fewer than `feedback_width` tokens
/// produced so far, everything produced is used.
///
/// # Errors
/// Propagates the first `predict` failure immediately, including a
/// `MissingContext` on the very first step. No retry, no fallback context.
pub fn generate_chain<R: Rng>(
	model: &MarkovModel,
	start: &str,
	steps: usize,
	feedback_width: usize,
	rng: &mut R,
) -> Result<String> {
	let mode = model.mode();
	let mut produced: Vec<String> = Vec::with_capacity(steps);
	let mut context = start.to_owned();

	for _ in 0..steps {
		let token = model.predict(&context, rng)?;
		produced.push(token);
		let from = produced.len().saturating_sub(feedback_width);
		context = mode.join(&produced[from..]);
	}

	let mut out = start.to_owned();
	if !produced.is_empty() {
		if !out.is_empty() {
			out.push_str(mode.joiner());
		}
		out.push_str(&mode.join(&produced));
	}
	Ok(out)
}
