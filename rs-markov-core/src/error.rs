use thiserror::Error;

/// Errors surfaced by model construction and prediction.
///
/// None of these are recovered internally: a missing context or an
/// out-of-range lookup always propagates to the caller, which decides
/// any retry or fallback policy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
	/// Construction was asked for an unusable maximum order.
	#[error("order must be >= 1, got {0}")]
	InvalidOrder(usize),

	/// The context holds a number of tokens outside `1..=order`.
	/// Indicates misuse, not a training-data gap.
	#[error("context holds {len} token(s), expected between 1 and {max}")]
	OrderOutOfRange { len: usize, max: usize },

	/// The context was never observed during training at its order.
	#[error("context {0:?} was never observed during training")]
	MissingContext(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
