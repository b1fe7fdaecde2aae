//! Multi-order Markov chain text prediction library.
//!
//! This crate provides a statistical next-token predictor built from
//! line-oriented text, including:
//! - Lazy character and word token streams
//! - Sliding-window generation over token streams
//! - Per-order n-gram frequency tables
//! - A multi-order model with weighted random prediction
//! - A chained-prediction driver
//!
//! The random source is always supplied by the caller, so seeded
//! generators reproduce the exact same predictions.

/// Error types shared across model construction and prediction.
pub mod error;

/// Tokenization policy: character or whitespace-word models.
pub mod mode;

/// Markov model, frequency tables and chained generation.
pub mod model;

/// Lazy iteration over line-oriented text: token streams and
/// sliding windows.
pub mod stream;
