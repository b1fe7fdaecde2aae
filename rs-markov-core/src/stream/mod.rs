//! Lazy iteration over line-oriented text.
//!
//! Both iterators here are single-pass and finite: a fresh one must be
//! constructed for each independent pass over the same line data.

/// Lazy token stream over an ordered sequence of lines.
pub mod tokens;

/// Sliding windows over a token stream, with the shrinking tail.
pub mod windows;
