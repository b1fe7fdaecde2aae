//! Multi-order Markov model and sampling.
//!
//! This module provides:
//! - Per-order frequency tables (`FrequencyTable`)
//! - The multi-order model (`MarkovModel`)
//! - Chained generation (`generator::generate_chain`)
//! - Internal next-token count distributions (`Distribution`)

/// Internal representation of one context's next-token counts.
///
/// Tracks occurrences and supports weighted random sampling.
/// This module is not exposed publicly.
mod distribution;

/// Context-to-distribution map for one fixed context length.
///
/// Built from a token stream via sliding windows, honoring the
/// early-exit rule at the first tail window.
pub mod frequency_table;

/// Chained-prediction driver feeding results back as new context.
pub mod generator;

/// Multi-order model: one frequency table per context length,
/// prediction by exact lookup and weighted random choice.
pub mod markov_model;
