//! Top-level module for the balanced sequence generation system.
//!
//! This crate provides a transition-balanced batch generator, including:
//! - The usage-cost matrix driving selection (`UsageMatrix`)
//! - Validated generation parameters (`BatchInput`)
//! - The batch generation interface (`BatchGenerator`, `Batch`)
//! - Empirical transition probabilities (`TransitionMatrix`)

/// High-level interface for generating batches of balanced sequences.
///
/// Exposes seeded and entropy-backed construction, the per-batch generation
/// loop, and a parallel driver for independent runs.
pub mod generator;

/// Usage-cost matrix over ordered symbol transitions.
///
/// Supports the minimum queries and the single cost-bump mutation that
/// together enforce approximate balance under greedy selection.
pub mod usage_matrix;

/// Empirical transition probability matrix of a finished batch.
///
/// Derived by an independent counting pass over the generated sequences;
/// carries both raw counts and row-normalized probabilities.
pub mod transition_matrix;

/// Validated generation parameters.
///
/// Holds the sequence length and batch count, both checked at construction.
pub mod batch_input;
