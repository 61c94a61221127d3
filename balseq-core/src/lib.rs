//! Balanced sequence batch generation library.
//!
//! This crate generates batches of discrete sequences whose ordered symbol
//! transitions are used approximately evenly across the whole batch:
//! - A usage-cost matrix driving greedy balanced selection (`UsageMatrix`)
//! - A batch generator with injectable, seedable randomness (`BatchGenerator`)
//! - Post-hoc empirical transition probabilities (`TransitionMatrix`)
//! - CSV rendering and artifact writing for the generated outputs
//!
//! Balance is approximate by construction: selection greedily takes the
//! least-used transition and makes it expensive, so usage evens out across
//! the batch without ever being forced to exact equality.

/// Core generation model and derived statistics.
///
/// This module exposes the batch generation interface together with the
/// usage matrix that drives it and the transition probabilities derived
/// from finished batches.
pub mod model;

/// CSV rendering and artifact writing for generated batches.
pub mod io;

/// Error kinds raised by parameter validation and generation.
pub mod error;
