use thiserror::Error;

/// Errors raised by batch generation.
///
/// `InvalidSize` and `InvalidBatchSize` are parameter validation failures,
/// raised before any generation work starts. `DeadEnd` signals an internal
/// consistency fault: a row-minimum query found no admissible column, which
/// cannot happen once the size constraint holds. It is surfaced rather than
/// swallowed so a caller can treat it as fatal.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationError {
	/// The sequence length (and alphabet size) must be at least 2.
	#[error("sequence length must be >= 2, got {0}")]
	InvalidSize(usize),

	/// The batch must contain at least one sequence.
	#[error("batch count must be >= 1, got {0}")]
	InvalidBatchSize(usize),

	/// A row-minimum query found no valid off-diagonal column.
	#[error("no admissible transition out of symbol {0}")]
	DeadEnd(usize),
}
