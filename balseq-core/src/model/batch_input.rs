use crate::error::GenerationError;

/// Validated input parameters for generating a batch.
///
/// `BatchInput` carries the two quantities that define a batch: the length
/// of each sequence (which is also the alphabet size) and the number of
/// sequences to generate. Both bounds are checked at construction so that
/// generation itself can assume them.
///
/// # Invariants
/// - `sequence_length >= 2` (a sequence needs at least two distinct symbols
///   to avoid an immediate self-transition)
/// - `batch_count >= 1`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchInput {
	sequence_length: usize,
	batch_count: usize,
}

impl BatchInput {
	/// Creates a validated input.
	///
	/// # Errors
	/// - `InvalidSize` if `sequence_length < 2`
	/// - `InvalidBatchSize` if `batch_count < 1`
	pub fn new(sequence_length: usize, batch_count: usize) -> Result<Self, GenerationError> {
		if sequence_length < 2 {
			return Err(GenerationError::InvalidSize(sequence_length));
		}
		if batch_count < 1 {
			return Err(GenerationError::InvalidBatchSize(batch_count));
		}
		Ok(Self { sequence_length, batch_count })
	}

	/// Length of each generated sequence, which is also the alphabet size.
	pub fn sequence_length(&self) -> usize {
		self.sequence_length
	}

	/// Number of sequences in the batch.
	pub fn batch_count(&self) -> usize {
		self.batch_count
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accepts_smallest_valid_input() {
		let input = BatchInput::new(2, 1).expect("valid input");
		assert_eq!(input.sequence_length(), 2);
		assert_eq!(input.batch_count(), 1);
	}

	#[test]
	fn rejects_short_sequences() {
		assert_eq!(
			BatchInput::new(1, 10).unwrap_err(),
			GenerationError::InvalidSize(1)
		);
	}

	#[test]
	fn rejects_empty_batches() {
		assert_eq!(
			BatchInput::new(4, 0).unwrap_err(),
			GenerationError::InvalidBatchSize(0)
		);
	}
}
