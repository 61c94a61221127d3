use serde::{Deserialize, Serialize};

/// Empirical transition probability matrix of a finished batch.
///
/// Built by an independent counting pass over the generated sequences: the
/// cell (row, col) counts how often `row` was immediately followed by `col`,
/// and every row with at least one observation is normalized to
/// probabilities. The matrix is a reporting artifact; it shares no state
/// with the usage matrix that drove generation, and it never changes once
/// computed.
///
/// # Invariants
/// - Each probability row sums to 1.0 (within float tolerance) or is
///   entirely zero, meaning the symbol was never observed as a transition
///   source
/// - Diagonal counts are zero for sequences that contain no self-transition
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TransitionMatrix {
	/// Number of symbols (the matrix is `size` x `size`).
	size: usize,
	/// Raw transition counts, row-major.
	counts: Vec<u64>,
	/// Row-normalized probabilities, row-major.
	probabilities: Vec<f64>,
}

impl TransitionMatrix {
	/// Counts every consecutive pair across `sequences` and normalizes each
	/// non-empty row.
	///
	/// `size` is the alphabet size; symbols are expected in `[0, size)`.
	pub fn from_sequences(size: usize, sequences: &[Vec<usize>]) -> Self {
		let mut counts = vec![0u64; size * size];
		for sequence in sequences {
			for pair in sequence.windows(2) {
				counts[pair[0] * size + pair[1]] += 1;
			}
		}

		let mut probabilities = vec![0f64; size * size];
		for row in 0..size {
			let total: u64 = counts[row * size..(row + 1) * size].iter().sum();
			if total == 0 {
				// Symbol never used as a transition source; row stays zero.
				continue;
			}
			for col in 0..size {
				probabilities[row * size + col] = counts[row * size + col] as f64 / total as f64;
			}
		}

		Self { size, counts, probabilities }
	}

	/// Returns the number of symbols.
	pub fn size(&self) -> usize {
		self.size
	}

	/// Raw number of observed `row -> col` transitions.
	pub fn count(&self, row: usize, col: usize) -> u64 {
		self.counts[row * self.size + col]
	}

	/// Empirical probability of `row -> col`; rows without observations
	/// yield zero.
	pub fn probability(&self, row: usize, col: usize) -> f64 {
		self.probabilities[row * self.size + col]
	}

	/// Probability row as a slice.
	pub fn row(&self, row: usize) -> &[f64] {
		&self.probabilities[row * self.size..(row + 1) * self.size]
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn counts_every_consecutive_pair() {
		let sequences = vec![vec![0, 1, 2], vec![2, 1, 0]];
		let matrix = TransitionMatrix::from_sequences(3, &sequences);

		assert_eq!(matrix.count(0, 1), 1);
		assert_eq!(matrix.count(1, 2), 1);
		assert_eq!(matrix.count(2, 1), 1);
		assert_eq!(matrix.count(1, 0), 1);
		assert_eq!(matrix.count(0, 2), 0);
		assert_eq!(matrix.count(2, 0), 0);
	}

	#[test]
	fn rows_with_observations_sum_to_one() {
		let sequences = vec![vec![0, 1, 0, 2], vec![1, 2, 1]];
		let matrix = TransitionMatrix::from_sequences(3, &sequences);

		for row in 0..3 {
			let sum: f64 = matrix.row(row).iter().sum();
			assert!((sum - 1.0).abs() < 1e-9, "row {row} sums to {sum}");
		}
	}

	#[test]
	fn unused_source_rows_stay_zero() {
		// Symbol 2 never appears before another symbol.
		let sequences = vec![vec![0, 1], vec![1, 0]];
		let matrix = TransitionMatrix::from_sequences(3, &sequences);

		let sum: f64 = matrix.row(2).iter().sum();
		assert_eq!(sum, 0.0);
		assert_eq!(matrix.probability(2, 0), 0.0);
	}

	#[test]
	fn probabilities_follow_relative_counts() {
		// 0 -> 1 twice, 0 -> 2 once.
		let sequences = vec![vec![0, 1], vec![0, 1], vec![0, 2]];
		let matrix = TransitionMatrix::from_sequences(3, &sequences);

		assert!((matrix.probability(0, 1) - 2.0 / 3.0).abs() < 1e-9);
		assert!((matrix.probability(0, 2) - 1.0 / 3.0).abs() < 1e-9);
	}
}
