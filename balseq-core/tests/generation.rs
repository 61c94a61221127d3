//! Integration tests for balanced batch generation.
//!
//! Exercises the batch-level properties of the generator: exact shape, the
//! no-self-transition constraint, the probability row law, statistical
//! balance of realized transition usage, and seed behavior.

use balseq_core::model::batch_input::BatchInput;
use balseq_core::model::generator::{Batch, BatchGenerator, generate_batches};

fn generate(length: usize, count: usize, seed: u64) -> Batch {
	let input = BatchInput::new(length, count).expect("valid input");
	BatchGenerator::from_seed(input, seed)
		.generate()
		.expect("generation succeeds")
}

fn assert_structure(batch: &Batch, length: usize, count: usize) {
	assert_eq!(batch.sequences().len(), count);
	for sequence in batch.sequences() {
		assert_eq!(sequence.len(), length);
		assert!(sequence.iter().all(|&symbol| symbol < length));
		for pair in sequence.windows(2) {
			assert_ne!(pair[0], pair[1], "self-transition in {sequence:?}");
		}
	}
}

#[test]
fn large_batches_keep_shape_and_symbol_range() {
	let batch = generate(4, 200, 17);
	assert_structure(&batch, 4, 200);
}

#[test]
fn probability_rows_sum_to_one_or_zero() {
	let batch = generate(5, 40, 23);
	let matrix = batch.transition_matrix();

	for row in 0..matrix.size() {
		let sum: f64 = matrix.row(row).iter().sum();
		assert!(
			sum.abs() < 1e-9 || (sum - 1.0).abs() < 1e-9,
			"row {row} sums to {sum}"
		);
	}
}

#[test]
fn diagonal_probabilities_are_zero() {
	let batch = generate(6, 30, 31);
	let matrix = batch.transition_matrix();

	for symbol in 0..matrix.size() {
		assert_eq!(matrix.count(symbol, symbol), 0);
		assert_eq!(matrix.probability(symbol, symbol), 0.0);
	}
}

/// The greedy scheme must use off-diagonal transitions close to evenly:
/// for N=4, M=200 the 600 realized transitions spread over 12 cells, and
/// the spread should be far tighter than uniform random sampling would
/// produce at this batch size.
#[test]
fn transition_usage_is_balanced() {
	let batch = generate(4, 200, 11);
	let matrix = batch.transition_matrix();

	let mut counts = Vec::new();
	for row in 0..4 {
		for col in 0..4 {
			if row != col {
				counts.push(matrix.count(row, col) as f64);
			}
		}
	}

	let mean = counts.iter().sum::<f64>() / counts.len() as f64;
	let variance = counts.iter().map(|c| (c - mean) * (c - mean)).sum::<f64>() / counts.len() as f64;
	let coefficient_of_variation = variance.sqrt() / mean;

	assert!(
		coefficient_of_variation < 0.3,
		"off-diagonal count spread too wide: cv = {coefficient_of_variation}"
	);
}

/// Exact sequences differ across seeds; the structural guarantees may not.
#[test]
fn different_seeds_keep_structural_guarantees() {
	for seed in [3, 1337] {
		let batch = generate(3, 5, seed);
		assert_structure(&batch, 3, 5);
	}
}

#[test]
fn same_seed_reproduces_the_whole_batch() {
	let first = generate(5, 25, 8);
	let second = generate(5, 25, 8);
	assert_eq!(first.sequences(), second.sequences());
}

/// Over two symbols the only admissible sequences alternate. A single
/// sequence realizes exactly one transition, so the opposite row of the
/// probability matrix stays all-zero; from the second sequence on, the
/// cost bump forces the other starting pair and both rows are saturated.
#[test]
fn two_symbol_scenario() {
	let batch = generate(2, 1, 5);
	assert_structure(&batch, 2, 1);
	let sequence = &batch.sequences()[0];
	assert!(sequence == &vec![0, 1] || sequence == &vec![1, 0]);

	let matrix = batch.transition_matrix();
	assert_eq!(matrix.probability(sequence[0], sequence[1]), 1.0);
	let unused_row_sum: f64 = matrix.row(sequence[1]).iter().sum();
	assert_eq!(unused_row_sum, 0.0);

	let batch = generate(2, 2, 5);
	let matrix = batch.transition_matrix();
	assert_eq!(matrix.probability(0, 1), 1.0);
	assert_eq!(matrix.probability(1, 0), 1.0);
	assert_eq!(matrix.probability(0, 0), 0.0);
	assert_eq!(matrix.probability(1, 1), 0.0);
}

#[test]
fn parallel_runs_return_every_batch_in_order() {
	let input = BatchInput::new(4, 6).expect("valid input");
	let batches = generate_batches(input, 5, Some(12)).expect("runs succeed");

	assert_eq!(batches.len(), 5);
	for (run, batch) in batches.iter().enumerate() {
		assert_structure(batch, 4, 6);
		let expected = BatchGenerator::from_seed(input, 12 + run as u64)
			.generate()
			.expect("generation succeeds");
		assert_eq!(batch.sequences(), expected.sequences());
	}
}
