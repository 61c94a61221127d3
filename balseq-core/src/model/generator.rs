use std::sync::mpsc;
use std::thread;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use crate::model::batch_input::BatchInput;
use crate::model::transition_matrix::TransitionMatrix;
use crate::model::usage_matrix::UsageMatrix;

/// A finished batch: the generated sequences plus the alphabet size.
///
/// Sequences are kept in generation order. The alphabet size is carried
/// alongside because every derived statistic needs it and the sequences
/// alone cannot guarantee that every symbol was realized.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Batch {
	alphabet_size: usize,
	sequences: Vec<Vec<usize>>,
}

impl Batch {
	/// Sequences in generation order.
	pub fn sequences(&self) -> &[Vec<usize>] {
		&self.sequences
	}

	/// Alphabet size, which is also each sequence's length.
	pub fn alphabet_size(&self) -> usize {
		self.alphabet_size
	}

	/// Derives the empirical transition probability matrix of this batch.
	///
	/// This is an independent counting pass over the finished sequences; it
	/// does not reuse any state from the generation itself.
	pub fn transition_matrix(&self) -> TransitionMatrix {
		TransitionMatrix::from_sequences(self.alphabet_size, &self.sequences)
	}
}

/// High-level driver producing a batch of balanced sequences.
///
/// # Responsibilities
/// - Own the injected random source for the whole batch
/// - Thread one exclusively-owned `UsageMatrix` through every generation
///   step, in order
/// - Derive the per-sequence selection: global minimum for the starting
///   pair, row minimum for every following symbol
///
/// # Notes
/// - Generation is strictly sequential: every bump must be visible to the
///   next minimum query, so steps are never interleaved within a batch.
///   Use [`generate_batches`] to parallelize across independent batches.
/// - The usage matrix persists across all sequences of the batch, so the
///   starting pair of later sequences is biased toward transitions the
///   batch has used least so far.
pub struct BatchGenerator<R: Rng> {
	input: BatchInput,
	rng: R,
}

impl BatchGenerator<StdRng> {
	/// Creates a generator with a fresh, entropy-seeded random source.
	pub fn new(input: BatchInput) -> Self {
		Self::with_rng(input, StdRng::from_rng(&mut rand::rng()))
	}

	/// Creates a generator whose randomness is fully determined by `seed`.
	///
	/// Two generators built from the same input and seed produce identical
	/// batches; distinct seeds still satisfy every structural guarantee.
	pub fn from_seed(input: BatchInput, seed: u64) -> Self {
		Self::with_rng(input, StdRng::seed_from_u64(seed))
	}
}

impl<R: Rng> BatchGenerator<R> {
	/// Creates a generator over a caller-supplied random source.
	pub fn with_rng(input: BatchInput, rng: R) -> Self {
		Self { input, rng }
	}

	/// Generates the whole batch.
	///
	/// One `UsageMatrix` is created at batch start, accumulates across all
	/// sequences and is dropped when the batch is done.
	///
	/// # Errors
	/// `DeadEnd` if a row-minimum query finds no admissible column, an
	/// internal-consistency fault that validated inputs cannot reach.
	pub fn generate(mut self) -> Result<Batch, GenerationError> {
		let size = self.input.sequence_length();
		let mut usage = UsageMatrix::new(size, &mut self.rng)?;

		let mut sequences = Vec::with_capacity(self.input.batch_count());
		for _ in 0..self.input.batch_count() {
			sequences.push(Self::generate_sequence(size, &mut usage, &mut self.rng)?);
		}
		debug!("generated {} sequences of length {}", sequences.len(), size);

		Ok(Batch { alphabet_size: size, sequences })
	}

	/// Generates one sequence against the shared usage matrix.
	///
	/// The first two symbols come from the global minimum (the least-used
	/// transition overall); every following symbol is the cheapest
	/// admissible successor of the last one. Each chosen transition is
	/// bumped before the next query runs.
	fn generate_sequence(
		size: usize,
		usage: &mut UsageMatrix,
		rng: &mut R,
	) -> Result<Vec<usize>, GenerationError> {
		let mut sequence = Vec::with_capacity(size);

		let (first, second) = usage.global_minimum();
		usage.bump(first, second, rng);
		sequence.push(first);
		sequence.push(second);

		while sequence.len() < size {
			let last = sequence[sequence.len() - 1];
			let next = usage.row_minimum(last)?;
			usage.bump(last, next, rng);
			sequence.push(next);
		}

		Ok(sequence)
	}
}

/// Runs `runs` independent batches in parallel and returns them in run order.
///
/// Each run owns a private `UsageMatrix` and random source, so no generation
/// step is ever interleaved within a batch; only whole batches execute
/// concurrently. With a base seed, run `i` is seeded with `base_seed + i`
/// and the whole result is reproducible; without one, every run is
/// entropy-seeded. Runs are chunked over the available cores.
pub fn generate_batches(
	input: BatchInput,
	runs: usize,
	base_seed: Option<u64>,
) -> Result<Vec<Batch>, GenerationError> {
	if runs == 0 {
		return Ok(Vec::new());
	}

	let cpus = num_cpus::get().max(1);
	let chunk_size = (runs + cpus - 1) / cpus;
	debug!("running {} batches over chunks of {}", runs, chunk_size);

	let (tx, rx) = mpsc::channel();
	let indices: Vec<usize> = (0..runs).collect();
	for chunk in indices.chunks(chunk_size) {
		let tx = tx.clone();
		let chunk: Vec<usize> = chunk.to_vec();

		thread::spawn(move || {
			for run in chunk {
				let generator = match base_seed {
					Some(seed) => BatchGenerator::from_seed(input, seed.wrapping_add(run as u64)),
					None => BatchGenerator::new(input),
				};
				tx.send((run, generator.generate())).expect("Failed to send from thread");
			}
		});
	}
	drop(tx);

	let mut results: Vec<(usize, Result<Batch, GenerationError>)> = rx.iter().collect();
	results.sort_by_key(|(run, _)| *run);

	let mut batches = Vec::with_capacity(runs);
	for (_, result) in results {
		batches.push(result?);
	}
	Ok(batches)
}
