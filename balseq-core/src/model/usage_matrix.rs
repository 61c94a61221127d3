use rand::Rng;

use crate::error::GenerationError;

/// Usage-cost matrix driving balanced transition selection.
///
/// Rows represent the current symbol and columns the next symbol; each cell
/// holds the accumulated cost of the ordered transition (row -> column).
/// Cells start as uniform noise in `[0, 1)` and are pushed past the next
/// integer every time their transition is chosen, so a just-used transition
/// stays out of contention until the rest of its row has caught up.
///
/// Conceptually this is the transition table of a Markov chain, except that
/// selection always takes the cheapest admissible edge instead of sampling.
///
/// ## Responsibilities
/// - Hold the accumulated cost of every ordered transition
/// - Locate the cheapest transition, globally or out of one symbol
/// - Apply the cost bump that records a transition as used
///
/// ## Invariants
/// - Diagonal cells (self-transitions) are never consulted by any query
/// - Cell values never decrease; `bump` is the only mutator and touches
///   exactly one cell
#[derive(Clone, Debug)]
pub struct UsageMatrix {
	/// Number of symbols (the matrix is `size` x `size`).
	size: usize,
	/// Row-major cell storage, `size * size` values.
	cells: Vec<f64>,
}

impl UsageMatrix {
	/// Creates a matrix of the given size, every cell filled with an
	/// independent uniform draw in `[0, 1)`.
	///
	/// The diagonal receives the same draws as everything else for
	/// uniformity; no query ever reads it.
	///
	/// # Errors
	/// Returns `InvalidSize` if `size < 2`: no off-diagonal cell would
	/// exist, so neither minimum query could answer.
	pub fn new<R: Rng>(size: usize, rng: &mut R) -> Result<Self, GenerationError> {
		if size < 2 {
			return Err(GenerationError::InvalidSize(size));
		}
		let cells = (0..size * size).map(|_| rng.random::<f64>()).collect();
		Ok(Self { size, cells })
	}

	/// Returns the number of symbols.
	pub fn size(&self) -> usize {
		self.size
	}

	/// Returns the cost currently stored for the transition `row -> col`.
	pub fn cost(&self, row: usize, col: usize) -> f64 {
		self.cells[row * self.size + col]
	}

	/// Returns the coordinates of the cheapest transition in the whole
	/// matrix, ignoring the diagonal.
	///
	/// Ties break by row-major scan order: the first strictly smaller cell
	/// wins. The uniform noise injected at construction and by every `bump`
	/// makes exact ties improbable enough that no further policy is needed.
	///
	/// The size check at construction guarantees at least one admissible
	/// cell, so this query always answers.
	pub fn global_minimum(&self) -> (usize, usize) {
		let mut best = (0, 1);
		let mut best_cost = self.cost(0, 1);
		for row in 0..self.size {
			for col in 0..self.size {
				if row == col {
					continue;
				}
				let cost = self.cost(row, col);
				if cost < best_cost {
					best = (row, col);
					best_cost = cost;
				}
			}
		}
		best
	}

	/// Returns the column of the cheapest transition out of `row`, ignoring
	/// the diagonal cell. Same tie-break as `global_minimum`.
	///
	/// # Errors
	/// Returns `DeadEnd` if the row holds no admissible column. A matrix
	/// that passed the size check cannot reach this; it is surfaced instead
	/// of panicking so callers can treat it as a fatal internal fault.
	pub fn row_minimum(&self, row: usize) -> Result<usize, GenerationError> {
		let mut best: Option<(usize, f64)> = None;
		for col in 0..self.size {
			if col == row {
				continue;
			}
			let cost = self.cost(row, col);
			match best {
				Some((_, best_cost)) if cost >= best_cost => (),
				_ => best = Some((col, cost)),
			}
		}
		match best {
			Some((col, _)) => Ok(col),
			None => Err(GenerationError::DeadEnd(row)),
		}
	}

	/// Marks the transition `row -> col` as used.
	///
	/// The cell is rounded up to the next integer and a fresh uniform draw
	/// in `[0, 1)` is added, so the transition cannot win another minimum
	/// query until every other transition of its row has reached the same
	/// integer tier. The fresh noise keeps later queries free of ties.
	pub fn bump<R: Rng>(&mut self, row: usize, col: usize, rng: &mut R) {
		let cell = &mut self.cells[row * self.size + col];
		*cell = cell.ceil() + rng.random::<f64>();
	}
}
