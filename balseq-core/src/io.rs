use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::model::generator::Batch;
use crate::model::transition_matrix::TransitionMatrix;

/// File name of the generated sequences artifact.
pub const SEQUENCES_FILE: &str = "sequences.csv";

/// File name of the transition probability matrix artifact.
pub const MATRIX_FILE: &str = "sequences_transition_matrix.csv";

/// Renders a batch as CSV, one sequence per line, one column per position.
pub fn sequences_csv(batch: &Batch) -> String {
	let mut csv = String::new();
	for sequence in batch.sequences() {
		let line = sequence
			.iter()
			.map(|symbol| symbol.to_string())
			.collect::<Vec<_>>()
			.join(",");
		csv.push_str(&line);
		csv.push('\n');
	}
	csv
}

/// Renders the probability rows of a transition matrix as CSV.
pub fn matrix_csv(matrix: &TransitionMatrix) -> String {
	let mut csv = String::new();
	for row in 0..matrix.size() {
		let line = matrix
			.row(row)
			.iter()
			.map(|probability| probability.to_string())
			.collect::<Vec<_>>()
			.join(",");
		csv.push_str(&line);
		csv.push('\n');
	}
	csv
}

/// Creates the output directory if it does not exist yet.
pub fn create_output_dir<P: AsRef<Path>>(dir: P) -> io::Result<()> {
	fs::create_dir_all(dir)
}

/// Writes both CSV artifacts under `dir`, creating the directory when
/// missing. Returns the paths written, sequences first.
pub fn write_batch_artifacts<P: AsRef<Path>>(
	dir: P,
	batch: &Batch,
	matrix: &TransitionMatrix,
) -> io::Result<(PathBuf, PathBuf)> {
	create_output_dir(&dir)?;

	let sequences_path = dir.as_ref().join(SEQUENCES_FILE);
	fs::write(&sequences_path, sequences_csv(batch))?;

	let matrix_path = dir.as_ref().join(MATRIX_FILE);
	fs::write(&matrix_path, matrix_csv(matrix))?;

	Ok((sequences_path, matrix_path))
}
