use std::error::Error;
use std::path::{Path, PathBuf};

use clap::Parser;
use log::info;
use plotters::prelude::*;

use balseq_core::io::write_batch_artifacts;
use balseq_core::model::batch_input::BatchInput;
use balseq_core::model::generator::BatchGenerator;
use balseq_core::model::transition_matrix::TransitionMatrix;

/// File name of the heatmap artifact.
const HEATMAP_FILE: &str = "sequences_transition_matrix.png";

/// Generate a batch of sequences whose symbol transitions are used
/// approximately evenly, and write the batch plus its transition
/// probability matrix (CSV and heatmap) into an output directory.
#[derive(Parser, Debug)]
#[command(name = "balseq", version)]
struct Args {
    /// Length of each sequence, which is also the alphabet size (>= 2)
    length: usize,

    /// Number of sequences to generate (>= 1)
    count: usize,

    /// Output directory for the artifacts, created if missing
    out_dir: PathBuf,

    /// Seed for a reproducible run; omitted means entropy-seeded
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let input = BatchInput::new(args.length, args.count)?;
    let generator = match args.seed {
        Some(seed) => BatchGenerator::from_seed(input, seed),
        None => BatchGenerator::new(input),
    };
    let batch = generator.generate()?;
    let matrix = batch.transition_matrix();

    let (sequences_path, matrix_path) = write_batch_artifacts(&args.out_dir, &batch, &matrix)?;
    info!("wrote {}", sequences_path.display());
    info!("wrote {}", matrix_path.display());

    let heatmap_path = args.out_dir.join(HEATMAP_FILE);
    render_heatmap(&matrix, &heatmap_path)?;
    info!("wrote {}", heatmap_path.display());

    println!(
        "Generated {} sequences of length {} in {}",
        args.count,
        args.length,
        args.out_dir.display()
    );
    Ok(())
}

/// Renders the probability matrix as a PNG heatmap.
///
/// Rows are the current element, columns the next element; cell intensity
/// ramps with the transition probability, normalized to the hottest cell.
fn render_heatmap(matrix: &TransitionMatrix, out_path: &Path) -> Result<(), Box<dyn Error>> {
    let size = matrix.size();

    let hottest = (0..size)
        .flat_map(|row| (0..size).map(move |col| (row, col)))
        .map(|(row, col)| matrix.probability(row, col))
        .fold(f64::EPSILON, f64::max);

    let root = BitMapBackend::new(out_path, (800, 760)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Transition probability matrix", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(40)
        .build_cartesian_2d(0..size as i32, 0..size as i32)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Next element")
        .y_desc("Current element")
        .draw()?;

    for row in 0..size {
        for col in 0..size {
            let heat = matrix.probability(row, col) / hottest;
            chart.draw_series(std::iter::once(Rectangle::new(
                [
                    (col as i32, row as i32),
                    (col as i32 + 1, row as i32 + 1),
                ],
                heat_color(heat).filled(),
            )))?;
        }
    }

    root.present()?;
    Ok(())
}

/// Black-red-yellow-white ramp over `[0, 1]`, akin to the usual "hot"
/// colormap.
fn heat_color(heat: f64) -> RGBColor {
    let heat = heat.clamp(0.0, 1.0);
    let r = (heat * 3.0).min(1.0);
    let g = ((heat - 1.0 / 3.0) * 3.0).clamp(0.0, 1.0);
    let b = ((heat - 2.0 / 3.0) * 3.0).clamp(0.0, 1.0);
    RGBColor((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heat_color_ramps_from_black_to_white() {
        assert_eq!(heat_color(0.0), RGBColor(0, 0, 0));
        assert_eq!(heat_color(1.0), RGBColor(255, 255, 255));

        // A third of the way up the ramp is fully red, still no green.
        let RGBColor(r, g, b) = heat_color(1.0 / 3.0);
        assert_eq!(r, 255);
        assert!(g < 10);
        assert_eq!(b, 0);
    }

    #[test]
    fn out_of_range_heat_is_clamped() {
        assert_eq!(heat_color(-1.0), heat_color(0.0));
        assert_eq!(heat_color(2.0), heat_color(1.0));
    }
}
