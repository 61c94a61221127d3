use balseq_core::error::GenerationError;
use balseq_core::io::sequences_csv;
use balseq_core::model::batch_input::BatchInput;
use balseq_core::model::generator::{BatchGenerator, generate_batches};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A batch is defined by two numbers: the length of each sequence
    // (which is also the alphabet size) and how many sequences to generate
    let input = BatchInput::new(6, 10)?;

    // Invalid parameters are rejected before any generation work starts
    match BatchInput::new(1, 10) {
        Ok(_) => println!("Should not happen"),
        Err(GenerationError::InvalidSize(n)) => println!("A length of {} is invalid, need at least 2 symbols", n),
        Err(e) => println!("Unexpected error: {}", e),
    }
    match BatchInput::new(6, 0) {
        Ok(_) => println!("Should not happen"),
        Err(GenerationError::InvalidBatchSize(m)) => println!("A batch of {} sequences is invalid, need at least 1", m),
        Err(e) => println!("Unexpected error: {}", e),
    }

    // A fixed seed makes the whole batch reproducible;
    // use BatchGenerator::new(input) for an entropy-seeded run instead
    let batch = BatchGenerator::from_seed(input, 42).generate()?;

    // One line per sequence, one column per position
    println!("Generated sequences:");
    print!("{}", sequences_csv(&batch));

    // The transition probability matrix is derived from the finished
    // sequences only, by an independent counting pass; every used row
    // sums to 1.0 and the diagonal stays at zero
    let matrix = batch.transition_matrix();
    println!("Transition probabilities:");
    for row in 0..matrix.size() {
        let line = matrix
            .row(row)
            .iter()
            .map(|p| format!("{:.3}", p))
            .collect::<Vec<_>>()
            .join(" ");
        println!("{}", line);
    }

    // Independent batches can run in parallel, each owning its usage
    // matrix and random source; with a base seed, run i uses seed + i
    let batches = generate_batches(input, 4, Some(42))?;
    println!("Generated {} independent batches", batches.len());

    Ok(())
}
