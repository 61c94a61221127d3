use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, web};

use log::info;
use serde::{Deserialize, Serialize};

use balseq_core::error::GenerationError;
use balseq_core::model::batch_input::BatchInput;
use balseq_core::model::generator::{Batch, BatchGenerator};
use balseq_core::model::transition_matrix::TransitionMatrix;

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	length: usize,
	count: usize,
	seed: Option<u64> // omitted -> entropy-seeded run
}

/// JSON payload returned by `/v1/generate`.
///
/// The batch carries the sequences; the matrix carries both the raw
/// transition counts and the row-normalized probabilities.
#[derive(Serialize)]
struct GenerateResponse {
	batch: Batch,
	transition_matrix: TransitionMatrix,
}

impl GenerateParams {
	/// Validates the parameters and runs one full generation.
	fn run(&self) -> Result<GenerateResponse, GenerationError> {
		let input = BatchInput::new(self.length, self.count)?;
		let generator = match self.seed {
			Some(seed) => BatchGenerator::from_seed(input, seed),
			None => BatchGenerator::new(input),
		};
		let batch = generator.generate()?;
		let transition_matrix = batch.transition_matrix();
		Ok(GenerateResponse { batch, transition_matrix })
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates a balanced batch from the query parameters and returns the
/// sequences together with their transition probability matrix as JSON.
/// Parameter validation failures map to 400; anything else a generation
/// can raise is an internal fault and maps to 500.
#[get("/v1/generate")]
async fn get_generated(query: web::Query<GenerateParams>) -> impl Responder {
	match query.run() {
		Ok(response) => HttpResponse::Ok().json(response),
		Err(e @ (GenerationError::InvalidSize(_) | GenerationError::InvalidBatchSize(_))) => {
			HttpResponse::BadRequest().body(e.to_string())
		}
		Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
	}
}

/// Main entry point for the server.
///
/// Starts an Actix-web HTTP server exposing balanced batch generation.
/// Generation is stateless per request, so no shared state is held.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - CORS is fully permissive; the endpoint serves generated data only.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();
	info!("listening on 127.0.0.1:5000");

	HttpServer::new(|| {
		App::new()
			.wrap(Cors::permissive())
			.service(get_generated)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}
