use axum::extract::Query;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use calculus::{generate_demo, normalize, parse, Name};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;

/// Reduction budget for the normalize operation.
const MAX_REDUCTIONS: usize = 100;

const DEMO_DEPTH: u32 = 5;
const DEMO_ALPHABET: [Name; 5] = ['a', 'b', 'c', 'd', 'e'];
const DEMO_MIN_UNIQUE_STEPS: usize = 4;
const DEMO_TRACE_STEPS: usize = 4;

#[derive(Deserialize)]
pub struct EvaluateParams {
    expression: String,
}

#[derive(Serialize)]
pub struct EvaluateResponse {
    expression: String,
}

#[derive(Serialize)]
pub struct RandomResponse {
    steps: Vec<String>,
    expression: String,
}

pub fn router() -> Router {
    Router::new()
        .route("/evaluate", post(evaluate_handler))
        .route("/random", get(random_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
}

async fn evaluate_handler(
    Query(params): Query<EvaluateParams>,
) -> Result<Json<EvaluateResponse>, ApiError> {
    let term = parse(&params.expression)?;
    let term = normalize(&term, MAX_REDUCTIONS);
    Ok(Json(EvaluateResponse {
        expression: term.to_string(),
    }))
}

async fn random_handler() -> Json<RandomResponse> {
    let mut rng = StdRng::from_entropy();
    let demo = generate_demo(
        &mut rng,
        DEMO_DEPTH,
        &DEMO_ALPHABET,
        DEMO_MIN_UNIQUE_STEPS,
        DEMO_TRACE_STEPS,
    );
    Json(RandomResponse {
        steps: demo.steps,
        expression: demo.term.to_string(),
    })
}
