//! HTTP API for the estimator
//!
//! Endpoints:
//! - GET /health - Health check
//! - GET /questions - The questionnaire, in asking order
//! - POST /estimate - Raw answers in, report out

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use log::{info, warn};
use serde::Serialize;

use crate::core::{EmissionsEstimator, Question, QUESTIONS};
use crate::types::{RawAnswers, EstimateReport, InvalidInputError};

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for InvalidInputError {
    fn into_response(self) -> Response {
        let body = ErrorResponse { error: self.to_string() };
        (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
    }
}

/// Create the API router
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/questions", get(questions))
        .route("/estimate", post(estimate))
}

/// Health check endpoint
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
    })
}

/// List questions
async fn questions() -> Json<&'static [Question]> {
    Json(&QUESTIONS[..])
}

/// Estimate from raw answers
async fn estimate(Json(raw): Json<RawAnswers>) -> Result<Json<EstimateReport>, InvalidInputError> {
    let estimator = EmissionsEstimator::new();
    let answer = estimator.parse(&raw).map_err(|e| {
        warn!("estimate rejected: {}", e);
        e
    })?;
    let breakdown = estimator.estimate(&answer);
    let report = EstimateReport::new(answer, breakdown);
    info!(
        "estimate {} total={:.2}",
        &report.answers_digest[..12],
        report.breakdown.total
    );
    Ok(Json(report))
}

/// Run the API server
pub async fn run_server(addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("footprint API listening on {}", addr);
    println!("Footprint API running on {}", addr);
    println!("  GET  /health    - Health check");
    println!("  GET  /questions - Questionnaire");
    println!("  POST /estimate  - Estimate from answers");
    axum::serve(listener, router).await?;
    Ok(())
}
