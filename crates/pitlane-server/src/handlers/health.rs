//! Liveness endpoint

use rocket::get;
use rocket::serde::json::Json;
use serde::Serialize;

/// Liveness response
#[derive(Serialize)]
pub struct HealthResponse {
    /// Server status
    pub status: &'static str,
    /// Service name
    pub service: &'static str,
}

/// Health check endpoint
#[get("/health")]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "pitlane",
    })
}
