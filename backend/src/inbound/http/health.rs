//! Health endpoint for orchestration and smoke checks.

use actix_web::{HttpResponse, get};
use serde_json::json;

/// Liveness check; carries no dependency probes.
#[utoipa::path(
    get,
    path = "/api/health",
    tags = ["health"],
    security([]),
    responses(
        (status = 200, description = "Service is up")
    )
)]
#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}
