//! Health check endpoints

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::adapters::form_handler::ApiState;

/// GET /health - Basic health check, returns 200 if the server is running
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}

/// GET /health/ready - Readiness check, verifies the database connection
pub async fn ready(State(state): State<ApiState>) -> impl IntoResponse {
    match state.store.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "message": "Server is ready to accept requests"
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "message": format!("Database unavailable: {}", e)
            })),
        ),
    }
}
