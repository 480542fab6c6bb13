use axum::Json;
use chrono::{SecondsFormat, Utc};
use tracing::debug;

use crate::domain::HealthResponse;

/// Handler for GET /api/health
pub async fn health_handler() -> Json<HealthResponse> {
    debug!("Health check requested");
    Json(HealthResponse {
        status: "okay".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
