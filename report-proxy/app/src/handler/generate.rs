use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use tracing::{info, warn};

use crate::domain::{GenerateReportResponse, GenerationRequest};
use crate::error::ReportError;
use crate::service::ReportService;

/// Handler for POST /api/generate-report
///
/// An unreadable body is treated like a missing prompt.
pub async fn generate_report_handler(
    State(service): State<ReportService>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerateReportResponse>, ReportError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection, "rejected unreadable generate-report body");
        ReportError::InvalidRequest
    })?;

    info!(
        has_prompt = request.prompt.is_some(),
        tools = request.tools.as_ref().map(Vec::len),
        "Received generate-report request"
    );

    let result = service.generate(request).await?;
    Ok(Json(result.into()))
}
