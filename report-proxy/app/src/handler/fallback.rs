use axum::Json;
use axum::http::{Method, StatusCode, Uri};
use tracing::warn;

use crate::domain::ErrorBody;

/// Catch-all for unmatched `/api` requests, so API callers get JSON instead
/// of the front end's `index.html`.
pub async fn api_not_found_handler(method: Method, uri: Uri) -> (StatusCode, Json<ErrorBody>) {
    warn!(%method, path = %uri.path(), "API route not found");
    (StatusCode::NOT_FOUND, Json(ErrorBody::new("Not found")))
}
