use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::domain::ErrorBody;

/// Process-level failures: anything that stops the server from running.
#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("Failed to load configuration: {0}")]
    Config(String),

    #[error("Failed to build provider client: {0}")]
    Provider(String),

    #[error("Failed to bind to address {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Failures raised by the content provider behind the proxy.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("failed to decode provider response: {0}")]
    Decode(String),
}

/// Per-request failures of `POST /api/generate-report`.
///
/// The three variants are kept apart so operators can tell bad input,
/// a misconfigured server and a failing provider from each other.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Prompt is required")]
    InvalidRequest,

    #[error("API Key not configured on server")]
    Configuration,

    #[error("Failed to generate report: {message}")]
    Upstream { message: String },
}

impl ReportError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::Configuration => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upstream { .. } => StatusCode::BAD_GATEWAY,
        }
    }

    #[must_use]
    pub fn body(&self) -> ErrorBody {
        match self {
            Self::InvalidRequest | Self::Configuration => ErrorBody::new(self.to_string()),
            Self::Upstream { message } => {
                ErrorBody::new("Failed to generate report").with_message(message.clone())
            }
        }
    }
}

impl From<ProviderError> for ReportError {
    fn from(err: ProviderError) -> Self {
        let message = match err {
            ProviderError::Status { message, .. } if !message.is_empty() => message,
            other => other.to_string(),
        };
        Self::Upstream { message }
    }
}

impl IntoResponse for ReportError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
