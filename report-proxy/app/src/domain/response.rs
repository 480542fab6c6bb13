use serde::{Deserialize, Serialize};

use super::{GenerationResult, Source};

/// Success body of `POST /api/generate-report`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GenerateReportResponse {
    pub text: String,
    pub sources: Vec<Source>,
    pub success: bool,
}

impl From<GenerationResult> for GenerateReportResponse {
    fn from(result: GenerationResult) -> Self {
        Self {
            text: result.text,
            sources: result.sources,
            success: true,
        }
    }
}

/// Error body shared by every failing `/api` route.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}
