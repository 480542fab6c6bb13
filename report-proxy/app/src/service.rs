use std::sync::Arc;

use tracing::{error, info};

use crate::domain::{GenerationRequest, GenerationResult, ToolDirective};
use crate::error::ReportError;
use crate::port::ContentProvider;

/// Validates generation requests and relays them to the provider.
///
/// Holds no mutable state; clones share the provider.
#[derive(Clone)]
pub struct ReportService {
    provider: Arc<dyn ContentProvider>,
    api_key: Option<Arc<str>>,
}

impl ReportService {
    pub fn new(provider: Arc<dyn ContentProvider>, api_key: Option<String>) -> Self {
        Self {
            provider,
            api_key: api_key.filter(|key| !key.is_empty()).map(Arc::from),
        }
    }

    pub async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResult, ReportError> {
        let prompt = match request.prompt {
            Some(prompt) if !prompt.is_empty() => prompt,
            _ => return Err(ReportError::InvalidRequest),
        };

        let Some(api_key) = self.api_key.as_deref() else {
            error!("GEMINI_API_KEY is not set; rejecting generation request");
            return Err(ReportError::Configuration);
        };

        let tools = request
            .tools
            .unwrap_or_else(|| vec![ToolDirective::web_search()]);

        match self.provider.generate(api_key, &prompt, &tools).await {
            Ok(result) => {
                info!(
                    prompt_len = prompt.len(),
                    text_len = result.text.len(),
                    sources = result.sources.len(),
                    "report generated"
                );
                Ok(result)
            }
            Err(e) => {
                error!(error = %e, "error generating report");
                Err(e.into())
            }
        }
    }
}
