use crate::config::Settings;
use crate::error::ProxyError;
use crate::port::ContentProvider;
use crate::provider::GeminiProvider;
use crate::service::ReportService;
use std::sync::Arc;

/// Shared application state holding the report service.
pub struct AppState {
    pub report_service: ReportService,
}

impl AppState {
    /// Create `AppState` from configuration settings.
    pub fn from_settings(settings: &Settings) -> Result<Self, ProxyError> {
        let provider = GeminiProvider::new(&settings.gemini_base_url, &settings.gemini_model)
            .map_err(|e| ProxyError::Provider(e.to_string()))?;
        let provider: Arc<dyn ContentProvider> = Arc::new(provider);

        Ok(Self {
            report_service: ReportService::new(provider, settings.gemini_api_key.clone()),
        })
    }
}
