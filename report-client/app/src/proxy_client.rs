use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use reqwest::{Client, Url};
use tracing::{debug, info};

use crate::domain::{ErrorBody, GenerateReportResponse, GenerationRequest, GenerationResult};
use crate::error::FetchError;

const DEFAULT_REJECTION_MESSAGE: &str = "Failed to generate report";

/// Where reports come from.
///
/// This trait is dyn-compatible by using boxed futures, so tests can swap in
/// a counting fake.
pub trait ReportSource: Send + Sync {
    fn fetch_report<'a>(
        &'a self,
        request: &'a GenerationRequest,
    ) -> Pin<Box<dyn Future<Output = Result<GenerationResult, FetchError>> + Send + 'a>>;
}

impl<T: ReportSource + ?Sized> ReportSource for std::sync::Arc<T> {
    fn fetch_report<'a>(
        &'a self,
        request: &'a GenerationRequest,
    ) -> Pin<Box<dyn Future<Output = Result<GenerationResult, FetchError>> + Send + 'a>> {
        (**self).fetch_report(request)
    }
}

/// HTTP client for the report proxy.
#[derive(Debug, Clone)]
pub struct ProxyClient {
    client: Client,
    base_url: Url,
}

impl ProxyClient {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("punch-report/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let mut normalized = base_url.trim_end_matches('/').to_string();
        normalized.push('/');
        let base_url =
            Url::parse(&normalized).map_err(|e| FetchError::InvalidUrl(format!("{base_url}: {e}")))?;

        Ok(Self { client, base_url })
    }

    fn url(&self, path: &str) -> Result<Url, FetchError> {
        self.base_url
            .join(path)
            .map_err(|e| FetchError::InvalidUrl(e.to_string()))
    }

    pub async fn generate_report(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, FetchError> {
        let url = self.url("api/generate-report")?;
        debug!(%url, prompt_len = request.prompt.len(), "requesting report");

        let response = self.client.post(url).json(request).send().await?;
        let status = response.status();

        if !status.is_success() {
            // The body may not even be JSON (e.g. an HTML error page from a gateway).
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .filter(|error| !error.is_empty())
                .unwrap_or_else(|| DEFAULT_REJECTION_MESSAGE.to_string());
            return Err(FetchError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateReportResponse = response.json().await?;
        let result = GenerationResult::from(body);
        info!(
            text_len = result.text.len(),
            sources = result.sources.len(),
            "report received"
        );
        Ok(result)
    }
}

impl ReportSource for ProxyClient {
    fn fetch_report<'a>(
        &'a self,
        request: &'a GenerationRequest,
    ) -> Pin<Box<dyn Future<Output = Result<GenerationResult, FetchError>> + Send + 'a>> {
        Box::pin(self.generate_report(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_with_path_prefix_is_kept() {
        let client = ProxyClient::new("https://punch.example/site").unwrap();
        assert_eq!(
            client.url("api/generate-report").unwrap().as_str(),
            "https://punch.example/site/api/generate-report"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let err = ProxyClient::new("not a url").unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }
}
