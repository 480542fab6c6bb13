use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::{GenerationResult, Source, ToolDirective};
use crate::error::ProviderError;
use crate::port::ContentProvider;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const API_KEY_HEADER: &str = "x-goog-api-key";

/// `ContentProvider` backed by the Gemini `generateContent` REST endpoint.
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    client: Client,
    base_url: Url,
    model: String,
}

impl GeminiProvider {
    pub fn new(base_url: &str, model: impl Into<String>) -> Result<Self, ProviderError> {
        // Only the connection phase is bounded; generation with search can be slow.
        let client = Client::builder().connect_timeout(CONNECT_TIMEOUT).build()?;

        let mut normalized = base_url.trim_end_matches('/').to_string();
        normalized.push('/');
        let base_url = Url::parse(&normalized)
            .map_err(|e| ProviderError::Decode(format!("invalid Gemini base URL: {e}")))?;

        Ok(Self {
            client,
            base_url,
            model: model.into(),
        })
    }

    fn endpoint(&self) -> Result<Url, ProviderError> {
        self.base_url
            .join(&format!("v1beta/models/{}:generateContent", self.model))
            .map_err(|e| ProviderError::Decode(format!("failed to build Gemini URL: {e}")))
    }

    async fn generate_content(
        &self,
        api_key: &str,
        prompt: &str,
        tools: &[ToolDirective],
    ) -> Result<GenerationResult, ProviderError> {
        let url = self.endpoint()?;
        let payload = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            tools,
        };

        debug!(model = %self.model, tools = tools.len(), "sending generateContent request");

        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or_default();
            warn!(status = status.as_u16(), %message, "Gemini returned error status");
            return Err(ProviderError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| ProviderError::Decode(e.to_string()))?;

        Ok(parsed.into_result())
    }
}

impl ContentProvider for GeminiProvider {
    fn generate<'a>(
        &'a self,
        api_key: &'a str,
        prompt: &'a str,
        tools: &'a [ToolDirective],
    ) -> Pin<Box<dyn Future<Output = Result<GenerationResult, ProviderError>> + Send + 'a>> {
        Box::pin(self.generate_content(api_key, prompt, tools))
    }
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    tools: &'a [ToolDirective],
}

#[derive(Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Default, Deserialize)]
struct GroundingChunk {
    #[serde(default)]
    web: Option<WebChunk>,
}

#[derive(Debug, Default, Deserialize)]
struct WebChunk {
    #[serde(default)]
    uri: Option<String>,
    #[serde(default)]
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
}

impl GenerateContentResponse {
    /// Only the first candidate is used. Missing text or citations become empty values.
    fn into_result(self) -> GenerationResult {
        let Some(candidate) = self.candidates.into_iter().next() else {
            return GenerationResult::default();
        };

        let text = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter(|part| !part.thought)
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        let sources = candidate
            .grounding_metadata
            .map(|meta| {
                meta.grounding_chunks
                    .into_iter()
                    .filter_map(|chunk| chunk.web)
                    .filter_map(|web| {
                        web.uri.map(|uri| Source {
                            uri,
                            title: web.title,
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();

        GenerationResult { text, sources }
    }
}
