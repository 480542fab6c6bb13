use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Body sent to `POST /api/generate-report`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub tools: Vec<Value>,
}

impl GenerationRequest {
    /// A request that asks the provider to ground the answer in web search.
    pub fn with_web_search(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            tools: vec![json!({ "googleSearch": {} })],
        }
    }
}

/// A citation attached to a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Source {
    /// Title when present, otherwise the URI.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|title| !title.trim().is_empty())
            .unwrap_or(&self.uri)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationResult {
    pub text: String,
    pub sources: Vec<Source>,
}

/// Success body of the proxy. Lenient: absent or null fields become empty,
/// and citations without a URI are dropped.
#[derive(Debug, Deserialize)]
pub struct GenerateReportResponse {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    sources: Option<Vec<RawSource>>,
}

#[derive(Debug, Deserialize)]
struct RawSource {
    #[serde(default)]
    uri: Option<String>,
    #[serde(default)]
    title: Option<String>,
}

impl From<GenerateReportResponse> for GenerationResult {
    fn from(response: GenerateReportResponse) -> Self {
        let sources = response
            .sources
            .unwrap_or_default()
            .into_iter()
            .filter_map(|raw| {
                raw.uri
                    .filter(|uri| !uri.is_empty())
                    .map(|uri| Source { uri, title: raw.title })
            })
            .collect();
        Self {
            text: response.text.unwrap_or_default(),
            sources,
        }
    }
}

/// Error body of the proxy.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
