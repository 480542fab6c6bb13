use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Body of `POST /api/generate-report`.
///
/// Both fields are optional on the wire so that a missing prompt reaches
/// validation instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub tools: Option<Vec<ToolDirective>>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: Some(prompt.into()),
            tools: None,
        }
    }

    #[must_use]
    pub fn with_tools(mut self, tools: Vec<ToolDirective>) -> Self {
        self.tools = Some(tools);
        self
    }
}

/// A provider tool directive, forwarded verbatim.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ToolDirective(pub Value);

impl ToolDirective {
    /// `{"googleSearch": {}}`
    #[must_use]
    pub fn web_search() -> Self {
        Self(json!({ "googleSearch": {} }))
    }

    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// A citation returned alongside generated text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Source {
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Generated markdown plus its citations, in provider order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GenerationResult {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub sources: Vec<Source>,
}
