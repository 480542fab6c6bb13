use std::env;
use std::fs;
use std::path::PathBuf;

use crate::error::ProxyError;

pub const DEFAULT_HTTP_PORT: u16 = 3001;
const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_STATIC_DIR: &str = "dist";

#[derive(Debug, Clone)]
pub struct Settings {
    /// HTTP server port (API + static front end)
    pub http_port: u16,
    /// Provider credential. `None` is not a startup error; requests fail instead.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    /// Directory holding the built single-page front end
    pub static_dir: PathBuf,
}

impl Settings {
    /// Validates the settings and returns an error if invalid.
    pub fn validate(&self) -> Result<(), ProxyError> {
        validate_port(self.http_port)?;
        validate_non_empty("GEMINI_MODEL", &self.gemini_model)?;
        validate_non_empty("GEMINI_BASE_URL", &self.gemini_base_url)?;
        Ok(())
    }

    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.gemini_api_key.is_some()
    }
}

/// Validates that the port is in valid range (1-65535).
fn validate_port(port: u16) -> Result<(), ProxyError> {
    if port == 0 {
        return Err(ProxyError::Config("Port cannot be 0".into()));
    }
    Ok(())
}

fn validate_non_empty(name: &str, value: &str) -> Result<(), ProxyError> {
    if value.trim().is_empty() {
        return Err(ProxyError::Config(format!("{name} cannot be empty")));
    }
    Ok(())
}

/// Read a value via `lookup`, with support for the _FILE suffix (Docker Secrets).
/// Empty values count as unset.
fn get_optional_or_file<F>(lookup: &F, name: &str) -> Result<Option<String>, ProxyError>
where
    F: Fn(&str) -> Option<String>,
{
    let file_var = format!("{name}_FILE");
    if let Some(file_path) = lookup(&file_var) {
        let content = fs::read_to_string(&file_path)
            .map_err(|e| ProxyError::Config(format!("Failed to read {file_var}: {e}")))?;
        let content = content.trim().to_string();
        return Ok((!content.is_empty()).then_some(content));
    }

    Ok(lookup(name).filter(|value| !value.trim().is_empty()))
}

/// Build settings from an arbitrary variable source.
pub fn configuration_from<F>(lookup: F) -> Result<Settings, ProxyError>
where
    F: Fn(&str) -> Option<String>,
{
    let http_port = match lookup("PORT") {
        Some(raw) => raw
            .trim()
            .parse::<u16>()
            .map_err(|e| ProxyError::Config(format!("Invalid PORT '{raw}': {e}")))?,
        None => DEFAULT_HTTP_PORT,
    };

    let gemini_api_key = get_optional_or_file(&lookup, "GEMINI_API_KEY")?;
    let gemini_model =
        lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());
    let gemini_base_url =
        lookup("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string());
    let static_dir = lookup("STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

    let settings = Settings {
        http_port,
        gemini_api_key,
        gemini_model,
        gemini_base_url,
        static_dir,
    };

    // Validate settings before returning
    settings.validate()?;

    Ok(settings)
}

/// Read settings from the process environment.
pub fn get_configuration() -> Result<Settings, ProxyError> {
    configuration_from(|name| env::var(name).ok())
}
