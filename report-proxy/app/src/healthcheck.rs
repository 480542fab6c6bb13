//! `report-proxy healthcheck`: probes the local `/api/health` endpoint so a
//! distroless container can report liveness without a shell.

use std::time::Duration;

use thiserror::Error;

use crate::config::DEFAULT_HTTP_PORT;

#[derive(Debug, Error)]
pub enum HealthcheckError {
    #[error("failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered {status}")]
    Unhealthy {
        url: String,
        status: reqwest::StatusCode,
    },
}

/// Checks the port from `PORT`, falling back to the server default.
pub async fn healthcheck() -> Result<(), HealthcheckError> {
    let port = std::env::var("PORT")
        .ok()
        .and_then(|raw| raw.parse::<u16>().ok())
        .unwrap_or(DEFAULT_HTTP_PORT);
    healthcheck_with_port(port).await
}

pub async fn healthcheck_with_port(port: u16) -> Result<(), HealthcheckError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()
        .map_err(HealthcheckError::Client)?;

    let url = format!("http://127.0.0.1:{port}/api/health");
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|source| HealthcheckError::Request {
            url: url.clone(),
            source,
        })?;

    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(HealthcheckError::Unhealthy { url, status })
    }
}
