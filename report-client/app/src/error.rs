use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the report client.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),
}

/// Failures talking to the report proxy.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The proxy answered with a non-2xx status. `message` is the body's
    /// `error` field, shown to the reader as is.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid proxy URL: {0}")]
    InvalidUrl(String),
}

/// Failures reading or writing the local report cache.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
