use thiserror::Error;

use ptsd_model::error::ModelError;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("GET {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("GET {url} failed: {message}")]
    Http { url: String, message: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to decode artifact from {location}: {source}")]
    Decode { location: String, source: ModelError },

    #[error("artifact fetch task failed: {0}")]
    Task(String),
}
