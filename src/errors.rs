// errors.rs
use std::path::PathBuf;
use thiserror::Error;

/// Failures talking to the hosted vision model.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Model returned no reply text")]
    EmptyReply,
}

/// Errors from the extractor, the folder processor, or the CSV output.
#[derive(Debug, Error)]
pub enum ListingError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Service error for {file}: {source}")]
    Service {
        file: String,
        #[source]
        source: ServiceError,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ListingError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ListingError::Io {
            path: path.into(),
            source,
        }
    }
}
