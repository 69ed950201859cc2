use reqwest::StatusCode;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures across the export stages.
#[derive(Error, Debug)]
pub enum Error {
    #[error("token endpoint rejected the request, status {status}: {body}")]
    Auth { status: StatusCode, body: String },

    #[error("token response did not contain an access_token field")]
    MissingAccessToken,

    #[error("playlist endpoint returned status {status}")]
    Fetch { status: StatusCode },

    #[error("malformed track item at position {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },

    #[error("failed to publish artifact {key}: {reason}")]
    Publish { key: String, reason: String },

    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Object storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
}
