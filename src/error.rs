use thiserror::Error;

/// Errors that can occur while talking to the recipe backend or managing a pantry
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure reaching the backend
    #[error("Failed to reach backend: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("Backend returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Backend rejected the request because no user is logged in (HTTP 422)
    #[error("Not logged in")]
    Unauthenticated,

    /// The backend cannot serve this operation
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    /// Caller-supplied value was rejected before any request was made
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Ingredient is already in the pantry
    #[error("Ingredient already in pantry: {0}")]
    Duplicate(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    Builder(String),

    /// Response body could not be decoded
    #[error("Invalid response body: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
