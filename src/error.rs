//! Error types for media-shelf

use thiserror::Error;


pub type Result<T> = std::result::Result<T, ShelfError>;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Env file could not be read: {0}")]
    EnvFile(#[from] dotenvy::Error),

    #[error("{env_var} not set")]
    MissingCredential { env_var: String },

    #[error("GraphQL query failed: {message}")]
    GraphQl { message: String },
}
