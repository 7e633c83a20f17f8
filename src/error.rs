//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Generation request failed: {0}")]
    Generation(String),

    #[error("Completion is not a valid edit list: {source}")]
    MalformedEditList {
        #[source]
        source: serde_json::Error,
        raw: String,
    },

    #[error("Batch update rejected: {0}")]
    Apply(String),

    #[error("Slides API error: {0}")]
    Platform(String),
}

pub type Result<T> = std::result::Result<T, Error>;
