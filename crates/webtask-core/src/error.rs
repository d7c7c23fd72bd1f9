//! Unified error types for webtask

use thiserror::Error;

/// Unified error type for all webtask operations
#[derive(Error, Debug)]
pub enum WebtaskError {
    // Browser errors
    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Element not found: {0}")]
    ElementNotFound(String),

    // Plan errors
    #[error("Invalid plan: {0}")]
    InvalidPlan(String),

    // Agent errors
    #[error("Agent error: {0}")]
    Agent(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // Generic
    #[error("{0}")]
    Other(String),
}

/// Result type alias using WebtaskError
pub type Result<T> = std::result::Result<T, WebtaskError>;
