//! Unified error types for uxv

use thiserror::Error;

/// Unified error type for all uxv operations
#[derive(Error, Debug)]
pub enum UxError {
    // Browser errors
    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Navigation to {url} failed: {message}")]
    Navigation { url: String, message: String },

    #[error("Element not found: {selector}")]
    ElementNotFound { selector: String },

    #[error("Timeout {timeout_ms}ms exceeded waiting for {selector} to be visible")]
    Timeout { selector: String, timeout_ms: u64 },

    #[error("Screenshot failed: {0}")]
    Screenshot(String),

    // Verification errors
    #[error("Assertion failed: {0}")]
    Assertion(String),

    // Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using UxError
pub type Result<T> = std::result::Result<T, UxError>;
