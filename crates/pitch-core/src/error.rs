//! Unified error types for pitch

use thiserror::Error;

/// Unified error type for all pitch operations
#[derive(Error, Debug)]
pub enum PitchError {
    // Input errors
    #[error("Missing required field: {0}")]
    InputValidation(String),

    // Enhancement errors
    #[error("Enhancement failed: {0}")]
    Enhancement(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Enhancement request timed out after {0}s")]
    Timeout(u64),

    // Export errors
    #[error("Unknown export format: {0}")]
    ExportFormat(String),

    // Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using PitchError
pub type Result<T> = std::result::Result<T, PitchError>;
