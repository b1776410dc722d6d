//! Error handling module for the garnett CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application. The lexer itself never fails;
//! everything here comes from loading inputs, configuration and writing
//! output.

use thiserror::Error;

/// Main error type for the garnett CLI application.
#[derive(Error, Debug)]
pub enum GarnettError {
    /// Error when the configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when an input or output file cannot be used.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when a command cannot run to completion.
    #[error("Command execution failed: {0}")]
    CommandExecution(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using GarnettError.
pub type Result<T> = std::result::Result<T, GarnettError>;
