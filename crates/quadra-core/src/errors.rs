//! Error types for failure handling across the chart engine
//!
//! This module provides the unified error hierarchy for the engine and its
//! collaborators. Errors are categorized by their source (validation, logo
//! resolution, export encoding) so the dispatcher can decide per category
//! whether a failure abandons the mutation or degrades it; none of them is
//! allowed to escape a request cycle.

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Logo resolution failed for '{name}': {message}")]
    LogoResolution { name: String, message: String },
    #[error("Export encoding failed: {0}")]
    Export(String),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        CoreError::Validation(msg.into())
    }

    /// Create a logo resolution error for the named entity.
    pub fn logo_resolution(name: impl Into<String>, message: impl Into<String>) -> Self {
        CoreError::LogoResolution {
            name: name.into(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        CoreError::Io(err.to_string())
    }
}

impl From<csv::Error> for CoreError {
    fn from(err: csv::Error) -> Self {
        CoreError::Export(err.to_string())
    }
}
