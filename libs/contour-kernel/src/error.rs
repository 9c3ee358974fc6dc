//! # Kernel Errors
//!
//! Error types for the contour kernel. Structural problems such as an empty
//! circle list or an out-of-range index are not errors; they yield empty
//! results. Errors are reserved for invalid configuration.

use config::constants::ConfigError;
use thiserror::Error;

/// Errors that can occur while configuring the contour kernel.
#[derive(Debug, Error)]
pub enum ContourError {
    /// Settings rejected by the shared configuration validation.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// A processor name that is not present in the registry.
    #[error("Unknown path processor: {name}")]
    UnknownProcessor {
        /// Name that was looked up
        name: String,
    },

    /// A settings field outside its valid range.
    #[error("Invalid setting '{field}': {message}")]
    InvalidSetting {
        /// Name of the offending field
        field: &'static str,
        /// Error message
        message: String,
    },
}

impl ContourError {
    /// Creates an unknown processor error.
    pub fn unknown_processor(name: impl Into<String>) -> Self {
        Self::UnknownProcessor { name: name.into() }
    }

    /// Creates an invalid setting error.
    pub fn invalid_setting(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidSetting {
            field,
            message: message.into(),
        }
    }
}

/// Result type alias for kernel operations.
pub type ContourResult<T> = Result<T, ContourError>;
