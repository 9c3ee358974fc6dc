//! # Profile Errors
//!
//! Error types for the profile builder. A contour that simply has no outline
//! at some height is an error here, since a ring cannot be produced from it.

use config::constants::ConfigError;
use contour_kernel::ContourError;
use thiserror::Error;

/// Errors that can occur while building profile rings.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// The union of circles produced no outline.
    #[error("No contour at height {height}")]
    NoContour {
        /// Queried height along the trunk
        height: f64,
    },

    /// The trunk-only control contour cannot provide a scale correction.
    #[error("Degenerate control contour: trunk radius {radius}, first point distance {distance}")]
    DegenerateControl {
        /// Trunk radius at the queried height
        radius: f64,
        /// Distance of the control path's first point from the trunk center
        distance: f64,
    },

    /// A ring was requested with zero angular steps.
    #[error("Ring needs at least one step")]
    InvalidSteps,

    /// A settings or descriptor field outside its valid range.
    #[error("Invalid setting '{field}': {message}")]
    InvalidSetting {
        /// Name of the offending field
        field: &'static str,
        /// Error message
        message: String,
    },

    /// Settings rejected by the shared configuration validation.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Error raised by the contour kernel.
    #[error("Contour kernel error: {0}")]
    Contour(#[from] ContourError),
}

impl ProfileError {
    /// Creates an invalid setting error.
    pub fn invalid_setting(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidSetting {
            field,
            message: message.into(),
        }
    }
}

/// Result type alias for profile operations.
pub type ProfileResult<T> = Result<T, ProfileError>;
