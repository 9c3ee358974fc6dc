//! Tests for the centralized configuration constants.

use super::*;

/// Ensures default constants are sane and positive.
#[test]
fn default_constants_are_valid() {
    let defaults = KernelDefaults::default();
    assert!(defaults.tolerance > 0.0);
    assert!(defaults.grid_cells >= 1);
    assert_eq!(defaults.smooth_iterations, DEFAULT_SMOOTH_ITERATIONS);
}

/// Validates the builder rejects invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        KernelDefaults::new(0.0, 24, 1).unwrap_err(),
        ConfigError::InvalidTolerance(0.0)
    );
    assert_eq!(
        KernelDefaults::new(1.0e-9, 0, 1).unwrap_err(),
        ConfigError::InvalidGridCells(0)
    );
    assert!(KernelDefaults::new(f64::NAN, 10, 1).is_err());
}

#[test]
fn error_messages_name_the_field() {
    assert!(ConfigError::InvalidGridCells(0).to_string().contains("grid_cells"));
    assert!(ConfigError::InvalidRingSteps(0).to_string().contains("ring steps"));
}
