//! Centralized configuration values shared by the contour kernel and the
//! profile builder.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Numerical tolerance used by geometry comparisons.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

// =============================================================================
// FIELD CONSTANTS
// =============================================================================

/// Scale applied to every circle's extent before it is folded into the
/// field bounds. Keeps the outermost grid points strictly outside the union.
///
/// # Examples
/// ```
/// use config::constants::BOUNDS_MARGIN;
/// assert!(BOUNDS_MARGIN > 1.0);
/// ```
pub const BOUNDS_MARGIN: f64 = 1.2;

/// Default number of grid subdivisions along the shorter side of the bounds.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_GRID_CELLS;
/// assert_eq!(DEFAULT_GRID_CELLS, 40);
/// ```
pub const DEFAULT_GRID_CELLS: usize = 40;

/// Offset added to a cell case once the tracer has walked through it.
/// Any value above 15 works; the tracer strips it before reading the case.
///
/// # Examples
/// ```
/// use config::constants::VISITED_OFFSET;
/// assert!(VISITED_OFFSET > 15);
/// ```
pub const VISITED_OFFSET: u32 = 1 << 16;

// =============================================================================
// PATH CONSTANTS
// =============================================================================

/// Default number of neighbor-averaging passes applied to traced paths.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SMOOTH_ITERATIONS;
/// assert!(DEFAULT_SMOOTH_ITERATIONS >= 1);
/// ```
pub const DEFAULT_SMOOTH_ITERATIONS: u32 = 2;

/// Default number of angular steps in a profile ring.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_RING_STEPS;
/// assert!(DEFAULT_RING_STEPS >= 3);
/// ```
pub const DEFAULT_RING_STEPS: usize = 32;

// =============================================================================
// PROFILE CONSTANTS
// =============================================================================

/// Seed used for simulated root variance when the caller does not pick one.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_ROOT_SEED;
/// let seed: u64 = DEFAULT_ROOT_SEED;
/// assert_eq!(seed, DEFAULT_ROOT_SEED);
/// ```
pub const DEFAULT_ROOT_SEED: u64 = 0x5EED_2007;

/// Default normalized height at which a simulated root has fully merged into
/// the trunk.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_ROOT_REACH;
/// assert!(DEFAULT_ROOT_REACH > 0.0 && DEFAULT_ROOT_REACH <= 1.0);
/// ```
pub const DEFAULT_ROOT_REACH: f64 = 0.25;

/// Immutable snapshot of the kernel defaults that can be shared between
/// crates.
///
/// # Examples
/// ```
/// use config::constants::KernelDefaults;
/// let defaults = KernelDefaults::default();
/// assert!(defaults.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelDefaults {
    /// Numeric tolerance propagated into geometry comparisons.
    pub tolerance: f64,
    /// Grid subdivisions along the shorter side of the bounds.
    pub grid_cells: usize,
    /// Smoothing passes applied to each traced path.
    pub smooth_iterations: u32,
}

impl KernelDefaults {
    /// Builds a defaults snapshot enforcing strict validation of the supplied
    /// tolerance and grid resolution.
    ///
    /// # Examples
    /// ```
    /// use config::constants::KernelDefaults;
    /// let defaults = KernelDefaults::new(1.0e-6, 24, 1).expect("valid defaults");
    /// assert_eq!(defaults.grid_cells, 24);
    /// ```
    pub fn new(
        tolerance: f64,
        grid_cells: usize,
        smooth_iterations: u32,
    ) -> Result<Self, ConfigError> {
        if !(tolerance > 0.0) {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if grid_cells == 0 {
            return Err(ConfigError::InvalidGridCells(grid_cells));
        }
        Ok(Self {
            tolerance,
            grid_cells,
            smooth_iterations,
        })
    }
}

impl Default for KernelDefaults {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            grid_cells: DEFAULT_GRID_CELLS,
            smooth_iterations: DEFAULT_SMOOTH_ITERATIONS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or NaN.
    InvalidTolerance(f64),
    /// Raised when the grid would have no cells.
    InvalidGridCells(usize),
    /// Raised when a ring would have no angular steps.
    InvalidRingSteps(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidGridCells(value) => {
                write!(f, "grid_cells must be >= 1: {value}")
            }
            ConfigError::InvalidRingSteps(value) => {
                write!(f, "ring steps must be >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
