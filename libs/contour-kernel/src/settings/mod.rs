//! Pipeline settings and the small enums that select post-processing modes.
//!
//! Defaults come from the shared `config` crate so the kernel never carries
//! literal tuning values of its own.

use crate::error::{ContourError, ContourResult};
use crate::geometry::Vec2;
use config::constants::{KernelDefaults, DEFAULT_GRID_CELLS, DEFAULT_SMOOTH_ITERATIONS};

/// Compass axis used to anchor index 0 of a traced path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinal {
    /// Negative Y from the reference center.
    South,
    /// Positive X from the reference center.
    East,
    /// Positive Y from the reference center.
    North,
    /// Negative X from the reference center.
    West,
}

impl Cardinal {
    /// Unit direction of the cardinal ray.
    ///
    /// # Examples
    /// ```
    /// use contour_kernel::{Cardinal, Vec2};
    /// assert_eq!(Cardinal::East.direction(), Vec2::X);
    /// ```
    pub fn direction(self) -> Vec2 {
        match self {
            Cardinal::South => Vec2::NEG_Y,
            Cardinal::East => Vec2::X,
            Cardinal::North => Vec2::Y,
            Cardinal::West => Vec2::NEG_X,
        }
    }

    /// Returns true when the axis line is horizontal (East/West rays).
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Cardinal::East | Cardinal::West)
    }
}

/// How per-point normals are estimated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NormalMode {
    /// Direction from the reference center to the point.
    Center,
    /// Central-difference tangent rotated by -90 degrees.
    #[default]
    Curve,
}

/// Everything a `ContourPipeline` needs besides its circles.
///
/// # Examples
/// ```
/// use contour_kernel::PipelineSettings;
/// let settings = PipelineSettings::default();
/// assert_eq!(settings.grid_cells, 40);
/// assert!(settings.apply_smooth_path);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineSettings {
    /// Grid subdivisions along the shorter side of the bounds. Zero disables
    /// grid construction entirely.
    pub grid_cells: usize,
    /// Smooth every traced path before it is stored.
    pub apply_smooth_path: bool,
    /// Number of smoothing passes.
    pub smooth_iterations: u32,
    /// Rotate each path so index 0 sits on this axis.
    pub cardinal: Option<Cardinal>,
    /// Origin of the cardinal axis and of `NormalMode::Center` normals.
    pub reference_center: Vec2,
    /// Normal estimation mode.
    pub normal_mode: NormalMode,
    /// Sample the point field on the rayon pool.
    pub parallel_field: bool,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            grid_cells: DEFAULT_GRID_CELLS,
            apply_smooth_path: true,
            smooth_iterations: DEFAULT_SMOOTH_ITERATIONS,
            cardinal: None,
            reference_center: Vec2::ZERO,
            normal_mode: NormalMode::default(),
            parallel_field: true,
        }
    }
}

impl PipelineSettings {
    /// Builds settings from a validated defaults snapshot.
    ///
    /// # Examples
    /// ```
    /// use contour_kernel::PipelineSettings;
    /// let settings = PipelineSettings::new(64, 3).unwrap();
    /// assert_eq!(settings.grid_cells, 64);
    /// assert!(PipelineSettings::new(0, 3).is_err());
    /// ```
    pub fn new(grid_cells: usize, smooth_iterations: u32) -> ContourResult<Self> {
        let defaults = KernelDefaults::new(
            KernelDefaults::default().tolerance,
            grid_cells,
            smooth_iterations,
        )?;
        Ok(Self {
            grid_cells: defaults.grid_cells,
            smooth_iterations: defaults.smooth_iterations,
            ..Self::default()
        })
    }

    /// Sets the cardinal anchor and its reference center.
    pub fn with_cardinal(mut self, cardinal: Cardinal, reference_center: Vec2) -> Self {
        self.cardinal = Some(cardinal);
        self.reference_center = reference_center;
        self
    }

    /// Sets the normal estimation mode.
    pub fn with_normal_mode(mut self, mode: NormalMode) -> Self {
        self.normal_mode = mode;
        self
    }

    /// Enables or disables smoothing.
    pub fn with_smoothing(mut self, enabled: bool, iterations: u32) -> Self {
        self.apply_smooth_path = enabled;
        self.smooth_iterations = iterations;
        self
    }

    /// Checks fields that `new` cannot see once a caller edits them directly.
    pub fn validate(&self) -> ContourResult<()> {
        if !self.reference_center.is_finite() {
            return Err(ContourError::invalid_setting(
                "reference_center",
                format!("must be finite, got {}", self.reference_center),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
