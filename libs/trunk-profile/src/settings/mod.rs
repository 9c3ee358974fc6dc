//! # Profile Settings
//!
//! Contour resolution, ring sampling and simulated-root parameters for a
//! [`crate::ProfileBuilder`]. Defaults come from `config::constants`.

use crate::curve::EasingCurve;
use crate::error::{ProfileError, ProfileResult};
use config::constants::{
    ConfigError, KernelDefaults, DEFAULT_GRID_CELLS, DEFAULT_RING_STEPS, DEFAULT_ROOT_REACH,
    DEFAULT_ROOT_SEED, DEFAULT_SMOOTH_ITERATIONS,
};
use contour_kernel::{Cardinal, NormalMode, PipelineSettings, Vec2};

/// Settings shared by both pipelines of a profile builder.
///
/// # Examples
/// ```
/// use trunk_profile::ProfileSettings;
///
/// let settings = ProfileSettings::default();
/// assert!(settings.validate().is_ok());
/// assert_eq!(settings.root_count, 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSettings {
    /// Grid subdivisions along the shorter side of the bounds.
    pub grid_cells: usize,
    /// Smoothing passes per traced path. Zero disables smoothing.
    pub smooth_iterations: u32,
    /// Normal estimation mode.
    pub normal_mode: NormalMode,
    /// Axis on which every ring starts.
    pub cardinal: Cardinal,
    /// Steps used by [`crate::ProfileBuilder::get_ring`].
    pub ring_steps: usize,
    /// Seed for simulated root variance.
    pub seed: u64,
    /// Number of simulated roots.
    pub root_count: usize,
    /// Relative deviation of simulated root parameters, in `[0, 1]`.
    pub root_variance: f64,
    /// Simulated root girth as a fraction of the trunk base radius.
    pub root_girth: f64,
    /// Simulated root exposure as a fraction of the trunk base radius.
    pub root_exposure: f64,
    /// Nominal normalized height at which simulated roots merge.
    pub root_reach: f64,
    /// Roll added per unit of normalized height for simulated roots.
    pub root_twirl: f64,
    /// Radius easing for simulated roots.
    pub root_curve: EasingCurve,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            grid_cells: DEFAULT_GRID_CELLS,
            smooth_iterations: DEFAULT_SMOOTH_ITERATIONS,
            normal_mode: NormalMode::Curve,
            cardinal: Cardinal::East,
            ring_steps: DEFAULT_RING_STEPS,
            seed: DEFAULT_ROOT_SEED,
            root_count: 0,
            root_variance: 0.2,
            root_girth: 0.5,
            root_exposure: 0.25,
            root_reach: DEFAULT_ROOT_REACH,
            root_twirl: 0.0,
            root_curve: EasingCurve::EaseIn,
        }
    }
}

impl ProfileSettings {
    /// Builds validated settings with the given resolution and ring steps.
    ///
    /// # Examples
    /// ```
    /// use trunk_profile::ProfileSettings;
    ///
    /// let settings = ProfileSettings::new(64, 48).unwrap();
    /// assert_eq!(settings.ring_steps, 48);
    /// assert!(ProfileSettings::new(64, 0).is_err());
    /// ```
    pub fn new(grid_cells: usize, ring_steps: usize) -> ProfileResult<Self> {
        let settings = Self {
            grid_cells,
            ring_steps,
            ..Self::default()
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Checks every field against its valid range.
    pub fn validate(&self) -> ProfileResult<()> {
        let defaults = KernelDefaults::default();
        KernelDefaults::new(defaults.tolerance, self.grid_cells, self.smooth_iterations)?;
        if self.ring_steps == 0 {
            return Err(ConfigError::InvalidRingSteps(self.ring_steps).into());
        }
        if !(0.0..=1.0).contains(&self.root_variance) {
            return Err(ProfileError::invalid_setting(
                "root_variance",
                format!("must lie in [0, 1], got {}", self.root_variance),
            ));
        }
        if !(self.root_reach > 0.0 && self.root_reach <= 1.0) {
            return Err(ProfileError::invalid_setting(
                "root_reach",
                format!("must lie in (0, 1], got {}", self.root_reach),
            ));
        }
        for (field, value) in [
            ("root_girth", self.root_girth),
            ("root_exposure", self.root_exposure),
            ("root_twirl", self.root_twirl),
        ] {
            if !value.is_finite() {
                return Err(ProfileError::invalid_setting(
                    field,
                    format!("must be finite, got {value}"),
                ));
            }
        }
        Ok(())
    }

    /// Kernel settings for both pipelines. Rings are traced around the trunk
    /// center, which the builder places at the origin.
    pub fn pipeline_settings(&self) -> ProfileResult<PipelineSettings> {
        let settings = PipelineSettings::new(self.grid_cells, self.smooth_iterations)?
            .with_smoothing(self.smooth_iterations > 0, self.smooth_iterations)
            .with_cardinal(self.cardinal, Vec2::ZERO)
            .with_normal_mode(self.normal_mode);
        Ok(settings)
    }
}
