//! # Profile Builder
//!
//! Produces the cross-section ring of the trunk at a given height.
//!
//! Two pipelines run per query. The "full" pipeline holds every branch circle
//! and yields the ring itself. The "ctrl" pipeline holds the trunk circle
//! alone; the ratio between the true trunk radius and the distance of its
//! traced start point gives `ctrl_factor`, which cancels the inward bias of
//! the rasterized outline.
//!
//! Circles are pushed in trunk-local coordinates, so every ring is centered
//! on the origin and starts on the configured cardinal axis.

use crate::branch::{BranchState, ProgressiveBranch};
use crate::curve::EasingCurve;
use crate::error::{ProfileError, ProfileResult};
use crate::roots::{simulate_roots, RootSource};
use crate::settings::ProfileSettings;
use contour_kernel::{ContourPipeline, Vec2};
use std::f64::consts::TAU;
use tracing::{debug, warn};

/// One sample of a profile ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSample {
    /// Ring point relative to the trunk center, scaled by the control factor
    pub point: Vec2,
    /// Unit normal at the point
    pub normal: Vec2,
    /// Angle assigned to the sample, `i * TAU / num_steps`
    pub radial_angle: f64,
}

/// Ring of samples at one height.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSegment {
    /// Queried height along the trunk
    pub height: f64,
    /// Trunk center at this height; ring points are relative to it
    pub center: Vec2,
    /// Scale applied to every ring point
    pub ctrl_factor: f64,
    /// `num_steps + 1` samples; the last repeats the first
    pub samples: Vec<RingSample>,
}

/// Height-sliced cross-section generator for a trunk and its roots.
pub struct ProfileBuilder {
    settings: ProfileSettings,
    trunk_length: f64,
    branches: Vec<ProgressiveBranch>,
    full: ContourPipeline,
    ctrl: ContourPipeline,
}

impl ProfileBuilder {
    /// Creates a builder with only the trunk. `trunk` must be a trunk
    /// descriptor and `trunk_length` positive.
    pub fn new(
        trunk: ProgressiveBranch,
        trunk_length: f64,
        settings: ProfileSettings,
    ) -> ProfileResult<Self> {
        settings.validate()?;
        if !trunk.is_trunk() {
            return Err(ProfileError::invalid_setting("trunk", "first branch must be a trunk"));
        }
        if !(trunk_length > 0.0 && trunk_length.is_finite()) {
            return Err(ProfileError::invalid_setting(
                "trunk_length",
                format!("must be positive, got {trunk_length}"),
            ));
        }
        let pipeline_settings = settings.pipeline_settings()?;
        Ok(Self {
            trunk_length,
            branches: vec![trunk],
            full: ContourPipeline::new(pipeline_settings.clone()),
            ctrl: ContourPipeline::new(pipeline_settings),
            settings,
        })
    }

    /// Appends a root descriptor and returns its branch index.
    pub fn add_root(&mut self, root: ProgressiveBranch) -> ProfileResult<usize> {
        if root.is_trunk() {
            return Err(ProfileError::invalid_setting("root", "only one trunk is allowed"));
        }
        self.branches.push(root);
        Ok(self.branches.len() - 1)
    }

    /// Appends one root per entry of `source`. Returns how many were added.
    pub fn add_roots_from<S: RootSource + ?Sized>(
        &mut self,
        source: &S,
        curve: &EasingCurve,
    ) -> usize {
        let roots = source.roots();
        let count = roots.len();
        self.branches
            .extend(roots.iter().map(|geometry| geometry.to_branch(curve.clone())));
        debug!(count, "added roots from source");
        count
    }

    /// Appends the simulated roots described by the settings. Returns how many
    /// were added.
    pub fn simulate_roots(&mut self) -> usize {
        let trunk_radius = self.branches.first().map_or(0.0, |trunk| trunk.radius_base);
        let roots = simulate_roots(trunk_radius, &self.settings);
        let count = roots.len();
        self.branches.extend(roots);
        debug!(count, seed = self.settings.seed, "simulated roots");
        count
    }

    /// All descriptors; index 0 is the trunk.
    #[inline]
    pub fn branches(&self) -> &[ProgressiveBranch] {
        &self.branches
    }

    /// Builder settings.
    #[inline]
    pub fn settings(&self) -> &ProfileSettings {
        &self.settings
    }

    /// Trunk length used to normalize heights.
    #[inline]
    pub fn trunk_length(&self) -> f64 {
        self.trunk_length
    }

    /// `height / trunk_length`, clamped to `[0, 1]`.
    pub fn normalized_height(&self, height: f64) -> f64 {
        (height / self.trunk_length).clamp(0.0, 1.0)
    }

    /// Evaluates every descriptor at `height`. Index 0 is the trunk.
    pub fn evaluate(&self, height: f64) -> Vec<BranchState> {
        let h = self.normalized_height(height);
        let mut branches = self.branches.iter();
        let Some(trunk) = branches.next().map(|b| b.evaluate(h, None)) else {
            return Vec::new();
        };
        std::iter::once(trunk)
            .chain(branches.map(|b| b.evaluate(h, Some(&trunk))))
            .collect()
    }

    /// Builds the ring at `height` with `num_steps` angular steps.
    ///
    /// # Errors
    /// - [`ProfileError::InvalidSteps`] when `num_steps` is zero
    /// - [`ProfileError::NoContour`] when the circles leave no outline
    /// - [`ProfileError::DegenerateControl`] when the trunk outline cannot
    ///   provide a scale correction
    pub fn get_segment(&mut self, height: f64, num_steps: usize) -> ProfileResult<ProfileSegment> {
        if num_steps == 0 {
            return Err(ProfileError::InvalidSteps);
        }

        let states = self.evaluate(height);
        let Some(&trunk) = states.first() else {
            return Err(ProfileError::NoContour { height });
        };
        self.push_circles(&states, trunk.center);

        self.full.rebuild();
        self.ctrl.rebuild();

        if self.full.paths().is_empty() {
            return Err(ProfileError::NoContour { height });
        }
        if self.full.paths().len() > 1 {
            warn!(height, paths = self.full.paths().len(), "detached outlines, sampling the first");
        }

        let distance = self
            .ctrl
            .paths()
            .first()
            .and_then(|path| path.points.first())
            .map_or(0.0, |p| p.length());
        let ctrl_factor = trunk.radius / distance;
        if !(ctrl_factor.is_finite() && ctrl_factor > 0.0) {
            return Err(ProfileError::DegenerateControl {
                radius: trunk.radius,
                distance,
            });
        }

        let angle_step = TAU / num_steps as f64;
        let samples = (0..=num_steps)
            .map(|i| {
                let sample = self
                    .full
                    .get_point(0, i as f64 / num_steps as f64, true)
                    .ok_or(ProfileError::NoContour { height })?;
                Ok(RingSample {
                    point: sample.point * ctrl_factor,
                    normal: sample.normal,
                    radial_angle: angle_step * i as f64,
                })
            })
            .collect::<ProfileResult<Vec<_>>>()?;

        debug!(
            height,
            circles = states.len(),
            ctrl_factor,
            samples = samples.len(),
            "profile segment built"
        );

        Ok(ProfileSegment {
            height,
            center: trunk.center,
            ctrl_factor,
            samples,
        })
    }

    /// Builds the ring at `height` with the configured ring steps.
    pub fn get_ring(&mut self, height: f64) -> ProfileResult<ProfileSegment> {
        self.get_segment(height, self.settings.ring_steps)
    }

    /// Full pipeline as left by the last query.
    #[inline]
    pub fn full_pipeline(&self) -> &ContourPipeline {
        &self.full
    }

    /// Trunk-only pipeline as left by the last query.
    #[inline]
    pub fn ctrl_pipeline(&self) -> &ContourPipeline {
        &self.ctrl
    }

    /// Updates circles in place by branch index, adding any that are new.
    fn push_circles(&mut self, states: &[BranchState], origin: Vec2) {
        for (index, state) in states.iter().enumerate() {
            let center = state.center - origin;
            if !self.full.modify_circle(index, center, state.radius, false) {
                self.full.add_circle(center, state.radius, false);
            }
        }
        if let Some(trunk) = states.first() {
            let center = trunk.center - origin;
            if !self.ctrl.modify_circle(0, center, trunk.radius, false) {
                self.ctrl.add_circle(center, trunk.radius, false);
            }
        }
    }
}

impl std::fmt::Debug for ProfileBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileBuilder")
            .field("settings", &self.settings)
            .field("trunk_length", &self.trunk_length)
            .field("branches", &self.branches.len())
            .finish()
    }
}
