//! # Progressive Branches
//!
//! A [`ProgressiveBranch`] describes how one circle of the profile moves and
//! grows with height. The trunk blends its own center and radius; a root
//! orbits the trunk at its roll angle, pressed outward by its exposure, and
//! merges into the trunk once the height passes its reach.

use crate::curve::EasingCurve;
use config::constants::EPSILON_TOLERANCE;
use contour_kernel::Vec2;

/// What a branch's circle is anchored to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BranchKind {
    /// Free-standing circle blending between two centers.
    Trunk {
        /// Center at height 0
        center_base: Vec2,
        /// Center at full height
        center_top: Vec2,
    },
    /// Circle orbiting the trunk.
    Root {
        /// Angle around the trunk at height 0, in radians
        roll: f64,
        /// Extra roll per unit of normalized height
        twirl: f64,
        /// Gap between the trunk surface and the root center at height 0
        exposure: f64,
        /// Normalized height at which the root has fully merged
        reach: f64,
    },
}

/// Height-interpolated circle descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressiveBranch {
    /// Radius at height 0 (or at the start of a root's reach)
    pub radius_base: f64,
    /// Radius at full height (or at the end of a root's reach)
    pub radius_top: f64,
    /// Easing applied to the radius blend
    pub curve: EasingCurve,
    /// Anchoring of the circle center
    pub kind: BranchKind,
}

/// Circle parameters of a branch at one height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BranchState {
    /// Circle center
    pub center: Vec2,
    /// Circle radius
    pub radius: f64,
    /// Current roll angle, for roots
    pub roll: Option<f64>,
}

impl ProgressiveBranch {
    /// Creates the trunk descriptor.
    pub fn trunk(
        center_base: Vec2,
        center_top: Vec2,
        radius_base: f64,
        radius_top: f64,
        curve: EasingCurve,
    ) -> Self {
        Self {
            radius_base,
            radius_top,
            curve,
            kind: BranchKind::Trunk {
                center_base,
                center_top,
            },
        }
    }

    /// Creates a root descriptor that starts at `girth` and tapers to nothing
    /// at `reach`. A non-positive reach is raised to a tiny positive value.
    pub fn root(
        roll: f64,
        girth: f64,
        exposure: f64,
        reach: f64,
        twirl: f64,
        curve: EasingCurve,
    ) -> Self {
        Self {
            radius_base: girth,
            radius_top: 0.0,
            curve,
            kind: BranchKind::Root {
                roll,
                twirl,
                exposure,
                reach: reach.max(EPSILON_TOLERANCE),
            },
        }
    }

    /// Whether this is a trunk descriptor.
    #[inline]
    pub fn is_trunk(&self) -> bool {
        matches!(self.kind, BranchKind::Trunk { .. })
    }

    /// Interpolation parameter of this branch at normalized height `h`.
    ///
    /// # Examples
    /// ```
    /// use trunk_profile::{EasingCurve, ProgressiveBranch};
    ///
    /// let root = ProgressiveBranch::root(0.0, 0.3, 0.2, 0.5, 0.0, EasingCurve::Linear);
    /// assert_eq!(root.local_t(0.25), 0.5);
    /// assert_eq!(root.local_t(0.9), 1.0);
    /// ```
    pub fn local_t(&self, h: f64) -> f64 {
        let h = h.clamp(0.0, 1.0);
        match self.kind {
            BranchKind::Trunk { .. } => h,
            BranchKind::Root { reach, .. } => h.clamp(0.0, reach) / reach,
        }
    }

    /// Evaluates the circle at normalized height `h`. Roots are placed
    /// relative to `trunk`; without one they orbit the origin at radius zero.
    pub fn evaluate(&self, h: f64, trunk: Option<&BranchState>) -> BranchState {
        let t = self.local_t(h);
        let radius = lerp(self.radius_base, self.radius_top, self.curve.evaluate(t));
        match self.kind {
            BranchKind::Trunk {
                center_base,
                center_top,
            } => BranchState {
                center: center_base.lerp(center_top, t),
                radius,
                roll: None,
            },
            BranchKind::Root {
                roll,
                twirl,
                exposure,
                ..
            } => {
                let anchor = trunk.copied().unwrap_or_default();
                let roll = roll + twirl * h.clamp(0.0, 1.0);
                let offset = anchor.radius + exposure * (1.0 - t);
                BranchState {
                    center: anchor.center + Vec2::from_angle(roll) * offset,
                    radius,
                    roll: Some(roll),
                }
            }
        }
    }
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
