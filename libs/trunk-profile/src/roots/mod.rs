//! # Root Sources
//!
//! Roots come either from an external tree structure, through
//! [`RootSource`], or from [`simulate_roots`], which spreads a number of roots
//! evenly around the trunk with seeded random variance.

use crate::branch::ProgressiveBranch;
use crate::curve::EasingCurve;
use crate::settings::ProfileSettings;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;
use tracing::trace;

/// Geometry of one real root, as reported by the tree that owns it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootGeometry {
    /// Angle around the trunk, in radians
    pub angle: f64,
    /// Root radius where it leaves the trunk
    pub girth: f64,
    /// Gap between the trunk surface and the root center
    pub exposure: f64,
    /// Normalized trunk height at which the root has merged
    pub reach: f64,
    /// Extra roll per unit of normalized height
    pub twirl: f64,
}

impl RootGeometry {
    /// Converts the geometry into a root descriptor.
    pub fn to_branch(&self, curve: EasingCurve) -> ProgressiveBranch {
        ProgressiveBranch::root(
            self.angle,
            self.girth,
            self.exposure,
            self.reach,
            self.twirl,
            curve,
        )
    }
}

/// Anything that can list real roots.
pub trait RootSource {
    /// Geometry of every root, in a stable order.
    fn roots(&self) -> Vec<RootGeometry>;
}

impl RootSource for [RootGeometry] {
    fn roots(&self) -> Vec<RootGeometry> {
        self.to_vec()
    }
}

impl RootSource for Vec<RootGeometry> {
    fn roots(&self) -> Vec<RootGeometry> {
        self.clone()
    }
}

/// Generates `settings.root_count` root descriptors spread evenly around a
/// trunk of base radius `trunk_radius`.
///
/// Each root's roll, girth, exposure and reach deviate from the nominal value
/// by up to `settings.root_variance` (as a fraction), drawn from an RNG seeded
/// with `settings.seed`. The same settings always give the same roots.
///
/// # Examples
/// ```
/// use trunk_profile::{simulate_roots, ProfileSettings};
///
/// let settings = ProfileSettings { root_count: 4, ..ProfileSettings::default() };
/// let roots = simulate_roots(1.0, &settings);
/// assert_eq!(roots.len(), 4);
/// assert_eq!(roots, simulate_roots(1.0, &settings));
/// ```
pub fn simulate_roots(trunk_radius: f64, settings: &ProfileSettings) -> Vec<ProgressiveBranch> {
    let count = settings.root_count;
    if count == 0 {
        return Vec::new();
    }
    let mut rng = StdRng::seed_from_u64(settings.seed);
    let variance = settings.root_variance.clamp(0.0, 1.0);
    let spacing = TAU / count as f64;

    (0..count)
        .map(|i| {
            let mut jitter = || 1.0 + variance * rng.gen_range(-1.0..=1.0);
            let roll = spacing * (i as f64 + 0.5 * (jitter() - 1.0));
            let girth = trunk_radius * settings.root_girth * jitter();
            let exposure = trunk_radius * settings.root_exposure * jitter();
            let reach = (settings.root_reach * jitter()).min(1.0);
            trace!(index = i, roll, girth, exposure, reach, "simulated root");
            ProgressiveBranch::root(
                roll,
                girth,
                exposure,
                reach,
                settings.root_twirl,
                settings.root_curve.clone(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests;
