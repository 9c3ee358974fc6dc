//! Indexed circle storage with margin-expanded bounds.
//!
//! Circles are addressed by their position in the list. Animated profiles
//! modify circles in place so indices stay stable across height slices.

use crate::geometry::{Bounds, Circle, Vec2};
use tracing::trace;

/// An ordered list of circles and the bounds enclosing all of them.
///
/// # Examples
/// ```
/// use contour_kernel::{CircleSet, Vec2};
///
/// let mut set = CircleSet::new();
/// let idx = set.add_circle(Vec2::ZERO, 1.0, true);
/// assert_eq!(idx, 0);
/// assert!(set.bounds().is_some());
/// assert!(!set.modify_circle(5, Vec2::ZERO, 2.0, true));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CircleSet {
    circles: Vec<Circle>,
    bounds: Option<Bounds>,
}

impl CircleSet {
    /// Creates an empty set with no bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a circle and returns its index.
    pub fn add_circle(&mut self, center: Vec2, radius: f64, recompute: bool) -> usize {
        self.circles.push(Circle::new(center, radius));
        if recompute {
            self.recompute_bounds();
        }
        self.circles.len() - 1
    }

    /// Replaces the circle at `index`. Returns false when the index is out of
    /// range, in which case nothing changes.
    pub fn modify_circle(
        &mut self,
        index: usize,
        center: Vec2,
        radius: f64,
        recompute: bool,
    ) -> bool {
        let Some(circle) = self.circles.get_mut(index) else {
            trace!(index, len = self.circles.len(), "modify_circle ignored");
            return false;
        };
        *circle = Circle::new(center, radius);
        if recompute {
            self.recompute_bounds();
        }
        true
    }

    /// Removes the circle at `index`, shifting later indices down. Returns
    /// false when the index is out of range.
    pub fn remove_circle(&mut self, index: usize, recompute: bool) -> bool {
        if index >= self.circles.len() {
            trace!(index, len = self.circles.len(), "remove_circle ignored");
            return false;
        }
        self.circles.remove(index);
        if recompute {
            self.recompute_bounds();
        }
        true
    }

    /// Removes every circle and clears the bounds.
    pub fn clear_circles(&mut self) {
        self.circles.clear();
        self.bounds = None;
    }

    /// Rebuilds the bounds from the current circles. Non-finite circles keep
    /// their index but add no extent.
    pub fn recompute_bounds(&mut self) {
        self.bounds = self
            .circles
            .iter()
            .filter(|c| c.is_finite())
            .map(Circle::padded_bounds)
            .reduce(|mut acc, b| {
                acc.encapsulate(&b);
                acc
            });
    }

    /// Bounds of the last recompute, `None` when no circle was finite.
    #[inline]
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// All circles in index order.
    #[inline]
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// Circle at `index`, if any.
    #[inline]
    pub fn circle(&self, index: usize) -> Option<&Circle> {
        self.circles.get(index)
    }

    /// Number of circles.
    #[inline]
    pub fn len(&self) -> usize {
        self.circles.len()
    }

    /// Returns true when the set holds no circles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }
}
