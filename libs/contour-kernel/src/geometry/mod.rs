//! Plain 2D value types shared by every kernel stage.
//!
//! Vectors are `glam::DVec2`; circles and bounds are small `Copy` structs.

use config::constants::BOUNDS_MARGIN;

pub use glam::DVec2 as Vec2;

/// A circle in the plane. The radius is always stored as its absolute value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Center of the circle.
    pub center: Vec2,
    /// Non-negative radius.
    pub radius: f64,
}

impl Circle {
    /// Creates a circle, folding a negative radius to its magnitude.
    ///
    /// # Examples
    /// ```
    /// use contour_kernel::{Circle, Vec2};
    /// let c = Circle::new(Vec2::ZERO, -2.0);
    /// assert_eq!(c.radius, 2.0);
    /// ```
    pub fn new(center: Vec2, radius: f64) -> Self {
        Self {
            center,
            radius: radius.abs(),
        }
    }

    /// Returns true when both center and radius are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.radius.is_finite()
    }

    /// Returns true when `point` lies inside or on the circle. A non-finite
    /// circle contains nothing.
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        self.is_finite() && point.distance(self.center) <= self.radius
    }

    /// Axis-aligned extent of the circle scaled by the field margin.
    pub fn padded_bounds(&self) -> Bounds {
        let half = Vec2::splat(self.radius * BOUNDS_MARGIN);
        Bounds::new(self.center - half, self.center + half)
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Minimum corner.
    pub min: Vec2,
    /// Maximum corner.
    pub max: Vec2,
}

impl Bounds {
    /// Creates bounds from two corners.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Width and height of the box.
    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Center of the box.
    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Grows the box to enclose `other`.
    pub fn encapsulate(&mut self, other: &Bounds) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    /// Returns true when the box has zero (or non-finite) extent on either axis.
    pub fn is_degenerate(&self) -> bool {
        let size = self.size();
        !(size.x > 0.0 && size.y > 0.0 && size.is_finite())
    }
}
