//! Traced boundary paths with their normals and arc-length tables.

use crate::geometry::Vec2;

/// An ordered sequence of points with parallel normals and cumulative
/// distances.
///
/// `distances[i]` is the arc length from point 0 to point `i` along the open
/// polyline. Call [`Path::analyze`] after mutating `points` to refresh the
/// distance tables.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    /// Path vertices.
    pub points: Vec<Vec2>,
    /// One normal per vertex, empty until computed.
    pub normals: Vec<Vec2>,
    /// Cumulative arc length per vertex.
    pub distances: Vec<f64>,
    /// Arc length from the first to the last point.
    pub open_distance: f64,
    /// Open distance plus the closing segment back to the first point.
    pub closed_distance: f64,
    /// Whether the last point connects back to the first.
    pub is_closed: bool,
}

impl Path {
    /// Creates a path from points. Normals and distances start empty.
    pub fn new(points: Vec<Vec2>, is_closed: bool) -> Self {
        Self {
            points,
            is_closed,
            ..Self::default()
        }
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true when the path has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Recomputes the cumulative distance table and both totals.
    ///
    /// # Examples
    /// ```
    /// use contour_kernel::{Path, Vec2};
    ///
    /// let mut path = Path::new(vec![Vec2::ZERO, Vec2::X, Vec2::ONE], true);
    /// path.analyze();
    /// assert_eq!(path.distances, vec![0.0, 1.0, 2.0]);
    /// assert_eq!(path.open_distance, 2.0);
    /// assert!((path.closed_distance - (2.0 + 2f64.sqrt())).abs() < 1e-12);
    /// ```
    pub fn analyze(&mut self) {
        self.distances.clear();
        self.distances.reserve(self.points.len());
        let mut total = 0.0;
        let mut prev = self.points.first().copied();
        for &point in &self.points {
            if let Some(p) = prev {
                total += p.distance(point);
            }
            self.distances.push(total);
            prev = Some(point);
        }
        self.open_distance = total;
        self.closed_distance = match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => total + last.distance(*first),
            _ => 0.0,
        };
    }

    /// Total length used for sampling in the given mode.
    #[inline]
    pub fn total_distance(&self, closed: bool) -> f64 {
        if closed {
            self.closed_distance
        } else {
            self.open_distance
        }
    }

    /// Signed area by the shoelace formula. Positive for counter-clockwise.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        (0..n)
            .map(|i| self.points[i].perp_dot(self.points[(i + 1) % n]))
            .sum::<f64>()
            * 0.5
    }
}

#[cfg(test)]
mod tests;
