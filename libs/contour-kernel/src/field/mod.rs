//! # Scalar Field Sampling
//!
//! Rasterizes the bounds into a regular grid and marks every grid point that
//! lies inside at least one circle.
//!
//! ## Grid Layout
//!
//! ```text
//! row i, col j  →  bounds.min + (j * cell_width, i * cell_height)
//!
//! (rows + 1) x (cols + 1) points, stored row-major, row 0 at min.y
//! ```
//!
//! Each point is an independent predicate, so rows are sampled on the rayon
//! pool. Output is identical for any thread count.

use crate::geometry::{Bounds, Circle, Vec2};
use rayon::prelude::*;

/// Grid dimensions derived from bounds and a target resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    /// Lower-left corner of the grid.
    pub origin: Vec2,
    /// Number of cells along X.
    pub cols: usize,
    /// Number of cells along Y.
    pub rows: usize,
    /// Cell width.
    pub cell_width: f64,
    /// Cell height.
    pub cell_height: f64,
}

impl Grid {
    /// Builds a grid with `grid_cells` subdivisions along the shorter side of
    /// `bounds`. The longer side gets a proportional, rounded count.
    ///
    /// Returns `None` when `grid_cells` is zero or the bounds have no area.
    ///
    /// # Examples
    /// ```
    /// use contour_kernel::{Bounds, Grid, Vec2};
    ///
    /// let bounds = Bounds::new(Vec2::ZERO, Vec2::new(4.0, 2.0));
    /// let grid = Grid::from_bounds(&bounds, 10).unwrap();
    /// assert_eq!(grid.rows, 10);
    /// assert_eq!(grid.cols, 20);
    /// ```
    pub fn from_bounds(bounds: &Bounds, grid_cells: usize) -> Option<Self> {
        if grid_cells == 0 || bounds.is_degenerate() {
            return None;
        }
        let size = bounds.size();
        let cells = grid_cells as f64;
        let (cols, rows) = if size.x < size.y {
            (grid_cells, (cells * (size.y / size.x)).round() as usize)
        } else {
            ((cells * (size.x / size.y)).round() as usize, grid_cells)
        };
        let cols = cols.max(1);
        let rows = rows.max(1);

        Some(Self {
            origin: bounds.min,
            cols,
            rows,
            cell_width: size.x / cols as f64,
            cell_height: size.y / rows as f64,
        })
    }

    /// World position of grid point `(row, col)`.
    #[inline]
    pub fn point(&self, row: usize, col: usize) -> Vec2 {
        self.origin + Vec2::new(col as f64 * self.cell_width, row as f64 * self.cell_height)
    }

    /// Length of a cell diagonal, the natural tolerance of the grid.
    #[inline]
    pub fn cell_diagonal(&self) -> f64 {
        Vec2::new(self.cell_width, self.cell_height).length()
    }

    /// Number of grid points along X.
    #[inline]
    pub fn point_cols(&self) -> usize {
        self.cols + 1
    }

    /// Number of grid points along Y.
    #[inline]
    pub fn point_rows(&self) -> usize {
        self.rows + 1
    }
}

/// Binary in/out samples for every grid point.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PointField {
    values: Vec<u8>,
    stride: usize,
}

impl PointField {
    /// Samples the union of `circles` at every point of `grid`.
    ///
    /// # Examples
    /// ```
    /// use contour_kernel::{Bounds, Circle, Grid, PointField, Vec2};
    ///
    /// let circles = [Circle::new(Vec2::ZERO, 1.0)];
    /// let bounds = circles[0].padded_bounds();
    /// let grid = Grid::from_bounds(&bounds, 4).unwrap();
    /// let field = PointField::sample(&grid, &circles, true);
    /// assert!(field.is_inside(2, 2));
    /// assert!(!field.is_inside(0, 0));
    /// ```
    pub fn sample(grid: &Grid, circles: &[Circle], parallel: bool) -> Self {
        let stride = grid.point_cols();
        let mut values = vec![0u8; stride * grid.point_rows()];

        let fill_row = |(row, chunk): (usize, &mut [u8])| {
            for (col, value) in chunk.iter_mut().enumerate() {
                let point = grid.point(row, col);
                *value = u8::from(circles.iter().any(|c| c.contains(point)));
            }
        };

        if parallel {
            values.par_chunks_mut(stride).enumerate().for_each(fill_row);
        } else {
            values.chunks_mut(stride).enumerate().for_each(fill_row);
        }

        Self { values, stride }
    }

    /// Returns true when grid point `(row, col)` is inside the union.
    #[inline]
    pub fn is_inside(&self, row: usize, col: usize) -> bool {
        self.values[row * self.stride + col] != 0
    }

    /// Raw samples, row-major.
    #[inline]
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Number of points that lie inside the union.
    pub fn inside_count(&self) -> usize {
        self.values.iter().filter(|&&v| v != 0).count()
    }
}

#[cfg(test)]
mod tests;
