//! # Cell Classification
//!
//! Each grid cell gets a 4-bit case built from its corner samples:
//!
//! ```text
//!   8 ──── 4        TL ──── TR
//!   │      │        │        │
//!   │      │        │        │
//!   1 ──── 2        BL ──── BR
//! ```
//!
//! Top is the higher row (larger Y). The edge midpoint helpers below follow
//! the same layout; the tracer's transition table is keyed on it.
//!
//! Saddle cells (5 and 10) are ambiguous from their corners alone. The union
//! is sampled once more at the cell center: when the center is inside, the two
//! inside corners are joined through it, otherwise the two outside corners are.

use crate::field::{Grid, PointField};
use crate::geometry::{Circle, Vec2};
use config::constants::VISITED_OFFSET;

/// Bottom-left corner bit.
pub const BOTTOM_LEFT: u32 = 1;
/// Bottom-right corner bit.
pub const BOTTOM_RIGHT: u32 = 2;
/// Top-right corner bit.
pub const TOP_RIGHT: u32 = 4;
/// Top-left corner bit.
pub const TOP_LEFT: u32 = 8;

/// One side of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Left side (constant X = cell min).
    Left,
    /// Right side (constant X = cell max).
    Right,
    /// Bottom side (constant Y = cell min).
    Bottom,
    /// Top side (constant Y = cell max).
    Top,
}

/// Case codes for every cell of a grid, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellTable {
    cases: Vec<u32>,
    joined: Vec<bool>,
    cols: usize,
    rows: usize,
}

impl CellTable {
    /// Classifies every cell of `grid` from the corner samples in `field`.
    /// Saddle cells are resolved by testing their center against `circles`.
    pub fn classify(grid: &Grid, field: &PointField, circles: &[Circle]) -> Self {
        let mut cases = Vec::with_capacity(grid.rows * grid.cols);
        let mut joined = Vec::with_capacity(grid.rows * grid.cols);
        let half_cell = Vec2::new(grid.cell_width, grid.cell_height) * 0.5;
        for row in 0..grid.rows {
            for col in 0..grid.cols {
                let mut case = 0;
                if field.is_inside(row, col) {
                    case |= BOTTOM_LEFT;
                }
                if field.is_inside(row, col + 1) {
                    case |= BOTTOM_RIGHT;
                }
                if field.is_inside(row + 1, col + 1) {
                    case |= TOP_RIGHT;
                }
                if field.is_inside(row + 1, col) {
                    case |= TOP_LEFT;
                }
                cases.push(case);
                joined.push(is_saddle(case) && {
                    let center = grid.point(row, col) + half_cell;
                    circles.iter().any(|c| c.contains(center))
                });
            }
        }
        Self {
            cases,
            joined,
            cols: grid.cols,
            rows: grid.rows,
        }
    }

    /// Builds a table from raw case codes. Used by tests and by callers that
    /// classify cells themselves. Saddles start out joined.
    pub fn from_cases(cols: usize, rows: usize, cases: Vec<u32>) -> Option<Self> {
        if cases.len() != cols * rows {
            return None;
        }
        let joined = cases.iter().map(|&case| is_saddle(case)).collect();
        Some(Self {
            cases,
            joined,
            cols,
            rows,
        })
    }

    /// Number of cell columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cell rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Stored value, including any visited offset.
    #[inline]
    pub fn raw(&self, row: usize, col: usize) -> u32 {
        self.cases[row * self.cols + col]
    }

    /// Case code with the visited offset stripped.
    #[inline]
    pub fn case(&self, row: usize, col: usize) -> u32 {
        self.raw(row, col) % VISITED_OFFSET
    }

    /// Returns true once the tracer has walked through the cell.
    #[inline]
    pub fn is_visited(&self, row: usize, col: usize) -> bool {
        self.raw(row, col) >= VISITED_OFFSET
    }

    /// Whether the saddle at `(row, col)` joins its inside corners. Always
    /// false for non-saddle cells.
    #[inline]
    pub fn is_joined(&self, row: usize, col: usize) -> bool {
        self.joined[row * self.cols + col]
    }

    /// Overrides the saddle resolution of `(row, col)`. Ignored for
    /// non-saddle cells.
    pub fn set_joined(&mut self, row: usize, col: usize, joined: bool) {
        let idx = row * self.cols + col;
        self.joined[idx] = joined && is_saddle(self.cases[idx] % VISITED_OFFSET);
    }

    /// Marks a cell as visited. Marking twice has no further effect.
    pub fn mark_visited(&mut self, row: usize, col: usize) {
        let idx = row * self.cols + col;
        if self.cases[idx] < VISITED_OFFSET {
            self.cases[idx] += VISITED_OFFSET;
        }
    }

    /// Strips every visited offset, restoring the freshly classified table.
    pub fn clear_visited(&mut self) {
        for case in &mut self.cases {
            *case %= VISITED_OFFSET;
        }
    }

    /// Raw values, row-major.
    #[inline]
    pub fn cases(&self) -> &[u32] {
        &self.cases
    }
}

/// Returns true when a case has a boundary crossing.
#[inline]
pub fn is_boundary(case: u32) -> bool {
    case != 0 && case != 15
}

/// Returns true for the two ambiguous diagonal cases.
#[inline]
pub fn is_saddle(case: u32) -> bool {
    case == 5 || case == 10
}

/// Midpoint of `edge` of cell `(row, col)` in world space.
///
/// # Examples
/// ```
/// use contour_kernel::cells::{edge_midpoint, Edge};
/// use contour_kernel::{Bounds, Grid, Vec2};
///
/// let grid = Grid::from_bounds(&Bounds::new(Vec2::ZERO, Vec2::splat(2.0)), 2).unwrap();
/// assert_eq!(edge_midpoint(&grid, 0, 0, Edge::Right), Vec2::new(1.0, 0.5));
/// assert_eq!(edge_midpoint(&grid, 1, 0, Edge::Bottom), Vec2::new(0.5, 1.0));
/// ```
pub fn edge_midpoint(grid: &Grid, row: usize, col: usize, edge: Edge) -> Vec2 {
    let (x, y) = match edge {
        Edge::Left => (col as f64, row as f64 + 0.5),
        Edge::Right => (col as f64 + 1.0, row as f64 + 0.5),
        Edge::Bottom => (col as f64 + 0.5, row as f64),
        Edge::Top => (col as f64 + 0.5, row as f64 + 1.0),
    };
    grid.origin + Vec2::new(x * grid.cell_width, y * grid.cell_height)
}
