//! # Contour Tracing
//!
//! Walks the classified cell table and emits one closed path per boundary
//! loop. Each step reads the current cell's case and the direction the walk
//! arrived from, looks up the exit in a fixed transition table, emits the
//! midpoint of that exit edge and moves into the neighboring cell.
//!
//! Walks keep the inside of the union on their left, so outer boundaries come
//! out counter-clockwise.
//!
//! ## Saddles
//!
//! Cases 5 and 10 have two crossings. The cell table records, per saddle,
//! whether the union covers the cell center. A covered center joins the two
//! inside corners, so lobes that only meet diagonally fuse into one outline.
//! An uncovered center joins the two outside corners instead, so a narrow gap
//! between lobes stays connected to the outside. Both pairings list an exit
//! for all four incoming directions.
//!
//! ## Pinholes
//!
//! A clockwise loop of four points encloses a single outside grid point whose
//! eight neighbors are all inside. Such a hole is narrower than one cell and
//! is dropped.

use crate::cells::{edge_midpoint, is_boundary, is_saddle, CellTable, Edge};
use crate::field::Grid;
use crate::path::Path;
use tracing::{debug, trace, warn};

/// Direction of travel between cells. `Up` is toward higher rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward higher columns.
    Right,
    /// Toward lower rows.
    Down,
    /// Toward lower columns.
    Left,
    /// Toward higher rows.
    Up,
}

impl Direction {
    #[inline]
    fn index(self) -> usize {
        match self {
            Direction::Right => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Up => 3,
        }
    }

    /// Cell edge crossed when leaving a cell in this direction.
    #[inline]
    pub fn exit_edge(self) -> Edge {
        match self {
            Direction::Right => Edge::Right,
            Direction::Down => Edge::Bottom,
            Direction::Left => Edge::Left,
            Direction::Up => Edge::Top,
        }
    }

    /// Neighbor of `(row, col)` in this direction, `None` past the grid edge.
    fn step(self, row: usize, col: usize, rows: usize, cols: usize) -> Option<(usize, usize)> {
        match self {
            Direction::Right if col + 1 < cols => Some((row, col + 1)),
            Direction::Down if row > 0 => Some((row - 1, col)),
            Direction::Left if col > 0 => Some((row, col - 1)),
            Direction::Up if row + 1 < rows => Some((row + 1, col)),
            _ => None,
        }
    }
}

use Direction::{Down as D, Left as L, Right as R, Up as U};

/// Exit direction per `[case][incoming]`, incoming ordered Right, Down, Left,
/// Up. Non-saddle rows ignore the incoming direction. Rows 5 and 10 hold the
/// joined pairing.
const TRANSITIONS: [[Option<Direction>; 4]; 16] = [
    [None, None, None, None],
    [Some(L), Some(L), Some(L), Some(L)],
    [Some(D), Some(D), Some(D), Some(D)],
    [Some(L), Some(L), Some(L), Some(L)],
    [Some(R), Some(R), Some(R), Some(R)],
    [Some(U), Some(L), Some(D), Some(R)],
    [Some(D), Some(D), Some(D), Some(D)],
    [Some(L), Some(L), Some(L), Some(L)],
    [Some(U), Some(U), Some(U), Some(U)],
    [Some(U), Some(U), Some(U), Some(U)],
    [Some(D), Some(R), Some(U), Some(L)],
    [Some(U), Some(U), Some(U), Some(U)],
    [Some(R), Some(R), Some(R), Some(R)],
    [Some(R), Some(R), Some(R), Some(R)],
    [Some(D), Some(D), Some(D), Some(D)],
    [None, None, None, None],
];

/// Split pairing of cases 5 and 10, same layout as [`TRANSITIONS`].
const SPLIT_SADDLES: [[Direction; 4]; 2] = [[D, R, U, L], [U, L, D, R]];

/// Exit direction for a case entered while travelling `incoming`. `joined`
/// picks the saddle pairing and is ignored for other cases.
///
/// # Examples
/// ```
/// use contour_kernel::tracer::transition;
/// use contour_kernel::Direction;
///
/// assert_eq!(transition(1, Direction::Up, false), Some(Direction::Left));
/// assert_eq!(transition(5, Direction::Up, true), Some(Direction::Right));
/// assert_eq!(transition(5, Direction::Up, false), Some(Direction::Left));
/// assert_eq!(transition(0, Direction::Up, true), None);
/// ```
#[inline]
pub fn transition(case: u32, incoming: Direction, joined: bool) -> Option<Direction> {
    match case {
        5 if !joined => Some(SPLIT_SADDLES[0][incoming.index()]),
        10 if !joined => Some(SPLIT_SADDLES[1][incoming.index()]),
        _ => TRANSITIONS
            .get(case as usize)
            .and_then(|row| row[incoming.index()]),
    }
}

/// Incoming direction used when a walk starts in a cell of this case.
fn start_direction(case: u32) -> Direction {
    if case == 10 {
        Direction::Right
    } else {
        Direction::Up
    }
}

/// Extracts every closed boundary loop from `table`.
///
/// Cells are marked visited while walking and the marks are removed before
/// returning, so the table is left exactly as it was passed in.
pub fn trace_paths(table: &mut CellTable, grid: &Grid) -> Vec<Path> {
    let mut paths = Vec::new();
    let (rows, cols) = (table.rows(), table.cols());

    // Saddles are started last: a plain boundary cell lies on exactly one loop.
    for saddle_pass in [false, true] {
        for row in 0..rows {
            for col in 0..cols {
                if table.is_visited(row, col) {
                    continue;
                }
                let case = table.case(row, col);
                if !is_boundary(case) || is_saddle(case) != saddle_pass {
                    continue;
                }
                let path = trace_from(table, grid, row, col);
                trace!(row, col, case, points = path.len(), "traced loop");
                if is_pinhole(&path) {
                    trace!(row, col, "dropped single-point hole");
                    continue;
                }
                if !path.is_empty() {
                    paths.push(path);
                }
            }
        }
    }

    table.clear_visited();
    debug!(paths = paths.len(), rows, cols, "contour tracing finished");
    paths
}

/// Four-point clockwise loop around one isolated outside grid point.
fn is_pinhole(path: &Path) -> bool {
    path.len() == 4 && path.signed_area() < 0.0
}

/// Walks one loop starting at `(start_row, start_col)`.
fn trace_from(table: &mut CellTable, grid: &Grid, start_row: usize, start_col: usize) -> Path {
    let (rows, cols) = (table.rows(), table.cols());
    let start_case = table.case(start_row, start_col);
    let start_dir = start_direction(start_case);
    let start_saddle = is_saddle(start_case);
    let max_steps = 4 * rows * cols;

    let (mut row, mut col, mut dir) = (start_row, start_col, start_dir);
    let mut points = Vec::new();

    loop {
        let case = table.case(row, col);
        let Some(next) = transition(case, dir, table.is_joined(row, col)) else {
            warn!(row, col, case, "walk entered a cell without a boundary");
            break;
        };
        points.push(edge_midpoint(grid, row, col, next.exit_edge()));
        table.mark_visited(row, col);
        dir = next;

        let Some((r, c)) = next.step(row, col, rows, cols) else {
            warn!(row, col, ?next, "walk left the grid");
            break;
        };
        row = r;
        col = c;

        if row == start_row && col == start_col && (!start_saddle || dir == start_dir) {
            break;
        }
        if points.len() >= max_steps {
            warn!(start_row, start_col, max_steps, "walk exceeded step limit");
            break;
        }
    }

    Path::new(points, true)
}
