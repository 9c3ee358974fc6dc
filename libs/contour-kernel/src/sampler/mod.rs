//! # Arc-Length Sampling
//!
//! Looks up positions and normals on a path by fractional arc length.
//!
//! ```text
//! position ∈ ℝ  →  frac(position) * total  →  binary search in distances
//! ```
//!
//! Position 1.0 therefore lands on the same point as 0.0.

use crate::geometry::Vec2;
use crate::path::Path;

/// A sampled position on a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSample {
    /// Interpolated position.
    pub point: Vec2,
    /// Interpolated unit normal (zero when the path has no normals).
    pub normal: Vec2,
    /// Arc length from point 0 to the sample.
    pub distance: f64,
}

/// Refreshes the distance tables of every path.
pub fn analyze_paths(paths: &mut [Path]) {
    for path in paths.iter_mut() {
        path.analyze();
    }
}

/// Samples path `path_index` at fractional `position` along its length.
///
/// `is_closed` selects the closed length (wrapping from the last point back to
/// the first) or the open length (clamping at the last point). Returns `None`
/// for an out-of-range index or an empty path. The distance table must be
/// current, see [`Path::analyze`].
///
/// # Examples
/// ```
/// use contour_kernel::{get_point, Path, Vec2};
///
/// let mut path = Path::new(vec![Vec2::ZERO, Vec2::X, Vec2::ONE, Vec2::Y], true);
/// path.analyze();
/// let paths = [path];
///
/// let s = get_point(&paths, 0, 0.125, true).unwrap();
/// assert_eq!(s.point, Vec2::new(0.5, 0.0));
/// assert!(get_point(&paths, 1, 0.5, true).is_none());
/// ```
pub fn get_point(
    paths: &[Path],
    path_index: usize,
    position: f64,
    is_closed: bool,
) -> Option<PathSample> {
    let path = paths.get(path_index)?;
    let n = path.points.len();
    if n == 0 || path.distances.len() != n {
        return None;
    }

    let target = (position - position.floor()) * path.total_distance(is_closed);
    let normal_at = |i: usize| path.normals.get(i).copied().unwrap_or(Vec2::ZERO);

    let sample = match path.distances.binary_search_by(|d| d.total_cmp(&target)) {
        Ok(k) => PathSample {
            point: path.points[k],
            normal: normal_at(k),
            distance: target,
        },
        Err(0) => PathSample {
            point: path.points[0],
            normal: normal_at(0),
            distance: target,
        },
        Err(k) if k < n => {
            let span = path.distances[k] - path.distances[k - 1];
            let t = (target - path.distances[k - 1]) / span;
            interpolate(path, k - 1, k, t, target)
        }
        Err(_) if is_closed => {
            let span = path.closed_distance - path.open_distance;
            let t = (target - path.distances[n - 1]) / span;
            interpolate(path, n - 1, 0, t, target)
        }
        Err(_) => PathSample {
            point: path.points[n - 1],
            normal: normal_at(n - 1),
            distance: target,
        },
    };
    Some(sample)
}

fn interpolate(path: &Path, a: usize, b: usize, t: f64, distance: f64) -> PathSample {
    let point = path.points[a].lerp(path.points[b], t);
    let normal = match (path.normals.get(a), path.normals.get(b)) {
        (Some(na), Some(nb)) => na.lerp(*nb, t).normalize_or_zero(),
        _ => Vec2::ZERO,
    };
    PathSample { point, normal, distance }
}
