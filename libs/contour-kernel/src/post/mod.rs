//! # Path Post-Processing
//!
//! In-place operations applied to freshly traced paths:
//!
//! - [`smooth_path`]: neighbor averaging
//! - [`cardinal_shift`]: rotate the point list so index 0 lies on a compass axis
//! - [`compute_normals`]: per-point normals
//!
//! All three treat the point list as a ring. Smoothing does so even for paths
//! flagged open, which pulls the two ends of an open path toward each other.

use crate::geometry::{Bounds, Vec2};
use crate::path::Path;
use crate::settings::{Cardinal, NormalMode};
use tracing::trace;

/// Replaces every point with the average of itself and its two cyclic
/// neighbors, `iterations` times. Each pass reads the previous pass only.
///
/// # Examples
/// ```
/// use contour_kernel::{smooth_path, Path, Vec2};
///
/// let mut path = Path::new(vec![Vec2::ZERO, Vec2::X, Vec2::Y], true);
/// let before = path.clone();
/// smooth_path(&mut path, 0);
/// assert_eq!(path, before);
/// ```
pub fn smooth_path(path: &mut Path, iterations: u32) {
    let n = path.points.len();
    if n == 0 || iterations == 0 {
        return;
    }
    let mut previous = Vec::with_capacity(n);
    for _ in 0..iterations {
        previous.clear();
        previous.extend_from_slice(&path.points);
        for (i, point) in path.points.iter_mut().enumerate() {
            *point = (previous[(i + n - 1) % n] + previous[i] + previous[(i + 1) % n]) / 3.0;
        }
    }
}

/// A point on the cardinal ray: either an existing vertex or the intercept of
/// a straddling segment.
#[derive(Debug, Clone, Copy)]
enum Crossing {
    Vertex(usize),
    Intercept { insert_at: usize, point: Vec2 },
}

/// Rotates `path` so that index 0 lies on the ray from `reference_center`
/// toward `cardinal`, inserting the exact intercept when no vertex lies on the
/// ray. When several crossings exist the one nearest the reference center
/// wins. The ray is clipped to `bounds`.
///
/// Normals and distances are cleared since indices change; recompute them
/// afterwards. Returns false when the ray never meets the path.
///
/// # Examples
/// ```
/// use contour_kernel::{cardinal_shift, Bounds, Cardinal, Path, Vec2};
///
/// let mut path = Path::new(
///     vec![
///         Vec2::new(1.0, -1.0),
///         Vec2::new(1.0, 1.0),
///         Vec2::new(-1.0, 1.0),
///         Vec2::new(-1.0, -1.0),
///     ],
///     true,
/// );
/// let bounds = Bounds::new(Vec2::splat(-2.0), Vec2::splat(2.0));
/// assert!(cardinal_shift(&mut path, &bounds, Cardinal::East, Vec2::ZERO));
/// assert_eq!(path.points[0], Vec2::new(1.0, 0.0));
/// assert_eq!(path.len(), 5);
/// ```
pub fn cardinal_shift(
    path: &mut Path,
    bounds: &Bounds,
    cardinal: Cardinal,
    reference_center: Vec2,
) -> bool {
    let n = path.points.len();
    if n == 0 {
        return false;
    }

    let horizontal = cardinal.is_horizontal();
    let dir = cardinal.direction();
    // Signed distance off the axis line, and distance along the ray.
    let offset = |p: Vec2| {
        if horizontal {
            p.y - reference_center.y
        } else {
            p.x - reference_center.x
        }
    };
    let along = |p: Vec2| (p - reference_center).dot(dir);
    let reach = match cardinal {
        Cardinal::East => bounds.max.x - reference_center.x,
        Cardinal::West => reference_center.x - bounds.min.x,
        Cardinal::North => bounds.max.y - reference_center.y,
        Cardinal::South => reference_center.y - bounds.min.y,
    };
    let on_ray = |distance: f64| (0.0..=reach).contains(&distance);

    let mut best: Option<(f64, Crossing)> = None;
    let mut consider = |distance: f64, crossing: Crossing| {
        if on_ray(distance) && best.map_or(true, |(d, _)| distance < d) {
            best = Some((distance, crossing));
        }
    };

    for i in 0..n {
        let a = path.points[i];
        let off_a = offset(a);
        if off_a == 0.0 {
            consider(along(a), Crossing::Vertex(i));
        }
        if n < 2 {
            continue;
        }
        let j = (i + 1) % n;
        let b = path.points[j];
        let off_b = offset(b);
        if (off_a < 0.0 && off_b > 0.0) || (off_a > 0.0 && off_b < 0.0) {
            let point = if horizontal {
                let x = a.x + (reference_center.y - a.y) * (b.x - a.x) / (b.y - a.y);
                Vec2::new(x, reference_center.y)
            } else {
                let y = a.y + (reference_center.x - a.x) * (b.y - a.y) / (b.x - a.x);
                Vec2::new(reference_center.x, y)
            };
            // The closing segment's intercept goes after the last point.
            let insert_at = if j == 0 { n } else { j };
            consider(along(point), Crossing::Intercept { insert_at, point });
        }
    }

    let Some((distance, crossing)) = best else {
        trace!(?cardinal, "cardinal ray misses path");
        return false;
    };

    let start = match crossing {
        Crossing::Vertex(idx) => idx,
        Crossing::Intercept { insert_at, point } => {
            path.points.insert(insert_at, point);
            insert_at
        }
    };
    path.points.rotate_left(start);
    path.normals.clear();
    path.distances.clear();
    trace!(?cardinal, start, distance, "cardinal shift applied");
    true
}

/// Fills `path.normals` with one unit normal per point.
///
/// `Center` points away from `reference_center`. `Curve` rotates the
/// central-difference tangent by -90 degrees, which points outward for
/// counter-clockwise loops. Degenerate vectors give a zero normal.
pub fn compute_normals(path: &mut Path, mode: NormalMode, reference_center: Vec2) {
    let n = path.points.len();
    let points = &path.points;
    path.normals = match mode {
        NormalMode::Center => points
            .iter()
            .map(|&p| (p - reference_center).normalize_or_zero())
            .collect(),
        NormalMode::Curve => (0..n)
            .map(|i| {
                let tangent = points[(i + 1) % n] - points[(i + n - 1) % n];
                Vec2::new(tangent.y, -tangent.x).normalize_or_zero()
            })
            .collect(),
    };
}

#[cfg(test)]
mod tests;
