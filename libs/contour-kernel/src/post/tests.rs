use super::*;
use approx::assert_relative_eq;

fn square() -> Path {
    Path::new(
        vec![
            Vec2::new(1.0, -1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(-1.0, 1.0),
            Vec2::new(-1.0, -1.0),
        ],
        true,
    )
}

fn diamond() -> Path {
    Path::new(
        vec![
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(-1.0, 0.0),
            Vec2::new(0.0, -1.0),
        ],
        true,
    )
}

fn bounds() -> Bounds {
    Bounds::new(Vec2::splat(-2.0), Vec2::splat(2.0))
}

// =============================================================================
// SMOOTHING
// =============================================================================

#[test]
fn test_smooth_zero_iterations_is_identity() {
    let mut path = square();
    smooth_path(&mut path, 0);
    assert_eq!(path, square());
}

#[test]
fn test_smooth_preserves_centroid_and_shrinks() {
    let mut path = square();
    smooth_path(&mut path, 3);
    let centroid = path.points.iter().copied().sum::<Vec2>() / path.len() as f64;
    assert_relative_eq!(centroid.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(centroid.y, 0.0, epsilon = 1e-12);
    assert!(path.points.iter().all(|p| p.length() < 2f64.sqrt()));
}

#[test]
fn test_smooth_single_pass_values() {
    let mut path = square();
    smooth_path(&mut path, 1);
    // (-1,-1) + (1,-1) + (1,1) over 3
    assert_relative_eq!(path.points[0].x, 1.0 / 3.0);
    assert_relative_eq!(path.points[0].y, -1.0 / 3.0);
}

#[test]
fn test_smooth_wraps_open_paths() {
    let mut path = Path::new(vec![Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0)], false);
    smooth_path(&mut path, 1);
    // The first point is averaged with the last one even though the path is open.
    assert_relative_eq!(path.points[0].x, 1.0);
    assert_relative_eq!(path.points[2].x, 1.0);
}

// =============================================================================
// CARDINAL SHIFT
// =============================================================================

#[test]
fn test_cardinal_inserts_intercept_for_each_axis() {
    let cases = [
        (Cardinal::East, Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0)),
        (Cardinal::North, Vec2::new(0.0, 1.0), Vec2::new(-1.0, 1.0)),
        (Cardinal::West, Vec2::new(-1.0, 0.0), Vec2::new(-1.0, -1.0)),
        (Cardinal::South, Vec2::new(0.0, -1.0), Vec2::new(1.0, -1.0)),
    ];
    for (cardinal, first, second) in cases {
        let mut path = square();
        assert!(cardinal_shift(&mut path, &bounds(), cardinal, Vec2::ZERO));
        assert_eq!(path.len(), 5, "{:?}", cardinal);
        assert_eq!(path.points[0], first, "{:?}", cardinal);
        assert_eq!(path.points[1], second, "{:?}", cardinal);
    }
}

#[test]
fn test_cardinal_on_existing_vertex() {
    let mut path = diamond();
    assert!(cardinal_shift(&mut path, &bounds(), Cardinal::North, Vec2::ZERO));
    assert_eq!(path.len(), 4);
    assert_eq!(path.points[0], Vec2::new(0.0, 1.0));
    assert_eq!(path.points[3], Vec2::new(1.0, 0.0));
}

#[test]
fn test_cardinal_is_idempotent() {
    let mut once = square();
    cardinal_shift(&mut once, &bounds(), Cardinal::East, Vec2::new(0.0, 0.3));
    let mut twice = once.clone();
    cardinal_shift(&mut twice, &bounds(), Cardinal::East, Vec2::new(0.0, 0.3));
    assert_eq!(once, twice);
}

#[test]
fn test_cardinal_picks_nearest_crossing() {
    // Reference center left of the square: the ray crosses both vertical walls.
    let mut path = square();
    assert!(cardinal_shift(&mut path, &bounds(), Cardinal::East, Vec2::new(-1.5, 0.0)));
    assert_eq!(path.points[0], Vec2::new(-1.0, 0.0));
    assert_eq!(path.points[1], Vec2::new(-1.0, -1.0));
}

#[test]
fn test_cardinal_on_concave_shape() {
    // A "C" shape opening to the east: the ray meets the inner wall.
    let mut path = Path::new(
        vec![
            Vec2::new(-1.0, -1.0),
            Vec2::new(1.5, -1.0),
            Vec2::new(1.5, -0.5),
            Vec2::new(0.5, -0.5),
            Vec2::new(0.5, 0.5),
            Vec2::new(1.5, 0.5),
            Vec2::new(1.5, 1.0),
            Vec2::new(-1.0, 1.0),
        ],
        true,
    );
    assert!(cardinal_shift(&mut path, &bounds(), Cardinal::East, Vec2::ZERO));
    assert_eq!(path.points[0], Vec2::new(0.5, 0.0));
}

#[test]
fn test_cardinal_miss_leaves_path() {
    let mut path = square();
    path.normals = vec![Vec2::X; 4];
    let before = path.clone();
    assert!(!cardinal_shift(&mut path, &bounds(), Cardinal::East, Vec2::new(0.0, 5.0)));
    assert_eq!(path, before);
}

#[test]
fn test_cardinal_clears_stale_tables() {
    let mut path = square();
    path.normals = vec![Vec2::X; 4];
    path.analyze();
    cardinal_shift(&mut path, &bounds(), Cardinal::East, Vec2::ZERO);
    assert!(path.normals.is_empty());
    assert!(path.distances.is_empty());
}

// =============================================================================
// NORMALS
// =============================================================================

#[test]
fn test_center_normals() {
    let mut path = diamond();
    compute_normals(&mut path, NormalMode::Center, Vec2::ZERO);
    assert_eq!(path.normals.len(), 4);
    assert_eq!(path.normals[0], Vec2::X);
    assert_eq!(path.normals[1], Vec2::Y);
}

#[test]
fn test_curve_normals_point_outward_on_ccw_loop() {
    let mut path = diamond();
    compute_normals(&mut path, NormalMode::Curve, Vec2::ZERO);
    for (p, n) in path.points.iter().zip(&path.normals) {
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-12);
        assert!(n.dot(*p) > 0.9, "normal {n} at {p}");
    }
}

#[test]
fn test_degenerate_normals_are_zero() {
    let mut path = Path::new(vec![Vec2::ONE], true);
    compute_normals(&mut path, NormalMode::Curve, Vec2::ZERO);
    assert_eq!(path.normals, vec![Vec2::ZERO]);
    compute_normals(&mut path, NormalMode::Center, Vec2::ONE);
    assert_eq!(path.normals, vec![Vec2::ZERO]);
}
