use super::*;
use approx::assert_relative_eq;

fn square() -> Path {
    Path::new(
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(0.0, 2.0),
        ],
        true,
    )
}

#[test]
fn test_analyze_square() {
    let mut path = square();
    path.analyze();
    assert_eq!(path.distances, vec![0.0, 2.0, 4.0, 6.0]);
    assert_relative_eq!(path.open_distance, 6.0);
    assert_relative_eq!(path.closed_distance, 8.0);
    assert_relative_eq!(path.total_distance(true), 8.0);
    assert_relative_eq!(path.total_distance(false), 6.0);
}

#[test]
fn test_analyze_empty_and_single() {
    let mut path = Path::default();
    path.analyze();
    assert!(path.distances.is_empty());
    assert_eq!(path.closed_distance, 0.0);

    let mut path = Path::new(vec![Vec2::ONE], true);
    path.analyze();
    assert_eq!(path.distances, vec![0.0]);
    assert_eq!(path.closed_distance, 0.0);
}

#[test]
fn test_reanalyze_replaces_table() {
    let mut path = square();
    path.analyze();
    path.points.pop();
    path.analyze();
    assert_eq!(path.distances.len(), 3);
    assert_relative_eq!(path.open_distance, 4.0);
}

#[test]
fn test_signed_area_orientation() {
    let path = square();
    assert_relative_eq!(path.signed_area(), 4.0);
    let mut reversed = path.clone();
    reversed.points.reverse();
    assert_relative_eq!(reversed.signed_area(), -4.0);
}
