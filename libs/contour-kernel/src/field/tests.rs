use super::*;
use approx::assert_relative_eq;

fn unit_bounds() -> Bounds {
    Circle::new(Vec2::ZERO, 1.0).padded_bounds()
}

#[test]
fn test_square_bounds_grid() {
    let grid = Grid::from_bounds(&unit_bounds(), 40).unwrap();
    assert_eq!(grid.cols, 40);
    assert_eq!(grid.rows, 40);
    assert_relative_eq!(grid.cell_width, 2.4 / 40.0);
    assert_relative_eq!(grid.origin.x, -1.2);
}

#[test]
fn test_long_side_is_proportional() {
    let bounds = Bounds::new(Vec2::ZERO, Vec2::new(2.0, 5.0));
    let grid = Grid::from_bounds(&bounds, 4).unwrap();
    assert_eq!(grid.cols, 4);
    assert_eq!(grid.rows, 10);
    assert_relative_eq!(grid.cell_height, 0.5);
}

#[test]
fn test_rounding_of_long_side() {
    let bounds = Bounds::new(Vec2::ZERO, Vec2::new(3.0, 1.0));
    let grid = Grid::from_bounds(&bounds, 3).unwrap();
    assert_eq!(grid.rows, 3);
    assert_eq!(grid.cols, 9);

    let bounds = Bounds::new(Vec2::ZERO, Vec2::new(1.26, 1.0));
    let grid = Grid::from_bounds(&bounds, 2).unwrap();
    assert_eq!(grid.cols, 3);
}

#[test]
fn test_zero_cells_or_empty_bounds() {
    assert!(Grid::from_bounds(&unit_bounds(), 0).is_none());
    let flat = Bounds::new(Vec2::ZERO, Vec2::new(1.0, 0.0));
    assert!(Grid::from_bounds(&flat, 10).is_none());
}

#[test]
fn test_grid_point_positions() {
    let grid = Grid::from_bounds(&unit_bounds(), 4).unwrap();
    assert_eq!(grid.point(0, 0), Vec2::new(-1.2, -1.2));
    assert_relative_eq!(grid.point(4, 4).x, 1.2, epsilon = 1e-12);
    assert_relative_eq!(grid.point(2, 1).y, 0.0, epsilon = 1e-12);
}

#[test]
fn test_union_semantics() {
    let circles = [
        Circle::new(Vec2::new(-1.0, 0.0), 0.5),
        Circle::new(Vec2::new(1.0, 0.0), 0.5),
    ];
    let bounds = Bounds::new(Vec2::new(-2.0, -1.0), Vec2::new(2.0, 1.0));
    let grid = Grid::from_bounds(&bounds, 2).unwrap();
    let field = PointField::sample(&grid, &circles, false);
    // Points at x = -1 and x = 1 on the middle row are inside.
    assert!(field.is_inside(1, 1));
    assert!(field.is_inside(1, 3));
    assert!(!field.is_inside(1, 2));
    assert_eq!(field.inside_count(), 2);
}

#[test]
fn test_border_points_are_outside() {
    let circles = [Circle::new(Vec2::new(0.3, -0.7), 2.0)];
    let grid = Grid::from_bounds(&circles[0].padded_bounds(), 16).unwrap();
    let field = PointField::sample(&grid, &circles, true);
    for col in 0..grid.point_cols() {
        assert!(!field.is_inside(0, col));
        assert!(!field.is_inside(grid.rows, col));
    }
    for row in 0..grid.point_rows() {
        assert!(!field.is_inside(row, 0));
        assert!(!field.is_inside(row, grid.cols));
    }
}

#[test]
fn test_parallel_matches_sequential() {
    let circles = [
        Circle::new(Vec2::new(0.0, 0.0), 1.0),
        Circle::new(Vec2::new(1.3, 0.4), 0.7),
        Circle::new(Vec2::new(-0.2, 1.5), 0.3),
    ];
    let mut bounds = circles[0].padded_bounds();
    for c in &circles[1..] {
        bounds.encapsulate(&c.padded_bounds());
    }
    let grid = Grid::from_bounds(&bounds, 50).unwrap();
    let seq = PointField::sample(&grid, &circles, false);
    let par = PointField::sample(&grid, &circles, true);
    assert_eq!(seq, par);
    assert!(seq.inside_count() > 0);
}
