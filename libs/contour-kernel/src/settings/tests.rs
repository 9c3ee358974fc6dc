use super::*;

#[test]
fn test_default_matches_constants() {
    let settings = PipelineSettings::default();
    assert_eq!(settings.grid_cells, DEFAULT_GRID_CELLS);
    assert_eq!(settings.smooth_iterations, DEFAULT_SMOOTH_ITERATIONS);
    assert_eq!(settings.normal_mode, NormalMode::Curve);
    assert!(settings.cardinal.is_none());
    assert!(settings.parallel_field);
}

#[test]
fn test_new_rejects_zero_grid() {
    let err = PipelineSettings::new(0, 1).unwrap_err();
    assert!(matches!(err, ContourError::Config(_)));
}

#[test]
fn test_builders() {
    let settings = PipelineSettings::default()
        .with_cardinal(Cardinal::North, Vec2::new(1.0, 2.0))
        .with_normal_mode(NormalMode::Center)
        .with_smoothing(false, 0);
    assert_eq!(settings.cardinal, Some(Cardinal::North));
    assert_eq!(settings.reference_center, Vec2::new(1.0, 2.0));
    assert_eq!(settings.normal_mode, NormalMode::Center);
    assert!(!settings.apply_smooth_path);
}

#[test]
fn test_validate_reference_center() {
    let mut settings = PipelineSettings::default();
    assert!(settings.validate().is_ok());
    settings.reference_center = Vec2::new(f64::NAN, 0.0);
    assert!(settings.validate().is_err());
}

#[test]
fn test_cardinal_directions() {
    assert_eq!(Cardinal::South.direction(), Vec2::new(0.0, -1.0));
    assert_eq!(Cardinal::West.direction(), Vec2::new(-1.0, 0.0));
    assert!(Cardinal::East.is_horizontal());
    assert!(!Cardinal::North.is_horizontal());
}
