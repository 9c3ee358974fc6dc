use super::*;
use crate::branch::BranchKind;
use approx::assert_relative_eq;

fn settings(count: usize, variance: f64) -> ProfileSettings {
    ProfileSettings {
        root_count: count,
        root_variance: variance,
        ..ProfileSettings::default()
    }
}

fn rolls(branches: &[ProgressiveBranch]) -> Vec<f64> {
    branches
        .iter()
        .filter_map(|b| match b.kind {
            BranchKind::Root { roll, .. } => Some(roll),
            BranchKind::Trunk { .. } => None,
        })
        .collect()
}

#[test]
fn test_no_roots() {
    assert!(simulate_roots(1.0, &settings(0, 0.5)).is_empty());
}

#[test]
fn test_even_spacing_without_variance() {
    let roots = simulate_roots(2.0, &settings(4, 0.0));
    let rolls = rolls(&roots);
    assert_eq!(rolls.len(), 4);
    for (i, roll) in rolls.iter().enumerate() {
        assert_relative_eq!(*roll, TAU * i as f64 / 4.0, epsilon = 1e-12);
    }
    let defaults = ProfileSettings::default();
    for root in &roots {
        assert_relative_eq!(root.radius_base, 2.0 * defaults.root_girth);
        assert_eq!(root.radius_top, 0.0);
    }
}

#[test]
fn test_variance_is_bounded() {
    let s = settings(6, 0.3);
    let roots = simulate_roots(1.0, &s);
    let spacing = TAU / 6.0;
    for (i, root) in roots.iter().enumerate() {
        let BranchKind::Root { roll, exposure, reach, .. } = root.kind else {
            panic!("expected a root");
        };
        assert!((roll - spacing * i as f64).abs() <= 0.5 * spacing * 0.3 + 1e-12);
        assert!(root.radius_base >= s.root_girth * 0.7 - 1e-12);
        assert!(root.radius_base <= s.root_girth * 1.3 + 1e-12);
        assert!(exposure >= s.root_exposure * 0.7 - 1e-12);
        assert!(reach > 0.0 && reach <= 1.0);
    }
}

#[test]
fn test_seed_controls_variance() {
    let a = simulate_roots(1.0, &settings(5, 0.4));
    let b = simulate_roots(1.0, &settings(5, 0.4));
    assert_eq!(a, b);

    let mut other = settings(5, 0.4);
    other.seed += 1;
    assert_ne!(a, simulate_roots(1.0, &other));
}

#[test]
fn test_geometry_source() {
    let source = vec![
        RootGeometry {
            angle: 1.0,
            girth: 0.3,
            exposure: 0.2,
            reach: 0.4,
            twirl: 0.1,
        },
        RootGeometry {
            angle: 3.0,
            girth: 0.5,
            exposure: 0.1,
            reach: 0.6,
            twirl: 0.0,
        },
    ];
    assert_eq!(source.roots().len(), 2);
    assert_eq!(source.as_slice().roots(), source);

    let branch = source[0].to_branch(EasingCurve::EaseOut);
    assert_eq!(branch.radius_base, 0.3);
    assert_eq!(branch.curve, EasingCurve::EaseOut);
    assert_eq!(
        branch.kind,
        BranchKind::Root {
            roll: 1.0,
            twirl: 0.1,
            exposure: 0.2,
            reach: 0.4
        }
    );
}
