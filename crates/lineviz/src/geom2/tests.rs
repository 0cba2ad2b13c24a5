use super::*;
use crate::EngineError;
use nalgebra::vector;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

#[test]
fn viewport_rejects_degenerate_sizes() {
    assert!(Viewport::new(640.0, 480.0).is_ok());
    for (w, h) in [(0.0, 10.0), (10.0, -1.0), (f64::NAN, 10.0), (f64::INFINITY, 1.0)] {
        assert!(matches!(
            Viewport::new(w, h),
            Err(EngineError::InvalidViewport { .. })
        ));
    }
    let vp = Viewport::new(300.0, 400.0).unwrap();
    assert!((vp.half_diagonal() - 250.0).abs() < 1e-12);
    assert_eq!(vp.center(), vector![150.0, 200.0]);
}

#[test]
fn normalized_param_policies() {
    // Strict constructor fails fast.
    assert!(matches!(
        NormalizedParam::new(1.5, 0.2),
        Err(EngineError::OutOfDomain { axis: 'x', .. })
    ));
    assert!(matches!(
        NormalizedParam::new(0.2, -0.3),
        Err(EngineError::OutOfDomain { axis: 'y', .. })
    ));
    assert!(NormalizedParam::new(0.0, 1.0).is_ok());
    // Adapter constructor clamps, but NaN stays an error.
    let p = NormalizedParam::clamped(1.5, -0.3).unwrap();
    assert_eq!((p.x(), p.y()), (1.0, 0.0));
    assert!(NormalizedParam::clamped(f64::NAN, 0.5).is_err());
    assert_eq!(NormalizedParam::default(), NormalizedParam::CENTER);
}

#[test]
fn pointer_mapping_clamps_to_panel() {
    let origin = vector![100.0, 50.0];
    let size = vector![200.0, 200.0];
    let p = NormalizedParam::from_pointer(vector![150.0, 200.0], origin, size).unwrap();
    assert!((p.x() - 0.25).abs() < 1e-12 && (p.y() - 0.75).abs() < 1e-12);
    // Dragging past the panel edge sticks to it.
    let q = NormalizedParam::from_pointer(vector![-40.0, 900.0], origin, size).unwrap();
    assert_eq!((q.x(), q.y()), (0.0, 1.0));
    assert!(NormalizedParam::from_pointer(origin, origin, vector![0.0, 10.0]).is_err());
}

#[test]
fn clip_vertical_and_horizontal_lines() {
    let cfg = GeomCfg::default();
    let half = vector![320.0, 240.0];
    // θ = 0: x' = ρ
    let (a, b) = NormalLine::new(0.0, 100.0).clip_to_rect(half, &cfg).unwrap();
    assert!((a.x - 100.0).abs() < 1e-9 && (b.x - 100.0).abs() < 1e-9);
    assert!(((a.y - b.y).abs() - 480.0).abs() < 1e-9);
    // θ = π/2: y' = ρ
    let (a, b) = NormalLine::new(FRAC_PI_2, -50.0)
        .clip_to_rect(half, &cfg)
        .unwrap();
    assert!((a.y + 50.0).abs() < 1e-9 && (b.y + 50.0).abs() < 1e-9);
    assert!(((a.x - b.x).abs() - 640.0).abs() < 1e-9);
}

#[test]
fn clip_diagonal_dedups_corners() {
    let cfg = GeomCfg::default();
    let half = vector![1.0, 1.0];
    // Normal at 3π/4 through the origin: the main diagonal, hitting two corners
    // from two edges each.
    let (a, b) = NormalLine::new(3.0 * FRAC_PI_4, 0.0)
        .clip_to_rect(half, &cfg)
        .unwrap();
    let seg = Segment::new(a, b);
    let expected = Segment::new(vector![-1.0, -1.0], vector![1.0, 1.0]);
    assert!(seg.approx_eq_undirected(&expected, 1e-9));
}

#[test]
fn clip_misses_and_corner_touches_are_none() {
    let cfg = GeomCfg::default();
    let half = vector![320.0, 320.0];
    // Far outside.
    assert!(NormalLine::new(0.3, 1000.0).clip_to_rect(half, &cfg).is_none());
    // Tangent to the bottom-right corner only.
    let rho = half.norm();
    assert!(NormalLine::new(FRAC_PI_4, rho)
        .clip_to_rect(half, &cfg)
        .is_none());
}

#[test]
fn line_through_point_contains_it() {
    let p = vector![12.0, -7.0];
    for phi in [-FRAC_PI_2, -0.3, 0.0, 1.1, FRAC_PI_2, PI] {
        let line = NormalLine::through(p, phi);
        assert!(line.residual(p).abs() < 1e-12);
        // Direction is perpendicular to the normal.
        let dir = vector![phi.cos(), phi.sin()];
        assert!(line.normal().dot(&dir).abs() < 1e-12);
    }
}

#[test]
fn foot_is_closest_point() {
    let line = NormalLine::new(0.7, 42.0);
    let foot = line.foot();
    assert!(line.residual(foot).abs() < 1e-12);
    assert!((foot.norm() - 42.0).abs() < 1e-12);
}

#[test]
fn viewport_clip_returns_absolute_boundary_points() {
    let vp = Viewport::new(640.0, 480.0).unwrap();
    let cfg = GeomCfg::default();
    let seg = NormalLine::new(1.0, 30.0).clip_to_viewport(&vp, &cfg).unwrap();
    assert!(vp.on_boundary_eps(seg.a, 1e-6));
    assert!(vp.on_boundary_eps(seg.b, 1e-6));
}

#[test]
fn segment_helpers() {
    let s = Segment::new(vector![0.0, 0.0], vector![4.0, 0.0]);
    assert!((s.length() - 4.0).abs() < 1e-12);
    assert_eq!(s.midpoint(), vector![2.0, 0.0]);
    assert!((s.distance_to(vector![2.0, 3.0]) - 3.0).abs() < 1e-12);
    assert!((s.distance_to(vector![7.0, 4.0]) - 5.0).abs() < 1e-12);
    let r = Segment::new(s.b, s.a);
    assert!(s.approx_eq_undirected(&r, 0.0));
}
