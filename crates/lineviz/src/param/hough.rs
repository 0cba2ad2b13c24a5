//! Hough (normal-form) parametrization.
//!
//! θ = x·π is the angle of the normal, ρ = (2y − 1)·ρ_max its signed distance from
//! the viewport center, with ρ_max the half diagonal. The line is
//! `x'·cos θ + y'·sin θ = ρ` in the centered frame.

use std::f64::consts::PI;

use super::describe::{fixed, AxisDescriptor, Description, DisplayValue, DisplayValues};
use super::{Parametrization, Physical};
use crate::geom2::{GeomCfg, NormalLine, NormalizedParam, Point2, Segment, Viewport};
use crate::EngineError;

pub const ID: &str = "hough";

/// The y axis is ρ in units of ρ_max, which depends on the viewport.
pub const AXES: AxisDescriptor = AxisDescriptor {
    x_label: "θ",
    y_label: "ρ",
    x_range: [0.0, PI],
    y_range: [-1.0, 1.0],
};

pub const DESCRIPTION: Description = Description {
    overview: "The Hough transform parametrizes lines using normal vector parameters (θ,ρ), \
               representing the angle and distance of the perpendicular line from the origin \
               to the target line.",
    parameters: &[
        "θ: angle of the normal vector from the x-axis (range: 0 to π)",
        "ρ: signed distance from origin to line (range: -ρ_max to ρ_max)",
    ],
    equations: &[
        "x' = x - W/2",
        "y' = y - H/2",
        "ρ = x'·cos(θ) + y'·sin(θ)",
        "for any point (x,y) on the line",
    ],
    notes: &[
        "The origin is placed at the image center (W/2, H/2)",
        "ρ_max is the maximum possible distance from center to any line in the image",
    ],
};

/// Normal-form strategy.
#[derive(Clone, Copy, Debug, Default)]
pub struct Hough;

impl Hough {
    /// Normal-form line for `p` in the centered frame.
    pub fn line(&self, p: NormalizedParam, vp: &Viewport) -> NormalLine {
        let theta = AXES.map_x(p.x());
        let rho = AXES.map_y(p.y()) * vp.half_diagonal();
        NormalLine::new(theta, rho)
    }

    /// Inverse of the forward mapping: physical (θ, ρ) back to parameter space.
    ///
    /// Fails with `OutOfDomain` when θ ∉ [0, π] or |ρ| > ρ_max.
    pub fn normalize(
        &self,
        theta: f64,
        rho: f64,
        vp: &Viewport,
    ) -> Result<NormalizedParam, EngineError> {
        NormalizedParam::new(
            AXES.unmap_x(theta),
            AXES.unmap_y(rho / vp.half_diagonal()),
        )
    }
}

impl Parametrization for Hough {
    fn id(&self) -> &'static str {
        ID
    }
    fn name(&self) -> &'static str {
        "Hough Transform"
    }
    fn description(&self) -> &'static Description {
        &DESCRIPTION
    }
    fn axes(&self) -> &'static AxisDescriptor {
        &AXES
    }

    fn physical(&self, p: NormalizedParam, vp: &Viewport) -> Physical {
        let NormalLine { theta, rho } = self.line(p, vp);
        Physical::Hough { theta, rho }
    }

    fn endpoints_with_cfg(
        &self,
        p: NormalizedParam,
        vp: &Viewport,
        cfg: &GeomCfg,
    ) -> Option<Segment> {
        self.line(p, vp).clip_to_viewport(vp, cfg)
    }

    fn display_values(&self, p: NormalizedParam, vp: &Viewport) -> DisplayValues {
        let NormalLine { theta, rho } = self.line(p, vp);
        DisplayValues {
            primary: DisplayValue {
                label: AXES.x_label,
                value: format!("{} rad", fixed(theta, 2)),
            },
            secondary: DisplayValue {
                label: AXES.y_label,
                value: format!("{} px", fixed(rho, 2)),
            },
        }
    }

    fn normal_foot(&self, p: NormalizedParam, vp: &Viewport) -> Option<Point2> {
        Some(vp.from_centered(self.line(p, vp).foot()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use std::f64::consts::FRAC_PI_2;

    fn square() -> Viewport {
        Viewport::new(640.0, 640.0).unwrap()
    }

    #[test]
    fn center_param_is_horizontal_through_center() {
        let vp = square();
        let p = NormalizedParam::CENTER;
        let line = Hough.line(p, &vp);
        assert!((line.theta - FRAC_PI_2).abs() < 1e-12);
        assert_eq!(line.rho, 0.0);

        let seg = Hough.endpoints(p, &vp).unwrap();
        let expected = Segment::new(vector![0.0, 320.0], vector![640.0, 320.0]);
        assert!(seg.approx_eq_undirected(&expected, 1e-9));

        let foot = Hough.normal_foot(p, &vp).unwrap();
        assert!((foot - vector![320.0, 320.0]).norm() < 1e-9);
    }

    #[test]
    fn theta_zero_is_vertical_at_rho() {
        let vp = Viewport::new(800.0, 600.0).unwrap();
        let p = NormalizedParam::new(0.0, 0.6).unwrap();
        let rho = 0.2 * vp.half_diagonal();
        let seg = Hough.endpoints(p, &vp).unwrap();
        assert!((seg.a.x - seg.b.x).abs() < 1e-9);
        assert!((seg.a.x - (400.0 + rho)).abs() < 1e-9);
        assert!(((seg.a.y - seg.b.y).abs() - 600.0).abs() < 1e-9);
    }

    #[test]
    fn display_values_format() {
        let vp = square();
        let d = Hough.display_values(NormalizedParam::CENTER, &vp);
        assert_eq!(d.primary.label, "θ");
        assert_eq!(d.primary.value, "1.57 rad");
        assert_eq!(d.secondary.label, "ρ");
        assert_eq!(d.secondary.value, "0.00 px");

        let d = Hough.display_values(NormalizedParam::new(1.0, 0.0).unwrap(), &vp);
        assert_eq!(d.primary.value, "3.14 rad");
        assert_eq!(d.secondary.value, "-452.55 px");
    }

    #[test]
    fn normalize_inverts_forward_mapping() {
        let vp = Viewport::new(500.0, 300.0).unwrap();
        let p = NormalizedParam::new(0.37, 0.81).unwrap();
        let Physical::Hough { theta, rho } = Hough.physical(p, &vp) else {
            panic!("expected Hough physical values");
        };
        let q = Hough.normalize(theta, rho, &vp).unwrap();
        assert!((q.x() - p.x()).abs() < 1e-12 && (q.y() - p.y()).abs() < 1e-12);
        assert!(Hough.normalize(4.0, 0.0, &vp).is_err());
        assert!(Hough.normalize(1.0, 1e6, &vp).is_err());
    }
}
