//! Midpoint-angle parametrization.
//!
//! θ = (x − 0.5)·π is the angle of the line from the horizontal axis, and
//! m = 0.15 + 0.70·y the relative height where it crosses the vertical midline.
//! The line passes through the anchor `(W/2, m·H)` with pixel slope tan θ and is
//! clipped to the viewport like any other line. Slopes steeper than
//! `GeomCfg::near_vertical_slope` collapse to the exact vertical through the anchor.

use std::f64::consts::FRAC_PI_2;

use nalgebra::Vector2;

use super::describe::{fixed, AxisDescriptor, Description, DisplayValue, DisplayValues};
use super::{Parametrization, Physical};
use crate::geom2::{GeomCfg, NormalLine, NormalizedParam, Point2, Segment, Viewport};
use crate::EngineError;

pub const ID: &str = "midpoint-theta";

/// The visible band keeps the anchor away from the top and bottom edges.
pub const AXES: AxisDescriptor = AxisDescriptor {
    x_label: "θ",
    y_label: "midpoint",
    x_range: [-FRAC_PI_2, FRAC_PI_2],
    y_range: [0.15, 0.85],
};

pub const DESCRIPTION: Description = Description {
    overview: "The midpoint-theta parametrization represents lines by their intersection point \
               with the vertical midline and their angle.",
    parameters: &[
        "midpoint: relative vertical position where line crosses x = W/2 (range: 0.15 to 0.85)",
        "θ: angle of the line from the horizontal (range: -π/2 to π/2)",
    ],
    equations: &["y = m·x + b", "m = tan(θ)", "b = midpoint·H - m·W/2"],
    notes: &[],
};

/// Midpoint-angle strategy.
#[derive(Clone, Copy, Debug, Default)]
pub struct MidpointTheta;

impl MidpointTheta {
    /// Point where the line crosses the vertical midline (absolute coordinates).
    pub fn anchor(&self, p: NormalizedParam, vp: &Viewport) -> Point2 {
        Vector2::new(vp.width() / 2.0, AXES.map_y(p.y()) * vp.height())
    }

    /// Normal-form line in the centered frame.
    pub fn line(&self, p: NormalizedParam, vp: &Viewport) -> NormalLine {
        let theta = AXES.map_x(p.x());
        NormalLine::through(vp.to_centered(self.anchor(p, vp)), theta)
    }

    /// Inverse mapping: (θ, midpoint in pixels) back to parameter space.
    pub fn normalize(
        &self,
        theta: f64,
        midpoint_px: f64,
        vp: &Viewport,
    ) -> Result<NormalizedParam, EngineError> {
        NormalizedParam::new(
            AXES.unmap_x(theta),
            AXES.unmap_y(midpoint_px / vp.height()),
        )
    }
}

impl Parametrization for MidpointTheta {
    fn id(&self) -> &'static str {
        ID
    }
    fn name(&self) -> &'static str {
        "Midpoint-Theta"
    }
    fn description(&self) -> &'static Description {
        &DESCRIPTION
    }
    fn axes(&self) -> &'static AxisDescriptor {
        &AXES
    }

    fn physical(&self, p: NormalizedParam, vp: &Viewport) -> Physical {
        Physical::MidpointTheta {
            theta: AXES.map_x(p.x()),
            midpoint_px: self.anchor(p, vp).y,
        }
    }

    fn endpoints_with_cfg(
        &self,
        p: NormalizedParam,
        vp: &Viewport,
        cfg: &GeomCfg,
    ) -> Option<Segment> {
        let slope = AXES.map_x(p.x()).tan();
        if slope.abs() > cfg.near_vertical_slope {
            let x = vp.width() / 2.0;
            return Some(Segment::new(
                Vector2::new(x, 0.0),
                Vector2::new(x, vp.height()),
            ));
        }
        self.line(p, vp).clip_to_viewport(vp, cfg)
    }

    fn display_values(&self, p: NormalizedParam, vp: &Viewport) -> DisplayValues {
        let theta = AXES.map_x(p.x());
        DisplayValues {
            primary: DisplayValue {
                label: AXES.x_label,
                value: format!("{}°", fixed(theta.to_degrees(), 1)),
            },
            secondary: DisplayValue {
                label: AXES.y_label,
                value: format!("{} px", fixed(self.anchor(p, vp).y, 2)),
            },
        }
    }

    fn normal_foot(&self, _p: NormalizedParam, _vp: &Viewport) -> Option<Point2> {
        None
    }
}
