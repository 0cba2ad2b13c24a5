//! Parametrization strategies and the fixed registry.
//!
//! Purpose
//! - One shared contract (`Parametrization`) with two implementations:
//!   `hough::Hough` and `midpoint::MidpointTheta`.
//! - `ParamKind` is the closed set of registered strategies; lookup by identifier
//!   happens once (`ParamKind::from_id` / `registry::lookup`) and everything after
//!   that is a static `match`.
//!
//! Contract
//! - Every operation is a pure function of `(param, viewport)` (and `GeomCfg`).
//! - `endpoints` and `display_values` derive their physical values through the same
//!   code path (`physical`), so geometry and labels cannot disagree.

use std::fmt;
use std::str::FromStr;

mod describe;
pub mod hough;
pub mod midpoint;
pub mod registry;

pub use describe::{AxisDescriptor, Description, DisplayValue, DisplayValues};
pub use hough::Hough;
pub use midpoint::MidpointTheta;
pub use registry::ParamEntry;

use crate::geom2::{GeomCfg, NormalizedParam, Point2, Segment, Viewport};
use crate::EngineError;

/// Physical parameter values behind a normalized point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Physical {
    /// Normal angle θ ∈ [0, π] (rad) and signed distance ρ (px) from the center.
    Hough { theta: f64, rho: f64 },
    /// Line angle θ ∈ [−π/2, π/2] (rad) and midline crossing height (px).
    MidpointTheta { theta: f64, midpoint_px: f64 },
}

/// Shared per-strategy contract.
pub trait Parametrization {
    fn id(&self) -> &'static str;
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static Description;
    fn axes(&self) -> &'static AxisDescriptor;

    /// Normalized point → physical line parameters.
    fn physical(&self, p: NormalizedParam, vp: &Viewport) -> Physical;

    /// Visible chord of the line, or `None` when it misses the viewport.
    fn endpoints_with_cfg(
        &self,
        p: NormalizedParam,
        vp: &Viewport,
        cfg: &GeomCfg,
    ) -> Option<Segment>;

    fn endpoints(&self, p: NormalizedParam, vp: &Viewport) -> Option<Segment> {
        self.endpoints_with_cfg(p, vp, &GeomCfg::default())
    }

    fn display_values(&self, p: NormalizedParam, vp: &Viewport) -> DisplayValues;

    /// Foot of the normal from the viewport center, for strategies that have one.
    fn normal_foot(&self, p: NormalizedParam, vp: &Viewport) -> Option<Point2>;
}

/// Registered strategies, in registration order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ParamKind {
    #[default]
    Hough,
    MidpointTheta,
}

macro_rules! dispatch {
    ($kind:expr, $s:ident => $body:expr) => {
        match $kind {
            ParamKind::Hough => {
                let $s = &Hough;
                $body
            }
            ParamKind::MidpointTheta => {
                let $s = &MidpointTheta;
                $body
            }
        }
    };
}

impl ParamKind {
    pub const ALL: [ParamKind; 2] = [ParamKind::Hough, ParamKind::MidpointTheta];

    pub fn from_id(id: &str) -> Result<Self, EngineError> {
        Self::ALL
            .into_iter()
            .find(|k| k.id() == id)
            .ok_or_else(|| EngineError::UnknownParametrization { id: id.to_string() })
    }
}

impl FromStr for ParamKind {
    type Err = EngineError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s)
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl Parametrization for ParamKind {
    fn id(&self) -> &'static str {
        dispatch!(self, s => s.id())
    }
    fn name(&self) -> &'static str {
        dispatch!(self, s => s.name())
    }
    fn description(&self) -> &'static Description {
        dispatch!(self, s => s.description())
    }
    fn axes(&self) -> &'static AxisDescriptor {
        dispatch!(self, s => s.axes())
    }
    fn physical(&self, p: NormalizedParam, vp: &Viewport) -> Physical {
        dispatch!(self, s => s.physical(p, vp))
    }
    fn endpoints_with_cfg(
        &self,
        p: NormalizedParam,
        vp: &Viewport,
        cfg: &GeomCfg,
    ) -> Option<Segment> {
        dispatch!(self, s => s.endpoints_with_cfg(p, vp, cfg))
    }
    fn display_values(&self, p: NormalizedParam, vp: &Viewport) -> DisplayValues {
        dispatch!(self, s => s.display_values(p, vp))
    }
    fn normal_foot(&self, p: NormalizedParam, vp: &Viewport) -> Option<Point2> {
        dispatch!(self, s => s.normal_foot(p, vp))
    }
}

/// Everything a view needs to redraw after the parameter point moves.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub kind: ParamKind,
    pub param: NormalizedParam,
    pub viewport: Viewport,
    pub physical: Physical,
    pub endpoints: Option<Segment>,
    pub normal_foot: Option<Point2>,
    pub display: DisplayValues,
}

pub fn evaluate(kind: ParamKind, param: NormalizedParam, viewport: Viewport) -> Frame {
    evaluate_with_cfg(kind, param, viewport, &GeomCfg::default())
}

pub fn evaluate_with_cfg(
    kind: ParamKind,
    param: NormalizedParam,
    viewport: Viewport,
    cfg: &GeomCfg,
) -> Frame {
    Frame {
        kind,
        param,
        viewport,
        physical: kind.physical(param, &viewport),
        endpoints: kind.endpoints_with_cfg(param, &viewport, cfg),
        normal_foot: kind.normal_foot(param, &viewport),
        display: kind.display_values(param, &viewport),
    }
}
