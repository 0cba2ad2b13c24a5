//! 2D geometry shared by all parametrizations.
//!
//! Purpose
//! - Validated inputs (`Viewport`, `NormalizedParam`) so engine calls are total.
//! - One rectangle clipper (`NormalLine::clip_to_rect`) with explicit, named
//!   tolerances (`GeomCfg`) for near-horizontal/vertical lines and corner hits.
//!
//! Frames
//! - Absolute: pixels, origin at the top-left corner, y pointing down.
//! - Centered: origin at `(W/2, H/2)`; `Viewport::{to_centered, from_centered}`.

mod clip;
mod types;

pub use clip::NormalLine;
pub use types::{
    GeomCfg, NormalizedParam, Point2, Segment, Viewport, EPS_DEDUP, EPS_TRIG, NEAR_VERTICAL_SLOPE,
};

#[cfg(test)]
mod tests;
