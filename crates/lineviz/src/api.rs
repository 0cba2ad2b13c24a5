//! Identifier-based boundary functions.
//!
//! These mirror how a view layer talks to the engine: it holds the selected
//! parametrization as a string id plus the latest normalized point, and asks for
//! geometry and labels on every change. Unknown ids fail with
//! `EngineError::UnknownParametrization`; nothing falls back to a default.

pub use crate::geom2::{GeomCfg, NormalizedParam, Point2, Segment, Viewport};
pub use crate::param::registry::{list, lookup, ParamEntry};
pub use crate::param::{
    evaluate, evaluate_with_cfg, AxisDescriptor, Description, DisplayValues, Frame, ParamKind,
    Parametrization,
};
pub use crate::sample::{grid, random_param, ReplayToken};

use crate::EngineError;

pub fn compute_endpoints(
    id: &str,
    param: NormalizedParam,
    viewport: &Viewport,
) -> Result<Option<Segment>, EngineError> {
    Ok(lookup(id)?.endpoints(param, viewport))
}

pub fn compute_display_values(
    id: &str,
    param: NormalizedParam,
    viewport: &Viewport,
) -> Result<DisplayValues, EngineError> {
    Ok(lookup(id)?.display_values(param, viewport))
}

pub fn compute_normal_foot(
    id: &str,
    param: NormalizedParam,
    viewport: &Viewport,
) -> Result<Option<Point2>, EngineError> {
    Ok(lookup(id)?.normal_foot(param, viewport))
}

/// Static metadata for the description panel and the parameter-space axes.
pub fn describe(
    id: &str,
) -> Result<(&'static Description, &'static AxisDescriptor), EngineError> {
    let kind = lookup(id)?;
    Ok((kind.description(), kind.axes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_by_id() {
        let vp = Viewport::default();
        let p = NormalizedParam::CENTER;
        assert!(compute_endpoints("hough", p, &vp).unwrap().is_some());
        assert!(compute_normal_foot("hough", p, &vp).unwrap().is_some());
        assert!(compute_normal_foot("midpoint-theta", p, &vp)
            .unwrap()
            .is_none());
        let d = compute_display_values("midpoint-theta", p, &vp).unwrap();
        assert_eq!(d.secondary.value, "320.00 px");
        let (desc, axes) = describe("hough").unwrap();
        assert!(!desc.overview.is_empty());
        assert_eq!(axes.x_label, "θ");
    }

    #[test]
    fn unknown_id_is_an_error_everywhere() {
        let vp = Viewport::default();
        let p = NormalizedParam::CENTER;
        let err = EngineError::UnknownParametrization { id: "polar".into() };
        assert_eq!(compute_endpoints("polar", p, &vp), Err(err.clone()));
        assert_eq!(compute_display_values("polar", p, &vp), Err(err.clone()));
        assert_eq!(compute_normal_foot("polar", p, &vp), Err(err.clone()));
        assert_eq!(describe("polar"), Err(err));
    }
}
