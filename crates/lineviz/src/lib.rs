//! Line parametrization engine.
//!
//! Maps a normalized parameter-space point `(x, y) ∈ [0,1]²` to a line in image
//! space for two parametrizations (Hough normal form and midpoint-angle), plus
//! the labels and auxiliary geometry a visualizer draws next to it.
//!
//! Layout
//! - `geom2`: viewport, normalized params, segments, tolerances, rectangle clipping.
//! - `param`: the strategies, the fixed registry, and id-based dispatch.
//! - `sample`: grid and reproducible random points in parameter space.
//! - `api`: curated re-exports for callers that just want the boundary functions.
//!
//! Every operation is pure. `NormalizedParam` and `Viewport` are validated on
//! construction, so the engine functions themselves never fail; degenerate
//! geometry is reported as `None`.

pub mod api;
mod error;
pub mod geom2;
pub mod param;
pub mod sample;

pub use error::EngineError;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{GeomCfg, NormalLine, NormalizedParam, Point2, Segment, Viewport};
    pub use crate::param::{
        evaluate, registry, DisplayValue, DisplayValues, Frame, ParamKind, Parametrization,
        Physical,
    };
    pub use crate::EngineError;
}
