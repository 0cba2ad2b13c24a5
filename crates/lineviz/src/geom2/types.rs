//! Basic image-space and parameter-space types.
//!
//! - `GeomCfg`: centralizes the empirical tolerances used by clipping and by the
//!   near-vertical special case.
//! - `Viewport`: validated rendering surface size, with centered-frame helpers.
//! - `NormalizedParam`: validated point of the unit parameter square.
//! - `Segment`: undirected line segment in absolute pixel coordinates.

use nalgebra::Vector2;

use crate::EngineError;

/// Image-space point (pixels, y pointing down).
pub type Point2 = Vector2<f64>;

/// Trig values at or below this magnitude are treated as zero when intersecting edges.
pub const EPS_TRIG: f64 = 1e-6;
/// Candidate intersections closer than this (per coordinate) are the same point.
pub const EPS_DEDUP: f64 = 1e-6;
/// Slopes steeper than this are drawn as an exact vertical.
pub const NEAR_VERTICAL_SLOPE: f64 = 1000.0;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub eps_trig: f64,
    pub eps_dedup: f64,
    pub near_vertical_slope: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_trig: EPS_TRIG,
            eps_dedup: EPS_DEDUP,
            near_vertical_slope: NEAR_VERTICAL_SLOPE,
        }
    }
}

/// Size of the image-space rendering surface.
///
/// Invariant: both dimensions are finite and strictly positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 640.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Result<Self, EngineError> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(EngineError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }
    /// `(W/2, H/2)`, the extent of the centered frame in each direction.
    #[inline]
    pub fn half_extents(&self) -> Vector2<f64> {
        Vector2::new(self.width / 2.0, self.height / 2.0)
    }
    #[inline]
    pub fn center(&self) -> Point2 {
        self.half_extents()
    }
    /// Distance from the center to a corner; the largest |ρ| a Hough line can have
    /// and still touch the viewport.
    #[inline]
    pub fn half_diagonal(&self) -> f64 {
        self.half_extents().norm()
    }
    #[inline]
    pub fn to_centered(&self, p: Point2) -> Point2 {
        p - self.center()
    }
    #[inline]
    pub fn from_centered(&self, p: Point2) -> Point2 {
        p + self.center()
    }
    pub fn contains_eps(&self, p: Point2, eps: f64) -> bool {
        p.x >= -eps && p.x <= self.width + eps && p.y >= -eps && p.y <= self.height + eps
    }
    /// True if `p` lies on one of the four edges (within `eps`).
    pub fn on_boundary_eps(&self, p: Point2, eps: f64) -> bool {
        self.contains_eps(p, eps)
            && (p.x.abs() <= eps
                || (p.x - self.width).abs() <= eps
                || p.y.abs() <= eps
                || (p.y - self.height).abs() <= eps)
    }
}

/// A point of the unit parameter square.
///
/// Invariant: `0 <= x <= 1` and `0 <= y <= 1`; NaN is never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizedParam {
    x: f64,
    y: f64,
}

impl Default for NormalizedParam {
    fn default() -> Self {
        Self::CENTER
    }
}

impl NormalizedParam {
    /// Center of parameter space.
    pub const CENTER: NormalizedParam = NormalizedParam { x: 0.5, y: 0.5 };

    /// Strict constructor: rejects anything outside [0, 1].
    pub fn new(x: f64, y: f64) -> Result<Self, EngineError> {
        Ok(Self {
            x: check_unit('x', x)?,
            y: check_unit('y', y)?,
        })
    }

    /// Input-adapter constructor: clamps into [0, 1]; only NaN is rejected.
    pub fn clamped(x: f64, y: f64) -> Result<Self, EngineError> {
        if x.is_nan() {
            return Err(EngineError::OutOfDomain { axis: 'x', value: x });
        }
        if y.is_nan() {
            return Err(EngineError::OutOfDomain { axis: 'y', value: y });
        }
        Ok(Self {
            x: x.clamp(0.0, 1.0),
            y: y.clamp(0.0, 1.0),
        })
    }

    /// Map a pointer position inside the rectangle `origin + [0, size]` to a
    /// clamped normalized point. Positions outside the rectangle stick to its edge.
    pub fn from_pointer(
        pointer: Point2,
        origin: Point2,
        size: Vector2<f64>,
    ) -> Result<Self, EngineError> {
        let rect = Viewport::new(size.x, size.y)?;
        let rel = pointer - origin;
        Self::clamped(rel.x / rect.width(), rel.y / rect.height())
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }
    #[inline]
    pub fn as_vector(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

fn check_unit(axis: char, value: f64) -> Result<f64, EngineError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(EngineError::OutOfDomain { axis, value })
    }
}

/// Undirected segment in absolute image-space coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Point2,
    pub b: Point2,
}

impl Segment {
    #[inline]
    pub fn new(a: Point2, b: Point2) -> Self {
        Self { a, b }
    }
    #[inline]
    pub fn length(&self) -> f64 {
        (self.b - self.a).norm()
    }
    #[inline]
    pub fn midpoint(&self) -> Point2 {
        (self.a + self.b) * 0.5
    }
    /// Distance from `p` to the closest point of the segment.
    pub fn distance_to(&self, p: Point2) -> f64 {
        let ab = self.b - self.a;
        let len2 = ab.norm_squared();
        if len2 == 0.0 {
            return (p - self.a).norm();
        }
        let t = ((p - self.a).dot(&ab) / len2).clamp(0.0, 1.0);
        (p - (self.a + ab * t)).norm()
    }
    /// Equality up to `eps` per endpoint, ignoring endpoint order.
    pub fn approx_eq_undirected(&self, other: &Segment, eps: f64) -> bool {
        let close = |p: Point2, q: Point2| (p - q).amax() <= eps;
        (close(self.a, other.a) && close(self.b, other.b))
            || (close(self.a, other.b) && close(self.b, other.a))
    }
}
