//! Static metadata and display labels.
//!
//! `AxisDescriptor` is not just presentation metadata: strategies derive their
//! physical values through `map_x`/`map_y`, so the axis ranges shown to the user
//! and the values used for geometry come from the same numbers.

/// Human-readable description shown next to the visualization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Description {
    pub overview: &'static str,
    pub parameters: &'static [&'static str],
    pub equations: &'static [&'static str],
    /// Empty when a parametrization has nothing to add.
    pub notes: &'static [&'static str],
}

/// Parameter-space axes: label and semantic range of each normalized axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisDescriptor {
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub x_range: [f64; 2],
    pub y_range: [f64; 2],
}

impl AxisDescriptor {
    /// Normalized x ∈ [0,1] → semantic value in `x_range`.
    #[inline]
    pub fn map_x(&self, t: f64) -> f64 {
        lerp(self.x_range, t)
    }
    #[inline]
    pub fn map_y(&self, t: f64) -> f64 {
        lerp(self.y_range, t)
    }
    /// Semantic x → normalized position (not clamped).
    #[inline]
    pub fn unmap_x(&self, v: f64) -> f64 {
        unlerp(self.x_range, v)
    }
    #[inline]
    pub fn unmap_y(&self, v: f64) -> f64 {
        unlerp(self.y_range, v)
    }
}

#[inline]
fn lerp([lo, hi]: [f64; 2], t: f64) -> f64 {
    lo + t * (hi - lo)
}

#[inline]
fn unlerp([lo, hi]: [f64; 2], v: f64) -> f64 {
    (v - lo) / (hi - lo)
}

/// One labelled physical value, already formatted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayValue {
    pub label: &'static str,
    pub value: String,
}

/// The two physical parameters of the current line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayValues {
    pub primary: DisplayValue,
    pub secondary: DisplayValue,
}

/// Fixed-point formatting that never prints a negative zero.
pub(crate) fn fixed(value: f64, decimals: usize) -> String {
    let scale = 10f64.powi(decimals as i32);
    let rounded = (value * scale).round() / scale;
    // -0.0 == 0.0, so this also folds the sign of a rounded-away negative.
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded:.decimals$}")
}
