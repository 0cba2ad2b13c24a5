use std::fmt;

/// Errors surfaced at the engine boundary.
///
/// Only input validation and registry lookups can fail. Geometry that does not
/// meet the viewport is a regular `None` result, not an error.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineError {
    /// No parametrization is registered under this identifier.
    UnknownParametrization { id: String },
    /// A normalized coordinate is NaN or lies outside [0, 1].
    OutOfDomain { axis: char, value: f64 },
    /// Viewport (or pointer rectangle) size is non-finite or non-positive.
    InvalidViewport { width: f64, height: f64 },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::UnknownParametrization { id } => {
                write!(f, "unknown parametrization '{id}'")
            }
            EngineError::OutOfDomain { axis, value } => {
                write!(f, "normalized {axis} = {value} is outside [0, 1]")
            }
            EngineError::InvalidViewport { width, height } => write!(
                f,
                "viewport {width}x{height} must have finite, positive dimensions"
            ),
        }
    }
}

impl std::error::Error for EngineError {}
