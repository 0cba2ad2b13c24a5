//! Fixed registry of parametrizations, keyed by identifier.
//!
//! The set is closed at compile time (`ParamKind::ALL`); there is no runtime
//! registration or removal.

use super::{ParamKind, Parametrization};
use crate::EngineError;

/// Selector entry: identifier and display name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParamEntry {
    pub id: &'static str,
    pub name: &'static str,
}

/// All registered parametrizations, in registration order.
pub fn list() -> Vec<ParamEntry> {
    ParamKind::ALL
        .iter()
        .map(|k| ParamEntry {
            id: k.id(),
            name: k.name(),
        })
        .collect()
}

/// Resolve an identifier; unknown ids fail instead of falling back to a default.
pub fn lookup(id: &str) -> Result<ParamKind, EngineError> {
    ParamKind::from_id(id)
}
