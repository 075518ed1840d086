//! Staged SVG diagrams for the four Egel methods.
//!
//! Each renderer consumes a finished trace plus a validated option bag and
//! returns a [`Diagram`]: the SVG markup together with the serializable
//! layout data the markup was derived from. Rendering never re-runs or
//! alters the arithmetic.

pub mod add;
pub mod color;
pub mod div;
pub mod grid;
pub mod mul;
pub mod sub;
pub mod svg;

use crate::foundation::error::{EgelError, EgelResult};

#[derive(Clone, Debug, serde::Serialize)]
/// A rendered diagram paired with the data it was drawn from.
pub struct Diagram<D> {
    /// Complete SVG markup.
    pub svg: String,
    /// Trace and layout record behind the markup.
    pub data: D,
}

/// Serialize any trace or diagram record to a JSON value.
pub fn to_json<T: serde::Serialize>(value: &T) -> EgelResult<serde_json::Value> {
    serde_json::to_value(value).map_err(|err| EgelError::serde(err.to_string()))
}
