//! Defines the unified error type for schema validation.

use placard_style::StyleParseError;
use placard_types::ElementId;
use thiserror::Error;

/// The single failure kind for this crate: a candidate record that does
/// not conform to the element schema.
///
/// There is no recovery or retry path; validation happens once, at the
/// point a record is constructed or parsed.
#[derive(Error, Debug)]
pub enum SchemaValidationError {
    #[error("Style value error: {0}")]
    Style(#[from] StyleParseError),

    #[error("JSON shape error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },

    #[error("Duplicate element id: '{0}'")]
    DuplicateElementId(ElementId),
}
