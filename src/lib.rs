//! # placard
//!
//! Typed content model for fixed-position overlay elements.
//!
//! This crate provides the schema for a positioned rectangular UI region
//! and the read-only content set built from it:
//! - **types**: semantic identifier newtypes (`placard-types`)
//! - **style**: dimension, url, and keyword value types with validating
//!   parsers (`placard-style`)
//! - **element**: the element record and its wire format
//! - **content**: the ordered element set and the built-in content constant
//! - **error**: the schema-validation error type
//!
//! Every pattern-constrained value (`"100%"`, `"url('bg.png')"`) is parsed
//! at the point of construction; a record that does not conform to the
//! schema fails with [`SchemaValidationError`] instead of being accepted
//! silently.

// Re-export foundation crates
pub use placard_style as style;
pub use placard_types as types;

pub mod content;
pub mod element;
pub mod error;

// Re-export commonly used types from foundation crates
pub use style::{
    BackgroundRepeat, Dimension, Frame, ImageUrl, Position, StyleParseError, TextAlign, Unit,
};
pub use types::ElementId;

// Re-export from internal modules
pub use content::Content;
pub use element::{Element, ElementType};
pub use error::SchemaValidationError;
