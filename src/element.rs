//! The element record: a positioned rectangular region with optional
//! text, background, font, and opacity styling.

use crate::error::SchemaValidationError;
use placard_style::{BackgroundRepeat, Dimension, Frame, ImageUrl, Position, TextAlign};
use placard_types::ElementId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The kind of region an element renders as.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Div,
    Span,
}

impl FromStr for ElementType {
    type Err = SchemaValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "div" => Ok(ElementType::Div),
            "span" => Ok(ElementType::Span),
            _ => Err(SchemaValidationError::InvalidValue {
                property: "elementType".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// A styled rectangular UI region.
///
/// The required fields identify the element and pin it to the viewport;
/// everything else is optional styling, where absent means "not set"
/// rather than zero or empty.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub element_id: ElementId,
    pub element_name: String,
    pub element_type: ElementType,

    pub position: Position,
    pub z_index: i32,
    #[serde(flatten)]
    pub frame: Frame,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner_text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<ImageUrl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_repeat: Option<BackgroundRepeat>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
}

impl Element {
    /// Creates an element with the required fields set and every optional
    /// field unset.
    pub fn new(
        id: impl Into<ElementId>,
        name: impl Into<String>,
        element_type: ElementType,
        z_index: i32,
        frame: Frame,
    ) -> Self {
        Self {
            element_id: id.into(),
            element_name: name.into(),
            element_type,
            position: Position::Fixed,
            z_index,
            frame,
            inner_text: None,
            background_color: None,
            background_image: None,
            background_size: None,
            background_position: None,
            background_repeat: None,
            color: None,
            font_size: None,
            font_family: None,
            font_weight: None,
            text_align: None,
            opacity: None,
        }
    }

    /// Validating constructor: checks an untyped JSON record against the
    /// schema and returns the typed element, or the first violation found.
    pub fn from_value(value: serde_json::Value) -> Result<Self, SchemaValidationError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn top(&self) -> Dimension {
        self.frame.top
    }

    pub fn left(&self) -> Dimension {
        self.frame.left
    }

    pub fn width(&self) -> Dimension {
        self.frame.width
    }

    pub fn height(&self) -> Dimension {
        self.frame.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_type_from_str() {
        assert_eq!("div".parse::<ElementType>().unwrap(), ElementType::Div);
        assert_eq!("span".parse::<ElementType>().unwrap(), ElementType::Span);
        assert!("p".parse::<ElementType>().is_err());
    }

    #[test]
    fn test_new_leaves_optionals_unset() {
        let element = Element::new(
            "1",
            "A",
            ElementType::Div,
            1,
            Frame::viewport(),
        );
        assert_eq!(element.position, Position::Fixed);
        assert!(element.inner_text.is_none());
        assert!(element.background_color.is_none());
        assert!(element.background_image.is_none());
        assert!(element.text_align.is_none());
        assert!(element.opacity.is_none());
    }
}
