//! The content set: an ordered, immutable sequence of elements with
//! unique ids, plus the built-in set baked into the library.

use crate::element::{Element, ElementType};
use crate::error::SchemaValidationError;
use once_cell::sync::Lazy;
use placard_style::Frame;
use placard_types::ElementId;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::HashMap;
use std::ops::Index;

/// An ordered set of elements. Once built it is read-only; there is no
/// insertion, mutation, or removal.
#[derive(Debug, Clone, Default)]
pub struct Content {
    elements: Vec<Element>,
    by_id: HashMap<ElementId, usize>,
}

impl Content {
    /// Builds a content set, rejecting duplicate element ids.
    pub fn new(elements: Vec<Element>) -> Result<Self, SchemaValidationError> {
        let mut by_id = HashMap::with_capacity(elements.len());
        for (idx, element) in elements.iter().enumerate() {
            if by_id.insert(element.element_id.clone(), idx).is_some() {
                return Err(SchemaValidationError::DuplicateElementId(
                    element.element_id.clone(),
                ));
            }
        }
        Ok(Self { elements, by_id })
    }

    /// Loads a content set from a JSON array of element records.
    pub fn from_json_str(json: &str) -> Result<Self, SchemaValidationError> {
        let elements: Vec<Element> = serde_json::from_str(json)?;
        log::debug!("Loaded {} element(s) from JSON content", elements.len());
        Self::new(elements)
    }

    /// Loads a content set from an already-parsed JSON value.
    pub fn from_json_value(value: Value) -> Result<Self, SchemaValidationError> {
        let elements: Vec<Element> = serde_json::from_value(value)?;
        Self::new(elements)
    }

    /// Returns the built-in content set shipped with the library.
    ///
    /// Initialized once; safe to read from any thread.
    pub fn builtin() -> &'static Content {
        &BUILTIN
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    /// Looks up an element by its id.
    pub fn get(&self, id: &ElementId) -> Option<&Element> {
        self.by_id.get(id).map(|&idx| &self.elements[idx])
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}

impl Index<usize> for Content {
    type Output = Element;

    fn index(&self, index: usize) -> &Element {
        &self.elements[index]
    }
}

impl<'a> IntoIterator for &'a Content {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl Serialize for Content {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.elements.serialize(serializer)
    }
}

/// The single full-viewport backdrop element shipped as built-in content.
static BUILTIN: Lazy<Content> = Lazy::new(|| {
    let mut backdrop = Element::new(
        "678451367",
        "Element 1",
        ElementType::Div,
        1,
        Frame::viewport(),
    );
    backdrop.background_color = Some("#000".to_string());
    Content::new(vec![backdrop]).expect("built-in content has unique ids")
});
