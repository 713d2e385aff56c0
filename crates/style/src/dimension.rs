//! Defines primitives for size and placement.
use crate::parsers::{self, StyleParseError};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Unit suffix of a dimension value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Px,
    Rem,
    Percent,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Rem => "rem",
            Unit::Percent => "%",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A numeric magnitude with a unit suffix, e.g. `"0px"`, `"1.5rem"`, `"100%"`.
///
/// The textual form is the canonical one: a number immediately followed by
/// its unit, no whitespace in between and no bare numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimension {
    pub value: f32,
    pub unit: Unit,
}

impl Dimension {
    pub fn new(value: f32, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub fn px(value: f32) -> Self {
        Self::new(value, Unit::Px)
    }

    pub fn rem(value: f32) -> Self {
        Self::new(value, Unit::Rem)
    }

    pub fn percent(value: f32) -> Self {
        Self::new(value, Unit::Percent)
    }
}

impl Hash for Dimension {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.to_bits().hash(state);
        self.unit.hash(state);
    }
}

impl Eq for Dimension {}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.as_str())
    }
}

impl FromStr for Dimension {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parsers::run_parser(parsers::parse_dimension, s)
    }
}

impl Serialize for Dimension {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Dimension {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DimensionVisitor;
        impl<'de> de::Visitor<'de> for DimensionVisitor {
            type Value = Dimension;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string like '0px', '1.5rem', or '100%'")
            }

            fn visit_str<E>(self, value: &str) -> Result<Dimension, E>
            where
                E: de::Error,
            {
                value.parse().map_err(E::custom)
            }
        }
        deserializer.deserialize_str(DimensionVisitor)
    }
}

/// The four required placement fields of an element.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
    pub top: Dimension,
    pub left: Dimension,
    pub width: Dimension,
    pub height: Dimension,
}

impl Frame {
    pub fn new(top: Dimension, left: Dimension, width: Dimension, height: Dimension) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Full-viewport frame anchored at the origin.
    pub fn viewport() -> Self {
        Self::new(
            Dimension::px(0.0),
            Dimension::px(0.0),
            Dimension::percent(100.0),
            Dimension::percent(100.0),
        )
    }
}
