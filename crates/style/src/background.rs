//! Background image references and tiling keywords.

use crate::parsers::{self, StyleParseError};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// How a background image tiles within its element.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundRepeat {
    NoRepeat,
    Repeat,
    RepeatX,
    RepeatY,
}

/// A `url('...')` or `url(...)` image reference.
///
/// The quoting style is preserved so a value renders back exactly as it
/// was written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageUrl {
    target: Arc<str>,
    quoted: bool,
}

impl ImageUrl {
    /// Creates a single-quoted `url('...')` reference.
    pub fn new(target: impl Into<Arc<str>>) -> Self {
        Self {
            target: target.into(),
            quoted: true,
        }
    }

    /// Creates a bare `url(...)` reference.
    pub fn unquoted(target: impl Into<Arc<str>>) -> Self {
        Self {
            target: target.into(),
            quoted: false,
        }
    }

    /// Returns the referenced target, without the `url(..)` wrapper.
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.quoted {
            write!(f, "url('{}')", self.target)
        } else {
            write!(f, "url({})", self.target)
        }
    }
}

impl FromStr for ImageUrl {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parsers::run_parser(parsers::parse_url, s)
    }
}

impl Serialize for ImageUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ImageUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ImageUrlVisitor;
        impl<'de> de::Visitor<'de> for ImageUrlVisitor {
            type Value = ImageUrl;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string like \"url('image.png')\" or \"url(image.png)\"")
            }

            fn visit_str<E>(self, value: &str) -> Result<ImageUrl, E>
            where
                E: de::Error,
            {
                value.parse().map_err(E::custom)
            }
        }
        deserializer.deserialize_str(ImageUrlVisitor)
    }
}
