use serde::{Deserialize, Serialize};

/// Placement scheme for an element.
///
/// Every element is pinned to the viewport; flow layout is not part of
/// the schema, so `fixed` is the only accepted keyword.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum Position {
    #[default]
    Fixed,
}
