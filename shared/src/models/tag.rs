//! Tag Model (derived presentation tags)

use super::Item;
use serde::{Deserialize, Serialize};

/// Source attribute a tag was derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    Place,
    Style,
    Abv,
    Ibu,
    Usp,
}

/// Display tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: TagKind,
}

impl Tag {
    pub fn new(label: impl Into<String>, kind: TagKind) -> Self {
        Self {
            label: label.into(),
            kind,
        }
    }
}

/// Item with its derived presentation fields
///
/// Serializes flat: the stored fields plus `tagList` and `showName`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedItem {
    #[serde(flatten)]
    pub item: Item,
    pub tag_list: Vec<Tag>,
    pub show_name: String,
}
