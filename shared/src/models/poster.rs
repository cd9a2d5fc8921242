//! Poster Model (records of the `posters` collection)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Poster slot
///
/// `Movie` is a single fixed slot whose image is swapped in place;
/// `Activity` posters form an appendable list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PosterKind {
    Movie,
    Activity,
}

impl PosterKind {
    pub const ALL: [PosterKind; 2] = [PosterKind::Movie, PosterKind::Activity];

    pub fn as_str(&self) -> &'static str {
        match self {
            PosterKind::Movie => "movie",
            PosterKind::Activity => "activity",
        }
    }
}

impl fmt::Display for PosterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Poster entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poster {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: PosterKind,
    /// Public image URL, empty when the slot is cleared
    #[serde(default)]
    pub img: String,
}

impl Poster {
    pub fn has_image(&self) -> bool {
        !self.img.is_empty()
    }
}
