//! Data models for Launchdeck
//!
//! Defines the single core data structure: [`Link`], one launcher tile.

use serde::{Deserialize, Serialize};

/// A launcher entry
///
/// The `id` is supplied by the client; uniqueness is not enforced. The three
/// optional display fields are omitted from serialized output when unset so
/// the on-disk document only carries what the client sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Link {
    /// Client-supplied identifier
    pub id: String,
    /// Display label
    pub name: String,
    /// Target address
    pub url: String,
    /// Tile color (e.g. "#ffffff")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Longer description shown on hover
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Emoji shown on the tile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

impl Link {
    /// Create a new link with the given id, name, and URL
    pub fn new(id: impl Into<String>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: url.into(),
            color: None,
            description: None,
            emoji: None,
        }
    }
}
