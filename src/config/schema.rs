//! Configuration schema definitions.
//!
//! The schema is deliberately permissive: missing fields default to empty
//! values, duplicates are allowed, and nothing validates the URLs. Whatever
//! the file says is what gets rendered.

use serde::{Deserialize, Serialize};

/// Root configuration: the ordered list of links to render.
///
/// Immutable once constructed; a reload replaces the whole value rather
/// than mutating it in place.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LinksConfig {
    /// Links in the order they appear on the page.
    pub links: Vec<Link>,
}

/// A single named link.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Link {
    /// Display name shown as the anchor text.
    pub name: String,

    /// Target URL, rendered as-is.
    pub url: String,
}
