//! Value types stored in the tag database
//!
//! This module provides the small, strongly-typed values that make up a
//! [`Database`](super::Database): tag colors, filetype icons and the set of
//! tag names attached to a single path.
//!
//! # Types
//!
//! - **`Color`**: The fixed palette a tag or icon may use
//! - **`FiletypeIcon`**: Display glyph and color for a file extension
//! - **`TagSet`**: Deduplicated, ordered set of tag names, persisted as a JSON array
//!
//! # Examples
//!
//! ```
//! use pricetag::db::types::{Color, TagSet};
//!
//! let color: Color = "blue".parse().unwrap();
//! assert_eq!(color, Color::Blue);
//!
//! let mut set = TagSet::default();
//! set.insert("work");
//! set.insert("work");
//! assert_eq!(set.len(), 1);
//! ```

use super::error::DbError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Color a tag or filetype icon is rendered with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    #[default]
    White,
    Black,
}

impl Color {
    /// Every color, in palette order
    pub const ALL: [Self; 8] = [
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Purple,
        Self::White,
        Self::Black,
    ];

    /// Lowercase name, as written in the store
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::White => "white",
            Self::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = DbError;

    /// Parses a color name. Matching is case-insensitive and ignores
    /// surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::ALL.iter().map(|c| c.as_str()).collect();
                DbError::InvalidInput(format!(
                    "invalid color '{s}' (expected one of: {})",
                    valid.join(", ")
                ))
            })
    }
}

/// Glyph and color shown for files with a given extension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiletypeIcon {
    pub icon: String,
    pub color: Color,
}

impl FiletypeIcon {
    #[must_use]
    pub fn new(icon: impl Into<String>, color: Color) -> Self {
        Self {
            icon: icon.into(),
            color,
        }
    }
}

/// Set of tag names attached to one path
///
/// Stored as a `BTreeSet` so membership, union and difference are cheap and
/// iteration order is stable. Serializes as a plain JSON array; duplicates in
/// a loaded array collapse on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(BTreeSet<String>);

impl TagSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tag, returning `false` if it was already present
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        self.0.insert(tag.into())
    }

    /// Remove a tag, returning `true` if it was present
    pub fn remove(&mut self, tag: &str) -> bool {
        self.0.remove(tag)
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Tags in sorted order
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> Extend<S> for TagSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
