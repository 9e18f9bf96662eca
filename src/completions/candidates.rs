//! Completion candidates
//!
//! Colors are static. Tag names come from a loaded [`Database`].

use super::Candidate;
use crate::db::{Color, Database};

/// Maximum number of candidates handed back to the shell
const MAX_CANDIDATES: usize = 50;

/// Every valid color
#[must_use]
pub fn color_candidates() -> Vec<Candidate> {
    Color::ALL.iter().map(|c| Candidate::new(c.as_str())).collect()
}

/// Defined tag names matching what the user has typed so far
///
/// Prefix matches come first, followed by substring matches; comparison is
/// case-insensitive. Each candidate carries the tag color as help text.
#[must_use]
pub fn tag_candidates(db: &Database, current: &str) -> Vec<Candidate> {
    let current_lower = current.to_lowercase();

    let (mut prefix, mut inner): (Vec<_>, Vec<_>) = db
        .list_tags()
        .into_iter()
        .filter(|(name, _)| name.to_lowercase().contains(&current_lower))
        .partition(|(name, _)| name.to_lowercase().starts_with(&current_lower));

    prefix.append(&mut inner);
    prefix
        .into_iter()
        .take(MAX_CANDIDATES)
        .map(|(name, color)| Candidate::new(name).with_help(color.as_str()))
        .collect()
}
