//! Dynamic completion implementations
//!
//! These completers read the live store for context-aware suggestions. The
//! store is a small JSON file, so it is loaded directly on each request.

use super::candidates::{color_candidates, tag_candidates};
use super::traits::{Candidate, DynamicCompleter};
use crate::db::{Database, store};
use std::path::PathBuf;

/// Complete tag names from the store
///
/// Uses the same store lookup as normal commands unless an explicit path is set.
#[derive(Debug, Default)]
pub struct TagCompleter {
    store: Option<PathBuf>,
}

impl TagCompleter {
    #[must_use]
    pub const fn with_store(store: PathBuf) -> Self {
        Self { store: Some(store) }
    }

    fn load(&self) -> Option<Database> {
        let path = match &self.store {
            Some(path) => path.clone(),
            None => store::resolve_store_location().ok()?,
        };
        store::load(path).ok()
    }
}

impl DynamicCompleter for TagCompleter {
    fn complete(&self, typed: &str) -> Vec<Candidate> {
        self.load()
            .map(|db| tag_candidates(&db, typed))
            .unwrap_or_default()
    }
}

/// Complete color names
#[derive(Debug, Default)]
pub struct ColorCompleter;

impl DynamicCompleter for ColorCompleter {
    fn complete(&self, typed: &str) -> Vec<Candidate> {
        let typed = typed.to_lowercase();
        color_candidates()
            .into_iter()
            .filter(|c| c.value.starts_with(&typed))
            .collect()
    }
}
