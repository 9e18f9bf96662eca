//! Tag database for pricetag
//!
//! Provides the in-memory model of the store and the set-like operations on
//! it: defining tags, attaching and detaching them from files, and querying
//! files by tag.
//!
//! The model holds three maps:
//! - `tags`: tag name -> color
//! - `icons`: file extension -> display glyph and color
//! - `paths`: canonical path -> set of tag names
//!
//! Path arguments are always passed through [`path::canonicalize`] before they
//! touch `paths`, and a path whose tag set becomes empty is removed rather than
//! stored with no tags.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::warn;

pub mod error;
pub mod path;
pub mod store;
pub mod types;

pub use error::DbError;
pub use types::{Color, FiletypeIcon, TagSet};

/// The tag database
///
/// Loaded once per command with [`store::load`], mutated in memory, and
/// written back with [`store::save`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Database {
    #[serde(default, deserialize_with = "null_as_default")]
    tags: BTreeMap<String, Color>,
    #[serde(default, deserialize_with = "null_as_default")]
    icons: BTreeMap<String, FiletypeIcon>,
    #[serde(default, deserialize_with = "null_as_default")]
    paths: BTreeMap<String, TagSet>,
}

/// Treat an explicit `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Database {
    /// Create an empty database
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All defined tags and their colors
    #[must_use]
    pub const fn tags(&self) -> &BTreeMap<String, Color> {
        &self.tags
    }

    /// All filetype icons keyed by extension
    #[must_use]
    pub const fn icons(&self) -> &BTreeMap<String, FiletypeIcon> {
        &self.icons
    }

    /// All tagged paths keyed by canonical path
    #[must_use]
    pub const fn paths(&self) -> &BTreeMap<String, TagSet> {
        &self.paths
    }

    /// Color of a tag, if it is defined
    #[must_use]
    pub fn color_of(&self, tag: &str) -> Option<Color> {
        self.tags.get(tag).copied()
    }

    /// Color of a tag, or `fallback` if the tag was removed from `tags`
    #[must_use]
    pub fn color_or(&self, tag: &str, fallback: Color) -> Color {
        self.color_of(tag).unwrap_or_else(|| {
            warn!(tag, "tag referenced by a path is not defined, using fallback color");
            fallback
        })
    }

    /// Define a new tag
    ///
    /// # Errors
    ///
    /// Returns `DbError::InvalidInput` if `name` is empty, and
    /// `DbError::AlreadyExists` if a tag with that name is already defined.
    /// An existing tag is never overwritten.
    pub fn create_tag(&mut self, name: &str, color: Color) -> Result<(), DbError> {
        if name.is_empty() {
            return Err(DbError::InvalidInput("tag name cannot be empty".into()));
        }
        if self.tags.contains_key(name) {
            return Err(DbError::AlreadyExists(name.to_string()));
        }
        self.tags.insert(name.to_string(), color);
        Ok(())
    }

    /// Define or replace the icon shown for files with extension `ext`
    ///
    /// A leading `.` on `ext` is ignored and extensions match case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `DbError::InvalidInput` if the extension is empty.
    pub fn set_icon(&mut self, ext: &str, icon: &str, color: Color) -> Result<(), DbError> {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        if ext.is_empty() {
            return Err(DbError::InvalidInput("extension cannot be empty".into()));
        }
        self.icons.insert(ext.to_lowercase(), FiletypeIcon::new(icon, color));
        Ok(())
    }

    /// Icon registered for the extension of `path`
    #[must_use]
    pub fn icon_for(&self, path: &Path) -> Option<&FiletypeIcon> {
        let ext = path.extension()?.to_str()?;
        self.icons.get(&ext.to_lowercase())
    }

    /// Attach `tags` to every file in `files`
    ///
    /// All tags must already be defined and all files must resolve before
    /// anything is changed; on error the database is left untouched. Adding a
    /// tag a file already carries is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `DbError::InvalidInput` if `tags` is empty or a file argument is
    /// empty, `DbError::UnknownTag` for the first tag that is not defined, and
    /// `DbError::PathResolution` if a file cannot be canonicalized.
    pub fn add_tags_to_files<P, T>(&mut self, files: &[P], tags: &[T]) -> Result<(), DbError>
    where
        P: AsRef<Path>,
        T: AsRef<str>,
    {
        if tags.is_empty() {
            return Err(DbError::InvalidInput("no tags specified".into()));
        }
        if let Some(missing) = tags.iter().map(|t| t.as_ref()).find(|t| !self.tags.contains_key(*t)) {
            return Err(DbError::UnknownTag(missing.to_string()));
        }
        let keys = resolve_all(files)?;

        for key in keys {
            self.paths
                .entry(key)
                .or_default()
                .extend(tags.iter().map(|t| t.as_ref()));
        }
        Ok(())
    }

    /// Detach `tags` from every file in `files`
    ///
    /// Files with no entry are skipped, tags a file does not carry are ignored,
    /// and a file left with no tags is dropped from the database.
    ///
    /// # Errors
    ///
    /// Returns `DbError::InvalidInput` for an empty file argument and
    /// `DbError::PathResolution` if a file cannot be canonicalized. Nothing is
    /// changed on error.
    pub fn remove_tags_from_files<P, T>(&mut self, files: &[P], tags: &[T]) -> Result<(), DbError>
    where
        P: AsRef<Path>,
        T: AsRef<str>,
    {
        let keys = resolve_all(files)?;

        for key in keys {
            let Some(set) = self.paths.get_mut(&key) else {
                continue;
            };
            for tag in tags {
                set.remove(tag.as_ref());
            }
            if set.is_empty() {
                self.paths.remove(&key);
            }
        }
        Ok(())
    }

    /// Remove every tag from every file in `files`
    ///
    /// Files with no entry are not an error.
    ///
    /// # Errors
    ///
    /// Returns `DbError::InvalidInput` for an empty file argument and
    /// `DbError::PathResolution` if a file cannot be canonicalized. Nothing is
    /// changed on error.
    pub fn clear_files<P: AsRef<Path>>(&mut self, files: &[P]) -> Result<(), DbError> {
        let keys = resolve_all(files)?;
        for key in keys {
            self.paths.remove(&key);
        }
        Ok(())
    }

    /// Files carrying ANY of `tags`, sorted
    ///
    /// Tags that are not defined simply match nothing.
    #[must_use]
    pub fn files_with_tag<T: AsRef<str>>(&self, tags: &[T]) -> Vec<&str> {
        self.paths
            .iter()
            .filter(|(_, set)| tags.iter().any(|t| set.contains(t.as_ref())))
            .map(|(file, _)| file.as_str())
            .collect()
    }

    /// Files carrying ALL of `tags`, sorted
    ///
    /// An empty `tags` slice matches nothing.
    #[must_use]
    pub fn files_with_all_tags<T: AsRef<str>>(&self, tags: &[T]) -> Vec<&str> {
        if tags.is_empty() {
            return Vec::new();
        }
        self.paths
            .iter()
            .filter(|(_, set)| tags.iter().all(|t| set.contains(t.as_ref())))
            .map(|(file, _)| file.as_str())
            .collect()
    }

    /// All defined tags with their colors, sorted by name
    #[must_use]
    pub fn list_tags(&self) -> Vec<(&str, Color)> {
        self.tags.iter().map(|(name, color)| (name.as_str(), *color)).collect()
    }

    /// Tags attached to `file`, sorted
    ///
    /// Returns an empty vector for a file with no entry.
    ///
    /// # Errors
    ///
    /// Returns `DbError::PathResolution` if `file` cannot be canonicalized.
    pub fn tags_for_file<P: AsRef<Path>>(&self, file: P) -> Result<Vec<String>, DbError> {
        let key = path::canonicalize(file)?;
        Ok(self.paths.get(&key).map(TagSet::to_vec).unwrap_or_default())
    }

    /// Tags attached to an already-canonical key
    #[must_use]
    pub fn tags_for_key(&self, key: &str) -> Option<&TagSet> {
        self.paths.get(key)
    }

    pub(crate) fn prune_empty_paths(&mut self) {
        self.paths.retain(|_, set| !set.is_empty());
    }
}

/// Canonicalize every file up front so a failure leaves no partial batch
fn resolve_all<P: AsRef<Path>>(files: &[P]) -> Result<Vec<String>, DbError> {
    files
        .iter()
        .map(|file| {
            let file = file.as_ref();
            if file.as_os_str().is_empty() {
                return Err(DbError::InvalidInput("file path cannot be empty".into()));
            }
            path::canonicalize(file)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    // Helper function to create a test file inside a temp dir
    fn create_test_file(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, b"test content").unwrap();
        path
    }

    fn key(path: &Path) -> String {
        path::canonicalize(path).unwrap()
    }

    fn db_with_tags(tags: &[(&str, Color)]) -> Database {
        let mut db = Database::new();
        for (name, color) in tags {
            db.create_tag(name, *color).unwrap();
        }
        db
    }

    #[test]
    fn test_new_database_is_empty() {
        let db = Database::new();
        assert!(db.tags().is_empty());
        assert!(db.icons().is_empty());
        assert!(db.paths().is_empty());
    }

    #[test]
    fn test_create_tag() {
        let mut db = Database::new();
        db.create_tag("work", Color::Blue).unwrap();
        assert_eq!(db.color_of("work"), Some(Color::Blue));
    }

    #[test]
    fn test_create_tag_empty_name_fails() {
        let mut db = Database::new();
        let err = db.create_tag("", Color::Red).unwrap_err();
        assert!(matches!(err, DbError::InvalidInput(_)));
        assert!(db.tags().is_empty());
    }

    #[test]
    fn test_create_duplicate_tag_keeps_original_color() {
        let mut db = db_with_tags(&[("work", Color::Blue)]);
        let err = db.create_tag("work", Color::Red).unwrap_err();
        assert!(matches!(err, DbError::AlreadyExists(ref name) if name == "work"));
        assert_eq!(db.color_of("work"), Some(Color::Blue));
    }

    #[test]
    fn test_add_tags_to_files() {
        let dir = TempDir::new().unwrap();
        let a = create_test_file(&dir, "a.txt");
        let b = create_test_file(&dir, "b.txt");
        let mut db = db_with_tags(&[("work", Color::Blue), ("home", Color::Green)]);

        db.add_tags_to_files(&[&a, &b], &["work"]).unwrap();
        db.add_tags_to_files(&[&a], &["home"]).unwrap();

        assert_eq!(db.tags_for_file(&a).unwrap(), vec!["home", "work"]);
        assert_eq!(db.tags_for_file(&b).unwrap(), vec!["work"]);
    }

    #[test]
    fn test_add_tags_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let a = create_test_file(&dir, "a.txt");
        let mut db = db_with_tags(&[("work", Color::Blue)]);

        db.add_tags_to_files(&[&a], &["work"]).unwrap();
        db.add_tags_to_files(&[&a], &["work", "work"]).unwrap();

        assert_eq!(db.tags_for_file(&a).unwrap(), vec!["work"]);
    }

    #[test]
    fn test_add_unknown_tag_fails_without_mutation() {
        let dir = TempDir::new().unwrap();
        let a = create_test_file(&dir, "a.txt");
        let mut db = db_with_tags(&[("home", Color::Green)]);

        let err = db.add_tags_to_files(&[&a], &["home", "work"]).unwrap_err();
        assert!(matches!(err, DbError::UnknownTag(ref t) if t == "work"));
        assert!(db.paths().is_empty());
    }

    #[test]
    fn test_add_with_no_tags_fails() {
        let dir = TempDir::new().unwrap();
        let a = create_test_file(&dir, "a.txt");
        let mut db = Database::new();

        let err = db.add_tags_to_files::<_, &str>(&[&a], &[]).unwrap_err();
        assert!(matches!(err, DbError::InvalidInput(_)));
        assert!(db.paths().is_empty());
    }

    #[test]
    fn test_add_batch_with_bad_path_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let a = create_test_file(&dir, "a.txt");
        let mut db = db_with_tags(&[("work", Color::Blue)]);

        let files = [a.clone(), PathBuf::new()];
        let err = db.add_tags_to_files(&files, &["work"]).unwrap_err();
        assert!(matches!(err, DbError::InvalidInput(_)));
        assert!(db.paths().is_empty());
    }

    #[test]
    fn test_add_tags_to_missing_file_uses_absolute_key() {
        let dir = TempDir::new().unwrap();
        let ghost = dir.path().join("not-yet.txt");
        let mut db = db_with_tags(&[("todo", Color::Yellow)]);

        db.add_tags_to_files(&[&ghost], &["todo"]).unwrap();
        assert!(db.paths().contains_key(&key(&ghost)));
    }

    #[test]
    fn test_same_file_different_spellings_share_entry() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        let a = create_test_file(&dir, "a.txt");
        let roundabout = dir.path().join("sub").join("..").join("a.txt");
        let mut db = db_with_tags(&[("x", Color::Red), ("y", Color::Blue)]);

        db.add_tags_to_files(&[&a], &["x"]).unwrap();
        db.add_tags_to_files(&[&roundabout], &["y"]).unwrap();

        assert_eq!(db.paths().len(), 1);
        assert_eq!(db.tags_for_file(&a).unwrap(), vec!["x", "y"]);
    }

    #[test]
    fn test_remove_last_tag_drops_entry() {
        let dir = TempDir::new().unwrap();
        let a = create_test_file(&dir, "a.txt");
        let mut db = db_with_tags(&[("work", Color::Blue)]);
        db.add_tags_to_files(&[&a], &["work"]).unwrap();

        db.remove_tags_from_files(&[&a], &["work"]).unwrap();

        assert!(!db.paths().contains_key(&key(&a)));
        assert!(db.paths().is_empty());
    }

    #[test]
    fn test_remove_some_tags_keeps_rest() {
        let dir = TempDir::new().unwrap();
        let a = create_test_file(&dir, "a.txt");
        let mut db = db_with_tags(&[("t1", Color::Red), ("t2", Color::Blue), ("t3", Color::Green)]);
        db.add_tags_to_files(&[&a], &["t1", "t2", "t3"]).unwrap();

        db.remove_tags_from_files(&[&a], &["t1", "t3", "never-attached"]).unwrap();

        assert_eq!(db.tags_for_file(&a).unwrap(), vec!["t2"]);
    }

    #[test]
    fn test_remove_from_untagged_file_is_noop() {
        let dir = TempDir::new().unwrap();
        let a = create_test_file(&dir, "a.txt");
        let mut db = db_with_tags(&[("work", Color::Blue)]);
        let before = db.clone();

        db.remove_tags_from_files(&[&a], &["work"]).unwrap();
        assert_eq!(db, before);
    }

    #[test]
    fn test_clear_files() {
        let dir = TempDir::new().unwrap();
        let a = create_test_file(&dir, "a.txt");
        let b = create_test_file(&dir, "b.txt");
        let mut db = db_with_tags(&[("work", Color::Blue), ("home", Color::Green)]);
        db.add_tags_to_files(&[&a, &b], &["work", "home"]).unwrap();

        db.clear_files(&[&a]).unwrap();

        assert!(db.tags_for_file(&a).unwrap().is_empty());
        assert_eq!(db.tags_for_file(&b).unwrap(), vec!["home", "work"]);
    }

    #[test]
    fn test_clear_untagged_file_is_noop() {
        let dir = TempDir::new().unwrap();
        let a = create_test_file(&dir, "a.txt");
        let mut db = db_with_tags(&[("work", Color::Blue)]);
        let before = db.clone();

        db.clear_files(&[&a]).unwrap();
        assert_eq!(db, before);
    }

    #[test]
    fn test_files_with_tag_any() {
        let dir = TempDir::new().unwrap();
        let a = create_test_file(&dir, "a.txt");
        let b = create_test_file(&dir, "b.txt");
        let c = create_test_file(&dir, "c.txt");
        let mut db = db_with_tags(&[("rust", Color::Orange), ("docs", Color::Blue), ("old", Color::Black)]);
        db.add_tags_to_files(&[&a], &["rust"]).unwrap();
        db.add_tags_to_files(&[&b], &["rust", "docs"]).unwrap();
        db.add_tags_to_files(&[&c], &["old"]).unwrap();
        let before = db.clone();

        let files = db.files_with_tag(&["docs", "rust"]);
        assert_eq!(files, vec![key(&a).as_str(), key(&b).as_str()]);
        assert_eq!(db, before);
    }

    #[test]
    fn test_files_with_tag_unknown_matches_nothing() {
        let dir = TempDir::new().unwrap();
        let a = create_test_file(&dir, "a.txt");
        let mut db = db_with_tags(&[("rust", Color::Orange)]);
        db.add_tags_to_files(&[&a], &["rust"]).unwrap();

        assert!(db.files_with_tag(&["python"]).is_empty());
    }

    #[test]
    fn test_files_with_all_tags() {
        let dir = TempDir::new().unwrap();
        let a = create_test_file(&dir, "a.txt");
        let b = create_test_file(&dir, "b.txt");
        let mut db = db_with_tags(&[("rust", Color::Orange), ("docs", Color::Blue)]);
        db.add_tags_to_files(&[&a], &["rust"]).unwrap();
        db.add_tags_to_files(&[&b], &["rust", "docs"]).unwrap();

        assert_eq!(db.files_with_all_tags(&["rust", "docs"]), vec![key(&b).as_str()]);
        assert!(db.files_with_all_tags::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_list_tags_sorted() {
        let db = db_with_tags(&[("zeta", Color::Red), ("alpha", Color::Purple)]);
        assert_eq!(db.list_tags(), vec![("alpha", Color::Purple), ("zeta", Color::Red)]);
    }

    #[test]
    fn test_color_or_falls_back_for_missing_tag() {
        let db = db_with_tags(&[("work", Color::Blue)]);
        assert_eq!(db.color_or("work", Color::White), Color::Blue);
        assert_eq!(db.color_or("deleted", Color::White), Color::White);
    }

    #[test]
    fn test_set_icon_strips_dot_and_overwrites() {
        let mut db = Database::new();
        db.set_icon(".rs", "R", Color::Orange).unwrap();
        db.set_icon("rs", "", Color::Red).unwrap();

        assert_eq!(db.icons().len(), 1);
        assert_eq!(db.icon_for(Path::new("/src/main.rs")), Some(&FiletypeIcon::new("", Color::Red)));
        assert_eq!(db.icon_for(Path::new("/src/Makefile")), None);

        db.set_icon("MD", "M", Color::Blue).unwrap();
        assert_eq!(db.icon_for(Path::new("README.md")).map(|i| i.color), Some(Color::Blue));
        assert_eq!(db.icon_for(Path::new("NOTES.Md")).map(|i| i.color), Some(Color::Blue));
    }

    #[test]
    fn test_set_icon_empty_extension_fails() {
        let mut db = Database::new();
        assert!(matches!(db.set_icon(".", "x", Color::Red), Err(DbError::InvalidInput(_))));
        assert!(db.icons().is_empty());
    }

    #[test]
    fn test_deserialize_missing_maps() {
        let db: Database = serde_json::from_str("{}").unwrap();
        assert_eq!(db, Database::new());
    }
}
