//! Integration tests for pricetag
//!
//! These tests drive full workflows through the public library API against a
//! store file in a temporary directory.

use std::fs;
use std::path::{Path, PathBuf};
use pricetag::{
    config::{PathFormat, PricetagConfig},
    commands::{file::with_tag_lines, ls::list_directory},
    db::{Color, Database, DbError, path, store},
};
use tempfile::TempDir;

/// Helper function to create a test file
fn create_test_file(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, "test content").unwrap();
    path
}

fn store_in(dir: &TempDir) -> PathBuf {
    dir.path().join(store::STORE_FILENAME)
}

#[test]
fn test_full_tagging_workflow() {
    let dir = TempDir::new().unwrap();
    let store_path = store_in(&dir);
    let a = create_test_file(dir.path(), "a.txt");
    let b = create_test_file(dir.path(), "b.txt");

    // tag new
    let mut db = store::load(&store_path).unwrap();
    db.create_tag("work", Color::Blue).unwrap();
    db.create_tag("urgent", Color::Red).unwrap();
    store::save(&db, &store_path).unwrap();

    // tag add
    let mut db = store::load(&store_path).unwrap();
    db.add_tags_to_files(&[&a, &b], &["work"]).unwrap();
    db.add_tags_to_files(&[&a], &["urgent"]).unwrap();
    store::save(&db, &store_path).unwrap();

    let db = store::load(&store_path).unwrap();
    assert_eq!(db.tags_for_file(&a).unwrap(), vec!["urgent", "work"]);
    assert_eq!(db.files_with_tag(&["urgent"]), vec![path::canonicalize(&a).unwrap()]);
    assert_eq!(db.files_with_tag(&["work"]).len(), 2);

    // tag remove, then clear
    let mut db = db;
    db.remove_tags_from_files(&[&a], &["urgent"]).unwrap();
    db.clear_files(&[&b]).unwrap();
    store::save(&db, &store_path).unwrap();

    let db = store::load(&store_path).unwrap();
    assert_eq!(db.paths().len(), 1);
    assert_eq!(db.tags_for_file(&a).unwrap(), vec!["work"]);
    assert!(db.tags_for_file(&b).unwrap().is_empty());
    assert_eq!(db.list_tags(), vec![("urgent", Color::Red), ("work", Color::Blue)]);
}

#[test]
fn test_relative_and_absolute_spellings_share_one_entry() {
    let dir = TempDir::new().unwrap();
    let sub = dir.path().join("sub");
    fs::create_dir(&sub).unwrap();
    let file = create_test_file(&sub, "f.txt");
    let roundabout = sub.join("..").join("sub").join(".").join("f.txt");

    let mut db = Database::new();
    db.create_tag("x", Color::Yellow).unwrap();
    db.add_tags_to_files(&[&file], &["x"]).unwrap();
    db.add_tags_to_files(&[&roundabout], &["x"]).unwrap();

    assert_eq!(db.paths().len(), 1);
}

#[test]
fn test_unknown_tag_leaves_store_unchanged() {
    let dir = TempDir::new().unwrap();
    let store_path = store_in(&dir);
    let a = create_test_file(dir.path(), "a.txt");

    let mut db = Database::new();
    db.create_tag("work", Color::Blue).unwrap();
    store::save(&db, &store_path).unwrap();
    let before = fs::read_to_string(&store_path).unwrap();

    let mut db = store::load(&store_path).unwrap();
    let err = db.add_tags_to_files(&[&a], &["work", "ghost"]).unwrap_err();
    assert!(matches!(err, DbError::UnknownTag(ref tag) if tag == "ghost"));
    assert!(db.paths().is_empty());

    assert_eq!(fs::read_to_string(&store_path).unwrap(), before);
}

#[test]
fn test_duplicate_tag_rejected_and_color_kept() {
    let mut db = Database::new();
    db.create_tag("work", Color::Blue).unwrap();
    let err = db.create_tag("work", Color::Red).unwrap_err();
    assert!(matches!(err, DbError::AlreadyExists(_)));
    assert_eq!(db.color_of("work"), Some(Color::Blue));
}

#[test]
fn test_corrupt_store_is_reported() {
    let dir = TempDir::new().unwrap();
    let store_path = store_in(&dir);
    fs::write(&store_path, "{ this is not json").unwrap();

    let err = store::load(&store_path).unwrap_err();
    assert!(matches!(err, DbError::CorruptStore { .. }));
}

#[test]
fn test_store_written_by_hand_is_accepted() {
    let dir = TempDir::new().unwrap();
    let store_path = store_in(&dir);
    fs::write(
        &store_path,
        r#"{
  "tags": { "work": "blue" },
  "icons": { "rs": { "icon": "R", "color": "orange" } },
  "paths": { "/tmp/example.rs": ["work"] }
}"#,
    )
    .unwrap();

    let db = store::load(&store_path).unwrap();
    assert_eq!(db.color_of("work"), Some(Color::Blue));
    assert_eq!(db.icon_for(Path::new("/tmp/example.rs")).map(|i| i.icon.as_str()), Some("R"));
    assert_eq!(db.files_with_tag(&["work"]), vec!["/tmp/example.rs"]);
}

#[test]
fn test_withtag_and_ls_render_tagged_files() {
    colored::control::set_override(false);
    let dir = TempDir::new().unwrap();
    let a = create_test_file(dir.path(), "a.md");
    create_test_file(dir.path(), "b.md");

    let mut db = Database::new();
    db.create_tag("docs", Color::Green).unwrap();
    db.set_icon(".md", "M", Color::Blue).unwrap();
    db.add_tags_to_files(&[&a], &["docs"]).unwrap();

    let config = PricetagConfig {
        path_format: PathFormat::Absolute,
        ..PricetagConfig::default()
    };

    let lines = with_tag_lines(&db, &["docs".to_string()], false, &config);
    assert_eq!(lines, vec![path::canonicalize(&a).unwrap()]);

    let listing = list_directory(&db, dir.path(), false, &config).unwrap();
    assert_eq!(listing, vec!["M a.md [docs]", "M b.md"]);
}
