//! Directory listing with icons and tag chips

use crate::{
    PricetagError,
    config::PricetagConfig,
    db::{Color, Database, path},
    output,
};
use std::fs;
use std::path::Path;
use tracing::debug;

type Result<T> = std::result::Result<T, PricetagError>;

/// Render the entries of `dir`, one line per entry
///
/// Directories come first, then files; each group is sorted by name. A symlink
/// is listed with the files even when it points at a directory. Entries
/// starting with `.` are skipped unless `show_hidden` is set. Files show the
/// icon registered for their extension followed by their tags as `[tag]` chips.
///
/// # Errors
/// Returns `PricetagError::InvalidInput` if `dir` cannot be read
pub fn list_directory(
    db: &Database,
    dir: &Path,
    show_hidden: bool,
    config: &PricetagConfig,
) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir)
        .map_err(|e| PricetagError::InvalidInput(format!("Cannot read directory {}: {e}", dir.display())))?;

    let mut dirs = Vec::new();
    let mut files = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!(dir = %dir.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };
        let name = entry.file_name().to_string_lossy().into_owned();
        if !show_hidden && name.starts_with('.') {
            continue;
        }
        let entry_path = entry.path();
        if entry.file_type().is_ok_and(|kind| kind.is_dir()) {
            dirs.push(name);
        } else {
            files.push((name, entry_path));
        }
    }
    dirs.sort();
    files.sort_by(|a, b| a.0.cmp(&b.0));

    let mut lines: Vec<String> = dirs
        .iter()
        .map(|name| output::colorize(&format!("{} {name}", output::DIR_ICON), Color::Blue).to_string())
        .collect();
    lines.extend(files.iter().map(|(name, entry_path)| file_line(db, name, entry_path, config)));
    Ok(lines)
}

fn file_line(db: &Database, name: &str, entry_path: &Path, config: &PricetagConfig) -> String {
    let label = match db.icon_for(entry_path) {
        Some(icon) => output::colorize(&format!("{} {name}", icon.icon), icon.color),
        None => output::colorize(name, Color::White),
    };

    let tags = match path::canonicalize(entry_path) {
        Ok(key) => db.tags_for_key(&key),
        Err(e) => {
            debug!(path = %entry_path.display(), error = %e, "skipping tags");
            None
        }
    };

    match tags.filter(|tags| !tags.is_empty()) {
        Some(tags) => format!("{label} {}", output::tag_chips(db, tags.iter(), config.fallback_color)),
        None => label.to_string(),
    }
}
