//! Output formatting for CLI display
//!
//! This module provides utilities for formatting output in the CLI,
//! including path display formatting and colorized tags and file names.

use crate::config::PathFormat;
use crate::db::{Color, Database};
use colored::{ColoredString, Colorize};
use std::path::Path;

/// Glyph shown in front of directories in `file ls`
pub const DIR_ICON: &str = "\u{f07b}";

/// Paint `text` in a tag color
#[must_use]
pub fn colorize(text: &str, color: Color) -> ColoredString {
    match color {
        Color::Red => text.red(),
        Color::Orange => text.bright_yellow(),
        Color::Yellow => text.yellow(),
        Color::Green => text.green(),
        Color::Blue => text.blue(),
        Color::Purple => text.magenta(),
        Color::White => text.white(),
        Color::Black => text.black(),
    }
}

/// Format a path according to the display mode
#[must_use]
pub fn format_path(path: &Path, format: PathFormat) -> String {
    match format {
        PathFormat::Absolute => path.display().to_string(),
        PathFormat::Relative => {
            if let Ok(cwd) = std::env::current_dir()
                && let Ok(rel_path) = path.strip_prefix(&cwd)
            {
                return rel_path.display().to_string();
            }
            // Fallback to absolute if relative path cannot be computed
            path.display().to_string()
        }
    }
}

/// A tag name painted in its color, e.g. for `tag list` and `file info`
#[must_use]
pub fn tag_label(db: &Database, tag: &str, fallback: Color) -> String {
    colorize(tag, db.color_or(tag, fallback)).to_string()
}

/// Tags rendered as `[tag]` chips, each in its own color
///
/// `tags` is expected to be sorted already.
#[must_use]
pub fn tag_chips<'a>(db: &Database, tags: impl IntoIterator<Item = &'a str>, fallback: Color) -> String {
    tags.into_iter()
        .map(|tag| colorize(&format!("[{tag}]"), db.color_or(tag, fallback)).to_string())
        .collect()
}

/// One line of a bulleted list
#[must_use]
pub fn bullet(text: &str, quiet: bool) -> String {
    if quiet {
        text.to_string()
    } else {
        format!("  • {text}")
    }
}
