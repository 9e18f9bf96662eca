//! File commands - inspect tagged files and configure filetype icons

use crate::{
    PricetagError,
    cli::FileCommands,
    commands::ls,
    config::PricetagConfig,
    db::{Color, Database, path},
    output,
};
use std::path::{Path, PathBuf};
use tracing::warn;

type Result<T> = std::result::Result<T, PricetagError>;

/// Execute a `file` subcommand against a loaded database
///
/// # Errors
/// Returns an error if a path cannot be resolved, a color is invalid, or a
/// directory cannot be read
pub fn execute(db: &mut Database, command: &FileCommands, config: &PricetagConfig) -> Result<()> {
    let lines = match command {
        FileCommands::Info { file } => info_lines(db, file, config)?,
        FileCommands::Ls { dir, all } => {
            let dir = match dir {
                Some(dir) => dir.clone(),
                None => std::env::current_dir()?,
            };
            ls::list_directory(db, &dir, *all || config.show_hidden, config)?
        }
        FileCommands::SetIcon { extension, icon, color } => {
            set_icon(db, extension, icon, color, config.quiet)?;
            return Ok(());
        }
        FileCommands::WithTag { tags, all } => with_tag_lines(db, tags, *all, config),
    };

    for line in lines {
        println!("{line}");
    }
    Ok(())
}

/// Lines printed by `file info`
///
/// # Errors
/// Returns an error if `file` cannot be resolved
pub fn info_lines(db: &Database, file: &Path, config: &PricetagConfig) -> Result<Vec<String>> {
    let key = path::canonicalize(file)?;
    let shown = output::format_path(Path::new(&key), config.path_format);
    let tags = db.tags_for_key(&key);

    let Some(tags) = tags.filter(|tags| !tags.is_empty()) else {
        return Ok(if config.quiet {
            Vec::new()
        } else {
            vec![format!("{shown} has no tags")]
        });
    };

    let mut lines = Vec::with_capacity(tags.len() + 1);
    if !config.quiet {
        lines.push(format!("Tags for {shown}:"));
    }
    lines.extend(
        tags.iter()
            .map(|tag| output::bullet(&output::tag_label(db, tag, config.fallback_color), config.quiet)),
    );
    Ok(lines)
}

fn set_icon(db: &mut Database, extension: &str, icon: &str, color: &str, quiet: bool) -> Result<()> {
    let color: Color = color.parse()?;
    db.set_icon(extension, icon, color)?;
    if !quiet {
        let ext = extension.trim_start_matches('.').to_lowercase();
        println!("Set icon for .{ext} -> {} ({color})", output::colorize(icon, color));
    }
    Ok(())
}

/// Lines printed by `file withtag`
///
/// With `all` only files carrying every tag are listed, otherwise files
/// carrying any of them. Each path is painted in the color of the first
/// queried tag it carries.
#[must_use]
pub fn with_tag_lines(db: &Database, tags: &[String], all: bool, config: &PricetagConfig) -> Vec<String> {
    for tag in tags.iter().filter(|tag| db.color_of(tag).is_none()) {
        warn!(tag = %tag, "queried tag is not defined");
    }

    let files = if all {
        db.files_with_all_tags(tags)
    } else {
        db.files_with_tag(tags)
    };

    if files.is_empty() {
        return if config.quiet {
            Vec::new()
        } else {
            vec!["No files found with the specified tag(s)".to_string()]
        };
    }

    files
        .into_iter()
        .map(|file| {
            let shown = output::format_path(&PathBuf::from(file), config.path_format);
            let color = db
                .tags_for_key(file)
                .and_then(|carried| tags.iter().find(|tag| carried.contains(tag)))
                .map_or(config.fallback_color, |tag| db.color_or(tag, config.fallback_color));
            output::colorize(&shown, color).to_string()
        })
        .collect()
}
