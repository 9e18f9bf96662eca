//! Tag commands - define tags and attach them to files

use crate::{
    PricetagError,
    cli::TagCommands,
    config::PricetagConfig,
    db::{Color, Database},
    output,
};
use std::path::PathBuf;

type Result<T> = std::result::Result<T, PricetagError>;

/// Execute a `tag` subcommand against a loaded database
///
/// # Errors
/// Returns an error if the arguments are invalid or a database operation fails
pub fn execute(db: &mut Database, command: &TagCommands, config: &PricetagConfig) -> Result<()> {
    match command {
        TagCommands::New { name, color } => new_tag(db, name, color, config.quiet),
        TagCommands::List => {
            for line in list_lines(db, config) {
                println!("{line}");
            }
            Ok(())
        }
        TagCommands::Add { files, tags } => add(db, files, tags, config.quiet),
        TagCommands::Remove { files, tags } => remove(db, files, tags, config.quiet),
        TagCommands::Clear { files } => clear(db, files, config.quiet),
    }
}

fn new_tag(db: &mut Database, name: &str, color: &str, quiet: bool) -> Result<()> {
    let color: Color = color.parse()?;
    db.create_tag(name, color)?;
    if !quiet {
        println!("Created tag {} ({color})", output::colorize(name, color));
    }
    Ok(())
}

/// Lines printed by `tag list`
#[must_use]
pub fn list_lines(db: &Database, config: &PricetagConfig) -> Vec<String> {
    let tags = db.list_tags();

    if tags.is_empty() {
        return if config.quiet {
            Vec::new()
        } else {
            vec!["No tags defined. Create one with 'pricetag tag new <name> <color>'.".to_string()]
        };
    }

    tags.into_iter()
        .map(|(name, color)| {
            if config.quiet {
                name.to_string()
            } else {
                output::bullet(&output::colorize(name, color).to_string(), false)
            }
        })
        .collect()
}

fn add(db: &mut Database, files: &[PathBuf], tags: &[String], quiet: bool) -> Result<()> {
    if tags.is_empty() {
        return Err(PricetagError::InvalidInput("No tags specified".into()));
    }

    db.add_tags_to_files(files, tags)?;
    if !quiet {
        println!("Tagged {} file(s) with: {}", files.len(), tags.join(", "));
    }
    Ok(())
}

fn remove(db: &mut Database, files: &[PathBuf], tags: &[String], quiet: bool) -> Result<()> {
    if tags.is_empty() {
        return Err(PricetagError::InvalidInput("No tags specified".into()));
    }

    db.remove_tags_from_files(files, tags)?;
    if !quiet {
        println!("Removed tags {} from {} file(s)", tags.join(", "), files.len());
    }
    Ok(())
}

fn clear(db: &mut Database, files: &[PathBuf], quiet: bool) -> Result<()> {
    db.clear_files(files)?;
    if !quiet {
        println!("Removed all tags from {} file(s)", files.len());
    }
    Ok(())
}
