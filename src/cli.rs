//! Command-line interface definitions and parsing
//!
//! The whole command tree is declared here with `clap` derive types, so the
//! surface can be built and inspected (e.g. for completion scripts) without
//! running any command.
//!
//! # Commands
//!
//! - **tag**: define tags and attach/detach them (`new`, `list`, `add`, `remove`, `clear`)
//! - **file**: inspect files (`info`, `ls`, `seticon`, `withtag`)
//! - **config**: show the effective configuration
//! - **completion**: print a shell completion script
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use pricetag::cli::{Cli, Commands, TagCommands};
//!
//! let cli = Cli::parse_from(["pricetag", "tag", "add", "notes.md", "--tags", "work,urgent"]);
//! match cli.command {
//!     Commands::Tag { command: TagCommands::Add { files, tags } } => {
//!         assert_eq!(files.len(), 1);
//!         assert_eq!(tags, vec!["work", "urgent"]);
//!     }
//!     _ => unreachable!(),
//! }
//! ```

use crate::config::PathFormat;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "pricetag")]
#[command(about = "Attach colored tags and filetype icons to files", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Log debug details to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Use this store file instead of ./.pricetagdb.json or ~/.pricetagdb.json
    #[arg(long = "store", value_name = "PATH", global = true)]
    pub store: Option<PathBuf>,

    /// Display absolute paths (overrides config)
    #[arg(long = "absolute", global = true, conflicts_with = "relative")]
    pub absolute: bool,

    /// Display relative paths (overrides config)
    #[arg(long = "relative", global = true, conflicts_with = "absolute")]
    pub relative: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Manage file tags
    #[command(visible_alias = "t")]
    Tag {
        #[command(subcommand)]
        command: TagCommands,
    },

    /// Interact with files
    #[command(visible_alias = "f")]
    File {
        #[command(subcommand)]
        command: FileCommands,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate a shell completion script
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum TagCommands {
    /// Create a new tag
    New {
        /// Tag name
        name: String,

        /// One of: red, orange, yellow, green, blue, purple, white, black
        #[cfg_attr(
            feature = "dynamic-completions",
            arg(add = clap_complete::engine::ArgValueCompleter::new(crate::completions::complete_colors))
        )]
        color: String,
    },

    /// List available tags
    #[command(visible_alias = "ls")]
    List,

    /// Add tag(s) to file(s)
    #[command(alias = "tag")]
    Add {
        /// Files to tag
        #[arg(value_name = "FILE", required = true, value_hint = clap::ValueHint::AnyPath)]
        files: Vec<PathBuf>,

        /// Tags to apply (comma separated or repeated)
        #[arg(short = 't', long = "tags", value_name = "TAG", value_delimiter = ',', num_args = 1.., required = true)]
        #[cfg_attr(
            feature = "dynamic-completions",
            arg(add = clap_complete::engine::ArgValueCompleter::new(crate::completions::complete_tags))
        )]
        tags: Vec<String>,
    },

    /// Remove tag(s) from file(s)
    #[command(visible_alias = "rm")]
    Remove {
        /// Files to untag
        #[arg(value_name = "FILE", required = true, value_hint = clap::ValueHint::AnyPath)]
        files: Vec<PathBuf>,

        /// Tags to remove (comma separated or repeated)
        #[arg(short = 't', long = "tags", value_name = "TAG", value_delimiter = ',', num_args = 1.., required = true)]
        #[cfg_attr(
            feature = "dynamic-completions",
            arg(add = clap_complete::engine::ArgValueCompleter::new(crate::completions::complete_tags))
        )]
        tags: Vec<String>,
    },

    /// Remove all tags from file(s)
    Clear {
        /// Files to clear
        #[arg(value_name = "FILE", required = true, value_hint = clap::ValueHint::AnyPath)]
        files: Vec<PathBuf>,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum FileCommands {
    /// Show tags for a given file
    Info {
        #[arg(value_name = "FILE", value_hint = clap::ValueHint::AnyPath)]
        file: PathBuf,
    },

    /// List the contents of a directory, including tags
    Ls {
        /// Directory to list (defaults to the current directory)
        #[arg(value_name = "DIR", value_hint = clap::ValueHint::DirPath)]
        dir: Option<PathBuf>,

        /// Show hidden files
        #[arg(short = 'a', long = "all")]
        all: bool,
    },

    /// Set the icon and color shown for an extension in `file ls`
    #[command(name = "seticon")]
    SetIcon {
        /// File extension, with or without the leading dot
        extension: String,

        /// Glyph to display
        icon: String,

        /// One of: red, orange, yellow, green, blue, purple, white, black
        #[cfg_attr(
            feature = "dynamic-completions",
            arg(add = clap_complete::engine::ArgValueCompleter::new(crate::completions::complete_colors))
        )]
        color: String,
    },

    /// List all files with the specified tag(s)
    #[command(name = "withtag")]
    WithTag {
        /// Tags to look for
        #[arg(value_name = "TAG", required = true)]
        #[cfg_attr(
            feature = "dynamic-completions",
            arg(add = clap_complete::engine::ArgValueCompleter::new(crate::completions::complete_tags))
        )]
        tags: Vec<String>,

        /// Only list files carrying ALL of the tags (default is ANY)
        #[arg(long = "all")]
        all: bool,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the location of the config file
    Path,
}

impl Commands {
    /// Whether the command changes the database and must save it afterwards
    #[must_use]
    pub const fn mutates(&self) -> bool {
        matches!(
            self,
            Self::Tag {
                command: TagCommands::New { .. }
                    | TagCommands::Add { .. }
                    | TagCommands::Remove { .. }
                    | TagCommands::Clear { .. }
            } | Self::File {
                command: FileCommands::SetIcon { .. }
            }
        )
    }
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Helper method to get the path format override from global flags
    #[must_use]
    pub const fn get_path_format(&self) -> Option<PathFormat> {
        if self.absolute {
            Some(PathFormat::Absolute)
        } else if self.relative {
            Some(PathFormat::Relative)
        } else {
            None
        }
    }
}
