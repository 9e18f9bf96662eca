//! Pricetag CLI application entry point
//!
//! Loads the tag store, runs one command against it and writes it back when the
//! command changed anything.
//!
//! # Usage
//!
//! ```bash
//! # Define tags
//! pricetag tag new work blue
//! pricetag tag list
//!
//! # Attach and detach tags
//! pricetag tag add notes.md report.pdf --tags work,urgent
//! pricetag tag remove notes.md --tags urgent
//! pricetag tag clear notes.md
//!
//! # Inspect files
//! pricetag file info notes.md
//! pricetag file ls -a
//! pricetag file withtag work urgent
//! pricetag file seticon rs R orange
//!
//! # Quiet mode (only output results)
//! pricetag -q file withtag work
//! ```
//!
//! # Store location
//!
//! `./.pricetagdb.json` is used when it exists, otherwise `~/.pricetagdb.json`.
//! `--store <PATH>` or `store = "..."` in the config file select a store explicitly.

use colored::Colorize;
use pricetag::{
    PricetagError,
    cli::{Cli, Commands},
    commands,
    completions,
    config::PricetagConfig,
    db::{Database, store},
    logging,
};
use std::process::ExitCode;
use tracing::debug;

type Result<T> = std::result::Result<T, PricetagError>;

/// Load the store, run `action` on it and save it again if `mutates` is set
fn with_store<F>(config: &PricetagConfig, mutates: bool, action: F) -> Result<()>
where
    F: FnOnce(&mut Database) -> Result<()>,
{
    let store_path = match &config.store {
        Some(path) => path.clone(),
        None => store::resolve_store_location()?,
    };
    debug!(path = %store_path.display(), "using store");

    let mut db = store::load(&store_path)?;
    action(&mut db)?;

    if mutates {
        store::save(&db, &store_path)?;
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let mut config = PricetagConfig::load()?;
    config.quiet |= cli.quiet;
    if let Some(format) = cli.get_path_format() {
        config.path_format = format;
    }
    if cli.store.is_some() {
        config.store.clone_from(&cli.store);
    }

    let mutates = cli.command.mutates();
    match &cli.command {
        Commands::Tag { command } => with_store(&config, mutates, |db| commands::tag(db, command, &config)),
        Commands::File { command } => with_store(&config, mutates, |db| commands::file(db, command, &config)),
        Commands::Config { command } => commands::config(command, &config),
        Commands::Completion { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            completions::generate_static(*shell, &mut cmd, &mut std::io::stdout());
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    #[cfg(feature = "dynamic-completions")]
    completions::init_dynamic_completions(<Cli as clap::CommandFactory>::command);

    let cli = Cli::parse_args();
    logging::init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
