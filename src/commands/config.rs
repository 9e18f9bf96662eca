//! Config command - inspect the effective configuration

use crate::{PricetagError, cli::ConfigCommands, config::PricetagConfig};

/// Execute a `config` subcommand
///
/// # Errors
/// Returns an error if the config location is unknown or the config cannot be rendered
pub fn execute(command: &ConfigCommands, config: &PricetagConfig) -> Result<(), PricetagError> {
    match command {
        ConfigCommands::Show => print!("{}", config.to_toml()?),
        ConfigCommands::Path => println!("{}", PricetagConfig::config_path()?.display()),
    }
    Ok(())
}
