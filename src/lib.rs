//! Pricetag - colored tags and filetype icons for files
//!
//! This library holds the tag database (tags, icons and path associations),
//! canonical path resolution, and the JSON store the database is persisted in.
//! The `pricetag` binary is a thin command layer on top of it.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod completions;
pub mod config;
pub mod db;
pub mod logging;
pub mod output;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum PricetagError {
    /// Database error
    #[error(transparent)]
    DbError(#[from] db::DbError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
