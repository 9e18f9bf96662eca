//! Command implementations
//!
//! Each command group is a module with an execute function that takes the
//! parsed CLI args and runs the operation against the loaded database.

pub mod config;
pub mod file;
pub mod ls;
pub mod tag;

// Re-export execute functions for convenience
pub use config::execute as config;
pub use file::execute as file;
pub use tag::execute as tag;
