//! Shell completion support for pricetag
//!
//! - **Static completions** (always available): subcommands, flags and path hints,
//!   generated as a script by `pricetag completion <shell>`
//! - **Dynamic completions** (behind the `dynamic-completions` feature): tag
//!   names from the live store and the color palette

mod candidates;
mod completers;
mod traits;

pub use candidates::*;
pub use completers::*;
pub use traits::*;

use clap::Command;
use clap_complete::Shell;
use std::io::Write;

/// Generate a static shell completion script
pub fn generate_static<W: Write>(shell: Shell, cmd: &mut Command, buf: &mut W) {
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, cmd, name, buf);
}

/// Handle a completion request from the shell, if this process is one
///
/// Call at the start of `main()` before argument parsing. Exits the process
/// when the `COMPLETE` environment variable is set.
#[cfg(feature = "dynamic-completions")]
pub fn init_dynamic_completions<F: Fn() -> Command>(factory: F) {
    clap_complete::CompleteEnv::with_factory(factory).complete();
}

/// `ArgValueCompleter` entry point for tag arguments
#[cfg(feature = "dynamic-completions")]
pub fn complete_tags(current: &std::ffi::OsStr) -> Vec<clap_complete::engine::CompletionCandidate> {
    run_completer(&TagCompleter::default(), current)
}

/// `ArgValueCompleter` entry point for color arguments
#[cfg(feature = "dynamic-completions")]
pub fn complete_colors(current: &std::ffi::OsStr) -> Vec<clap_complete::engine::CompletionCandidate> {
    run_completer(&ColorCompleter, current)
}
