//! Canonical path keys
//!
//! Every read and write into the `paths` map goes through [`canonicalize`], so a
//! file is stored under the same key no matter how it was spelled on the
//! command line (`~/a.txt`, `./a.txt`, `dir/../a.txt`, a symlink to it, ...).
//!
//! Resolution steps:
//! 1. An empty input maps to an empty output.
//! 2. A leading `~` (alone or followed by a separator) is replaced by the home directory.
//! 3. The path is made absolute against the current directory and `.`/`..` are collapsed.
//! 4. Symlinks are resolved when the path exists; otherwise the absolute path is kept.

use super::error::DbError;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Resolve a user-supplied path to its canonical key
///
/// # Errors
///
/// Returns `DbError::PathResolution` if the path starts with `~` and the home
/// directory cannot be determined, if the current directory is unavailable,
/// or if the result is not valid UTF-8.
pub fn canonicalize<P: AsRef<Path>>(input: P) -> Result<String, DbError> {
    canonicalize_with_home(input.as_ref(), dirs::home_dir)
}

pub(crate) fn canonicalize_with_home<F>(input: &Path, home: F) -> Result<String, DbError>
where
    F: FnOnce() -> Option<PathBuf>,
{
    if input.as_os_str().is_empty() {
        return Ok(String::new());
    }

    let original = input.display().to_string();
    let expanded = expand_home(input, home)?;

    let absolute = std::path::absolute(&expanded)
        .map_err(|e| DbError::path_resolution(&original, e))?;
    let normalized = normalize(&absolute);

    let resolved = match fs::canonicalize(&normalized) {
        Ok(real) => real,
        Err(e) => {
            debug!(
                path = %normalized.display(),
                error = %e,
                "symlink resolution failed, keeping absolute path"
            );
            normalized
        }
    };

    resolved
        .into_os_string()
        .into_string()
        .map_err(|_| DbError::path_resolution(original, "path is not valid UTF-8"))
}

/// Replace a leading `~` with the home directory
fn expand_home<F>(input: &Path, home: F) -> Result<PathBuf, DbError>
where
    F: FnOnce() -> Option<PathBuf>,
{
    let mut components = input.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => {
            let home = home().ok_or_else(|| {
                DbError::path_resolution(
                    input.display().to_string(),
                    "could not determine home directory",
                )
            })?;
            Ok(home.join(components.as_path()))
        }
        _ => Ok(input.to_path_buf()),
    }
}

/// Lexically collapse `.` and `..` segments and redundant separators
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(part) => out.push(part),
        }
    }
    out
}
