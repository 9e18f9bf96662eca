//! JSON store persistence
//!
//! The whole database lives in a single JSON document. It is read once when a
//! command starts and written back in full when the command finishes. There is
//! no locking; two concurrent invocations race and the later save wins.
//!
//! The store location is `./.pricetagdb.json` when that file exists in the
//! current directory, and `~/.pricetagdb.json` otherwise.

use super::Database;
use super::error::DbError;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the store, both directory-local and in the home directory
pub const STORE_FILENAME: &str = ".pricetagdb.json";

/// Locate the store for the current invocation
///
/// # Errors
///
/// Returns `DbError::PathResolution` if the current directory cannot be read,
/// or if no local store exists and the home directory cannot be determined.
pub fn resolve_store_location() -> Result<PathBuf, DbError> {
    let cwd = std::env::current_dir()
        .map_err(|e| DbError::path_resolution(".", e))?;
    resolve_store_location_from(&cwd, dirs::home_dir())
}

/// Locate the store given an explicit working directory and home directory
///
/// A store in `cwd` takes precedence; the two are never merged.
///
/// # Errors
///
/// Returns `DbError::PathResolution` if there is no local store and `home` is `None`.
pub fn resolve_store_location_from(cwd: &Path, home: Option<PathBuf>) -> Result<PathBuf, DbError> {
    let local = cwd.join(STORE_FILENAME);
    if local.is_file() {
        debug!(path = %local.display(), "using directory-local store");
        return Ok(local);
    }

    let home = home.ok_or_else(|| {
        DbError::path_resolution(STORE_FILENAME, "could not determine home directory")
    })?;
    let global = home.join(STORE_FILENAME);
    debug!(path = %global.display(), "using home store");
    Ok(global)
}

/// Load the database stored at `path`
///
/// A missing file yields an empty database. Top-level maps that are absent or
/// `null` in the document load as empty maps, and path entries with no tags are
/// dropped.
///
/// # Errors
///
/// Returns `DbError::StoreRead` if the file exists but cannot be read, and
/// `DbError::CorruptStore` if its contents do not parse.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Database, DbError> {
    let path = path.as_ref();

    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "store not found, starting empty");
            return Ok(Database::new());
        }
        Err(source) => {
            return Err(DbError::StoreRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let mut db: Database = serde_json::from_slice(&data).map_err(|source| DbError::CorruptStore {
        path: path.to_path_buf(),
        source,
    })?;
    db.prune_empty_paths();

    debug!(
        path = %path.display(),
        tags = db.tags().len(),
        icons = db.icons().len(),
        paths = db.paths().len(),
        "loaded store"
    );
    Ok(db)
}

/// Write the database to `path`, replacing any existing content
///
/// The document is written to a fresh temporary file in the same directory and
/// then renamed over the target, so a failed write never leaves a truncated
/// store behind. When `path` is a symlink the file it points to is replaced
/// and the link itself is kept.
///
/// # Errors
///
/// Returns `DbError::StoreWrite` if serialization, the write, or the rename fails.
pub fn save<P: AsRef<Path>>(db: &Database, path: P) -> Result<(), DbError> {
    let path = path.as_ref();
    let write_err = |source: io::Error| DbError::StoreWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut data = serde_json::to_vec_pretty(db).map_err(|e| write_err(io::Error::other(e)))?;
    data.push(b'\n');

    let target = write_target(path);
    let (mut file, tmp) = create_temp_file(&target).map_err(write_err)?;
    let written = file.write_all(&data).and_then(|()| file.sync_all());
    drop(file);
    let result = written.and_then(|()| fs::rename(&tmp, &target));

    if let Err(e) = result {
        let _ = fs::remove_file(&tmp);
        return Err(write_err(e));
    }

    debug!(path = %target.display(), bytes = data.len(), "saved store");
    Ok(())
}

const MAX_TEMP_ATTEMPTS: u32 = 64;

/// The file a save to `path` must replace
///
/// A symlink is followed to its target, even when that target does not exist
/// yet; anything else is written in place.
fn write_target(path: &Path) -> PathBuf {
    let is_link = fs::symlink_metadata(path).is_ok_and(|meta| meta.file_type().is_symlink());
    if !is_link {
        return path.to_path_buf();
    }

    if let Ok(real) = fs::canonicalize(path) {
        return real;
    }
    match fs::read_link(path) {
        Ok(link) => match path.parent() {
            Some(parent) => parent.join(link),
            None => link,
        },
        Err(_) => path.to_path_buf(),
    }
}

/// Create a uniquely named temporary file next to `target`
///
/// Names follow `.<name>.tmp.<pid>.<attempt>` and are opened with `create_new`,
/// so concurrent saves never share a temporary file.
fn create_temp_file(target: &Path) -> io::Result<(fs::File, PathBuf)> {
    let name = target
        .file_name()
        .map_or_else(|| STORE_FILENAME.into(), |n| n.to_string_lossy().into_owned());

    for attempt in 0..MAX_TEMP_ATTEMPTS {
        let tmp = target.with_file_name(format!(".{name}.tmp.{}.{attempt}", std::process::id()));
        match fs::OpenOptions::new().write(true).create_new(true).open(&tmp) {
            Ok(file) => return Ok((file, tmp)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {}
            Err(e) => return Err(e),
        }
    }
    Err(io::Error::new(
        io::ErrorKind::AlreadyExists,
        "could not create a unique temporary file",
    ))
}
