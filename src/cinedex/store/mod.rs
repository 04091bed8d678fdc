//! # Storage Layer
//!
//! Every operation in cinedex reads the whole catalog, works on it in memory, and (for
//! mutations) writes the whole catalog back. The [`StorageBackend`] trait is the single
//! seam for that: it knows how to `load` and `save` a [`Collection`] for one file in one
//! encoding, and nothing else. Business logic lives in `commands/`.
//!
//! ## Implementations
//!
//! - [`json_backend::JsonBackend`]: a pretty-printed JSON array of movie objects.
//! - [`csv_backend::CsvBackend`]: a header row plus one row per movie. Every cell is text,
//!   so `rating` and `year` are parsed back when loading.
//! - [`mem_backend::MemBackend`]: in-memory, for tests.
//!
//! The file backends are picked from the file suffix by [`open_backend`].
//!
//! ## Guarantees
//!
//! - A missing file loads as an empty collection, and an empty file carrying the
//!   format's schema is written in its place.
//! - A file that exists but does not parse is a [`CinedexError::Read`], never an empty
//!   collection.
//! - `save` writes to a temporary sibling file and renames it over the target, so a
//!   failed save leaves the previous file intact.
//!
//! There is no cache between calls and no locking: one process, one file.

use crate::error::{CinedexError, Result};
use crate::model::{Collection, Movie};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub mod csv_backend;
pub mod json_backend;
pub mod mem_backend;

pub use csv_backend::CsvBackend;
pub use json_backend::JsonBackend;
pub use mem_backend::MemBackend;

/// Load/save strategy for one catalog file.
pub trait StorageBackend {
    /// Read the full collection, creating an empty file if none exists yet.
    fn load(&self) -> Result<Collection>;

    /// Replace the stored collection with `movies`.
    /// MUST be all-or-nothing: a failed save leaves the previous content loadable.
    fn save(&self, movies: &[Movie]) -> Result<()>;

    /// Location of the backing file (virtual for in-memory backends).
    fn path(&self) -> &Path;
}

impl<B: StorageBackend + ?Sized> StorageBackend for Box<B> {
    fn load(&self) -> Result<Collection> {
        (**self).load()
    }

    fn save(&self, movies: &[Movie]) -> Result<()> {
        (**self).save(movies)
    }

    fn path(&self) -> &Path {
        (**self).path()
    }
}

/// On-disk encodings, keyed by file suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Csv,
}

impl Format {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Format::Json),
            "csv" => Some(Format::Csv),
            _ => None,
        }
    }
}

/// Pick the backend for `path` from its suffix.
pub fn open_backend(path: impl Into<PathBuf>) -> Result<Box<dyn StorageBackend>> {
    let path = path.into();
    match Format::from_path(&path) {
        Some(Format::Json) => Ok(Box::new(JsonBackend::new(path))),
        Some(Format::Csv) => Ok(Box::new(CsvBackend::new(path))),
        None => Err(CinedexError::UnsupportedFormat(path)),
    }
}

/// Write `contents` to a temporary sibling of `path`, then rename it into place.
pub(crate) fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if !dir.exists() {
        fs::create_dir_all(&dir).map_err(|e| CinedexError::write(path, e))?;
    }

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("catalog");
    let tmp_path = dir.join(format!(".{}-{}.tmp", file_name, Uuid::new_v4()));

    if let Err(e) = fs::write(&tmp_path, contents) {
        let _ = fs::remove_file(&tmp_path);
        return Err(CinedexError::write(path, e));
    }
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(CinedexError::write(path, e));
    }
    Ok(())
}
