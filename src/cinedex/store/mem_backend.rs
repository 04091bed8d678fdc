use super::StorageBackend;
use crate::error::{CinedexError, Result};
use crate::model::{Collection, Movie};
use std::cell::{Cell, RefCell};
use std::io;
use std::path::{Path, PathBuf};

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since cinedex is single-threaded, which keeps
/// the `StorageBackend` trait on `&self`.
pub struct MemBackend {
    movies: RefCell<Collection>,
    path: PathBuf,
    saves: Cell<usize>,
    simulate_write_error: Cell<bool>,
    simulate_read_error: Cell<bool>,
}

impl Default for MemBackend {
    fn default() -> Self {
        Self {
            movies: RefCell::new(Vec::new()),
            path: PathBuf::from("memory://movies"),
            saves: Cell::new(0),
            simulate_write_error: Cell::new(false),
            simulate_read_error: Cell::new(false),
        }
    }
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_movies(movies: Collection) -> Self {
        let backend = Self::default();
        *backend.movies.borrow_mut() = movies;
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Enable read error simulation, as if the stored data were corrupt.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.set(simulate);
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    /// Snapshot of the stored collection without going through `load`.
    pub fn snapshot(&self) -> Collection {
        self.movies.borrow().clone()
    }
}

impl StorageBackend for MemBackend {
    fn load(&self) -> Result<Collection> {
        if self.simulate_read_error.get() {
            return Err(CinedexError::read(&self.path, "Simulated read error"));
        }
        Ok(self.movies.borrow().clone())
    }

    fn save(&self, movies: &[Movie]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(CinedexError::write(
                &self.path,
                io::Error::other("Simulated write error"),
            ));
        }
        *self.movies.borrow_mut() = movies.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
