use super::{write_atomic, StorageBackend};
use crate::error::{CinedexError, Result};
use crate::model::{Collection, Movie};
use log::debug;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::{Path, PathBuf};

/// Stores the catalog as a JSON array of movie objects.
pub struct JsonBackend {
    path: PathBuf,
}

impl JsonBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn encode(&self, movies: &[Movie]) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = Serializer::with_formatter(&mut buf, formatter);
        movies
            .serialize(&mut ser)
            .map_err(|e| CinedexError::write(&self.path, e.into()))?;
        Ok(buf)
    }
}

impl StorageBackend for JsonBackend {
    fn load(&self) -> Result<Collection> {
        if !self.path.exists() {
            debug!("{} does not exist, creating it", self.path.display());
            self.save(&[])?;
            return Ok(Vec::new());
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| CinedexError::read(&self.path, e))?;
        let movies: Collection =
            serde_json::from_str(&content).map_err(|e| CinedexError::read(&self.path, e))?;
        debug!("loaded {} movies from {}", movies.len(), self.path.display());
        Ok(movies)
    }

    fn save(&self, movies: &[Movie]) -> Result<()> {
        let content = self.encode(movies)?;
        write_atomic(&self.path, &content)?;
        debug!("saved {} movies to {}", movies.len(), self.path.display());
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
