use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CinedexError {
    #[error("Could not read {}: {reason}", path.display())]
    Read { path: PathBuf, reason: String },

    #[error("Could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Enrichment failed: {0}")]
    Enrichment(String),

    #[error("The movie list is empty")]
    EmptyCollection,

    #[error("Render failed: {0}")]
    Render(String),

    #[error("Unsupported storage format: {} (expected .json or .csv)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Config error: {0}")]
    Config(String),
}

impl CinedexError {
    pub(crate) fn read(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        CinedexError::Read {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CinedexError::Write {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CinedexError>;
