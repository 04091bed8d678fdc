//! # Command Layer
//!
//! Each operation on the catalog lives in its own submodule as a plain `run` function
//! over a [`StorageBackend`](crate::store::StorageBackend). Every run loads the catalog
//! fresh; mutations modify the loaded collection in memory and save it whole.
//!
//! Commands never print, prompt or exit. Title ambiguity is returned as
//! [`MutationOutcome::Ambiguous`] and the caller decides how to ask for the complete
//! title (see `delete::run_exact` and `update::run_exact`).
//!
//! A mutation that fails to enrich or to resolve its title does not save, so the backing
//! file stays byte-for-byte unchanged.
//!
//! ## Command Modules
//!
//! - [`add`]: enrich a title and append it
//! - [`delete`]: remove one movie by title
//! - [`update`]: set the note of one movie by title
//! - [`list`]: the whole catalog in stored order
//! - [`stats`]: best, worst, mean and median rating
//! - [`random`]: one movie picked uniformly
//! - [`search`]: case-insensitive title search
//! - [`sorted`]: movies by rating, best first
//! - [`website`]: render the static HTML page

use crate::model::Movie;
use serde::Serialize;

pub mod add;
pub mod delete;
mod helpers;
pub mod list;
pub mod random;
pub mod search;
pub mod sorted;
pub mod stats;
pub mod update;
pub mod website;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Result of a title-addressed mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    /// The change was saved; carries the movie as removed or as updated.
    Applied(Movie),
    /// Nothing matched; nothing was saved.
    NotFound { query: String },
    /// Several titles matched; nothing was saved. Call the `run_exact` variant with
    /// one of `candidates`.
    Ambiguous {
        query: String,
        candidates: Vec<String>,
    },
}

pub type DeletionOutcome = MutationOutcome;
pub type UpdateOutcome = MutationOutcome;

impl MutationOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, MutationOutcome::Applied(_))
    }

    /// The movie a successful mutation touched.
    pub fn applied(&self) -> Option<&Movie> {
        match self {
            MutationOutcome::Applied(movie) => Some(movie),
            _ => None,
        }
    }

    pub fn candidates(&self) -> &[String] {
        match self {
            MutationOutcome::Ambiguous { candidates, .. } => candidates,
            _ => &[],
        }
    }

    fn not_found_message(query: &str) -> CmdMessage {
        CmdMessage::error(format!(
            "Error: The movie \"{}\" does not exist in the movie list.",
            query
        ))
    }

    fn ambiguous_message(query: &str, candidates: &[String]) -> CmdMessage {
        CmdMessage::warning(format!(
            "{} movies with \"{}\" found: {}",
            candidates.len(),
            query,
            candidates.join(", ")
        ))
    }
}
