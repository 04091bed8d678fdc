//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for catalog
//! operations, whatever the UI.
//!
//! The facade:
//! - **Dispatches** to the matching `commands::*::run`
//! - **Owns** the storage backend, the enrichment client and the configuration
//! - **Returns structured types**, never printed text
//!
//! It does no business logic and no console I/O. Resolving an ambiguous title is a two
//! call protocol: `delete`/`update` return
//! [`MutationOutcome::Ambiguous`](crate::commands::MutationOutcome::Ambiguous) and the caller
//! follows up with `delete_exact`/`update_exact`.
//!
//! ## Generic Over Backends
//!
//! `CinedexApi<S, E>` is generic over the [`StorageBackend`] and the enrichment client:
//! - Production: `CinedexApi<Box<dyn StorageBackend>, HttpEnricher>`
//! - Testing: `CinedexApi<MemBackend, StubEnricher>`

use crate::commands::{self, stats::Statistics, DeletionOutcome, UpdateOutcome};
use crate::config::CinedexConfig;
use crate::enrich::{CountryLookup, MetadataProvider};
use crate::error::Result;
use crate::model::{Collection, Movie};
use crate::store::StorageBackend;
use std::path::PathBuf;

pub struct CinedexApi<S, E> {
    store: S,
    enricher: E,
    config: CinedexConfig,
}

impl<S, E> CinedexApi<S, E>
where
    S: StorageBackend,
    E: MetadataProvider + CountryLookup,
{
    pub fn new(store: S, enricher: E, config: CinedexConfig) -> Self {
        Self {
            store,
            enricher,
            config,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &CinedexConfig {
        &self.config
    }

    pub fn list(&self) -> Result<Collection> {
        commands::list::run(&self.store)
    }

    pub fn add(&self, title: &str) -> Result<Movie> {
        commands::add::run(&self.store, &self.enricher, title)
    }

    pub fn delete(&self, query: &str) -> Result<DeletionOutcome> {
        commands::delete::run(&self.store, query)
    }

    pub fn delete_exact(&self, title: &str) -> Result<DeletionOutcome> {
        commands::delete::run_exact(&self.store, title)
    }

    pub fn update(&self, query: &str, note: &str) -> Result<UpdateOutcome> {
        commands::update::run(&self.store, query, note)
    }

    pub fn update_exact(&self, title: &str, note: &str) -> Result<UpdateOutcome> {
        commands::update::run_exact(&self.store, title, note)
    }

    pub fn stats(&self) -> Result<Statistics> {
        commands::stats::run(&self.store)
    }

    pub fn random(&self) -> Result<Movie> {
        commands::random::run(&self.store)
    }

    pub fn search(&self, keyword: &str) -> Result<Collection> {
        commands::search::run(&self.store, keyword)
    }

    pub fn sorted_by_rating(&self) -> Result<Collection> {
        commands::sorted::run(&self.store)
    }

    pub fn generate_website(&self) -> Result<PathBuf> {
        commands::website::run(&self.store, &self.enricher, &self.config)
    }
}
