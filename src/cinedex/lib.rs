//! # Cinedex Architecture
//!
//! Cinedex is a **personal movie catalog library**: a list of movies persisted as JSON or
//! CSV, enriched from an online metadata service, queried for statistics and rendered to a
//! static HTML page. The `cinedex` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Parses arguments, prints, prompts, sets exit codes       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Thin facade owning store, enricher and config            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - Load, resolve, mutate, save; analytics; rendering        │
//! └─────────────────────────────────────────────────────────────┘
//!                    │                          │
//!                    ▼                          ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  Storage (store/)             │ │  Enrichment (enrich.rs)   │
//! │  JSON, CSV, in-memory         │ │  metadata, country codes  │
//! └───────────────────────────────┘ └───────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never reads stdin and never
//! exits. Diagnostics go through the `log` facade; the binary decides where they end up.
//!
//! ## Title Resolution
//!
//! Delete and update address a movie by a case-sensitive substring of its title. When
//! several titles match, nothing is changed and the candidates are returned; the caller
//! then names one complete title. See [`resolve`].
//!
//! ## Module Overview
//!
//! - [`api`]: facade, entry point for every UI
//! - [`commands`]: one module per operation
//! - [`config`]: endpoints and file locations
//! - [`enrich`]: metadata and country lookups over HTTP
//! - [`error`]: the crate error type
//! - [`model`]: the `Movie` record
//! - [`resolve`]: title matching
//! - [`site`]: HTML tiles and page assembly
//! - [`store`]: storage backends
//! - [`templates`]: tile markup

pub mod api;
pub mod commands;
pub mod config;
pub mod enrich;
pub mod error;
pub mod model;
pub mod resolve;
pub mod site;
pub mod store;
pub mod templates;
