//! # Configuration
//!
//! Loaded with [`confique`], layered in priority order:
//! 1. **Environment variables**: `CINEDEX_API_KEY`, `CINEDEX_DATA_FILE`.
//! 2. **Config file**: `config.toml` in the config directory, when present.
//! 3. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! The loaded value is passed explicitly to the enrichment client and the site renderer.

use crate::error::{CinedexError, Result};
use confique::Config;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.toml";

/// Endpoints and file locations.
#[derive(Config, Debug, Clone, PartialEq, Eq)]
pub struct CinedexConfig {
    /// Movie metadata service, queried with `?apikey=..&t=<title>`
    #[config(default = "http://www.omdbapi.com/")]
    pub metadata_endpoint: String,

    #[config(env = "CINEDEX_API_KEY")]
    pub metadata_api_key: Option<String>,

    /// Country lookup service, the country name is appended to it
    #[config(default = "https://restcountries.com/v3.1/name/")]
    pub country_endpoint: String,

    /// Flag image service, `<CODE>/shiny/24.png` is appended to it
    #[config(default = "https://flagsapi.com/")]
    pub flag_endpoint: String,

    /// Movie detail pages, the external id is appended to it
    #[config(default = "https://www.imdb.com/title/")]
    pub detail_page_base: String,

    #[config(default = "build.html")]
    pub output_path: PathBuf,

    #[config(default = "_static/index_template.html")]
    pub template_path: PathBuf,

    #[config(default = 10)]
    pub request_timeout_secs: u64,

    /// Catalog file; its suffix (.json or .csv) selects the storage format
    #[config(env = "CINEDEX_DATA_FILE", default = "movies.json")]
    pub data_file: PathBuf,
}

impl Default for CinedexConfig {
    fn default() -> Self {
        Self {
            metadata_endpoint: "http://www.omdbapi.com/".to_string(),
            metadata_api_key: None,
            country_endpoint: "https://restcountries.com/v3.1/name/".to_string(),
            flag_endpoint: "https://flagsapi.com/".to_string(),
            detail_page_base: "https://www.imdb.com/title/".to_string(),
            output_path: PathBuf::from("build.html"),
            template_path: PathBuf::from("_static/index_template.html"),
            request_timeout_secs: 10,
            data_file: PathBuf::from("movies.json"),
        }
    }
}

impl CinedexConfig {
    /// Environment, then `config.toml` in `config_dir` (skipped when missing), then
    /// defaults.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);
        Self::builder()
            .env()
            .file(config_path.clone())
            .load()
            .map_err(|e| CinedexError::Config(format!("{}: {}", config_path.display(), e)))
    }

    pub fn flag_url(&self, country_code: &str) -> String {
        format!("{}{}/shiny/24.png", self.flag_endpoint, country_code)
    }

    pub fn detail_url(&self, external_id: &str) -> String {
        format!("{}{}", self.detail_page_base, external_id)
    }
}
