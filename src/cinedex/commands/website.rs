use super::CmdMessage;
use crate::config::CinedexConfig;
use crate::enrich::CountryLookup;
use crate::error::Result;
use crate::site::{self, SiteRenderer};
use crate::store::{self, StorageBackend};
use log::info;
use std::path::{Path, PathBuf};

/// Render the catalog into `config.output_path`, using the page template at
/// `config.template_path`.
///
/// The template is read before the catalog. The output file is only written once every
/// tile has rendered; an existing page is left as it was on failure.
pub fn run<B, L>(store: &B, lookup: &L, config: &CinedexConfig) -> Result<PathBuf>
where
    B: StorageBackend + ?Sized,
    L: CountryLookup + ?Sized,
{
    let template = site::load_template(&config.template_path)?;
    let movies = store.load()?;

    let page = SiteRenderer::new(config, lookup)?.render_page(&template, &movies)?;

    let output = config.output_path.clone();
    store::write_atomic(&output, page.as_bytes())?;
    info!("rendered {} movies into {}", movies.len(), output.display());
    Ok(output)
}

pub fn describe(output: &Path) -> CmdMessage {
    CmdMessage::success(format!(
        "Website was generated successfully: {}",
        output.display()
    ))
}
