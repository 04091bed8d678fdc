//! # Site Renderer
//!
//! Turns the catalog into one static HTML page. Each movie becomes a tile (linked poster,
//! country flag, rating, title, year, note as tooltip); the tiles are concatenated in
//! catalog order and substituted for [`GRID_PLACEHOLDER`] in an external template.
//!
//! Flags need one country lookup per movie. The first failing lookup aborts the whole
//! render and nothing is written.

use crate::config::CinedexConfig;
use crate::enrich::CountryLookup;
use crate::error::{CinedexError, Result};
use crate::model::Movie;
use crate::templates::{TILE_NAME, TILE_TEMPLATE};
use minijinja::Environment;
use serde::Serialize;
use std::fs;
use std::path::Path;

pub const GRID_PLACEHOLDER: &str = "__TEMPLATE_MOVIE_GRID__";

/// Country name to look up for a stored country field.
///
/// Any mention of the United States resolves to its official name; otherwise a
/// comma separated list yields its first entry.
pub fn display_country(country: &str) -> &str {
    if country.contains("United States") {
        "United States of America"
    } else if let Some((first, _)) = country.split_once(',') {
        first.trim()
    } else {
        country.trim()
    }
}

/// Read the page template. A missing or unreadable template is a render failure.
pub fn load_template(path: &Path) -> Result<String> {
    let template = fs::read_to_string(path)
        .map_err(|e| CinedexError::Render(format!("template {}: {}", path.display(), e)))?;
    if !template.contains(GRID_PLACEHOLDER) {
        return Err(CinedexError::Render(format!(
            "template {} has no {} placeholder",
            path.display(),
            GRID_PLACEHOLDER
        )));
    }
    Ok(template)
}

/// Values interpolated into the tile template; the template escapes them.
#[derive(Debug, Serialize)]
struct TileContext<'m> {
    title: &'m str,
    poster: &'m str,
    note: &'m str,
    rating: f64,
    year: i32,
    detail_url: String,
    flag_url: String,
}

pub struct SiteRenderer<'a, L: CountryLookup + ?Sized> {
    config: &'a CinedexConfig,
    lookup: &'a L,
    env: Environment<'static>,
}

impl<'a, L: CountryLookup + ?Sized> SiteRenderer<'a, L> {
    pub fn new(config: &'a CinedexConfig, lookup: &'a L) -> Result<Self> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.add_template(TILE_NAME, TILE_TEMPLATE).map_err(render_error)?;
        Ok(Self {
            config,
            lookup,
            env,
        })
    }

    pub fn flag_url(&self, movie: &Movie) -> Result<String> {
        let country = display_country(&movie.country);
        if country.is_empty() {
            return Err(CinedexError::Enrichment(format!(
                "no country recorded for {:?}",
                movie.title
            )));
        }
        let code = self.lookup.country_code(country)?;
        Ok(self.config.flag_url(&code))
    }

    pub fn movie_tile(&self, movie: &Movie) -> Result<String> {
        let context = TileContext {
            title: &movie.title,
            poster: &movie.poster_url,
            note: &movie.note,
            rating: movie.rating,
            year: movie.year,
            detail_url: self.config.detail_url(&movie.external_id),
            flag_url: self.flag_url(movie)?,
        };
        self.env
            .get_template(TILE_NAME)
            .and_then(|tile| tile.render(&context))
            .map_err(render_error)
    }

    /// All tiles in catalog order. Stops at the first failing lookup.
    pub fn movie_grid(&self, movies: &[Movie]) -> Result<String> {
        movies.iter().map(|movie| self.movie_tile(movie)).collect()
    }

    pub fn render_page(&self, template: &str, movies: &[Movie]) -> Result<String> {
        let grid = self.movie_grid(movies)?;
        Ok(template.replace(GRID_PLACEHOLDER, &grid))
    }
}

fn render_error(e: minijinja::Error) -> CinedexError {
    CinedexError::Render(format!("tile template: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrich::fixtures::StubEnricher;

    fn lookup() -> StubEnricher {
        StubEnricher::new()
            .with_country("United States of America", "US")
            .with_country("France", "FR")
            .with_country("Japan", "JP")
    }

    // minijinja escapes slashes inside values.
    fn unescape_slashes(html: &str) -> String {
        html.replace("&#x2f;", "/")
    }

    fn amelie() -> Movie {
        Movie::new("Amélie", 8.3, 2001)
            .with_poster("https://img/amelie.jpg")
            .with_external_id("tt0211915")
            .with_country("France, Germany")
            .with_note("Paris & gnomes")
    }

    #[test]
    fn display_country_rules() {
        assert_eq!(display_country("United States"), "United States of America");
        assert_eq!(
            display_country("United Kingdom, United States"),
            "United States of America"
        );
        assert_eq!(display_country("France, Germany"), "France");
        assert_eq!(display_country("Japan"), "Japan");
    }

    #[test]
    fn tile_contains_every_field() {
        let config = CinedexConfig::default();
        let lookup = lookup();
        let renderer = SiteRenderer::new(&config, &lookup).unwrap();

        let tile = unescape_slashes(&renderer.movie_tile(&amelie()).unwrap());
        assert!(tile.starts_with("<li>\n"));
        assert!(tile.ends_with("</li>\n"));
        assert!(tile.contains("href=\"https://www.imdb.com/title/tt0211915\""));
        assert!(tile.contains("src=\"https://img/amelie.jpg\""));
        assert!(tile.contains("src=\"https://flagsapi.com/FR/shiny/24.png\""));
        assert!(tile.contains("title=\"Paris &amp; gnomes\""));
        assert!(tile.contains("IMDB Rate: 8.3"));
        assert!(tile.contains("<div class=\"movie-title\">Amélie</div>"));
        assert!(tile.contains("<div class=\"movie-year\">2001</div>"));
    }

    #[test]
    fn page_keeps_catalog_order() {
        let config = CinedexConfig::default();
        let lookup = lookup();
        let renderer = SiteRenderer::new(&config, &lookup).unwrap();
        let movies = vec![
            Movie::new("Spirited Away", 8.6, 2001).with_country("Japan"),
            amelie(),
        ];

        let page = renderer
            .render_page("<ul>__TEMPLATE_MOVIE_GRID__</ul>", &movies)
            .unwrap();
        assert!(page.starts_with("<ul><li>"));
        assert!(page.ends_with("</li>\n</ul>"));
        let spirited = page.find("Spirited Away").unwrap();
        let amelie = page.find("Amélie").unwrap();
        assert!(spirited < amelie);
        assert_eq!(lookup.calls(), 2);
    }

    #[test]
    fn first_failed_lookup_aborts() {
        let config = CinedexConfig::default();
        let lookup = lookup();
        let renderer = SiteRenderer::new(&config, &lookup).unwrap();
        let movies = vec![
            Movie::new("Oldboy", 8.4, 2003).with_country("South Korea"),
            amelie(),
        ];

        let result = renderer.render_page(GRID_PLACEHOLDER, &movies);
        assert!(matches!(result, Err(CinedexError::Enrichment(_))));
        assert_eq!(lookup.calls(), 1);
    }

    #[test]
    fn movie_without_country_fails() {
        let config = CinedexConfig::default();
        let lookup = lookup();
        let renderer = SiteRenderer::new(&config, &lookup).unwrap();

        let result = renderer.movie_tile(&Movie::new("Heat", 8.3, 1995));
        assert!(matches!(result, Err(CinedexError::Enrichment(_))));
        assert_eq!(lookup.calls(), 0);
    }

    #[test]
    fn empty_catalog_renders_empty_grid() {
        let config = CinedexConfig::default();
        let lookup = lookup();
        let renderer = SiteRenderer::new(&config, &lookup).unwrap();
        let page = renderer.render_page("<ul>__TEMPLATE_MOVIE_GRID__</ul>", &[]).unwrap();
        assert_eq!(page, "<ul></ul>");
    }

    #[test]
    fn missing_template_is_a_render_failure() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_template(&dir.path().join("nope.html"));
        assert!(matches!(result, Err(CinedexError::Render(_))));
    }

    #[test]
    fn template_without_placeholder_is_a_render_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index_template.html");
        fs::write(&path, "<html></html>").unwrap();
        assert!(matches!(load_template(&path), Err(CinedexError::Render(_))));
    }

    #[test]
    fn escapes_markup() {
        let config = CinedexConfig::default();
        let lookup = lookup();
        let renderer = SiteRenderer::new(&config, &lookup).unwrap();
        let movie = Movie::new("<b>\"Tom\" & 'Jerry'</b>", 7.0, 1990)
            .with_country("Japan")
            .with_note("<script>alert(1)</script>");

        let tile = renderer.movie_tile(&movie).unwrap();
        assert!(!tile.contains("<b>"));
        assert!(!tile.contains("<script>"));
        assert!(tile.contains("&lt;b&gt;"));
        assert!(tile.contains("&quot;Tom&quot; &amp; "));
        assert!(tile.contains("title=\"&lt;script&gt;"));
    }
}
