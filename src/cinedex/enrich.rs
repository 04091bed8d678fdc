//! # Enrichment
//!
//! Two black-box services fill in what the user does not type:
//!
//! - a [`MetadataProvider`] turns a free-text title into a complete [`Movie`]
//!   (rating, year, poster, external id, country);
//! - a [`CountryLookup`] turns a country name into its 2-letter code for flag images.
//!
//! [`HttpEnricher`] implements both over blocking HTTP. Timeouts are set on its client,
//! which is the only place network calls happen.

use crate::config::CinedexConfig;
use crate::error::{CinedexError, Result};
use crate::model::Movie;
use log::debug;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

pub trait MetadataProvider {
    /// Fetch the movie best matching `title`. Missing fields are an enrichment failure.
    fn fetch_movie(&self, title: &str) -> Result<Movie>;
}

pub trait CountryLookup {
    /// Resolve a country display name to its 2-letter code.
    fn country_code(&self, country: &str) -> Result<String>;
}

/// Raw metadata service answer. Every field may be absent, even on HTTP 200.
#[derive(Debug, Default, Deserialize)]
pub struct MetadataResponse {
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "imdbRating")]
    pub rating: Option<String>,
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
    #[serde(rename = "imdbID")]
    pub imdb_id: Option<String>,
    #[serde(rename = "Country")]
    pub country: Option<String>,
    #[serde(rename = "Response")]
    pub response: Option<String>,
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

impl MetadataResponse {
    pub fn into_movie(self) -> Result<Movie> {
        if self.response.as_deref() == Some("False") {
            let reason = self.error.unwrap_or_else(|| "Movie not found!".to_string());
            return Err(CinedexError::Enrichment(reason));
        }

        let title = required(self.title, "Title")?;
        let rating_raw = required(self.rating, "imdbRating")?;
        let rating: f64 = rating_raw.trim().parse().map_err(|_| {
            CinedexError::Enrichment(format!("unusable rating {:?} for {}", rating_raw, title))
        })?;
        let year_raw = required(self.year, "Year")?;
        let year = parse_year(&year_raw).ok_or_else(|| {
            CinedexError::Enrichment(format!("unusable year {:?} for {}", year_raw, title))
        })?;

        Ok(Movie::new(title, rating, year)
            .with_poster(required(self.poster, "Poster")?)
            .with_external_id(required(self.imdb_id, "imdbID")?)
            .with_country(required(self.country, "Country")?))
    }
}

fn required(value: Option<String>, field: &str) -> Result<String> {
    value.ok_or_else(|| CinedexError::Enrichment(format!("response is missing {}", field)))
}

/// Series report spans like "2008–2013"; the leading year is used.
fn parse_year(raw: &str) -> Option<i32> {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

#[derive(Debug, Deserialize)]
struct CountryEntry {
    cca2: Option<String>,
}

/// Metadata and country lookups over HTTP.
pub struct HttpEnricher {
    client: Client,
    config: CinedexConfig,
}

impl HttpEnricher {
    pub fn new(config: CinedexConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| CinedexError::Enrichment(e.to_string()))?;
        Ok(Self { client, config })
    }
}

fn http_err(e: reqwest::Error) -> CinedexError {
    if e.is_timeout() {
        CinedexError::Enrichment(format!("request timed out: {}", e))
    } else if let Some(status) = e.status() {
        CinedexError::Enrichment(format!("HTTP error {}", status))
    } else {
        CinedexError::Enrichment(e.to_string())
    }
}

impl MetadataProvider for HttpEnricher {
    fn fetch_movie(&self, title: &str) -> Result<Movie> {
        debug!("fetching metadata for {:?}", title);
        let mut request = self.client.get(self.config.metadata_endpoint.as_str());
        if let Some(key) = &self.config.metadata_api_key {
            request = request.query(&[("apikey", key.as_str())]);
        }
        let response = request
            .query(&[("t", title)])
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(http_err)?;
        let body: MetadataResponse = response.json().map_err(http_err)?;
        body.into_movie()
    }
}

impl CountryLookup for HttpEnricher {
    fn country_code(&self, country: &str) -> Result<String> {
        debug!("looking up country code for {:?}", country);
        let url = format!("{}{}", self.config.country_endpoint, country);
        let entries: Vec<CountryEntry> = self
            .client
            .get(url.as_str())
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.json())
            .map_err(http_err)?;

        entries
            .into_iter()
            .next()
            .and_then(|entry| entry.cca2)
            .filter(|code| code.len() == 2)
            .ok_or_else(|| CinedexError::Enrichment(format!("no country code for {:?}", country)))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashMap;

    /// Canned answers for both enrichment services.
    #[derive(Default)]
    pub struct StubEnricher {
        movies: HashMap<String, Movie>,
        countries: HashMap<String, String>,
        calls: Cell<usize>,
    }

    impl StubEnricher {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_movie(mut self, query: &str, movie: Movie) -> Self {
            self.movies.insert(query.to_string(), movie);
            self
        }

        pub fn with_country(mut self, name: &str, code: &str) -> Self {
            self.countries.insert(name.to_string(), code.to_string());
            self
        }

        /// Number of lookups made against either service.
        pub fn calls(&self) -> usize {
            self.calls.get()
        }
    }

    impl MetadataProvider for StubEnricher {
        fn fetch_movie(&self, title: &str) -> Result<Movie> {
            self.calls.set(self.calls.get() + 1);
            self.movies
                .get(title)
                .cloned()
                .ok_or_else(|| CinedexError::Enrichment("Movie not found!".to_string()))
        }
    }

    impl CountryLookup for StubEnricher {
        fn country_code(&self, country: &str) -> Result<String> {
            self.calls.set(self.calls.get() + 1);
            self.countries
                .get(country)
                .cloned()
                .ok_or_else(|| CinedexError::Enrichment(format!("no country code for {:?}", country)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_response() -> MetadataResponse {
        serde_json::from_str(
            r#"{
                "Title": "Inception",
                "Year": "2010",
                "imdbRating": "8.8",
                "Poster": "https://m.media-amazon.com/images/inception.jpg",
                "imdbID": "tt1375666",
                "Country": "United States, United Kingdom",
                "Response": "True"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn builds_movie_from_complete_response() {
        let movie = full_response().into_movie().unwrap();
        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.rating, 8.8);
        assert_eq!(movie.year, 2010);
        assert_eq!(movie.external_id, "tt1375666");
        assert_eq!(movie.country, "United States, United Kingdom");
        assert!(movie.note.is_empty());
    }

    #[test]
    fn provider_error_is_an_enrichment_failure() {
        let response: MetadataResponse =
            serde_json::from_str(r#"{"Response": "False", "Error": "Movie not found!"}"#).unwrap();
        match response.into_movie() {
            Err(CinedexError::Enrichment(msg)) => assert_eq!(msg, "Movie not found!"),
            other => panic!("expected enrichment failure, got {:?}", other),
        }
    }

    #[test]
    fn missing_field_is_an_enrichment_failure() {
        let mut response = full_response();
        response.country = None;
        match response.into_movie() {
            Err(CinedexError::Enrichment(msg)) => assert!(msg.contains("Country")),
            other => panic!("expected enrichment failure, got {:?}", other),
        }
    }

    #[test]
    fn unrated_movie_is_an_enrichment_failure() {
        let mut response = full_response();
        response.rating = Some("N/A".to_string());
        assert!(matches!(
            response.into_movie(),
            Err(CinedexError::Enrichment(_))
        ));
    }

    #[test]
    fn year_span_uses_leading_year() {
        assert_eq!(parse_year("2008–2013"), Some(2008));
        assert_eq!(parse_year("1999"), Some(1999));
        assert_eq!(parse_year("N/A"), None);
    }
}
