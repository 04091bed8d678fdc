use serde::{Deserialize, Serialize};

/// One catalog entry.
///
/// Field names on disk follow the metadata provider's vocabulary (`poster`, `imdbID`),
/// so files written by older tools keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub rating: f64,
    pub year: i32,
    #[serde(rename = "poster", default)]
    pub poster_url: String,
    #[serde(rename = "imdbID", default)]
    pub external_id: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub country: String,
}

impl Movie {
    pub fn new(title: impl Into<String>, rating: f64, year: i32) -> Self {
        Self {
            title: title.into(),
            rating,
            year,
            poster_url: String::new(),
            external_id: String::new(),
            note: String::new(),
            country: String::new(),
        }
    }

    pub fn with_poster(mut self, poster_url: impl Into<String>) -> Self {
        self.poster_url = poster_url.into();
        self
    }

    pub fn with_external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = external_id.into();
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }
}

/// The full, ordered set of movies stored in one file.
///
/// Titles are not unique. Records are identified by their position in a freshly
/// loaded collection, never by value.
pub type Collection = Vec<Movie>;
