use super::{write_atomic, StorageBackend};
use crate::error::{CinedexError, Result};
use crate::model::{Collection, Movie};
use csv::StringRecord;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};

const HEADERS: [&str; 7] = ["title", "rating", "year", "poster", "imdbID", "note", "country"];

/// One CSV row. Every cell is text; numbers are parsed when converting to [`Movie`].
///
/// Headers are lowercased before rows are read, so older catalogs started with a bare
/// `Title,Rating,Year` header load too. Missing columns read as empty.
#[derive(Debug, Serialize, Deserialize)]
struct Row {
    title: String,
    #[serde(default)]
    rating: String,
    #[serde(default)]
    year: String,
    #[serde(default)]
    poster: String,
    #[serde(rename = "imdbid", default)]
    imdb_id: String,
    #[serde(default)]
    note: String,
    #[serde(default)]
    country: String,
}

impl From<&Movie> for Row {
    fn from(movie: &Movie) -> Self {
        Row {
            title: movie.title.clone(),
            rating: movie.rating.to_string(),
            year: movie.year.to_string(),
            poster: movie.poster_url.clone(),
            imdb_id: movie.external_id.clone(),
            note: movie.note.clone(),
            country: movie.country.clone(),
        }
    }
}

impl Row {
    fn into_movie(self) -> std::result::Result<Movie, String> {
        let rating = parse_cell::<f64>(&self.rating)
            .ok()
            .filter(|rating| rating.is_finite())
            .ok_or_else(|| format!("invalid rating {:?} for {:?}", self.rating, self.title))?;
        let year = parse_cell::<i32>(&self.year)
            .map_err(|_| format!("invalid year {:?} for {:?}", self.year, self.title))?;
        Ok(Movie {
            title: self.title,
            rating,
            year,
            poster_url: self.poster,
            external_id: self.imdb_id,
            note: self.note,
            country: self.country,
        })
    }
}

// Empty cells read as zero.
fn parse_cell<T>(cell: &str) -> std::result::Result<T, T::Err>
where
    T: std::str::FromStr + Default,
{
    let cell = cell.trim();
    if cell.is_empty() {
        Ok(T::default())
    } else {
        cell.parse()
    }
}

/// Stores the catalog as a comma separated table with a header row.
pub struct CsvBackend {
    path: PathBuf,
}

impl CsvBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn encode(&self, movies: &[Movie]) -> Result<Vec<u8>> {
        let to_write_err = |e: csv::Error| CinedexError::write(&self.path, e.into());

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer.write_record(HEADERS).map_err(to_write_err)?;
        for movie in movies {
            writer.serialize(Row::from(movie)).map_err(to_write_err)?;
        }
        writer
            .into_inner()
            .map_err(|e| CinedexError::write(&self.path, e.into_error()))
    }
}

impl StorageBackend for CsvBackend {
    fn load(&self) -> Result<Collection> {
        if !self.path.exists() {
            debug!("{} does not exist, creating it", self.path.display());
            self.save(&[])?;
            return Ok(Vec::new());
        }

        let file = File::open(&self.path).map_err(|e| CinedexError::read(&self.path, e))?;
        let mut reader = csv::Reader::from_reader(file);
        let headers: StringRecord = reader
            .headers()
            .map_err(|e| CinedexError::read(&self.path, e))?
            .iter()
            .map(|header| header.trim().to_ascii_lowercase())
            .collect();
        reader.set_headers(headers);

        let mut movies = Vec::new();
        for (line, row) in reader.deserialize::<Row>().enumerate() {
            let row = row.map_err(|e| CinedexError::read(&self.path, e))?;
            let movie = row.into_movie().map_err(|reason| {
                CinedexError::read(&self.path, format!("row {}: {}", line + 1, reason))
            })?;
            movies.push(movie);
        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn sample() -> Collection {
        vec![
            Movie::new("Dune", 8.0, 2021)
                .with_poster("https://img/dune.jpg")
                .with_external_id("tt1160419")
                .with_country("United States, Canada"),
            Movie::new("Crouching Tiger, Hidden Dragon", 7.9, 2000)
                .with_note("Has a \"quoted\" note, and a comma"),
            Movie::new("Heat", 8.3, 1995),
        ]
    }

    #[test]
    fn missing_file_is_created_with_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movies.csv");
        let backend = CsvBackend::new(&path);

        assert!(backend.load().unwrap().is_empty());
        let raw = fs::read_to_string(&path).unwrap();
        assert_eq!(raw.trim_end(), "title,rating,year,poster,imdbID,note,country");

        // The freshly created file loads again as empty.
        assert!(backend.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_returns_same_collection() {
        let dir = tempfile::tempdir().unwrap();
        let backend = CsvBackend::new(dir.path().join("movies.csv"));

        backend.save(&sample()).unwrap();
        let loaded = backend.load().unwrap();
        assert_eq!(loaded, sample());

        backend.save(&loaded).unwrap();
        assert_eq!(backend.load().unwrap(), sample());
    }

    #[test]
    fn numbers_are_stored_as_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movies.csv");
        let backend = CsvBackend::new(&path);

        backend.save(&[Movie::new("Heat", 8.25, 1995)]).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("Heat,8.25,1995"));
    }

    #[test]
    fn reads_legacy_minimal_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movies.csv");
        fs::write(&path, "Title,Rating,Year\nTitanic,9.0,1999\nAlien,8.5,1979\n").unwrap();

        let movies = CsvBackend::new(&path).load().unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].title, "Titanic");
        assert_eq!(movies[0].rating, 9.0);
        assert_eq!(movies[1].year, 1979);
        assert!(movies[1].note.is_empty());
    }

    #[test]
    fn empty_numeric_cells_read_as_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movies.csv");
        fs::write(&path, "title,rating,year\nUnrated,,\n").unwrap();

        let movies = CsvBackend::new(&path).load().unwrap();
        assert_eq!(movies[0].rating, 0.0);
        assert_eq!(movies[0].year, 0);
    }

    #[test]
    fn non_numeric_rating_is_a_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movies.csv");
        fs::write(&path, "title,rating,year\nHeat,great,1995\n").unwrap();

        let result = CsvBackend::new(&path).load();
        match result {
            Err(CinedexError::Read { reason, .. }) => assert!(reason.contains("rating")),
            other => panic!("expected read failure, got {:?}", other),
        }
    }

    #[test]
    fn non_finite_rating_is_a_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movies.csv");
        for cell in ["NaN", "inf", "-inf"] {
            let content = format!(
                "title,rating,year\nHeat,8.3,1995\nBroken,{},2000\nAlien,8.5,1979\n",
                cell
            );
            fs::write(&path, content).unwrap();

            let result = CsvBackend::new(&path).load();
            match result {
                Err(CinedexError::Read { reason, .. }) => {
                    assert!(reason.contains("row 2"), "{}", reason);
                    assert!(reason.contains("rating"), "{}", reason);
                }
                other => panic!("{} should not load, got {:?}", cell, other),
            }
        }
    }

    #[test]
    fn header_case_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movies.csv");
        fs::write(&path, "TITLE,RATING,YEAR,IMDBID\nTitanic,7.9,1997,tt0120338\n").unwrap();

        let movies = CsvBackend::new(&path).load().unwrap();
        assert_eq!(movies[0].title, "Titanic");
        assert_eq!(movies[0].rating, 7.9);
        assert_eq!(movies[0].year, 1997);
        assert_eq!(movies[0].external_id, "tt0120338");
    }

    #[test]
    fn wrong_delimiter_is_a_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movies.csv");
        fs::write(&path, "title;rating;year\nHeat;8.3;1995\n").unwrap();

        let result = CsvBackend::new(&path).load();
        assert!(matches!(result, Err(CinedexError::Read { .. })));
    }
}
