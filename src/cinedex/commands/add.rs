use super::CmdMessage;
use crate::enrich::MetadataProvider;
use crate::error::Result;
use crate::model::Movie;
use crate::store::StorageBackend;
use log::{info, warn};

/// Look `query` up with the metadata provider and append the result.
///
/// Always appends, even when the same title is already stored. The catalog is only
/// loaded and saved once enrichment has fully succeeded.
pub fn run<B, P>(store: &B, provider: &P, query: &str) -> Result<Movie>
where
    B: StorageBackend + ?Sized,
    P: MetadataProvider + ?Sized,
{
    let mut movie = provider.fetch_movie(query).inspect_err(|e| {
        warn!("could not enrich {:?}: {}", query, e);
    })?;
    movie.note.clear();

    let mut movies = store.load()?;
    movies.push(movie.clone());
    store.save(&movies)?;

    info!("added {:?} ({})", movie.title, movie.year);
    Ok(movie)
}

pub fn describe(movie: &Movie) -> CmdMessage {
    CmdMessage::success(format!(
        "Movie \"{}\" ({}) added with rating {}",
        movie.title, movie.year, movie.rating
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrich::fixtures::StubEnricher;
    use crate::error::CinedexError;
    use crate::store::MemBackend;

    fn provider() -> StubEnricher {
        StubEnricher::new().with_movie(
            "inception",
            Movie::new("Inception", 8.8, 2010)
                .with_external_id("tt1375666")
                .with_country("United States, United Kingdom")
                .with_note("provider notes are dropped"),
        )
    }

    #[test]
    fn appends_enriched_movie() {
        let store = MemBackend::with_movies(vec![Movie::new("Heat", 8.3, 1995)]);
        let movie = run(&store, &provider(), "inception").unwrap();

        assert_eq!(movie.title, "Inception");
        assert!(movie.note.is_empty());
        let movies = store.snapshot();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[1].external_id, "tt1375666");
    }

    #[test]
    fn duplicates_are_appended() {
        let store = MemBackend::new();
        let provider = provider();
        run(&store, &provider, "inception").unwrap();
        run(&store, &provider, "inception").unwrap();

        let movies = store.snapshot();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0], movies[1]);
    }

    #[test]
    fn enrichment_failure_does_not_touch_store() {
        let store = MemBackend::with_movies(vec![Movie::new("Heat", 8.3, 1995)]);
        let result = run(&store, &provider(), "no such movie");

        assert!(matches!(result, Err(CinedexError::Enrichment(_))));
        assert_eq!(store.save_count(), 0);
        assert_eq!(store.snapshot().len(), 1);
    }

    #[test]
    fn describes_added_movie() {
        let message = describe(&Movie::new("Inception", 8.8, 2010));
        assert_eq!(
            message.content,
            "Movie \"Inception\" (2010) added with rating 8.8"
        );
    }
}
