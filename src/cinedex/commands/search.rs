use crate::error::Result;
use crate::model::{Collection, Movie};
use crate::store::StorageBackend;

/// Case-insensitive title search, in stored order. Unlike title resolution for
/// delete/update, case is ignored here.
pub fn run<B: StorageBackend + ?Sized>(store: &B, keyword: &str) -> Result<Collection> {
    let movies = store.load()?;
    Ok(filter(movies, keyword))
}

pub fn filter(movies: Collection, keyword: &str) -> Collection {
    let keyword_lower = keyword.to_lowercase();
    movies
        .into_iter()
        .filter(|movie: &Movie| movie.title.to_lowercase().contains(&keyword_lower))
        .collect()
}
