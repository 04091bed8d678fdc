use crate::error::Result;
use crate::model::Collection;
use crate::store::StorageBackend;

/// All movies, best rated first. Equal ratings keep their stored order.
pub fn run<B: StorageBackend + ?Sized>(store: &B) -> Result<Collection> {
    let movies = store.load()?;
    Ok(by_rating(movies))
}

pub fn by_rating(mut movies: Collection) -> Collection {
    // sort_by is stable
    movies.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    movies
}
