use crate::error::{CinedexError, Result};
use crate::model::Movie;
use crate::store::StorageBackend;
use rand::seq::IndexedRandom;
use rand::Rng;

pub fn run<B: StorageBackend + ?Sized>(store: &B) -> Result<Movie> {
    let movies = store.load()?;
    pick(&movies, &mut rand::rng())
}

/// Uniform pick, with the random source supplied by the caller.
pub fn pick<R: Rng + ?Sized>(movies: &[Movie], rng: &mut R) -> Result<Movie> {
    movies
        .choose(rng)
        .cloned()
        .ok_or(CinedexError::EmptyCollection)
}
