use super::MutationOutcome;
use crate::error::Result;
use crate::model::{Collection, Movie};
use crate::resolve::{self, Resolution};
use crate::store::StorageBackend;

/// Load, resolve `query` by substring, and on a single match apply `change` at that
/// position and save. Ambiguity and misses return without saving.
pub(crate) fn mutate_by_query<B, F>(store: &B, query: &str, change: F) -> Result<MutationOutcome>
where
    B: StorageBackend + ?Sized,
    F: FnOnce(&mut Collection, usize) -> Movie,
{
    let mut movies = store.load()?;
    match resolve::resolve(&movies, query) {
        Resolution::NotFound => Ok(MutationOutcome::NotFound {
            query: query.to_string(),
        }),
        Resolution::Ambiguous(positions) => Ok(MutationOutcome::Ambiguous {
            query: query.to_string(),
            candidates: resolve::titles_at(&movies, &positions),
        }),
        Resolution::Resolved(idx) => {
            let movie = change(&mut movies, idx);
            store.save(&movies)?;
            Ok(MutationOutcome::Applied(movie))
        }
    }
}

/// Second step after an ambiguity: apply `change` to the first movie titled exactly
/// `title`, or report not-found.
pub(crate) fn mutate_by_exact_title<B, F>(
    store: &B,
    title: &str,
    change: F,
) -> Result<MutationOutcome>
where
    B: StorageBackend + ?Sized,
    F: FnOnce(&mut Collection, usize) -> Movie,
{
    let mut movies = store.load()?;
    match resolve::resolve_exact(&movies, title) {
        None => Ok(MutationOutcome::NotFound {
            query: title.to_string(),
        }),
        Some(idx) => {
            let movie = change(&mut movies, idx);
            store.save(&movies)?;
            Ok(MutationOutcome::Applied(movie))
        }
    }
}
