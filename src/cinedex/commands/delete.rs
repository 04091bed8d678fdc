use super::helpers::{mutate_by_exact_title, mutate_by_query};
use super::{CmdMessage, DeletionOutcome, MutationOutcome};
use crate::error::Result;
use crate::store::StorageBackend;
use log::{info, warn};

pub fn run<B: StorageBackend + ?Sized>(store: &B, query: &str) -> Result<DeletionOutcome> {
    let outcome = mutate_by_query(store, query, |movies, idx| movies.remove(idx))?;
    log_outcome(&outcome);
    Ok(outcome)
}

/// Delete the first movie titled exactly `title`. Used after an ambiguous `run`.
pub fn run_exact<B: StorageBackend + ?Sized>(store: &B, title: &str) -> Result<DeletionOutcome> {
    let outcome = mutate_by_exact_title(store, title, |movies, idx| movies.remove(idx))?;
    log_outcome(&outcome);
    Ok(outcome)
}

fn log_outcome(outcome: &DeletionOutcome) {
    match outcome {
        MutationOutcome::Applied(movie) => info!("deleted {:?}", movie.title),
        MutationOutcome::NotFound { query } => warn!("nothing to delete for {:?}", query),
        MutationOutcome::Ambiguous { query, candidates } => {
            info!("{:?} matches {} movies", query, candidates.len())
        }
    }
}

pub fn describe(outcome: &DeletionOutcome) -> CmdMessage {
    match outcome {
        MutationOutcome::Applied(movie) => CmdMessage::success(format!(
            "The movie \"{}\" has been removed from movie list successfully.",
            movie.title
        )),
        MutationOutcome::NotFound { query } => MutationOutcome::not_found_message(query),
        MutationOutcome::Ambiguous { query, candidates } => {
            MutationOutcome::ambiguous_message(query, candidates)
        }
    }
}
