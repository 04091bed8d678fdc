use super::helpers::{mutate_by_exact_title, mutate_by_query};
use super::{CmdMessage, MutationOutcome, UpdateOutcome};
use crate::error::Result;
use crate::model::{Collection, Movie};
use crate::store::StorageBackend;
use log::{info, warn};

pub fn run<B: StorageBackend + ?Sized>(
    store: &B,
    query: &str,
    note: &str,
) -> Result<UpdateOutcome> {
    let outcome = mutate_by_query(store, query, set_note(note))?;
    log_outcome(&outcome);
    Ok(outcome)
}

/// Set the note of the first movie titled exactly `title`. Used after an ambiguous `run`.
pub fn run_exact<B: StorageBackend + ?Sized>(
    store: &B,
    title: &str,
    note: &str,
) -> Result<UpdateOutcome> {
    let outcome = mutate_by_exact_title(store, title, set_note(note))?;
    log_outcome(&outcome);
    Ok(outcome)
}

fn set_note(note: &str) -> impl FnOnce(&mut Collection, usize) -> Movie + '_ {
    move |movies, idx| {
        movies[idx].note = note.to_string();
        movies[idx].clone()
    }
}

fn log_outcome(outcome: &UpdateOutcome) {
    match outcome {
        MutationOutcome::Applied(movie) => info!("updated note of {:?}", movie.title),
        MutationOutcome::NotFound { query } => warn!("nothing to update for {:?}", query),
        MutationOutcome::Ambiguous { query, candidates } => {
            info!("{:?} matches {} movies", query, candidates.len())
        }
    }
}

pub fn describe(outcome: &UpdateOutcome) -> CmdMessage {
    match outcome {
        MutationOutcome::Applied(movie) => {
            CmdMessage::success(format!("Movie \"{}\" successfully updated", movie.title))
        }
        MutationOutcome::NotFound { query } => MutationOutcome::not_found_message(query),
        MutationOutcome::Ambiguous { query, candidates } => {
            MutationOutcome::ambiguous_message(query, candidates)
        }
    }
}
