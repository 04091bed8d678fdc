//! # Title Resolution
//!
//! Titles are not unique, so mutations addressed by title go through a two-step
//! protocol:
//!
//! 1. [`resolve`]: every movie whose title *contains* the query (case-sensitive) is a
//!    candidate. None gives [`Resolution::NotFound`], exactly one gives
//!    [`Resolution::Resolved`], more than one gives [`Resolution::Ambiguous`].
//! 2. [`resolve_exact`]: on ambiguity the caller asks the user for the complete title
//!    and calls back; the first movie whose title is *equal* to it is picked.
//!    No equal title is a plain not-found.
//!
//! Results are positions in the collection that was searched, so two movies with the
//! same fields are still told apart.
//!
//! Matching here is case-sensitive while [`crate::commands::search`] is not.

use crate::model::Movie;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    NotFound,
    /// Position of the single matching movie
    Resolved(usize),
    /// Positions of every matching movie, in collection order
    Ambiguous(Vec<usize>),
}

/// Positions of every movie whose title contains `query`.
pub fn find_matches(movies: &[Movie], query: &str) -> Vec<usize> {
    movies
        .iter()
        .enumerate()
        .filter(|(_, movie)| movie.title.contains(query))
        .map(|(idx, _)| idx)
        .collect()
}

pub fn resolve(movies: &[Movie], query: &str) -> Resolution {
    let mut matches = find_matches(movies, query);
    match matches.len() {
        0 => Resolution::NotFound,
        1 => Resolution::Resolved(matches.remove(0)),
        _ => Resolution::Ambiguous(matches),
    }
}

/// Position of the first movie titled exactly `title`.
pub fn resolve_exact(movies: &[Movie], title: &str) -> Option<usize> {
    movies.iter().position(|movie| movie.title == title)
}

/// Titles at the given positions, for presenting an ambiguity to the user.
pub fn titles_at(movies: &[Movie], positions: &[usize]) -> Vec<String> {
    positions
        .iter()
        .filter_map(|&idx| movies.get(idx))
        .map(|movie| movie.title.clone())
        .collect()
}
