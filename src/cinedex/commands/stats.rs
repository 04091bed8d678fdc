use super::CmdMessage;
use crate::error::{CinedexError, Result};
use crate::model::Movie;
use crate::store::StorageBackend;
use serde::Serialize;

/// Rating summary of the catalog.
///
/// Every title tied at the top rating is listed in `best`, every title tied at the
/// bottom in `worst`. When all ratings are equal, every title is in both.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub max_rating: f64,
    pub min_rating: f64,
    pub best: Vec<String>,
    pub worst: Vec<String>,
}

pub fn run<B: StorageBackend + ?Sized>(store: &B) -> Result<Statistics> {
    let movies = store.load()?;
    compute(&movies)
}

pub fn compute(movies: &[Movie]) -> Result<Statistics> {
    if movies.is_empty() {
        return Err(CinedexError::EmptyCollection);
    }

    let mut ratings: Vec<f64> = movies.iter().map(|m| m.rating).collect();
    ratings.sort_by(f64::total_cmp);

    let count = ratings.len();
    let min_rating = ratings[0];
    let max_rating = ratings[count - 1];
    let mean = ratings.iter().sum::<f64>() / count as f64;
    let median = if count % 2 == 1 {
        ratings[count / 2]
    } else {
        (ratings[count / 2 - 1] + ratings[count / 2]) / 2.0
    };

    let titles_rated = |rating: f64| -> Vec<String> {
        movies
            .iter()
            .filter(|m| m.rating == rating)
            .map(|m| m.title.clone())
            .collect()
    };

    Ok(Statistics {
        count,
        mean,
        median,
        max_rating,
        min_rating,
        best: titles_rated(max_rating),
        worst: titles_rated(min_rating),
    })
}

impl Statistics {
    /// One line per figure, in the order the catalog menu has always shown them.
    pub fn messages(&self) -> Vec<CmdMessage> {
        vec![
            CmdMessage::info(format!("The average movie rating is {}.", round2(self.mean))),
            CmdMessage::info(format!("The median of movie rating is {}.", round2(self.median))),
            CmdMessage::info(ranked_line("best", &self.best, self.max_rating)),
            CmdMessage::info(ranked_line("worst", &self.worst, self.min_rating)),
        ]
    }
}

fn ranked_line(label: &str, titles: &[String], rating: f64) -> String {
    if titles.len() == 1 {
        format!("The {} movie is: {} ({}).", label, titles[0], rating)
    } else {
        format!("The {} movies are: {} ({}).", label, titles.join(", "), rating)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
