use cinedex::commands::{CmdMessage, MessageLevel};
use cinedex::model::Movie;
use colored::Colorize;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_movies(movies: &[Movie]) {
    if movies.is_empty() {
        println!("No movies found.");
        return;
    }
    for movie in movies {
        println!("{}", movie_line(movie));
    }
}

/// Listing preceded by the total, as the full catalog views show it.
pub(super) fn print_catalog(movies: &[Movie]) {
    println!("{}", total_line(movies.len()).bold());
    print_movies(movies);
}

pub(super) fn movie_line(movie: &Movie) -> String {
    let mut line = format!(
        "{} ({}): {}",
        movie.title.bold(),
        movie.year.to_string().dimmed(),
        movie.rating.to_string().yellow()
    );
    if !movie.note.is_empty() {
        line.push_str(&format!("  {}", movie.note.italic()));
    }
    line
}

pub(super) fn total_line(count: usize) -> String {
    if count == 1 {
        "1 movie in total".to_string()
    } else {
        format!("{} movies in total", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_line_wording() {
        assert_eq!(total_line(0), "0 movies in total");
        assert_eq!(total_line(1), "1 movie in total");
        assert_eq!(total_line(12), "12 movies in total");
    }

    #[test]
    fn movie_line_shows_note() {
        colored::control::set_override(false);
        let movie = Movie::new("Heat", 8.3, 1995).with_note("De Niro");
        assert_eq!(movie_line(&movie), "Heat (1995): 8.3  De Niro");
        assert_eq!(movie_line(&Movie::new("Heat", 8.3, 1995)), "Heat (1995): 8.3");
    }
}
