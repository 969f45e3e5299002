//! Terminal rendering of rows, grids and the detail view.

use colored::Colorize;
use std::fmt::Write;

use crate::{
    models::{Movie, Recommendations},
    services::GenreSection,
    view::format::{self, PosterSize},
};

/// A genre row: heading, then one line per movie with its rating and poster
pub fn genre_row(section: &GenreSection) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", section.genre.bold().blue());

    if section.movies.is_empty() {
        let _ = writeln!(out, "  {}", "No movies in this genre.".dimmed());
        return out;
    }

    for movie in &section.movies {
        let _ = writeln!(
            out,
            "  {} {}  {}  {}",
            "•".green(),
            movie.title,
            format::card_rating_label(movie).yellow(),
            format::poster_url(movie, PosterSize::RowCard).dimmed()
        );
    }
    out
}

/// The recommendation grid, numbered so a result can be picked by position
pub fn recommendation_grid(query: &str, recommendations: &Recommendations) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        format!("Recommendations for '{}':", query).bold().blue()
    );

    if let Some(algorithm) = &recommendations.algorithm_used {
        let _ = writeln!(out, "  {}", format!("Ranked by {}", algorithm).dimmed());
    }

    if recommendations.movies.is_empty() {
        let _ = writeln!(out, "  {}", "No recommendations found.".dimmed());
        return out;
    }

    for (i, movie) in recommendations.movies.iter().enumerate() {
        let _ = write!(out, "{}. {}", (i + 1).to_string().green(), movie.title.bold());

        let genres = format::card_genres(movie.genre.as_ref());
        if !genres.is_empty() {
            let _ = write!(out, " [{}]", genres);
        }
        if let Some(label) = format::match_label(movie) {
            let _ = write!(out, " - {}", label.cyan());
        }
        out.push('\n');
    }
    out
}

/// The detail view for one movie, followed by its "more like this" strip
pub fn detail_view(movie: &Movie, similar: &[Movie]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", movie.title.bold().blue());

    let mut headline = format::rating_label(movie);
    if let Some(label) = format::match_label(movie) {
        headline.push_str("  ");
        headline.push_str(&label);
    }
    let _ = writeln!(out, "{}", headline.yellow());
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", format::description(movie));
    let _ = writeln!(out);
    let _ = writeln!(out, "{} {}", "Director:".bold(), format::director(movie));
    let _ = writeln!(
        out,
        "{} {}",
        "Cast:".bold(),
        format::modal_cast(movie.cast.as_ref())
    );
    let _ = writeln!(
        out,
        "{} {}",
        "Genres:".bold(),
        format::modal_genres(movie.genre.as_ref())
    );
    let _ = writeln!(
        out,
        "{} {}",
        "Poster:".bold(),
        format::poster_url(movie, PosterSize::GridCard)
    );
    let _ = writeln!(out);
    out.push_str(&similar_strip(similar));
    out
}

/// The "more like this" strip
pub fn similar_strip(movies: &[Movie]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "More like this:".bold());

    if movies.is_empty() {
        let _ = writeln!(out, "  {}", "No similar movies found.".dimmed());
        return out;
    }

    for movie in movies {
        let _ = write!(out, "  {} {}", "•".green(), movie.title);
        if let Some(label) = format::match_label(movie) {
            let _ = write!(out, " ({})", label.cyan());
        }
        let _ = writeln!(
            out,
            "  {}",
            format::poster_url(movie, PosterSize::SimilarCard).dimmed()
        );
    }
    out
}
