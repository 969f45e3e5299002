//! Display strings for movie fields.

use crate::models::{ListField, Movie, Resolved};

const CARD_GENRE_CAP: usize = 3;
const MODAL_CAST_CAP: usize = 5;
const UNKNOWN: &str = "Unknown";
const NO_DESCRIPTION: &str = "No description available.";

/// Poster surfaces, each with its own placeholder size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosterSize {
    RowCard,
    GridCard,
    SimilarCard,
}

impl PosterSize {
    fn placeholder(self) -> &'static str {
        match self {
            PosterSize::RowCard => "https://via.placeholder.com/300x450?text=No+Image",
            PosterSize::GridCard => "https://via.placeholder.com/500x750?text=No+Image",
            PosterSize::SimilarCard => "https://via.placeholder.com/130x195?text=No+Image",
        }
    }
}

pub fn poster_url(movie: &Movie, size: PosterSize) -> &str {
    non_empty(movie.image_url.as_deref()).unwrap_or_else(|| size.placeholder())
}

/// `⭐ 7.9 / 10`, as shown in the detail view
pub fn rating_label(movie: &Movie) -> String {
    format!("⭐ {} / 10", rating_value(movie))
}

/// `⭐ 7.9`, as shown on row cards
pub fn card_rating_label(movie: &Movie) -> String {
    format!("⭐ {}", rating_value(movie))
}

fn rating_value(movie: &Movie) -> String {
    match movie.vote_average.filter(|v| *v != 0.0) {
        Some(v) => format!("{:.1}", v),
        None => "N/A".to_string(),
    }
}

/// `87% Match`, or nothing when the movie was not scored
pub fn match_label(movie: &Movie) -> Option<String> {
    movie
        .match_score()
        .map(|score| format!("{}% Match", (score * 100.0).round() as i64))
}

/// First few genres for a card; empty when there are none
pub fn card_genres(genre: Option<&ListField>) -> String {
    let Some(field) = genre.filter(|f| !f.is_blank()) else {
        return String::new();
    };
    match field.resolve() {
        Resolved::Parsed(items) => join_capped(items, CARD_GENRE_CAP),
        Resolved::NotAList | Resolved::Malformed => field.raw(),
    }
}

/// Every genre, for the detail view
pub fn modal_genres(genre: Option<&ListField>) -> String {
    modal_list(genre, usize::MAX)
}

/// Leading cast members, for the detail view
pub fn modal_cast(cast: Option<&ListField>) -> String {
    modal_list(cast, MODAL_CAST_CAP)
}

fn modal_list(field: Option<&ListField>, cap: usize) -> String {
    let Some(field) = field.filter(|f| !f.is_blank()) else {
        return UNKNOWN.to_string();
    };
    match field.resolve() {
        Resolved::Parsed(items) => join_capped(items, cap),
        Resolved::NotAList => UNKNOWN.to_string(),
        Resolved::Malformed => field.raw(),
    }
}

pub fn description(movie: &Movie) -> &str {
    non_empty(movie.description.as_deref()).unwrap_or(NO_DESCRIPTION)
}

pub fn director(movie: &Movie) -> &str {
    non_empty(movie.director.as_deref()).unwrap_or(UNKNOWN)
}

fn join_capped(items: Vec<String>, cap: usize) -> String {
    items.into_iter().take(cap).collect::<Vec<_>>().join(", ")
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> ListField {
        ListField::Text(value.to_string())
    }

    #[test]
    fn test_rating_labels() {
        let rated = Movie {
            vote_average: Some(8.2),
            ..Movie::titled("Heat")
        };
        assert_eq!(rating_label(&rated), "⭐ 8.2 / 10");
        assert_eq!(card_rating_label(&rated), "⭐ 8.2");

        let unrated = Movie {
            vote_average: Some(0.0),
            ..Movie::titled("Heat")
        };
        assert_eq!(rating_label(&unrated), "⭐ N/A / 10");
        assert_eq!(card_rating_label(&Movie::titled("Heat")), "⭐ N/A");
    }

    #[test]
    fn test_match_label_rounds() {
        let movie = Movie {
            score: Some(0.876),
            ..Movie::titled("Heat")
        };
        assert_eq!(match_label(&movie).as_deref(), Some("88% Match"));
        assert_eq!(match_label(&Movie::titled("Heat")), None);
    }

    #[test]
    fn test_card_genres() {
        let field = text("['Action', 'Crime', 'Drama', 'Thriller']");
        assert_eq!(card_genres(Some(&field)), "Action, Crime, Drama");
        assert_eq!(card_genres(Some(&text("Action"))), "Action");
        assert_eq!(card_genres(None), "");
    }

    #[test]
    fn test_modal_genres_and_cast() {
        let genres = text("['Action', 'Crime', 'Drama', 'Thriller']");
        assert_eq!(modal_genres(Some(&genres)), "Action, Crime, Drama, Thriller");
        assert_eq!(modal_genres(None), "Unknown");
        assert_eq!(modal_genres(Some(&text("7"))), "Unknown");

        let cast = ListField::List(
            ["Al Pacino", "Robert De Niro", "Val Kilmer", "Jon Voight", "Tom Sizemore", "Ashley Judd"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        );
        assert_eq!(
            modal_cast(Some(&cast)),
            "Al Pacino, Robert De Niro, Val Kilmer, Jon Voight, Tom Sizemore"
        );
        assert_eq!(modal_cast(Some(&text("Al Pacino"))), "Al Pacino");
    }

    #[test]
    fn test_text_fallbacks() {
        let bare = Movie {
            description: Some(String::new()),
            ..Movie::titled("Heat")
        };
        assert_eq!(description(&bare), "No description available.");
        assert_eq!(director(&bare), "Unknown");
        assert_eq!(
            poster_url(&bare, PosterSize::SimilarCard),
            "https://via.placeholder.com/130x195?text=No+Image"
        );

        let full = Movie {
            director: Some("Michael Mann".to_string()),
            image_url: Some("https://image.tmdb.org/t/p/w500/heat.jpg".to_string()),
            ..Movie::titled("Heat")
        };
        assert_eq!(director(&full), "Michael Mann");
        assert_eq!(
            poster_url(&full, PosterSize::GridCard),
            "https://image.tmdb.org/t/p/w500/heat.jpg"
        );
    }
}
