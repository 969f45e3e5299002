use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt::Display;

pub mod list_field;
pub mod recommendation;

pub use list_field::{ListField, Resolved};
pub use recommendation::{
    Algorithm, HealthStatus, QueryInfo, RecommendResponse, RecommendationRequest,
    Recommendations,
};

/// Identifier of a movie as assigned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum MovieId {
    /// TMDB-style numeric ID (e.g., 155)
    Numeric(i64),
    /// Anything else the backend hands out
    Text(String),
}

impl Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MovieId::Numeric(id) => write!(f, "{}", id),
            MovieId::Text(id) => write!(f, "{}", id),
        }
    }
}

impl<'de> Deserialize<'de> for MovieId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Number(n) => match n.as_i64() {
                Some(id) => MovieId::Numeric(id),
                None => MovieId::Text(n.to_string()),
            },
            Value::String(s) => MovieId::Text(s),
            other => MovieId::Text(other.to_string()),
        })
    }
}

/// A movie record as returned by the recommendation backend.
///
/// Only `title`, `genre` and `keywords` feed query synthesis; the rest is
/// display data. Numeric fields are read leniently because the backend fills
/// missing values with empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(default)]
    pub id: Option<MovieId>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default)]
    pub genre: Option<ListField>,
    #[serde(default)]
    pub keywords: Option<ListField>,
    #[serde(default)]
    pub cast: Option<ListField>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub director: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub vote_average: Option<f64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub vote_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub popularity: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub final_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub similarity_score: Option<f64>,
}

impl Movie {
    /// Creates a movie with only a title set
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Match score to show next to the movie, if the backend scored it
    pub fn match_score(&self) -> Option<f64> {
        let nonzero = |score: &f64| *score != 0.0;
        self.score
            .filter(nonzero)
            .or_else(|| self.final_score.filter(nonzero))
    }

    /// Whether two records describe the same backend movie
    pub fn same_id(&self, other: &Movie) -> bool {
        self.id == other.id
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_string(deserializer)?.unwrap_or_default())
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite()))
}

fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|v| v.is_finite() && *v >= 0.0)
                .map(|v| v as u64)
        }),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_id_display() {
        assert_eq!(format!("{}", MovieId::Numeric(155)), "155");
        assert_eq!(format!("{}", MovieId::Text("tt0468569".to_string())), "tt0468569");
    }

    #[test]
    fn test_movie_deserialization_full_record() {
        let json = r#"{
            "id": 155,
            "title": "The Dark Knight",
            "genre": "['Drama', 'Action', 'Crime', 'Thriller']",
            "keywords": ["dc comics", "joker"],
            "cast": "['Christian Bale', 'Heath Ledger']",
            "director": "Christopher Nolan",
            "description": "Batman raises the stakes in his war on crime.",
            "image_url": "https://image.tmdb.org/t/p/w500/qJ2tW6WMUDux911r6m7haRef0WH.jpg",
            "vote_average": 8.2,
            "vote_count": 12269,
            "popularity": 123.167259,
            "score": 0.95
        }"#;

        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.id, Some(MovieId::Numeric(155)));
        assert_eq!(movie.title, "The Dark Knight");
        assert_eq!(
            movie.genre,
            Some(ListField::Text("['Drama', 'Action', 'Crime', 'Thriller']".to_string()))
        );
        assert_eq!(
            movie.keywords,
            Some(ListField::List(vec!["dc comics".to_string(), "joker".to_string()]))
        );
        assert_eq!(movie.director.as_deref(), Some("Christopher Nolan"));
        assert_eq!(movie.vote_average, Some(8.2));
        assert_eq!(movie.vote_count, Some(12269));
        assert_eq!(movie.score, Some(0.95));
    }

    #[test]
    fn test_movie_deserialization_blank_numbers() {
        let json = r#"{
            "id": 12,
            "title": "Finding Nemo",
            "vote_average": "",
            "vote_count": "",
            "score": null
        }"#;

        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.vote_average, None);
        assert_eq!(movie.vote_count, None);
        assert_eq!(movie.score, None);
        assert_eq!(movie.genre, None);
        assert_eq!(movie.keywords, None);
    }

    #[test]
    fn test_movie_deserialization_missing_title() {
        let movie: Movie = serde_json::from_str(r#"{"id": "abc"}"#).unwrap();
        assert_eq!(movie.title, "");
        assert_eq!(movie.id, Some(MovieId::Text("abc".to_string())));
    }

    #[test]
    fn test_match_score_prefers_score() {
        let movie = Movie {
            score: Some(0.8),
            final_score: Some(0.6),
            ..Movie::titled("Heat")
        };
        assert_eq!(movie.match_score(), Some(0.8));
    }

    #[test]
    fn test_match_score_falls_back_to_final_score() {
        let movie = Movie {
            final_score: Some(0.6),
            ..Movie::titled("Heat")
        };
        assert_eq!(movie.match_score(), Some(0.6));
    }

    #[test]
    fn test_zero_score_is_hidden() {
        let movie = Movie {
            score: Some(0.0),
            ..Movie::titled("Heat")
        };
        assert_eq!(movie.match_score(), None);
    }

    #[test]
    fn test_zero_score_falls_back_to_final_score() {
        let movie = Movie {
            score: Some(0.0),
            final_score: Some(0.73),
            ..Movie::titled("Heat")
        };
        assert_eq!(movie.match_score(), Some(0.73));
    }

    #[test]
    fn test_same_id() {
        let a = Movie {
            id: Some(MovieId::Numeric(949)),
            ..Movie::titled("Heat")
        };
        let b = Movie {
            id: Some(MovieId::Numeric(949)),
            ..Movie::titled("Heat (1995)")
        };
        let c = Movie {
            id: Some(MovieId::Numeric(680)),
            ..Movie::titled("Pulp Fiction")
        };
        assert!(a.same_id(&b));
        assert!(!a.same_id(&c));
    }
}
