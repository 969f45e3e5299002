use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display;

use super::Movie;

/// Ranking algorithm understood by the enhanced backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Tfidf,
    Bm25,
    Sbert,
    Hybrid,
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Algorithm::Tfidf => "tfidf",
            Algorithm::Bm25 => "bm25",
            Algorithm::Sbert => "sbert",
            Algorithm::Hybrid => "hybrid",
        };
        write!(f, "{}", name)
    }
}

/// Body of `POST /recommend`
///
/// The plain backend only reads `query`; the optional fields are omitted
/// unless set so both backends accept the same body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<Algorithm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_n: Option<u32>,
}

impl RecommendationRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            algorithm: None,
            top_n: None,
        }
    }

    pub fn with_algorithm(mut self, algorithm: Option<Algorithm>) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_top_n(mut self, top_n: Option<u32>) -> Self {
        self.top_n = top_n;
        self
    }
}

/// Raw `POST /recommend` response: a bare list, or the enhanced wrapper
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RecommendResponse {
    List(Vec<Movie>),
    Wrapped {
        #[serde(default)]
        movies: Vec<Movie>,
        #[serde(default)]
        query_info: Option<QueryInfo>,
        #[serde(default)]
        algorithm_used: Option<String>,
    },
}

/// How the enhanced backend interpreted a query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryInfo {
    #[serde(default)]
    pub original_query: String,
    #[serde(default)]
    pub query_type: String,
    #[serde(default)]
    pub weights: HashMap<String, f64>,
}

/// Normalized recommendation results
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recommendations {
    pub movies: Vec<Movie>,
    pub query_info: Option<QueryInfo>,
    pub algorithm_used: Option<String>,
}

impl From<RecommendResponse> for Recommendations {
    fn from(response: RecommendResponse) -> Self {
        match response {
            RecommendResponse::List(movies) => Recommendations {
                movies,
                ..Default::default()
            },
            RecommendResponse::Wrapped {
                movies,
                query_info,
                algorithm_used,
            } => Recommendations {
                movies,
                query_info,
                algorithm_used,
            },
        }
    }
}

/// Response of `GET /health`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub movies_loaded: Option<u64>,
    #[serde(default)]
    pub sbert_model: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_request_body() {
        let body = serde_json::to_value(RecommendationRequest::new("space western")).unwrap();
        assert_eq!(body, json!({ "query": "space western" }));
    }

    #[test]
    fn test_enhanced_request_body() {
        let request = RecommendationRequest::new("heist")
            .with_algorithm(Some(Algorithm::Sbert))
            .with_top_n(Some(15));
        let body = serde_json::to_value(request).unwrap();
        assert_eq!(
            body,
            json!({ "query": "heist", "algorithm": "sbert", "top_n": 15 })
        );
    }

    #[test]
    fn test_list_response() {
        let json = r#"[{"id": 1, "title": "Alien", "score": 0.9}]"#;
        let response: RecommendResponse = serde_json::from_str(json).unwrap();
        let recs = Recommendations::from(response);
        assert_eq!(recs.movies.len(), 1);
        assert_eq!(recs.movies[0].title, "Alien");
        assert_eq!(recs.query_info, None);
        assert_eq!(recs.algorithm_used, None);
    }

    #[test]
    fn test_wrapped_response() {
        let json = r#"{
            "movies": [{"id": 1, "title": "Alien", "final_score": 0.7}],
            "query_info": {
                "original_query": "space horror",
                "query_type": "genre",
                "weights": {"sbert": 0.4, "tfidf": 0.3, "bm25": 0.3}
            },
            "algorithm_used": "Hybrid (TF-IDF + BM25 + SBERT) - genre"
        }"#;
        let response: RecommendResponse = serde_json::from_str(json).unwrap();
        let recs = Recommendations::from(response);
        assert_eq!(recs.movies.len(), 1);
        let info = recs.query_info.unwrap();
        assert_eq!(info.query_type, "genre");
        assert_eq!(info.weights.get("sbert"), Some(&0.4));
        assert_eq!(
            recs.algorithm_used.as_deref(),
            Some("Hybrid (TF-IDF + BM25 + SBERT) - genre")
        );
    }

    #[test]
    fn test_wrapper_without_movies_is_empty() {
        let response: RecommendResponse = serde_json::from_str(r#"{"detail": "x"}"#).unwrap();
        assert!(Recommendations::from(response).movies.is_empty());
    }
}
