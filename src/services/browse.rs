use std::sync::Arc;

use crate::{
    models::{Algorithm, Movie, RecommendationRequest, Recommendations},
    services::{
        detail::{DetailModal, ModalView, SimilarSource},
        providers::RecommendationProvider,
        query,
    },
};

/// One row of the home screen: a genre and its most popular movies
#[derive(Debug, Clone, PartialEq)]
pub struct GenreSection {
    pub genre: String,
    /// Stable anchor for the row, e.g. `genre-Science-Fiction`
    pub row_id: String,
    pub movies: Vec<Movie>,
}

/// Anchor ID of a genre row
pub fn genre_row_id(genre: &str) -> String {
    format!("genre-{}", genre.split_whitespace().collect::<Vec<_>>().join("-"))
}

/// Browsing and search flows on top of a recommendation backend.
///
/// Backend failures are logged and turned into empty results; nothing is
/// retried and no error reaches the caller.
#[derive(Clone)]
pub struct BrowseService {
    provider: Arc<dyn RecommendationProvider>,
    algorithm: Option<Algorithm>,
    top_n: Option<u32>,
}

impl BrowseService {
    pub fn new(provider: Arc<dyn RecommendationProvider>) -> Self {
        Self {
            provider,
            algorithm: None,
            top_n: None,
        }
    }

    /// Ranking options forwarded to backends that understand them
    pub fn with_ranking(mut self, algorithm: Option<Algorithm>, top_n: Option<u32>) -> Self {
        self.algorithm = algorithm;
        self.top_n = top_n;
        self
    }

    /// Loads one section per genre, in the order the backend lists them.
    ///
    /// Loading stops at the first failing genre; rows already loaded are kept.
    pub async fn genre_sections(&self, limit: u32) -> Vec<GenreSection> {
        let genres = match self.provider.genres().await {
            Ok(genres) => genres,
            Err(e) => {
                tracing::error!(error = %e, provider = self.provider.name(), "Error loading genres");
                return Vec::new();
            }
        };

        let mut sections = Vec::with_capacity(genres.len());
        for genre in genres {
            match self.provider.movies_by_genre(&genre, limit).await {
                Ok(movies) => sections.push(GenreSection {
                    row_id: genre_row_id(&genre),
                    genre,
                    movies,
                }),
                Err(e) => {
                    tracing::error!(
                        error = %e,
                        genre = %genre,
                        loaded = sections.len(),
                        "Error loading genre sections"
                    );
                    break;
                }
            }
        }

        sections
    }

    /// Movies of a single genre row; empty when the backend fails
    pub async fn genre_movies(&self, genre: &str, limit: u32) -> Vec<Movie> {
        match self.provider.movies_by_genre(genre, limit).await {
            Ok(movies) => movies,
            Err(e) => {
                tracing::error!(error = %e, genre = %genre, "Error loading genre movies");
                Vec::new()
            }
        }
    }

    /// Runs a free-text search; a blank query sends nothing
    pub async fn search(&self, query: &str) -> Recommendations {
        if query.trim().is_empty() {
            return Recommendations::default();
        }

        let request = RecommendationRequest::new(query)
            .with_algorithm(self.algorithm)
            .with_top_n(self.top_n);

        match self.provider.recommend(&request).await {
            Ok(recommendations) => recommendations,
            Err(e) => {
                tracing::error!(error = %e, query = %query, "Error getting recommendations");
                Recommendations::default()
            }
        }
    }

    /// Movies similar to `movie`, excluding the movie itself
    pub async fn similar_movies(&self, movie: &Movie) -> Vec<Movie> {
        let search_query = query::synthesize(movie);
        self.search(&search_query)
            .await
            .movies
            .into_iter()
            .filter(|m| !m.same_id(movie))
            .collect()
    }

    /// Contents of the "more like this" strip for an open detail view
    pub async fn similar_for(&self, view: &ModalView) -> Vec<Movie> {
        match &view.similar {
            SimilarSource::Provided(movies) => movies.clone(),
            SimilarSource::Fetch => self.similar_movies(&view.movie).await,
        }
    }

    /// "Find similar" from an open detail view: closes it and searches with
    /// the query synthesized from its movie.
    ///
    /// Returns the query alongside the results so it can be shown as the new
    /// search text. Nothing happens when no movie is open.
    pub async fn find_similar(&self, modal: &mut DetailModal) -> Option<(String, Recommendations)> {
        let movie = modal.close()?;
        let search_query = query::synthesize(&movie);
        let results = self.search(&search_query).await;
        Some((search_query, results))
    }
}
