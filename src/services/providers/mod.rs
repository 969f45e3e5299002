/// Recommendation backend abstraction
///
/// The terminal front end only ever talks to the backend through this trait,
/// which keeps the browsing logic testable against a mock and leaves room for
/// backends other than the plain REST one.
use crate::{
    error::AppResult,
    models::{HealthStatus, Movie, RecommendationRequest, Recommendations},
};

pub mod http;

pub use http::HttpRecommendationProvider;

/// Trait for recommendation backends
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationProvider: Send + Sync {
    /// List every genre the backend can group movies by
    async fn genres(&self) -> AppResult<Vec<String>>;

    /// Most popular movies within one genre, at most `limit` of them
    async fn movies_by_genre(&self, genre: &str, limit: u32) -> AppResult<Vec<Movie>>;

    /// Most popular movies overall
    async fn popular_movies(&self) -> AppResult<Vec<Movie>>;

    /// Rank movies against a free-text query
    ///
    /// Accepts both the bare-list and the wrapped response shape.
    async fn recommend(&self, request: &RecommendationRequest) -> AppResult<Recommendations>;

    /// Backend liveness and readiness
    async fn health(&self) -> AppResult<HealthStatus>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
