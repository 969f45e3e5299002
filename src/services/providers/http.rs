/// REST/JSON recommendation backend
///
/// Endpoints:
/// - `GET  /genres`                        → list of genre names
/// - `GET  /movies/by-genre/{genre}?limit` → list of movies
/// - `GET  /movies`                        → list of movies
/// - `POST /recommend {query}`             → list of movies, or `{movies, ...}`
/// - `GET  /health`                        → status object
///
/// No retries and no caching: a failed call is returned to the caller as is.
use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{HealthStatus, Movie, RecommendResponse, RecommendationRequest, Recommendations},
    request_id::{RequestId, REQUEST_ID_HEADER},
    services::providers::RecommendationProvider,
};
use reqwest::{Client as HttpClient, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

#[derive(Clone)]
pub struct HttpRecommendationProvider {
    http_client: HttpClient,
    api_url: Url,
}

impl HttpRecommendationProvider {
    /// Creates a provider for the backend at `api_url`
    pub fn new(api_url: &str, timeout: Duration) -> AppResult<Self> {
        let api_url = Url::parse(api_url)
            .map_err(|e| AppError::InvalidInput(format!("Invalid API URL {}: {}", api_url, e)))?;
        if api_url.cannot_be_a_base() {
            return Err(AppError::InvalidInput(format!(
                "API URL cannot be used as a base: {}",
                api_url
            )));
        }

        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_url,
        })
    }

    /// Creates a provider from the loaded configuration
    pub fn from_config(config: &Config) -> AppResult<Self> {
        Self::new(
            &config.api_url,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Builds `{base}/{segments...}`, percent-encoding each segment
    fn endpoint(&self, segments: &[&str]) -> AppResult<Url> {
        let mut url = self.api_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                AppError::Internal(format!("API URL cannot be a base: {}", self.api_url))
            })?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }

    /// Sends a request tagged with a fresh request ID and decodes the JSON body
    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> AppResult<T> {
        let request_id = RequestId::generate();
        let response = request
            .header(REQUEST_ID_HEADER, request_id.to_string())
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                request_id = %request_id,
                "Failed to deserialize recommendation API response"
            );
            AppError::ExternalApi(format!("Failed to parse API response: {}", e))
        })
    }

    async fn check_status(response: Response) -> AppResult<Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::ExternalApi(format!(
            "API returned status {}: {}",
            status, body
        )))
    }
}

#[async_trait::async_trait]
impl RecommendationProvider for HttpRecommendationProvider {
    async fn genres(&self) -> AppResult<Vec<String>> {
        let url = self.endpoint(&["genres"])?;
        let genres: Vec<String> = self.send_json(self.http_client.get(url)).await?;

        tracing::info!(genres = genres.len(), provider = self.name(), "Genres fetched");

        Ok(genres)
    }

    async fn movies_by_genre(&self, genre: &str, limit: u32) -> AppResult<Vec<Movie>> {
        if genre.is_empty() {
            return Err(AppError::InvalidInput("Genre cannot be empty".to_string()));
        }

        let url = self.endpoint(&["movies", "by-genre", genre])?;
        let movies: Vec<Movie> = self
            .send_json(self.http_client.get(url).query(&[("limit", limit)]))
            .await?;

        tracing::info!(
            genre = %genre,
            limit = limit,
            results = movies.len(),
            provider = self.name(),
            "Genre movies fetched"
        );

        Ok(movies)
    }

    async fn popular_movies(&self) -> AppResult<Vec<Movie>> {
        let url = self.endpoint(&["movies"])?;
        let movies: Vec<Movie> = self.send_json(self.http_client.get(url)).await?;

        tracing::info!(
            results = movies.len(),
            provider = self.name(),
            "Popular movies fetched"
        );

        Ok(movies)
    }

    async fn recommend(&self, request: &RecommendationRequest) -> AppResult<Recommendations> {
        if request.query.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }

        let url = self.endpoint(&["recommend"])?;
        let response: RecommendResponse =
            self.send_json(self.http_client.post(url).json(request)).await?;
        let recommendations = Recommendations::from(response);

        tracing::info!(
            query = %request.query,
            results = recommendations.movies.len(),
            algorithm = recommendations.algorithm_used.as_deref().unwrap_or("default"),
            provider = self.name(),
            "Recommendations fetched"
        );

        Ok(recommendations)
    }

    async fn health(&self) -> AppResult<HealthStatus> {
        let url = self.endpoint(&["health"])?;
        self.send_json(self.http_client.get(url)).await
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
