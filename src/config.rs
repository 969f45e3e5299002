use serde::Deserialize;

use crate::models::Algorithm;

/// Client configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Recommendation API base URL
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Movies fetched per genre row
    #[serde(default = "default_genre_row_limit")]
    pub genre_row_limit: u32,

    /// Per-request timeout against the recommendation API
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Ranking algorithm requested from enhanced backends
    #[serde(default)]
    pub default_algorithm: Option<Algorithm>,

    /// Result count requested from enhanced backends
    #[serde(default)]
    pub default_top_n: Option<u32>,
}

fn default_api_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_genre_row_limit() -> u32 {
    20
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            genre_row_limit: default_genre_row_limit(),
            request_timeout_secs: default_request_timeout_secs(),
            default_algorithm: None,
            default_top_n: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        Ok(config.normalized())
    }

    /// Replaces the API base URL, e.g. from a command-line override
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self.normalized()
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.api_url.trim_end_matches('/').len();
        self.api_url.truncate(trimmed);
        self
    }
}
