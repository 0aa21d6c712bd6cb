//! # TMDB Client
//!
//! Issues movie search requests against the configured endpoint.

use crate::config::AppConfig;
use crate::repl::models::{Movie, MovieSearchResponse};
use anyhow::{Context, Result};

/// Thin wrapper over a reqwest client carrying endpoint and credentials
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    api_url: String,
    token: String,
    language: Option<String>,
}

impl TmdbClient {
    /// Create a client from resolved configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        tracing::debug!("Creating TmdbClient for {}", config.api_url);
        let http = reqwest::Client::builder()
            .user_agent(concat!("cinesearch/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            token: config.token.clone(),
            language: config.language.clone(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Fetch one page of search results
    ///
    /// Non-success statuses become errors; nothing is retried.
    pub async fn fetch_movies(&self, query: &str, page: u32) -> Result<MovieSearchResponse> {
        let mut params = vec![
            ("query", query.to_string()),
            ("page", page.max(1).to_string()),
        ];
        if let Some(language) = &self.language {
            params.push(("language", language.clone()));
        }

        tracing::debug!("GET {} query={:?} page={}", self.api_url, query, page);

        let response = self
            .http
            .get(&self.api_url)
            .query(&params)
            .bearer_auth(&self.token)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", self.api_url))?;

        let status = response.status();
        let response = response
            .error_for_status()
            .with_context(|| format!("Search request rejected with status {status}"))?;

        let body = response
            .json::<MovieSearchResponse>()
            .await
            .context("Failed to decode search response")?;

        tracing::debug!(
            "Received page {}/{} with {} results",
            body.page,
            body.total_pages,
            body.results.len()
        );
        Ok(body)
    }

    /// Fetch one page and return only the movies, without pagination metadata
    pub async fn fetch_movie_list(&self, query: &str, page: u32) -> Result<Vec<Movie>> {
        Ok(self.fetch_movies(query, page).await?.results)
    }
}
