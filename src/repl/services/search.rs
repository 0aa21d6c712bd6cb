//! # Search Service
//!
//! Dispatches search requests keyed by [`QueryKey`]. Cached keys are served
//! immediately, identical in-flight keys are requested once, and every fetch
//! runs in its own tokio task that reports back through a channel.

use crate::config::AppConfig;
use crate::repl::models::{MovieSearchResponse, QueryKey};
use crate::repl::services::query_cache::{CacheLookup, QueryCache};
use crate::repl::services::tmdb::TmdbClient;
use anyhow::Result;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Message type for async search response handling
#[derive(Debug, Clone)]
pub enum SearchMessage {
    /// Successful response for `key`
    Success {
        key: QueryKey,
        response: Arc<MovieSearchResponse>,
    },
    /// Transport, status or decode failure for `key`
    Error { key: QueryKey, message: String },
}

impl SearchMessage {
    pub fn key(&self) -> &QueryKey {
        match self {
            SearchMessage::Success { key, .. } | SearchMessage::Error { key, .. } => key,
        }
    }
}

/// Outcome of asking the service for a key
#[derive(Debug, Clone, PartialEq)]
pub enum SearchRequest {
    /// Served from cache; `revalidating` tells whether a refetch was started
    Cached {
        response: Arc<MovieSearchResponse>,
        revalidating: bool,
    },
    /// Nothing cached; a fetch is in flight
    Pending,
}

pub struct SearchService {
    client: TmdbClient,
    cache: QueryCache,
    in_flight: HashSet<QueryKey>,
    /// Channel for receiving async search responses
    response_receiver: mpsc::Receiver<SearchMessage>,
    /// Channel sender for async tasks to send responses
    response_sender: mpsc::Sender<SearchMessage>,
}

impl SearchService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = TmdbClient::new(config)?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: TmdbClient, config: &AppConfig) -> Self {
        let (response_sender, response_receiver) = mpsc::channel(16);
        Self {
            client,
            cache: QueryCache::new(config.stale_time, config.cache_capacity),
            in_flight: HashSet::new(),
            response_receiver,
            response_sender,
        }
    }

    pub fn client(&self) -> &TmdbClient {
        &self.client
    }

    /// Request `key`, serving the cache where possible
    ///
    /// Must be called inside a tokio runtime when a fetch has to be spawned.
    pub fn request(&mut self, key: &QueryKey) -> SearchRequest {
        match self.cache.lookup(key) {
            CacheLookup::Fresh(response) => {
                tracing::debug!("Serving {} from cache", key);
                SearchRequest::Cached {
                    response,
                    revalidating: false,
                }
            }
            CacheLookup::Stale(response) => {
                tracing::debug!("Serving {} from cache, revalidating", key);
                self.spawn_fetch(key);
                SearchRequest::Cached {
                    response,
                    revalidating: true,
                }
            }
            CacheLookup::Miss => {
                self.spawn_fetch(key);
                SearchRequest::Pending
            }
        }
    }

    /// Whether a fetch for `key` is in flight
    pub fn is_in_flight(&self, key: &QueryKey) -> bool {
        self.in_flight.contains(key)
    }

    pub fn in_flight_count(&self) -> usize {
        self.in_flight.len()
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Check if there are any completed fetches (non-blocking)
    pub fn poll_message(&mut self) -> Option<SearchMessage> {
        let message = self.response_receiver.try_recv().ok()?;
        self.record(&message);
        Some(message)
    }

    /// Wait for the next completed fetch
    pub async fn next_message(&mut self) -> Option<SearchMessage> {
        let message = self.response_receiver.recv().await?;
        self.record(&message);
        Some(message)
    }

    fn record(&mut self, message: &SearchMessage) {
        self.in_flight.remove(message.key());
        if let SearchMessage::Success { key, response } = message {
            self.cache.insert(key.clone(), Arc::clone(response));
        }
    }

    fn spawn_fetch(&mut self, key: &QueryKey) {
        if !self.in_flight.insert(key.clone()) {
            tracing::debug!("Fetch for {} already in flight", key);
            return;
        }

        let client = self.client.clone();
        let result_sender = self.response_sender.clone();
        let key = key.clone();

        tokio::spawn(async move {
            let message = match client.fetch_movies(&key.query, key.page).await {
                Ok(response) => SearchMessage::Success {
                    key,
                    response: Arc::new(response),
                },
                Err(e) => {
                    // Keep the full error chain for diagnostics
                    let mut error_message = format!("{e}");
                    for cause in e.chain().skip(1) {
                        error_message.push_str(&format!("\n  Caused by: {cause}"));
                    }
                    tracing::error!("Search for {} failed: {}", key, error_message);
                    SearchMessage::Error {
                        key,
                        message: error_message,
                    }
                }
            };

            // Receiver is gone only during shutdown
            let _ = result_sender.send(message).await;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn body(page: u32) -> serde_json::Value {
        serde_json::json!({
            "page": page,
            "results": [{"id": page, "title": format!("Movie {page}")}],
            "total_pages": 3,
            "total_results": 3
        })
    }

    fn service_for(server: &MockServer, stale_time: Duration) -> SearchService {
        let config = AppConfig {
            api_url: server.uri(),
            token: "t".to_string(),
            stale_time,
            ..AppConfig::default()
        };
        SearchService::new(&config).unwrap()
    }

    async fn next(service: &mut SearchService) -> SearchMessage {
        tokio::time::timeout(Duration::from_secs(5), service.next_message())
            .await
            .expect("timed out waiting for search message")
            .expect("channel closed")
    }

    #[tokio::test]
    async fn miss_should_fetch_and_cache() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body(1)))
            .expect(1)
            .mount(&server)
            .await;

        let mut service = service_for(&server, Duration::from_secs(60));
        let key = QueryKey::new("batman", 1);

        assert_eq!(service.request(&key), SearchRequest::Pending);
        assert!(service.is_in_flight(&key));

        match next(&mut service).await {
            SearchMessage::Success { key: got, response } => {
                assert_eq!(got, key);
                assert_eq!(response.results[0].title, "Movie 1");
            }
            other => panic!("Expected success, got {other:?}"),
        }
        assert!(!service.is_in_flight(&key));
        assert!(service.cache().contains(&key));

        // Fresh entry: served without another request
        match service.request(&key) {
            SearchRequest::Cached { revalidating, .. } => assert!(!revalidating),
            other => panic!("Expected cached response, got {other:?}"),
        }
        assert_eq!(service.in_flight_count(), 0);
    }

    #[tokio::test]
    async fn identical_in_flight_keys_should_fetch_once() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(body(1))
                    .set_delay(Duration::from_millis(100)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mut service = service_for(&server, Duration::from_secs(60));
        let key = QueryKey::new("batman", 1);

        assert_eq!(service.request(&key), SearchRequest::Pending);
        assert_eq!(service.request(&key), SearchRequest::Pending);
        assert_eq!(service.in_flight_count(), 1);

        next(&mut service).await;
        assert!(service.poll_message().is_none());
    }

    #[tokio::test]
    async fn stale_entry_should_be_served_and_revalidated() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body(1)))
            .expect(2)
            .mount(&server)
            .await;

        let mut service = service_for(&server, Duration::ZERO);
        let key = QueryKey::new("batman", 1);

        service.request(&key);
        next(&mut service).await;

        match service.request(&key) {
            SearchRequest::Cached {
                response,
                revalidating,
            } => {
                assert!(revalidating);
                assert_eq!(response.page, 1);
            }
            other => panic!("Expected cached response, got {other:?}"),
        }
        assert!(matches!(
            next(&mut service).await,
            SearchMessage::Success { .. }
        ));
    }

    #[tokio::test]
    async fn failure_should_report_error_and_skip_cache() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("query", "batman"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let mut service = service_for(&server, Duration::from_secs(60));
        let key = QueryKey::new("batman", 1);
        service.request(&key);

        match next(&mut service).await {
            SearchMessage::Error { key: got, message } => {
                assert_eq!(got, key);
                assert!(message.contains("500"));
            }
            other => panic!("Expected error, got {other:?}"),
        }
        assert!(!service.cache().contains(&key));
        assert!(!service.is_in_flight(&key));
    }
}
