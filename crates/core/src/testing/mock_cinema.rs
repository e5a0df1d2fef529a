//! Mock cinema provider for testing.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::provider::{CinemaFilmDetails, CinemaProvider, ProviderError};

/// Mock implementation of the CinemaProvider trait.
///
/// Provides controllable behavior for testing:
/// - Return configurable film details
/// - Track requested ids for assertions
/// - Simulate failures and slow responses
pub struct MockCinemaProvider {
    /// Films keyed by id string.
    films: Arc<RwLock<HashMap<String, CinemaFilmDetails>>>,
    /// Ids requested so far.
    requests: Arc<RwLock<Vec<String>>>,
    /// If set, the next request will fail with this error.
    next_error: Arc<RwLock<Option<ProviderError>>>,
    /// If set, every response is delayed by this duration.
    response_delay: Arc<RwLock<Option<Duration>>>,
}

impl Default for MockCinemaProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCinemaProvider {
    /// Create a new empty mock cinema provider.
    pub fn new() -> Self {
        Self {
            films: Arc::new(RwLock::new(HashMap::new())),
            requests: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
            response_delay: Arc::new(RwLock::new(None)),
        }
    }

    /// Add a film, keyed by the string form of its id.
    pub async fn add_film(&self, details: CinemaFilmDetails) {
        self.films
            .write()
            .await
            .insert(details.id.to_string(), details);
    }

    /// Configure the next request to fail with the given error.
    pub async fn set_next_error(&self, error: ProviderError) {
        *self.next_error.write().await = Some(error);
    }

    /// Delay every response by the given duration.
    pub async fn set_response_delay(&self, delay: Duration) {
        *self.response_delay.write().await = Some(delay);
    }

    /// Get all requested film ids.
    pub async fn recorded_requests(&self) -> Vec<String> {
        self.requests.read().await.clone()
    }

    /// Number of requests performed.
    pub async fn request_count(&self) -> usize {
        self.requests.read().await.len()
    }
}

#[async_trait]
impl CinemaProvider for MockCinemaProvider {
    async fn film_details(&self, film_id: &str) -> Result<CinemaFilmDetails, ProviderError> {
        let delay = *self.response_delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(err) = self.next_error.write().await.take() {
            return Err(err);
        }

        self.requests.write().await.push(film_id.to_string());

        self.films
            .read()
            .await
            .get(film_id)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound(format!("film {} not found", film_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    #[tokio::test]
    async fn test_film_details() {
        let cinema = MockCinemaProvider::new();
        cinema.add_film(fixtures::cinema_film("A Film", 7)).await;

        let details = cinema.film_details("7").await.unwrap();
        assert_eq!(details.title, "A Film");
        assert_eq!(cinema.recorded_requests().await, vec!["7".to_string()]);
    }

    #[tokio::test]
    async fn test_not_found() {
        let cinema = MockCinemaProvider::new();

        let result = cinema.film_details("99").await;
        assert!(matches!(result, Err(ProviderError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_error_injection_consumed_once() {
        let cinema = MockCinemaProvider::new();
        cinema.add_film(fixtures::cinema_film("A Film", 7)).await;
        cinema.set_next_error(ProviderError::RateLimited).await;

        assert!(cinema.film_details("7").await.is_err());
        assert!(cinema.film_details("7").await.is_ok());
    }
}
