//! Mock movie catalog for testing.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::provider::{MovieCatalog, MovieDetails, MovieSearchHit, ProviderError};

/// A recorded catalog query for test assertions.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCatalogQuery {
    SearchMovies { query: String, year: i32 },
    MovieDetails { movie_id: u32 },
}

/// Mock implementation of the MovieCatalog trait.
///
/// Provides controllable behavior for testing:
/// - Return configurable search results, preserving their order
/// - Return configurable movie details
/// - Track queries for assertions
/// - Simulate failures and slow responses
pub struct MockMovieCatalog {
    /// Ordered search results to return.
    search_results: Arc<RwLock<Vec<MovieSearchHit>>>,
    /// Movies keyed by catalog id.
    movies: Arc<RwLock<HashMap<u32, MovieDetails>>>,
    /// Recorded queries.
    queries: Arc<RwLock<Vec<RecordedCatalogQuery>>>,
    /// If set, the next operation will fail with this error.
    next_error: Arc<RwLock<Option<ProviderError>>>,
    /// If set, every response is delayed by this duration.
    response_delay: Arc<RwLock<Option<Duration>>>,
}

impl Default for MockMovieCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MockMovieCatalog {
    /// Create a new empty mock movie catalog.
    pub fn new() -> Self {
        Self {
            search_results: Arc::new(RwLock::new(Vec::new())),
            movies: Arc::new(RwLock::new(HashMap::new())),
            queries: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
            response_delay: Arc::new(RwLock::new(None)),
        }
    }

    /// Set the ordered search results every search returns.
    pub async fn set_search_results(&self, hits: Vec<MovieSearchHit>) {
        *self.search_results.write().await = hits;
    }

    /// Add a movie keyed by its catalog id.
    pub async fn add_movie(&self, movie: MovieDetails) {
        self.movies.write().await.insert(movie.id, movie);
    }

    /// Configure the next operation to fail with the given error.
    pub async fn set_next_error(&self, error: ProviderError) {
        *self.next_error.write().await = Some(error);
    }

    /// Delay every response by the given duration.
    pub async fn set_response_delay(&self, delay: Duration) {
        *self.response_delay.write().await = Some(delay);
    }

    /// Get all recorded queries.
    pub async fn recorded_queries(&self) -> Vec<RecordedCatalogQuery> {
        self.queries.read().await.clone()
    }

    /// Number of queries performed.
    pub async fn query_count(&self) -> usize {
        self.queries.read().await.len()
    }

    async fn simulate_latency(&self) {
        let delay = *self.response_delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    async fn take_error(&self) -> Option<ProviderError> {
        self.next_error.write().await.take()
    }

    async fn record(&self, query: RecordedCatalogQuery) {
        self.queries.write().await.push(query);
    }
}

#[async_trait]
impl MovieCatalog for MockMovieCatalog {
    async fn search_movies(
        &self,
        query: &str,
        year: i32,
    ) -> Result<Vec<MovieSearchHit>, ProviderError> {
        self.simulate_latency().await;

        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.record(RecordedCatalogQuery::SearchMovies {
            query: query.to_string(),
            year,
        })
        .await;

        Ok(self.search_results.read().await.clone())
    }

    async fn movie_details(&self, movie_id: u32) -> Result<MovieDetails, ProviderError> {
        self.simulate_latency().await;

        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.record(RecordedCatalogQuery::MovieDetails { movie_id })
            .await;

        self.movies
            .read()
            .await
            .get(&movie_id)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound(format!("movie {} not found", movie_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    #[tokio::test]
    async fn test_search_preserves_order() {
        let catalog = MockMovieCatalog::new();
        catalog
            .set_search_results(vec![
                fixtures::search_hit(7, "First"),
                fixtures::search_hit(9, "Second"),
            ])
            .await;

        let hits = catalog.search_movies("first", 2018).await.unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, 7);
        assert_eq!(hits[1].id, 9);
    }

    #[tokio::test]
    async fn test_movie_details_not_found() {
        let catalog = MockMovieCatalog::new();

        let result = catalog.movie_details(99999).await;
        assert!(matches!(result, Err(ProviderError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_recorded_queries() {
        let catalog = MockMovieCatalog::new();
        catalog.add_movie(fixtures::movie(100, "A Film", "2018-10-11")).await;

        catalog.search_movies("a film", 2018).await.unwrap();
        catalog.movie_details(100).await.unwrap();

        let queries = catalog.recorded_queries().await;
        assert_eq!(
            queries,
            vec![
                RecordedCatalogQuery::SearchMovies {
                    query: "a film".to_string(),
                    year: 2018,
                },
                RecordedCatalogQuery::MovieDetails { movie_id: 100 },
            ]
        );
    }

    #[tokio::test]
    async fn test_error_injection_consumed_once() {
        let catalog = MockMovieCatalog::new();
        catalog.set_next_error(ProviderError::RateLimited).await;

        assert!(catalog.search_movies("test", 2018).await.is_err());
        assert!(catalog.search_movies("test", 2018).await.is_ok());
    }
}
