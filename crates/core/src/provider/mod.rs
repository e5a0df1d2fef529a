//! Upstream provider abstractions.
//!
//! The fetcher talks to two independent services: the cinema chain API that
//! owns the listing data, and the movie catalog that enriches it. Both are
//! injected as trait objects; transport, schema decoding, timeouts and retry
//! policy live entirely in the implementations.

mod types;

pub use types::*;

use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by provider implementations.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Resource not found (404).
    #[error("resource not found: {0}")]
    NotFound(String),

    /// Rate limit exceeded.
    #[error("rate limit exceeded, please wait before retrying")]
    RateLimited,

    /// API returned an error status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse a response.
    #[error("failed to parse response: {0}")]
    Parse(String),

    /// Provider not configured (missing API key, etc.).
    #[error("provider not configured: {0}")]
    NotConfigured(String),
}

/// The cinema chain API, keyed by the chain's own film ids.
#[async_trait]
pub trait CinemaProvider: Send + Sync {
    /// Get film details (including cinema availability) by film id.
    async fn film_details(&self, film_id: &str) -> Result<CinemaFilmDetails, ProviderError>;
}

/// The movie catalog used to enrich cinema films.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Search movies by title, filtered to a release year.
    ///
    /// Results come back in the catalog's own relevance order.
    async fn search_movies(
        &self,
        query: &str,
        year: i32,
    ) -> Result<Vec<MovieSearchHit>, ProviderError>;

    /// Get full movie details by catalog id.
    async fn movie_details(&self, movie_id: u32) -> Result<MovieDetails, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProviderError::NotFound("film 42 not found".to_string());
        assert_eq!(err.to_string(), "resource not found: film 42 not found");

        let err = ProviderError::Api {
            status: 503,
            message: "service unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 503 - service unavailable");
    }
}
