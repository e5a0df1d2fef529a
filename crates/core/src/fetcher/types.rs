//! Types for the film fetcher.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::provider::{CinemaFilmDetails, MovieDetails, ProviderError};

/// Errors that can terminate a fetch chain.
#[derive(Debug, Error)]
pub enum FetchError {
    /// A provider call failed; forwarded unchanged from whichever stage
    /// produced it.
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The catalog search succeeded but returned no hits.
    #[error("no catalog match for '{query}' ({year})")]
    MissingResult { query: String, year: i32 },

    /// The chain was cancelled before it settled.
    #[error("fetch cancelled")]
    Cancelled,
}

/// The combined result of a successful fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnrichedFilm {
    /// Cinema chain film id, in the string form used by chain URLs.
    pub id: String,
    /// Details from the cinema chain.
    pub cinema_details: CinemaFilmDetails,
    /// Details from the movie catalog.
    pub movie_details: MovieDetails,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    #[test]
    fn test_error_display() {
        let err = FetchError::MissingResult {
            query: "The Favourite".to_string(),
            year: 2018,
        };
        assert_eq!(err.to_string(), "no catalog match for 'The Favourite' (2018)");

        assert_eq!(FetchError::Cancelled.to_string(), "fetch cancelled");

        let err = FetchError::Provider(ProviderError::RateLimited);
        assert_eq!(
            err.to_string(),
            "provider error: rate limit exceeded, please wait before retrying"
        );
    }

    #[test]
    fn test_enriched_film_serialization() {
        let film = EnrichedFilm {
            id: "42".to_string(),
            cinema_details: fixtures::cinema_film("The Favourite", 42),
            movie_details: fixtures::movie(100, "The Favourite", "2018-11-23"),
        };

        let json = serde_json::to_string(&film).unwrap();
        let parsed: EnrichedFilm = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, film);
        assert_eq!(parsed.id, "42");
        assert_eq!(parsed.movie_details.year(), Some(2018));
    }
}
