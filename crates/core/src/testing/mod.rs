//! Testing utilities and mock providers.
//!
//! Mock implementations of the provider traits, allowing fetch chains to be
//! exercised without real upstream services.
//!
//! # Example
//!
//! ```rust,ignore
//! use marquee_core::testing::{fixtures, MockCinemaProvider, MockMovieCatalog};
//!
//! let cinema = MockCinemaProvider::new();
//! let catalog = MockMovieCatalog::new();
//!
//! // Configure mock responses
//! cinema.add_film(fixtures::cinema_film("The Favourite", 42)).await;
//! catalog.set_search_results(vec![fixtures::search_hit(100, "The Favourite")]).await;
//!
//! // Use with FilmFetcher...
//! ```

mod mock_catalog;
mod mock_cinema;

pub use mock_catalog::{MockMovieCatalog, RecordedCatalogQuery};
pub use mock_cinema::MockCinemaProvider;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::provider::{CinemaFilmDetails, MovieDetails, MovieSearchHit};

    /// Create cinema film details with reasonable defaults.
    pub fn cinema_film(title: &str, id: u32) -> CinemaFilmDetails {
        CinemaFilmDetails {
            id,
            title: title.to_string(),
            synopsis: Some(format!("{} is showing now.", title)),
            runtime_minutes: Some(110),
            certificate: Some("12A".to_string()),
            cinema_ids: vec![1, 4, 9],
        }
    }

    /// Create a catalog search hit.
    pub fn search_hit(id: u32, title: &str) -> MovieSearchHit {
        MovieSearchHit {
            id,
            title: title.to_string(),
            release_date: Some("2018-10-11".to_string()),
        }
    }

    /// Create full catalog movie details.
    pub fn movie(id: u32, title: &str, release_date: &str) -> MovieDetails {
        MovieDetails {
            id,
            title: title.to_string(),
            original_title: None,
            release_date: Some(release_date.to_string()),
            runtime_minutes: Some(110),
            overview: Some(format!("About {}.", title)),
            poster_path: Some(format!("/{}.jpg", id)),
            backdrop_path: None,
            genres: vec!["Drama".to_string()],
            vote_average: Some(7.2),
        }
    }
}
