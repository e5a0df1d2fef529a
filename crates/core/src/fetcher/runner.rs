//! Film fetcher implementation.
//!
//! Drives the three dependent provider calls for one film, strictly in
//! sequence:
//! 1. Cinema chain film details, by the chain's film id
//! 2. Catalog search by title and release year
//! 3. Catalog movie details for the first search hit

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::provider::{CinemaProvider, MovieCatalog};
use crate::source::FilmSource;

use super::types::{EnrichedFilm, FetchError};

/// Handle to an in-flight fetch chain.
///
/// Cancellation is cooperative and spans the whole chain: a cancel observed
/// at any point before completion terminates it with
/// [`FetchError::Cancelled`] and submits no further stage, including a
/// cancel landing on the boundary between two stages. `cancel` is idempotent
/// and harmless once the chain has settled.
#[derive(Debug, Clone)]
pub struct FetchHandle {
    token: CancellationToken,
}

impl FetchHandle {
    /// Cancel the in-flight chain.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Whether `cancel` has been called on this chain.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// Fetches and combines data about a single film from the cinema chain and
/// the movie catalog.
///
/// The three values driving the chain are captured once at construction from
/// the source descriptor and never change. A fetcher runs exactly one chain;
/// [`fetch`](FilmFetcher::fetch) consumes it.
pub struct FilmFetcher {
    film_title: String,
    cinema_film_id: String,
    release_year: i32,
    cinema: Arc<dyn CinemaProvider>,
    catalog: Arc<dyn MovieCatalog>,
}

impl FilmFetcher {
    /// Create a fetcher for the given source film.
    ///
    /// The descriptor's constructor has already validated the title and id.
    pub fn new(
        source: &dyn FilmSource,
        cinema: Arc<dyn CinemaProvider>,
        catalog: Arc<dyn MovieCatalog>,
    ) -> Self {
        Self {
            film_title: source.title().to_string(),
            cinema_film_id: source.external_id().to_string(),
            release_year: source.release_year(),
            cinema,
            catalog,
        }
    }

    /// Start the fetch chain.
    ///
    /// Returns the cancel handle immediately; the chain runs on a spawned
    /// task and invokes `completion` exactly once, with either the enriched
    /// film or the first error. Must be called from within a tokio runtime.
    pub fn fetch<F>(self, completion: F) -> FetchHandle
    where
        F: FnOnce(Result<EnrichedFilm, FetchError>) + Send + 'static,
    {
        let token = CancellationToken::new();
        let handle = FetchHandle {
            token: token.clone(),
        };

        tokio::spawn(async move {
            // Biased so that a cancel already observed at a stage boundary
            // wins over submitting the next stage.
            let result = tokio::select! {
                biased;
                _ = token.cancelled() => Err(FetchError::Cancelled),
                result = self.run() => result,
            };

            match &result {
                Ok(film) => debug!("fetch completed for film {}", film.id),
                Err(FetchError::Cancelled) => debug!("fetch cancelled for film {}", self.cinema_film_id),
                Err(e) => warn!("fetch failed for film {}: {}", self.cinema_film_id, e),
            }

            completion(result);
        });

        handle
    }

    /// Run the three stages in sequence, short-circuiting on first failure.
    async fn run(&self) -> Result<EnrichedFilm, FetchError> {
        debug!("fetching cinema details for film {}", self.cinema_film_id);
        let cinema_details = self.cinema.film_details(&self.cinema_film_id).await?;

        debug!(
            "searching catalog: query='{}', year={}",
            self.film_title, self.release_year
        );
        let hits = self
            .catalog
            .search_movies(&self.film_title, self.release_year)
            .await?;

        // First-hit policy: the catalog's own ordering decides.
        let top = hits
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::MissingResult {
                query: self.film_title.clone(),
                year: self.release_year,
            })?;

        debug!("resolving catalog details for movie {}", top.id);
        let movie_details = self.catalog.movie_details(top.id).await?;

        Ok(EnrichedFilm {
            id: self.cinema_film_id.clone(),
            cinema_details,
            movie_details,
        })
    }
}
