//! Film fetch orchestration.
//!
//! A [`FilmFetcher`] runs the three dependent provider calls for one film:
//! cinema details, catalog search, catalog details for the top hit. Stages
//! run strictly in sequence, the first failure short-circuits the rest, and
//! the completion callback fires exactly once. The returned [`FetchHandle`]
//! cancels the whole chain.

mod runner;
mod types;

pub use runner::{FetchHandle, FilmFetcher};
pub use types::{EnrichedFilm, FetchError};
