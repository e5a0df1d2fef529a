pub mod fetcher;
pub mod provider;
pub mod source;
pub mod testing;

pub use fetcher::{EnrichedFilm, FetchError, FetchHandle, FilmFetcher};
pub use provider::{
    CinemaFilmDetails, CinemaProvider, MovieCatalog, MovieDetails, MovieSearchHit, ProviderError,
};
pub use source::{
    CinemaListing, FilmRecord, FilmSource, SourceError, LISTING_FALLBACK_YEAR,
};
