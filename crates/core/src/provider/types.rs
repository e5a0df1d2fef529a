//! Response types for the upstream providers.

use serde::{Deserialize, Serialize};

/// Film details from the cinema chain, including where it is showing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CinemaFilmDetails {
    /// Cinema chain film id.
    pub id: u32,
    /// Film title as the chain lists it.
    pub title: String,
    /// Synopsis, when the chain provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synopsis: Option<String>,
    /// Runtime in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_minutes: Option<u32>,
    /// Age rating certificate (e.g. "12A").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
    /// Ids of cinemas currently showing the film.
    #[serde(default)]
    pub cinema_ids: Vec<u32>,
}

/// A single hit from a catalog movie search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieSearchHit {
    /// Catalog movie id.
    pub id: u32,
    /// Movie title.
    pub title: String,
    /// Release date (YYYY-MM-DD).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
}

/// Full movie details from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDetails {
    /// Catalog movie id.
    pub id: u32,
    /// Movie title.
    pub title: String,
    /// Original title (in original language).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_title: Option<String>,
    /// Release date (YYYY-MM-DD).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    /// Runtime in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_minutes: Option<u32>,
    /// Movie overview/synopsis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    /// Poster path (relative to the catalog's image base URL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    /// Backdrop path (relative to the catalog's image base URL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop_path: Option<String>,
    /// Genre names.
    #[serde(default)]
    pub genres: Vec<String>,
    /// Average vote (0-10).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_average: Option<f32>,
}

impl MovieDetails {
    /// Get the release year from the release date.
    pub fn year(&self) -> Option<u32> {
        self.release_date
            .as_ref()
            .and_then(|d| d.split('-').next())
            .and_then(|y| y.parse().ok())
    }
}
