//! Unified source descriptors for the upstream film shapes.
//!
//! Two structurally different upstream payloads can seed a fetch: the
//! in-cinema listing feed (which carries no release date) and the full film
//! record (which embeds one). The [`FilmSource`] trait normalizes both into
//! the three values the fetcher captures at construction.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Release year assumed for in-cinema listings.
///
/// The listing feed does not include a release date, and resolving one would
/// cost an extra request for every listed film. A wrong guess only loosens
/// the catalog search filter, so films currently showing are assumed to be
/// from this year.
pub const LISTING_FALLBACK_YEAR: i32 = 2018;

/// Errors raised when constructing a source descriptor.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceError {
    /// The upstream payload carried an empty or whitespace-only title.
    #[error("film title is empty")]
    EmptyTitle,

    /// The upstream payload carried a zero film id.
    #[error("film id must be positive")]
    InvalidId,
}

/// A film shape that can seed a fetch.
///
/// Implementers expose exactly the three values the fetcher needs; no I/O
/// happens behind these accessors. Supporting a third upstream source means
/// adding a third implementation, nothing else.
pub trait FilmSource {
    /// Film title as the upstream reports it.
    fn title(&self) -> &str;

    /// Upstream film id.
    fn external_id(&self) -> u32;

    /// Release year fed into the catalog search.
    fn release_year(&self) -> i32;
}

/// A film from the in-cinema listing feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CinemaListing {
    title: String,
    id: u32,
}

impl CinemaListing {
    /// Create a listing descriptor, validating title and id.
    pub fn new(title: impl Into<String>, id: u32) -> Result<Self, SourceError> {
        let title = title.into();
        validate(&title, id)?;
        Ok(Self { title, id })
    }
}

impl FilmSource for CinemaListing {
    fn title(&self) -> &str {
        &self.title
    }

    fn external_id(&self) -> u32 {
        self.id
    }

    fn release_year(&self) -> i32 {
        LISTING_FALLBACK_YEAR
    }
}

/// A full film record with an embedded release date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilmRecord {
    title: String,
    id: u32,
    release_date: NaiveDate,
}

impl FilmRecord {
    /// Create a record descriptor, validating title and id.
    pub fn new(
        title: impl Into<String>,
        id: u32,
        release_date: NaiveDate,
    ) -> Result<Self, SourceError> {
        let title = title.into();
        validate(&title, id)?;
        Ok(Self {
            title,
            id,
            release_date,
        })
    }
}

impl FilmSource for FilmRecord {
    fn title(&self) -> &str {
        &self.title
    }

    fn external_id(&self) -> u32 {
        self.id
    }

    fn release_year(&self) -> i32 {
        self.release_date.year()
    }
}

fn validate(title: &str, id: u32) -> Result<(), SourceError> {
    if title.trim().is_empty() {
        return Err(SourceError::EmptyTitle);
    }
    if id == 0 {
        return Err(SourceError::InvalidId);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_uses_fallback_year() {
        let listing = CinemaListing::new("The Favourite", 42).unwrap();
        assert_eq!(listing.title(), "The Favourite");
        assert_eq!(listing.external_id(), 42);
        assert_eq!(listing.release_year(), LISTING_FALLBACK_YEAR);
    }

    #[test]
    fn test_record_derives_year_from_release_date() {
        let date = NaiveDate::from_ymd_opt(1999, 3, 31).unwrap();
        let record = FilmRecord::new("The Matrix", 603, date).unwrap();
        assert_eq!(record.release_year(), 1999);
    }

    #[test]
    fn test_empty_title_rejected() {
        assert_eq!(CinemaListing::new("", 42), Err(SourceError::EmptyTitle));
        assert_eq!(CinemaListing::new("   ", 42), Err(SourceError::EmptyTitle));

        let date = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
        assert_eq!(FilmRecord::new("", 42, date), Err(SourceError::EmptyTitle));
    }

    #[test]
    fn test_zero_id_rejected() {
        assert_eq!(CinemaListing::new("A Film", 0), Err(SourceError::InvalidId));

        let date = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
        assert_eq!(
            FilmRecord::new("A Film", 0, date),
            Err(SourceError::InvalidId)
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(SourceError::EmptyTitle.to_string(), "film title is empty");
        assert_eq!(SourceError::InvalidId.to_string(), "film id must be positive");
    }
}
