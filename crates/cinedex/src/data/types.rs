//! Common data types for persistence
//!
//! The favorite entry and its identity key, shared across the data module.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification of a catalog item
///
/// Serialized lowercase to match the provider's `media_type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Tv,
    Person,
}

impl MediaKind {
    /// Wire/display name ("movie", "tv", "person")
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
            MediaKind::Person => "person",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "movie" => Ok(MediaKind::Movie),
            "tv" => Ok(MediaKind::Tv),
            "person" => Ok(MediaKind::Person),
            other => Err(format!("unknown media kind '{other}'")),
        }
    }
}

/// A user-saved reference to a catalog title
///
/// Identity is the `(id, media_type)` pair: the provider reuses numeric IDs
/// across movies and TV shows, so the same `id` may legitimately appear once
/// per kind.
///
/// The persisted form mirrors the provider's field names. `display_title` is
/// normalized from the provider's two title fields: it serializes as `title`
/// and deserializes from either `title` or `name`. Likewise `primary_date`
/// serializes as `release_date` and accepts `first_air_date` on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    /// Provider identifier (not unique across media kinds)
    pub id: u64,

    /// Media kind half of the identity key
    pub media_type: MediaKind,

    /// Display title, normalized from `title` (movies) or `name` (TV)
    #[serde(rename = "title", alias = "name")]
    pub display_title: String,

    /// Poster image path, relative to the provider's image CDN
    #[serde(default)]
    pub poster_path: Option<String>,

    /// Release date or first-air date (ISO-like), display only
    #[serde(
        rename = "release_date",
        alias = "first_air_date",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub primary_date: Option<String>,

    /// Average rating on a 0-10 scale, 0 meaning unrated
    #[serde(default)]
    pub vote_average: f64,
}

impl FavoriteEntry {
    /// Create an entry with minimal info
    pub fn new(id: u64, media_type: MediaKind, display_title: impl Into<String>) -> Self {
        Self {
            id,
            media_type,
            display_title: display_title.into(),
            poster_path: None,
            primary_date: None,
            vote_average: 0.0,
        }
    }

    /// The `(id, media_type)` identity key
    pub fn key(&self) -> (u64, MediaKind) {
        (self.id, self.media_type)
    }

    /// Set the poster path
    pub fn with_poster(mut self, poster_path: impl Into<String>) -> Self {
        self.poster_path = Some(poster_path.into());
        self
    }

    /// Set the poster path from an Option (no-op if None)
    pub fn with_poster_opt(mut self, poster_path: Option<String>) -> Self {
        self.poster_path = poster_path;
        self
    }

    /// Set the primary date from an Option (no-op if None)
    pub fn with_date_opt(mut self, date: Option<String>) -> Self {
        self.primary_date = date;
        self
    }

    /// Set the average rating
    pub fn with_rating(mut self, vote_average: f64) -> Self {
        self.vote_average = vote_average;
        self
    }

    /// Release/first-air year, if a date is known
    pub fn year(&self) -> Option<&str> {
        self.primary_date.as_deref().map(|d| {
            let end = d.find('-').unwrap_or(d.len());
            &d[..end]
        })
    }
}
