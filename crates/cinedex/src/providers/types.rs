//! Shared catalog provider types
//!
//! Response shapes returned by catalog providers and their conversions into
//! favorite entries.

use crate::config::api::{BACKDROP_SIZE, IMAGE_BASE_URL, POSTER_SIZE};
use crate::data::types::{FavoriteEntry, MediaKind};
use serde::Deserialize;

/// Time window for trending listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrendingWindow {
    #[default]
    Day,
    Week,
}

impl TrendingWindow {
    pub fn as_str(self) -> &'static str {
        match self {
            TrendingWindow::Day => "day",
            TrendingWindow::Week => "week",
        }
    }
}

/// Optional narrowing of a search
///
/// `kind` restricts results to one media kind; `year` matches the release
/// year (movies) or first-air year (TV). A year with no kind is applied to
/// whatever dates the mixed results carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub kind: Option<MediaKind>,
    pub year: Option<u16>,
}

/// One page of search or listing results
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPage {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<MediaSummary>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

fn default_page() -> u32 {
    1
}

impl SearchPage {
    /// Drop person results, keeping only movies and TV shows
    pub fn media_only(mut self) -> Self {
        self.results.retain(|r| {
            matches!(r.media_type, Some(MediaKind::Movie) | Some(MediaKind::Tv))
        });
        self
    }

    /// Stamp a media kind onto results that carry none
    ///
    /// Single-kind listings omit the `media_type` field.
    pub fn assume_kind(mut self, kind: MediaKind) -> Self {
        for result in &mut self.results {
            result.media_type.get_or_insert(kind);
        }
        self
    }

    /// Keep only results whose primary date falls in the given year
    pub fn retain_year(mut self, year: u16) -> Self {
        let prefix = year.to_string();
        self.results
            .retain(|r| r.primary_date().is_some_and(|d| d.starts_with(&prefix)));
        self
    }

    /// Whether another page follows this one
    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Simplified movie/TV item for search results and lists
#[derive(Debug, Clone, Deserialize)]
pub struct MediaSummary {
    pub id: u64,
    /// Movie title (movies only)
    #[serde(default)]
    pub title: Option<String>,
    /// Show name (TV and people)
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    /// Present on multi-search results, absent on single-kind listings
    #[serde(default)]
    pub media_type: Option<MediaKind>,
}

impl MediaSummary {
    /// Title normalized across the movie/TV field split
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("(untitled)")
    }

    /// Release or first-air date, whichever is present
    pub fn primary_date(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .or(self.first_air_date.as_deref())
    }

    /// Convert into a favorite entry
    ///
    /// `fallback_kind` is used when the summary carries no `media_type`
    /// (single-kind listings).
    pub fn to_favorite(&self, fallback_kind: MediaKind) -> FavoriteEntry {
        FavoriteEntry::new(
            self.id,
            self.media_type.unwrap_or(fallback_kind),
            self.display_title(),
        )
        .with_poster_opt(self.poster_path.clone())
        .with_date_opt(self.primary_date().map(str::to_string))
        .with_rating(self.vote_average)
    }
}

/// Genre classification
#[derive(Debug, Clone, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// Full movie details
#[derive(Debug, Clone, Deserialize)]
pub struct MovieDetails {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    /// Runtime in minutes
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub budget: u64,
    #[serde(default)]
    pub revenue: u64,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub status: String,
}

impl MovieDetails {
    pub fn to_favorite(&self) -> FavoriteEntry {
        FavoriteEntry::new(self.id, MediaKind::Movie, &self.title)
            .with_poster_opt(self.poster_path.clone())
            .with_date_opt(self.release_date.clone())
            .with_rating(self.vote_average)
    }
}

/// TV show season
#[derive(Debug, Clone, Deserialize)]
pub struct Season {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    /// 0 for specials, 1+ for regular seasons
    pub season_number: u32,
    #[serde(default)]
    pub episode_count: u32,
    #[serde(default)]
    pub air_date: Option<String>,
}

/// Full TV show details
#[derive(Debug, Clone, Deserialize)]
pub struct TvDetails {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub last_air_date: Option<String>,
    /// Typical episode runtimes in minutes (can vary per episode)
    #[serde(default)]
    pub episode_run_time: Vec<u32>,
    #[serde(default)]
    pub number_of_seasons: u32,
    #[serde(default)]
    pub number_of_episodes: u32,
    #[serde(default)]
    pub seasons: Vec<Season>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub in_production: bool,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub status: String,
}

impl TvDetails {
    /// Seasons excluding specials (season number 0)
    pub fn regular_seasons(&self) -> impl Iterator<Item = &Season> {
        self.seasons.iter().filter(|s| s.season_number > 0)
    }

    pub fn to_favorite(&self) -> FavoriteEntry {
        FavoriteEntry::new(self.id, MediaKind::Tv, &self.name)
            .with_poster_opt(self.poster_path.clone())
            .with_date_opt(self.first_air_date.clone())
            .with_rating(self.vote_average)
    }
}

/// Cast member from credits
#[derive(Debug, Clone, Deserialize)]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub character: String,
    #[serde(default)]
    pub profile_path: Option<String>,
    /// Billing order in the credits
    #[serde(default)]
    pub order: u32,
}

/// Crew member from credits
#[derive(Debug, Clone, Deserialize)]
pub struct CrewMember {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub job: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub profile_path: Option<String>,
}

/// Complete credits for a title
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

impl Credits {
    /// Top-billed cast, in billing order
    pub fn top_billed(&self, n: usize) -> Vec<&CastMember> {
        let mut cast: Vec<&CastMember> = self.cast.iter().collect();
        cast.sort_by_key(|c| c.order);
        cast.truncate(n);
        cast
    }

    /// Crew members with the Director job
    pub fn directors(&self) -> Vec<&CrewMember> {
        self.crew.iter().filter(|c| c.job == "Director").collect()
    }
}

// =============================================================================
// Image URL helpers
// =============================================================================

/// Full poster URL for a relative path, None when no poster exists
pub fn poster_url(poster_path: Option<&str>) -> Option<String> {
    poster_path.map(|p| format!("{}/{}{}", IMAGE_BASE_URL, POSTER_SIZE, p))
}

/// Full backdrop URL for a relative path
pub fn backdrop_url(backdrop_path: Option<&str>) -> Option<String> {
    backdrop_path.map(|p| format!("{}/{}{}", IMAGE_BASE_URL, BACKDROP_SIZE, p))
}
