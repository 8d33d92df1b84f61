//! Catalog providers
//!
//! The [`CatalogProvider`] trait abstracts over remote movie/TV catalogs;
//! [`TmdbProvider`] is the concrete implementation.

pub mod tmdb;
pub mod traits;
pub mod types;

pub use tmdb::TmdbProvider;
pub use traits::CatalogProvider;
pub use types::{
    CastMember, Credits, CrewMember, Genre, MediaSummary, MovieDetails, SearchFilter, SearchPage,
    Season, TrendingWindow, TvDetails,
};
