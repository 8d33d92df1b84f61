//! Catalog provider trait

use crate::data::types::MediaKind;
use crate::error::Result;
use crate::providers::types::{
    Credits, MovieDetails, SearchFilter, SearchPage, TrendingWindow, TvDetails,
};

/// A remote movie/TV catalog
///
/// Implementations perform blocking requests and return normalized types.
pub trait CatalogProvider: Send + Sync {
    /// Human-readable provider name
    fn name(&self) -> &'static str;

    /// Stable provider identifier
    fn id(&self) -> &'static str;

    /// Search movies and TV shows by text query
    ///
    /// Person results are filtered out before returning. Pages are 1-based.
    /// The filter optionally narrows by media kind and year.
    fn search(&self, query: &str, page: u32, filter: SearchFilter) -> Result<SearchPage>;

    /// Trending titles for the given window
    fn trending(&self, window: TrendingWindow) -> Result<SearchPage>;

    /// Full details for a movie
    fn movie_details(&self, id: u64) -> Result<MovieDetails>;

    /// Full details for a TV show
    fn tv_details(&self, id: u64) -> Result<TvDetails>;

    /// Cast and crew for a movie or TV show
    fn credits(&self, kind: MediaKind, id: u64) -> Result<Credits>;
}
