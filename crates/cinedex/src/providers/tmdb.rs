//! TMDB catalog provider
//!
//! Talks to The Movie Database v3 API using bearer token authentication.
//! See <https://developer.themoviedb.org/docs>.

use crate::config::api::{TMDB_BASE_URL, TOKEN_ENV_VAR};
use crate::data::types::MediaKind;
use crate::error::{AppError, Result};
use crate::network::HttpClient;
use crate::providers::traits::CatalogProvider;
use crate::providers::types::{
    Credits, MovieDetails, SearchFilter, SearchPage, TrendingWindow, TvDetails,
};
use tracing::debug;

/// The Movie Database (TMDB) provider
pub struct TmdbProvider {
    client: HttpClient,
    base_url: String,
}

impl TmdbProvider {
    /// Create a provider with an explicit API read access token
    pub fn new(token: &str) -> Result<Self> {
        Ok(Self {
            client: HttpClient::with_bearer(token)?,
            base_url: TMDB_BASE_URL.to_string(),
        })
    }

    /// Create a provider from the `TMDB_API_TOKEN` environment variable
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(TOKEN_ENV_VAR).map_err(|_| {
            AppError::Config(format!(
                "no API token found, set the {} environment variable",
                TOKEN_ENV_VAR
            ))
        })?;
        Self::new(token.trim())
    }

    /// Override the API base URL (for testing against a local server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map a 404 into a domain NotFound error
    fn map_missing(err: AppError, what: String) -> AppError {
        match err {
            AppError::Api { status: 404, .. } => AppError::NotFound(what),
            other => other,
        }
    }
}

/// Endpoint and year query parameter for a search kind
///
/// Movies and TV shows have dedicated endpoints with differently named year
/// parameters; no kind means the mixed multi-search, where the year is
/// applied after the fact.
fn search_route(kind: Option<MediaKind>) -> Result<(&'static str, Option<&'static str>)> {
    match kind {
        None => Ok(("/search/multi", None)),
        Some(MediaKind::Movie) => Ok(("/search/movie", Some("year"))),
        Some(MediaKind::Tv) => Ok(("/search/tv", Some("first_air_date_year"))),
        Some(MediaKind::Person) => Err(AppError::Config(
            "search can only be narrowed to movies or tv shows".to_string(),
        )),
    }
}

impl CatalogProvider for TmdbProvider {
    fn name(&self) -> &'static str {
        "The Movie Database"
    }

    fn id(&self) -> &'static str {
        "tmdb"
    }

    fn search(&self, query: &str, page: u32, filter: SearchFilter) -> Result<SearchPage> {
        debug!("tmdb search: {:?} page {} {:?}", query, page, filter);
        let (endpoint, year_param) = search_route(filter.kind)?;

        let page_str = page.max(1).to_string();
        let year_str = filter.year.map(|y| y.to_string());
        let mut params = vec![
            ("query", query),
            ("page", page_str.as_str()),
            ("include_adult", "false"),
        ];
        if let (Some(param), Some(year)) = (year_param, year_str.as_deref()) {
            params.push((param, year));
        }

        let result: SearchPage = self.client.get_json_query(&self.url(endpoint), &params)?;
        match filter.kind {
            // Single-kind endpoints omit media_type and return no people
            Some(kind) => Ok(result.assume_kind(kind)),
            None => {
                let result = result.media_only();
                Ok(match filter.year {
                    // Multi-search has no year parameter, so narrow locally
                    Some(year) => result.retain_year(year),
                    None => result,
                })
            }
        }
    }

    fn trending(&self, window: TrendingWindow) -> Result<SearchPage> {
        debug!("tmdb trending: {}", window.as_str());
        let url = self.url(&format!("/trending/all/{}", window.as_str()));
        let result: SearchPage = self.client.get_json(&url)?;
        Ok(result.media_only())
    }

    fn movie_details(&self, id: u64) -> Result<MovieDetails> {
        debug!("tmdb movie details: {}", id);
        self.client
            .get_json(&self.url(&format!("/movie/{id}")))
            .map_err(|e| Self::map_missing(e, format!("movie {id}")))
    }

    fn tv_details(&self, id: u64) -> Result<TvDetails> {
        debug!("tmdb tv details: {}", id);
        self.client
            .get_json(&self.url(&format!("/tv/{id}")))
            .map_err(|e| Self::map_missing(e, format!("tv show {id}")))
    }

    fn credits(&self, kind: MediaKind, id: u64) -> Result<Credits> {
        let segment = match kind {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
            MediaKind::Person => {
                return Err(AppError::Config(
                    "credits are only available for movies and tv shows".to_string(),
                ))
            }
        };
        debug!("tmdb credits: {} {}", segment, id);
        self.client
            .get_json(&self.url(&format!("/{segment}/{id}/credits")))
            .map_err(|e| Self::map_missing(e, format!("{segment} {id}")))
    }
}
