//! Configuration constants for cinedex

/// Application metadata
pub mod app {
    /// Application name (used for config directory, etc.)
    pub const NAME: &str = "cinedex";
}

/// Catalog API configuration
pub mod api {
    /// TMDB REST API base URL
    pub const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

    /// TMDB image CDN base URL
    pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

    /// Environment variable holding the API read access token
    pub const TOKEN_ENV_VAR: &str = "TMDB_API_TOKEN";

    /// Default poster image size variant
    pub const POSTER_SIZE: &str = "w500";

    /// Backdrop image size variant
    pub const BACKDROP_SIZE: &str = "w1280";
}

/// Network configuration
pub mod network {
    /// HTTP User-Agent header
    pub const USER_AGENT: &str = concat!("cinedex/", env!("CARGO_PKG_VERSION"));

    /// Connection timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Read timeout in seconds
    pub const READ_TIMEOUT_SECS: u64 = 30;
}
