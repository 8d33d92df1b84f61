//! Data persistence
//!
//! Favorites and theme stores plus the shared JSON storage layer.

pub mod favorites;
pub mod storage;
pub mod theme;
pub mod types;

// Re-export common types
pub use favorites::{CollectionStats, FavoritesStore};
pub use theme::{Theme, ThemeStore};
pub use types::{FavoriteEntry, MediaKind};
