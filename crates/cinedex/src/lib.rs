//! Cinedex library
//!
//! Catalog providers, favorites/theme persistence, and networking utilities
//! for browsing a movie/TV database.

pub mod config;
pub mod data;
pub mod error;
pub mod network;
pub mod providers;
