//! Theme preference store
//!
//! Single light/dark value, persisted with the same write-through and
//! fail-soft contract as the favorites store.

use crate::data::storage;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

/// Theme data file name
const THEME_FILE: &str = "theme.json";

/// Theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme
    pub fn flipped(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Wire/display name ("light" or "dark")
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted theme preference
///
/// Construct empty, then call [`load`](Self::load). When nothing is
/// persisted, the initial value falls back to the ambient terminal
/// preference, then to light.
pub struct ThemeStore {
    theme: Theme,
    path: PathBuf,
}

impl ThemeStore {
    /// Create a store backed by a specific file, starting at the default theme
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            theme: Theme::default(),
            path: path.into(),
        }
    }

    /// Create a store backed by the default storage location
    pub fn open_default() -> Result<Self> {
        Ok(Self::open(storage::data_path(THEME_FILE)?))
    }

    /// Rehydrate from the backing file, fail-soft
    ///
    /// Resolution order: persisted value, ambient environment signal,
    /// light.
    pub fn load(&mut self) {
        self.theme = match storage::load_from::<Theme>(&self.path) {
            Ok(Some(theme)) => theme,
            Ok(None) => ambient_preference().unwrap_or_default(),
            Err(e) => {
                warn!("failed to read theme from {:?}: {}", self.path, e);
                ambient_preference().unwrap_or_default()
            }
        };
    }

    /// Current theme
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Set the theme, writing through on change
    pub fn set(&mut self, theme: Theme) {
        if self.theme == theme {
            return;
        }
        self.theme = theme;
        self.persist();
    }

    /// Flip between light and dark, returning the new theme
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.flipped();
        self.persist();
        self.theme
    }

    /// Drop the persisted preference and fall back to the ambient default
    ///
    /// Returns whether a persisted value existed.
    pub fn reset(&mut self) -> Result<bool> {
        let existed = storage::exists_at(&self.path);
        storage::delete_at(&self.path)?;
        self.theme = ambient_preference().unwrap_or_default();
        Ok(existed)
    }

    fn persist(&self) {
        if let Err(e) = storage::save_to(&self.path, &self.theme) {
            warn!("failed to write theme to {:?}: {}", self.path, e);
        }
    }
}

/// Ambient light/dark signal from the terminal environment
///
/// Parses the conventional `COLORFGBG` variable ("fg;bg" with ANSI color
/// indices); a dark background index maps to the dark theme.
fn ambient_preference() -> Option<Theme> {
    let value = std::env::var("COLORFGBG").ok()?;
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    if bg == 7 || bg == 15 {
        Some(Theme::Light)
    } else {
        Some(Theme::Dark)
    }
}
