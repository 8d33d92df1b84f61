//! Favorites management
//!
//! In-memory ordered collection of favorite titles, written through to a
//! JSON slot on every change.

use crate::data::storage;
use crate::data::types::{FavoriteEntry, MediaKind};
use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Favorites data file name
const FAVORITES_FILE: &str = "favorites.json";

/// Summary statistics over a favorites collection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollectionStats {
    pub movies: usize,
    pub tv_shows: usize,
    /// Mean of the entries' ratings, 0.0 for an empty collection
    pub average_rating: f64,
}

/// Ordered collection of favorite titles
///
/// Entries keep insertion order (oldest first) and are unique by
/// `(id, media_type)`. The in-memory state is authoritative: every mutation
/// is flushed to the backing file before it returns, and a failed flush is
/// logged without rolling the mutation back.
///
/// The store is constructed empty; call [`load`](Self::load) to rehydrate
/// from disk. Rehydration is fail-soft: missing, unreadable, or corrupt data
/// yields an empty collection, never an error.
pub struct FavoritesStore {
    entries: Vec<FavoriteEntry>,
    path: PathBuf,
}

impl FavoritesStore {
    /// Create an empty store backed by a specific file
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            entries: Vec::new(),
            path: path.into(),
        }
    }

    /// Create an empty store backed by the default storage location
    pub fn open_default() -> Result<Self> {
        Ok(Self::open(storage::data_path(FAVORITES_FILE)?))
    }

    /// Rehydrate the collection from the backing file
    ///
    /// One-shot and fail-soft: any read or decode problem degrades to an
    /// empty collection.
    pub fn load(&mut self) {
        self.entries = read_entries(&self.path);
    }

    /// Add an entry if its key is not already present
    ///
    /// Idempotent: an existing entry is never replaced, even when fields
    /// differ. Returns whether the collection changed.
    pub fn add(&mut self, entry: FavoriteEntry) -> bool {
        if self.contains(entry.id, entry.media_type) {
            return false;
        }
        self.entries.push(entry);
        self.persist();
        true
    }

    /// Remove the entry matching the key, if present
    ///
    /// Returns whether the collection changed; removing an absent key is a
    /// no-op, not an error.
    pub fn remove(&mut self, id: u64, kind: MediaKind) -> bool {
        let before = self.entries.len();
        self.entries
            .retain(|e| !(e.id == id && e.media_type == kind));
        let changed = self.entries.len() != before;
        if changed {
            self.persist();
        }
        changed
    }

    /// Check whether an entry with the key is present
    pub fn contains(&self, id: u64, kind: MediaKind) -> bool {
        self.entries
            .iter()
            .any(|e| e.id == id && e.media_type == kind)
    }

    /// Get the stored entry for a key
    pub fn get(&self, id: u64, kind: MediaKind) -> Option<&FavoriteEntry> {
        self.entries
            .iter()
            .find(|e| e.id == id && e.media_type == kind)
    }

    /// Remove the entry if present, add it otherwise
    ///
    /// Returns whether the entry is present after the call.
    pub fn toggle(&mut self, entry: FavoriteEntry) -> bool {
        if self.contains(entry.id, entry.media_type) {
            self.remove(entry.id, entry.media_type);
            false
        } else {
            self.add(entry);
            true
        }
    }

    /// Empty the collection unconditionally
    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[FavoriteEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Per-kind counts and average rating of the collection
    pub fn stats(&self) -> CollectionStats {
        let movies = self
            .entries
            .iter()
            .filter(|e| e.media_type == MediaKind::Movie)
            .count();
        let tv_shows = self
            .entries
            .iter()
            .filter(|e| e.media_type == MediaKind::Tv)
            .count();
        let average_rating = if self.entries.is_empty() {
            0.0
        } else {
            let sum: f64 = self.entries.iter().map(|e| e.vote_average).sum();
            sum / self.entries.len() as f64
        };
        CollectionStats {
            movies,
            tv_shows,
            average_rating,
        }
    }

    /// Write-through: serialize the full collection and overwrite the slot.
    /// Durable storage is best-effort; in-memory state stands on failure.
    fn persist(&self) {
        if let Err(e) = storage::save_to(&self.path, &self.entries) {
            warn!("failed to write favorites to {:?}: {}", self.path, e);
        }
    }
}

/// Read and decode the persisted collection, degrading to empty
fn read_entries(path: &Path) -> Vec<FavoriteEntry> {
    match storage::load_from::<serde_json::Value>(path) {
        Ok(Some(value)) => decode_entries(value),
        Ok(None) => Vec::new(),
        Err(e) => {
            warn!("failed to read favorites from {:?}: {}", path, e);
            Vec::new()
        }
    }
}

/// Named fallback path for corrupt data
///
/// A non-array value is discarded wholesale. Within an array, entries that
/// fail to decode or duplicate an earlier key are skipped individually.
fn decode_entries(value: serde_json::Value) -> Vec<FavoriteEntry> {
    let serde_json::Value::Array(items) = value else {
        warn!("persisted favorites are not an array, starting empty");
        return Vec::new();
    };

    let mut entries: Vec<FavoriteEntry> = Vec::with_capacity(items.len());
    for item in items {
        match serde_json::from_value::<FavoriteEntry>(item) {
            Ok(entry) => {
                if entries.iter().any(|e| e.key() == entry.key()) {
                    warn!(
                        "skipping duplicate favorite {} ({})",
                        entry.id, entry.media_type
                    );
                } else {
                    entries.push(entry);
                }
            }
            Err(e) => warn!("skipping undecodable favorite entry: {}", e),
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use std::fs;
    use std::sync::atomic::{AtomicU32, Ordering};

    static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

    fn temp_path() -> PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        temp_dir().join(format!("cinedex_fav_test_{}.json", id))
    }

    fn inception() -> FavoriteEntry {
        FavoriteEntry::new(27205, MediaKind::Movie, "Inception")
            .with_date_opt(Some("2010-07-15".to_string()))
            .with_rating(8.3)
    }

    fn store() -> (FavoritesStore, PathBuf) {
        let path = temp_path();
        (FavoritesStore::open(&path), path)
    }

    #[test]
    fn test_add_then_contains() {
        let (mut store, path) = store();

        assert!(store.add(inception()));
        assert_eq!(store.len(), 1);
        assert!(store.contains(27205, MediaKind::Movie));
        assert!(!store.contains(27205, MediaKind::Tv));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_add_is_idempotent() {
        let (mut store, path) = store();

        assert!(store.add(inception()));
        // Second add with different fields is a no-op and never replaces
        let variant = FavoriteEntry::new(27205, MediaKind::Movie, "INCEPTION").with_rating(1.0);
        assert!(!store.add(variant));

        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].display_title, "Inception");
        assert_eq!(store.entries()[0].vote_average, 8.3);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let (mut store, path) = store();
        assert!(!store.remove(999, MediaKind::Movie));
        assert!(store.is_empty());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_toggle_involution() {
        let (mut store, path) = store();

        assert!(store.toggle(inception()));
        assert!(store.contains(27205, MediaKind::Movie));

        assert!(!store.toggle(inception()));
        assert!(!store.contains(27205, MediaKind::Movie));
        assert!(store.is_empty());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_same_id_different_kind_are_distinct() {
        let (mut store, path) = store();

        store.add(FavoriteEntry::new(550, MediaKind::Movie, "Fight Club"));
        store.add(FavoriteEntry::new(550, MediaKind::Tv, "Some Show"));
        assert_eq!(store.len(), 2);

        assert!(store.remove(550, MediaKind::Movie));
        assert_eq!(store.len(), 1);
        assert!(store.contains(550, MediaKind::Tv));
        assert!(!store.contains(550, MediaKind::Movie));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let (mut store, path) = store();

        store.add(FavoriteEntry::new(3, MediaKind::Movie, "Third Added"));
        store.add(FavoriteEntry::new(1, MediaKind::Movie, "Alpha"));
        store.add(FavoriteEntry::new(2, MediaKind::Tv, "Beta"));

        let ids: Vec<u64> = store.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_add_remove_clear_scenario() {
        let (mut store, path) = store();

        let x = FavoriteEntry::new(10, MediaKind::Movie, "X");
        let y = FavoriteEntry::new(20, MediaKind::Tv, "Y");
        store.add(x.clone());
        store.add(y);
        store.remove(x.id, x.media_type);
        store.clear();

        assert!(store.is_empty());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_get_returns_stored_entry() {
        let (mut store, path) = store();
        store.add(inception());

        let entry = store.get(27205, MediaKind::Movie).unwrap();
        assert_eq!(entry.display_title, "Inception");
        assert!(store.get(27205, MediaKind::Tv).is_none());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_stats_counts_and_average() {
        let (mut store, path) = store();

        store.add(inception()); // movie, 8.3
        store.add(
            FavoriteEntry::new(1399, MediaKind::Tv, "Game of Thrones").with_rating(8.5),
        );
        store.add(FavoriteEntry::new(550, MediaKind::Movie, "Fight Club").with_rating(8.4));

        let stats = store.stats();
        assert_eq!(stats.movies, 2);
        assert_eq!(stats.tv_shows, 1);
        assert!((stats.average_rating - 8.4).abs() < 1e-9);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_stats_empty_collection() {
        let (store, _path) = store();

        let stats = store.stats();
        assert_eq!(stats.movies, 0);
        assert_eq!(stats.tv_shows, 0);
        assert_eq!(stats.average_rating, 0.0);
    }

    // =========================================================================
    // Persistence tests
    // =========================================================================

    #[test]
    fn test_write_through_and_reload_roundtrip() {
        let path = temp_path();

        {
            let mut store = FavoritesStore::open(&path);
            store.add(inception());
            store.add(
                FavoriteEntry::new(1399, MediaKind::Tv, "Game of Thrones")
                    .with_poster("/got.jpg")
                    .with_date_opt(Some("2011-04-17".to_string()))
                    .with_rating(8.5),
            );
            // No explicit save: mutations write through
        }

        {
            let mut store = FavoritesStore::open(&path);
            store.load();
            assert_eq!(store.len(), 2);
            // Same order, field-identical
            assert_eq!(store.entries()[0], inception());
            assert_eq!(store.entries()[1].display_title, "Game of Thrones");
            assert_eq!(store.entries()[1].poster_path, Some("/got.jpg".to_string()));
            assert_eq!(
                store.entries()[1].primary_date,
                Some("2011-04-17".to_string())
            );
        }

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file_starts_empty() {
        let path = temp_path();
        let mut store = FavoritesStore::open(&path);
        store.load();
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_corrupt_data_starts_empty() {
        let path = temp_path();
        fs::write(&path, "this is not json at all {{{").unwrap();

        let mut store = FavoritesStore::open(&path);
        store.load();
        assert!(store.is_empty());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_non_array_data_starts_empty() {
        let path = temp_path();
        fs::write(&path, r#"{"id": 1, "media_type": "movie", "title": "Not A List"}"#).unwrap();

        let mut store = FavoritesStore::open(&path);
        store.load();
        assert!(store.is_empty());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_skips_undecodable_entries() {
        let path = temp_path();
        fs::write(
            &path,
            r#"[
                {"id": 1, "media_type": "movie", "title": "Good"},
                {"id": "bad", "media_type": 42},
                {"id": 2, "media_type": "tv", "name": "Also Good"}
            ]"#,
        )
        .unwrap();

        let mut store = FavoritesStore::open(&path);
        store.load();
        assert_eq!(store.len(), 2);
        assert!(store.contains(1, MediaKind::Movie));
        assert!(store.contains(2, MediaKind::Tv));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_drops_duplicate_keys() {
        let path = temp_path();
        fs::write(
            &path,
            r#"[
                {"id": 1, "media_type": "movie", "title": "First"},
                {"id": 1, "media_type": "movie", "title": "Duplicate"},
                {"id": 1, "media_type": "tv", "name": "Different Kind"}
            ]"#,
        )
        .unwrap();

        let mut store = FavoritesStore::open(&path);
        store.load();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1, MediaKind::Movie).unwrap().display_title, "First");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_mutation_survives_write_failure() {
        // Point the store at a path whose parent is a file, so writes fail
        let blocker = temp_path();
        fs::write(&blocker, "").unwrap();
        let path = blocker.join("favorites.json");

        let mut store = FavoritesStore::open(&path);
        assert!(store.add(inception()));
        // In-memory state is authoritative despite the failed flush
        assert!(store.contains(27205, MediaKind::Movie));
        assert_eq!(store.len(), 1);

        let _ = fs::remove_file(&blocker);
    }

    #[test]
    fn test_remove_persists() {
        let path = temp_path();

        {
            let mut store = FavoritesStore::open(&path);
            store.add(FavoriteEntry::new(1, MediaKind::Movie, "Keep"));
            store.add(FavoriteEntry::new(2, MediaKind::Movie, "Drop"));
            store.remove(2, MediaKind::Movie);
        }

        {
            let mut store = FavoritesStore::open(&path);
            store.load();
            assert_eq!(store.len(), 1);
            assert!(store.contains(1, MediaKind::Movie));
        }

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_clear_persists_empty_slot() {
        let path = temp_path();

        {
            let mut store = FavoritesStore::open(&path);
            store.add(inception());
            store.clear();
        }

        {
            let mut store = FavoritesStore::open(&path);
            store.load();
            assert!(store.is_empty());
        }

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_persisted_form_is_plain_array() {
        let path = temp_path();

        let mut store = FavoritesStore::open(&path);
        store.add(inception());

        let raw = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array());
        assert_eq!(value.as_array().unwrap().len(), 1);
        assert_eq!(value[0]["title"], "Inception");
        assert_eq!(value[0]["media_type"], "movie");

        let _ = fs::remove_file(&path);
    }
}
