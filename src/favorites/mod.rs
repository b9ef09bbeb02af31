//! Persisted favorite-listing selection.
//!
//! Holds the set of favorited record ids, loaded from a [`KeyValueStore`]
//! at construction and written through on every toggle. The persisted
//! format is a JSON array of string ids under a single fixed key, so the
//! set round-trips across restarts regardless of backend.
//!
//! Stale ids (records no longer present in the current catalog snapshot)
//! are tolerated and never purged.

use std::collections::HashSet;

use tracing::warn;

use crate::storage::KeyValueStore;

/// Storage key for the persisted favorites array.
pub const FAVORITES_KEY: &str = "businessFavorites";

/// Persisted set of favorited business ids.
pub struct FavoritesStore {
    store: Box<dyn KeyValueStore>,
    favorites: HashSet<String>,
    revision: u64,
}

impl FavoritesStore {
    /// Load favorites from the backing store.
    ///
    /// Absent or unparseable storage yields an empty set; corruption is
    /// logged and recovered from, never surfaced.
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let favorites = match store.get(FAVORITES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(ids) => ids.into_iter().collect(),
                Err(e) => {
                    warn!("corrupt favorites storage, starting empty: {}", e);
                    HashSet::new()
                }
            },
            Ok(None) => HashSet::new(),
            Err(e) => {
                warn!("failed to read favorites storage, starting empty: {}", e);
                HashSet::new()
            }
        };

        Self {
            store,
            favorites,
            revision: 0,
        }
    }

    /// Flip membership for `id` and persist the full set synchronously.
    ///
    /// Returns the new membership state. A failed write keeps the
    /// in-memory change and logs; the next successful toggle rewrites the
    /// complete set anyway.
    pub fn toggle(&mut self, id: &str) -> bool {
        let now_favorite = if self.favorites.remove(id) {
            false
        } else {
            self.favorites.insert(id.to_string());
            true
        };
        self.revision += 1;
        self.persist();
        now_favorite
    }

    /// Membership test.
    pub fn has(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// The full favorite set.
    pub fn all(&self) -> &HashSet<String> {
        &self.favorites
    }

    /// Number of favorited ids.
    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    /// True when no ids are favorited.
    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    /// Change counter, bumped on every toggle.
    ///
    /// The listing pipeline keys its favorites-scope memo on this value
    /// instead of hashing the whole set.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn persist(&mut self) {
        // Order in the array is not significant; membership is.
        let ids: Vec<&String> = self.favorites.iter().collect();
        match serde_json::to_string(&ids) {
            Ok(json) => {
                if let Err(e) = self.store.set(FAVORITES_KEY, &json) {
                    warn!("failed to persist favorites: {}", e);
                }
            }
            Err(e) => warn!("failed to serialize favorites: {}", e),
        }
    }
}

impl std::fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesStore")
            .field("favorites", &self.favorites)
            .field("revision", &self.revision)
            .finish()
    }
}
