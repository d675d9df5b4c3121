//! Favorites persisted under the `amf-favorites` key.

use docportal_core::defaults::FAVORITES_KEY;
use docportal_core::{toggle_membership, FavoritesStore, Result};
use tracing::debug;

use crate::config::StoreConfig;
use crate::storage::{load_json, FileStorage, KeyValueStorage};

/// Favorites set backed by key-value storage.
///
/// The stored value is a JSON array of document ids in the order they were
/// favorited. It is read once on open and rewritten on every toggle.
#[derive(Debug)]
pub struct PersistentFavorites<S: KeyValueStorage> {
    storage: S,
    ids: Vec<String>,
}

impl<S: KeyValueStorage> PersistentFavorites<S> {
    /// Open the favorites stored in `storage`. Missing or corrupt data opens
    /// an empty set.
    pub fn open(storage: S) -> Self {
        let mut ids: Vec<String> = load_json(&storage, FAVORITES_KEY);
        let loaded = ids.len();
        let mut seen = Vec::with_capacity(ids.len());
        ids.retain(|id| {
            if seen.contains(id) {
                false
            } else {
                seen.push(id.clone());
                true
            }
        });
        debug!(
            subsystem = "store",
            component = "favorites",
            op = "open",
            result_count = ids.len(),
            duplicates = loaded - ids.len(),
            "Favorites loaded"
        );
        Self { storage, ids }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    fn save(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.ids)?;
        self.storage.set(FAVORITES_KEY, &json)
    }
}

impl PersistentFavorites<FileStorage> {
    /// Open the file-backed favorites in the configured data directory.
    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::open(config.file_storage()))
    }
}

impl<S: KeyValueStorage> FavoritesStore for PersistentFavorites<S> {
    fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|f| f == id)
    }

    fn toggle(&mut self, id: &str) -> Result<bool> {
        let previous = self.ids.clone();
        let now_favorite = toggle_membership(&mut self.ids, id);
        if let Err(e) = self.save() {
            self.ids = previous;
            return Err(e);
        }
        debug!(
            subsystem = "store",
            component = "favorites",
            op = "toggle",
            document_id = id,
            is_favorite = now_favorite,
            "Favorite toggled"
        );
        Ok(now_favorite)
    }

    fn list(&self) -> Vec<String> {
        self.ids.clone()
    }
}
