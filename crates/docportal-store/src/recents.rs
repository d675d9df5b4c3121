//! Recently viewed documents persisted under the `amf-recent-documents` key.

use chrono::{DateTime, Utc};
use docportal_core::defaults::{RECENT_DOCUMENTS_KEY, RECENT_ITEMS_MAX, RECENT_WIDGET_LIMIT};
use docportal_core::{push_recent, RecentDocument, RecentEntry, RecentlyViewedStore, Result};
use tracing::debug;

use crate::config::StoreConfig;
use crate::storage::{load_json, FileStorage, KeyValueStorage};

/// Most-recent-first view history backed by key-value storage.
#[derive(Debug)]
pub struct PersistentRecents<S: KeyValueStorage> {
    storage: S,
    items: Vec<RecentDocument>,
    max_items: usize,
}

impl<S: KeyValueStorage> PersistentRecents<S> {
    /// Open with the default cap.
    pub fn open(storage: S) -> Self {
        Self::with_capacity(storage, RECENT_ITEMS_MAX)
    }

    /// Open keeping at most `max_items` entries. A stored list longer than
    /// the cap is truncated in memory and rewritten on the next record.
    pub fn with_capacity(storage: S, max_items: usize) -> Self {
        let mut items: Vec<RecentDocument> = load_json(&storage, RECENT_DOCUMENTS_KEY);
        items.truncate(max_items);
        debug!(
            subsystem = "store",
            component = "recents",
            op = "open",
            result_count = items.len(),
            max_items,
            "Recently viewed loaded"
        );
        Self {
            storage,
            items,
            max_items,
        }
    }

    pub fn max_items(&self) -> usize {
        self.max_items
    }

    /// The first `limit` entries, as shown in the sidebar widget.
    pub fn latest(&self, limit: usize) -> &[RecentDocument] {
        &self.items[..self.items.len().min(limit)]
    }

    /// Entries shown in the sidebar widget before its "View All" link.
    pub fn widget_items(&self) -> &[RecentDocument] {
        self.latest(RECENT_WIDGET_LIMIT)
    }

    /// Forget the whole history.
    pub fn clear(&mut self) -> Result<()> {
        self.items.clear();
        self.storage.remove(RECENT_DOCUMENTS_KEY)
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

impl PersistentRecents<FileStorage> {
    /// Open the file-backed history in the configured data directory,
    /// capped at `config.recent_max`.
    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_capacity(config.file_storage(), config.recent_max))
    }
}

impl<S: KeyValueStorage> RecentlyViewedStore for PersistentRecents<S> {
    fn record(&mut self, entry: RecentEntry, now: DateTime<Utc>) -> Result<()> {
        let id = entry.id.clone();
        let mut items = self.items.clone();
        push_recent(&mut items, entry, now, self.max_items);

        let json = serde_json::to_string(&items)?;
        self.storage.set(RECENT_DOCUMENTS_KEY, &json)?;
        self.items = items;

        debug!(
            subsystem = "store",
            component = "recents",
            op = "record",
            document_id = %id,
            result_count = self.items.len(),
            "View recorded"
        );
        Ok(())
    }

    fn list(&self) -> Vec<RecentDocument> {
        self.items.clone()
    }
}
