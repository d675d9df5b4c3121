//! Core traits for docportal abstractions.
//!
//! These traits define the seams between the query engine and the
//! collaborators that own state: the favorites store, the recently viewed
//! store, and the bulk download mechanism. The query engine only ever
//! reads favorites; mutation goes through the store.

use chrono::{DateTime, Utc};

use crate::defaults::RECENT_ITEMS_MAX;
use crate::error::Result;
use crate::models::{RecentDocument, RecentEntry};

// =============================================================================
// FAVORITES
// =============================================================================

/// Per-user set of favorite document ids.
pub trait FavoritesStore {
    /// Membership test used while annotating query results.
    fn contains(&self, id: &str) -> bool;

    /// Add the id if absent, remove it if present. Returns the new membership.
    fn toggle(&mut self, id: &str) -> Result<bool>;

    /// All favorite ids in the order they were added.
    fn list(&self) -> Vec<String>;
}

/// Favorites held only in memory for the current session.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFavorites {
    ids: Vec<String>,
}

impl InMemoryFavorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ids(ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut store = Self::new();
        for id in ids {
            let id = id.into();
            if !store.ids.contains(&id) {
                store.ids.push(id);
            }
        }
        store
    }
}

impl FavoritesStore for InMemoryFavorites {
    fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|f| f == id)
    }

    fn toggle(&mut self, id: &str) -> Result<bool> {
        Ok(toggle_membership(&mut self.ids, id))
    }

    fn list(&self) -> Vec<String> {
        self.ids.clone()
    }
}

/// Shared toggle rule for ordered favorites lists.
pub fn toggle_membership(ids: &mut Vec<String>, id: &str) -> bool {
    if let Some(pos) = ids.iter().position(|f| f == id) {
        ids.remove(pos);
        false
    } else {
        ids.push(id.to_string());
        true
    }
}

// =============================================================================
// RECENTLY VIEWED
// =============================================================================

/// Most-recent-first list of viewed documents.
pub trait RecentlyViewedStore {
    /// Record a view at `now`, moving the document to the front.
    fn record(&mut self, entry: RecentEntry, now: DateTime<Utc>) -> Result<()>;

    fn list(&self) -> Vec<RecentDocument>;
}

/// Recently viewed list held only in memory.
#[derive(Debug, Clone)]
pub struct InMemoryRecents {
    items: Vec<RecentDocument>,
    max_items: usize,
}

impl InMemoryRecents {
    pub fn new(max_items: usize) -> Self {
        Self {
            items: Vec::new(),
            max_items,
        }
    }
}

impl Default for InMemoryRecents {
    fn default() -> Self {
        Self::new(RECENT_ITEMS_MAX)
    }
}

impl RecentlyViewedStore for InMemoryRecents {
    fn record(&mut self, entry: RecentEntry, now: DateTime<Utc>) -> Result<()> {
        push_recent(&mut self.items, entry, now, self.max_items);
        Ok(())
    }

    fn list(&self) -> Vec<RecentDocument> {
        self.items.clone()
    }
}

/// Insert a view at the front, dropping any earlier view of the same id and
/// truncating to `max_items`.
pub fn push_recent(
    items: &mut Vec<RecentDocument>,
    entry: RecentEntry,
    now: DateTime<Utc>,
    max_items: usize,
) {
    items.retain(|d| d.id != entry.id);
    items.insert(
        0,
        RecentDocument {
            id: entry.id,
            filename: entry.filename,
            file_type: entry.file_type,
            viewed_at: now.to_rfc3339(),
        },
    );
    items.truncate(max_items);
}

// =============================================================================
// DOWNLOADS
// =============================================================================

/// Receives bulk download requests. Fire-and-forget: no outcome is reported
/// back to the caller.
pub trait DownloadSink {
    fn download(&mut self, ids: &[String]);
}

impl<F> DownloadSink for F
where
    F: FnMut(&[String]),
{
    fn download(&mut self, ids: &[String]) {
        self(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn entry(id: &str) -> RecentEntry {
        RecentEntry {
            id: id.to_string(),
            filename: format!("{id}.pdf"),
            file_type: "pdf".to_string(),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut favorites = InMemoryFavorites::new();
        assert!(favorites.toggle("doc-1").unwrap());
        assert!(favorites.contains("doc-1"));
        assert!(!favorites.toggle("doc-1").unwrap());
        assert!(!favorites.contains("doc-1"));
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let mut favorites = InMemoryFavorites::with_ids(["b", "a"]);
        favorites.toggle("c").unwrap();
        assert_eq!(favorites.list(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_with_ids_deduplicates() {
        let favorites = InMemoryFavorites::with_ids(["a", "a", "b"]);
        assert_eq!(favorites.list(), vec!["a", "b"]);
    }

    #[test]
    fn test_recent_moves_to_front() {
        let mut recents = InMemoryRecents::default();
        recents.record(entry("a"), now()).unwrap();
        recents.record(entry("b"), now()).unwrap();
        recents
            .record(entry("a"), now() + Duration::minutes(5))
            .unwrap();

        let ids: Vec<_> = recents.list().into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(
            recents.list()[0].viewed_at,
            (now() + Duration::minutes(5)).to_rfc3339()
        );
    }

    #[test]
    fn test_recent_truncates() {
        let mut recents = InMemoryRecents::new(3);
        for id in ["a", "b", "c", "d"] {
            recents.record(entry(id), now()).unwrap();
        }
        let ids: Vec<_> = recents.list().into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["d", "c", "b"]);
    }

    #[test]
    fn test_closure_is_download_sink() {
        let mut received = Vec::new();
        {
            let mut sink = |ids: &[String]| received.extend_from_slice(ids);
            sink.download(&["x".to_string()]);
        }
        assert_eq!(received, vec!["x".to_string()]);
    }
}
