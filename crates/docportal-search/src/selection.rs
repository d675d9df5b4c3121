//! Row selection for bulk actions.
//!
//! The selection is owned by the table view but only ever contains ids the
//! query engine returned. Select-all operates on the currently visible
//! rows, never on rows filtered out of view.

use docportal_core::DownloadSink;
use tracing::debug;

/// Selected document ids, in the order they were selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    /// Add or remove a single id. Returns whether it is now selected.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|s| s == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    /// Header checkbox state: every visible row is selected.
    pub fn is_all_selected<S: AsRef<str>>(&self, visible: &[S]) -> bool {
        !visible.is_empty() && visible.iter().all(|id| self.contains(id.as_ref()))
    }

    /// Header checkbox click. Clears everything when all visible rows are
    /// already selected, otherwise selects exactly the visible rows.
    pub fn toggle_all<S: AsRef<str>>(&mut self, visible: &[S]) {
        if visible.is_empty() || self.is_all_selected(visible) {
            self.ids.clear();
        } else {
            self.ids = visible.iter().map(|id| id.as_ref().to_string()).collect();
        }
        debug!(
            subsystem = "selection",
            op = "toggle_all",
            selection_count = self.ids.len(),
            "Select all toggled"
        );
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Hand the selection to `sink` and clear it. An empty selection is a
    /// no-op. Returns the number of ids handed off.
    pub fn download_selected<D>(&mut self, sink: &mut D) -> usize
    where
        D: DownloadSink + ?Sized,
    {
        if self.ids.is_empty() {
            return 0;
        }
        let ids = std::mem::take(&mut self.ids);
        debug!(
            subsystem = "selection",
            op = "download_selected",
            selection_count = ids.len(),
            "Bulk download requested"
        );
        sink.download(&ids);
        ids.len()
    }

    /// Action bar caption, e.g. "3 documents selected".
    pub fn summary(&self) -> String {
        match self.ids.len() {
            1 => "1 document selected".to_string(),
            n => format!("{n} documents selected"),
        }
    }
}
