//! Global search across machines and documents.
//!
//! Backs the site-wide search page: one query string, matched
//! case-insensitively against machine names and serials and against
//! document filenames and serials, regardless of category.

use docportal_core::{DocumentRecord, Machine};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::machines::filter_machines;
use crate::query::matches_text;

/// Matches for one global search, each list in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSearchResults {
    pub query: String,
    pub machines: Vec<Machine>,
    pub documents: Vec<DocumentRecord>,
}

impl GlobalSearchResults {
    pub fn total(&self) -> usize {
        self.machines.len() + self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Search machines and documents. A blank query returns no results.
pub fn search_all(
    query: &str,
    machines: &[Machine],
    documents: &[DocumentRecord],
) -> GlobalSearchResults {
    if query.trim().is_empty() {
        return GlobalSearchResults {
            query: query.to_string(),
            ..Default::default()
        };
    }

    let term_lower = query.to_lowercase();
    let results = GlobalSearchResults {
        query: query.to_string(),
        machines: filter_machines(machines, query),
        documents: documents
            .iter()
            .filter(|doc| matches_text(doc, &term_lower))
            .cloned()
            .collect(),
    };

    debug!(
        subsystem = "query",
        op = "search_all",
        query = %query,
        machine_count = results.machines.len(),
        result_count = results.documents.len(),
        "Global search"
    );
    results
}
