//! Document query pipeline.
//!
//! Given the full catalog and the viewer's criteria, produce the ordered,
//! annotated records to display. Every stage is total over its input; an
//! empty result is a valid outcome the caller renders as an empty state.

use chrono::{DateTime, Local, TimeZone, Utc};
use docportal_core::defaults::DEFAULT_CATEGORY;
use docportal_core::{
    AnnotatedDocument, DateNormalizer, DocumentCategory, DocumentRecord, FavoritesStore,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::sort::{sort_documents, SortState};

// =============================================================================
// CRITERIA
// =============================================================================

/// Filter and sort criteria for one render of the documentation browser.
///
/// # Example
///
/// ```
/// use docportal_core::DocumentCategory;
/// use docportal_search::{DocumentQuery, SortField, SortState};
///
/// let query = DocumentQuery::new(DocumentCategory::Manuals)
///     .with_search("pump")
///     .scoped_to_machine("m-7")
///     .sorted(SortState::ascending(SortField::Filename));
///
/// assert_eq!(query.machine_scope.as_deref(), Some("m-7"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentQuery {
    /// Exact-match category selector.
    pub category: DocumentCategory,

    /// Free text matched case-insensitively against filename and serial
    /// number. Empty matches everything.
    #[serde(default)]
    pub search_term: String,

    /// Exact-match machine id; `None` disables machine scoping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub machine_scope: Option<String>,

    #[serde(default)]
    pub sort: SortState,
}

impl Default for DocumentQuery {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORY)
    }
}

impl DocumentQuery {
    pub fn new(category: DocumentCategory) -> Self {
        Self {
            category,
            search_term: String::new(),
            machine_scope: None,
            sort: SortState::unsorted(),
        }
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn scoped_to_machine(mut self, machine_id: impl Into<String>) -> Self {
        self.machine_scope = Some(machine_id.into());
        self
    }

    pub fn sorted(mut self, sort: SortState) -> Self {
        self.sort = sort;
        self
    }

    /// True when a search term or machine scope narrows the view.
    pub fn has_active_filters(&self) -> bool {
        !self.search_term.is_empty() || self.machine_scope.is_some()
    }
}

// =============================================================================
// STAGE PREDICATES
// =============================================================================

pub fn matches_category(doc: &DocumentRecord, category: DocumentCategory) -> bool {
    doc.category == category
}

pub fn matches_machine(doc: &DocumentRecord, scope: Option<&str>) -> bool {
    match scope {
        Some(machine_id) => doc.machine_id.as_deref() == Some(machine_id),
        None => true,
    }
}

/// Case-insensitive substring match on filename or serial number.
/// `term_lower` must already be lowercased; empty matches everything.
pub fn matches_text(doc: &DocumentRecord, term_lower: &str) -> bool {
    term_lower.is_empty()
        || contains_ignore_case(&doc.filename, term_lower)
        || contains_ignore_case(&doc.serial_number, term_lower)
}

pub fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

// =============================================================================
// QUERY ENGINE
// =============================================================================

/// Runs the filter → annotate → sort pipeline.
#[derive(Debug, Clone)]
pub struct QueryEngine<Tz: TimeZone = Local> {
    dates: DateNormalizer<Tz>,
}

impl Default for QueryEngine<Local> {
    fn default() -> Self {
        Self::new(DateNormalizer::local())
    }
}

impl<Tz: TimeZone> QueryEngine<Tz>
where
    Tz::Offset: std::fmt::Display,
{
    pub fn new(dates: DateNormalizer<Tz>) -> Self {
        Self { dates }
    }

    pub fn dates(&self) -> &DateNormalizer<Tz> {
        &self.dates
    }

    /// Produce the records to display for `criteria`.
    ///
    /// Favorites are only read. `now` anchors the novelty window.
    pub fn query<F>(
        &self,
        catalog: &[DocumentRecord],
        criteria: &DocumentQuery,
        favorites: &F,
        now: DateTime<Utc>,
    ) -> Vec<AnnotatedDocument>
    where
        F: FavoritesStore + ?Sized,
    {
        let term_lower = criteria.search_term.to_lowercase();
        let scope = criteria.machine_scope.as_deref();

        let annotated: Vec<AnnotatedDocument> = catalog
            .iter()
            .filter(|doc| matches_category(doc, criteria.category))
            .filter(|doc| matches_machine(doc, scope))
            .filter(|doc| matches_text(doc, &term_lower))
            .map(|doc| self.annotate(doc, favorites, now))
            .collect();

        debug!(
            subsystem = "query",
            op = "query",
            category = %criteria.category,
            query = %criteria.search_term,
            machine_id = scope.unwrap_or(""),
            input_count = catalog.len(),
            result_count = annotated.len(),
            "Document query filtered"
        );

        sort_documents(annotated, &criteria.sort, &self.dates)
    }

    /// Attach favorite and novelty flags to one record.
    pub fn annotate<F>(
        &self,
        doc: &DocumentRecord,
        favorites: &F,
        now: DateTime<Utc>,
    ) -> AnnotatedDocument
    where
        F: FavoritesStore + ?Sized,
    {
        let annotated = AnnotatedDocument {
            document: doc.clone(),
            is_favorite: favorites.contains(&doc.id),
            is_new: self.dates.is_new(&doc.date_modified, now),
        };
        trace!(
            subsystem = "query",
            document_id = %doc.id,
            is_favorite = annotated.is_favorite,
            is_new = annotated.is_new,
            "Annotated document"
        );
        annotated
    }
}
