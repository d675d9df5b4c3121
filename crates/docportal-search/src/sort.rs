//! Column sorting for the document table.
//!
//! Each sortable column cycles through three states on repeated selection:
//! ascending → descending → unsorted. Selecting a different column starts
//! it at ascending. Unsorted means catalog order.

use std::cmp::Ordering;

use chrono::TimeZone;
use docportal_core::{AnnotatedDocument, DateNormalizer, ParsedDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Sortable document table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Filename,
    SerialNumber,
    DateModified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Icon state for a column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Unsorted,
    Ascending,
    Descending,
}

/// Current sort column and direction, or none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    active: Option<(SortField, SortDirection)>,
}

impl SortState {
    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn ascending(field: SortField) -> Self {
        Self {
            active: Some((field, SortDirection::Ascending)),
        }
    }

    pub fn descending(field: SortField) -> Self {
        Self {
            active: Some((field, SortDirection::Descending)),
        }
    }

    pub fn field(&self) -> Option<SortField> {
        self.active.map(|(field, _)| field)
    }

    pub fn direction(&self) -> Option<SortDirection> {
        self.active.map(|(_, direction)| direction)
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Advance the cycle for a header click on `field`.
    pub fn toggle(&mut self, field: SortField) {
        self.active = match self.active {
            Some((current, SortDirection::Ascending)) if current == field => {
                Some((field, SortDirection::Descending))
            }
            Some((current, SortDirection::Descending)) if current == field => None,
            _ => Some((field, SortDirection::Ascending)),
        };
        debug!(subsystem = "query", op = "toggle_sort", state = ?self.active, "Sort changed");
    }

    pub fn indicator(&self, field: SortField) -> SortIndicator {
        match self.active {
            Some((current, SortDirection::Ascending)) if current == field => SortIndicator::Ascending,
            Some((current, SortDirection::Descending)) if current == field => {
                SortIndicator::Descending
            }
            _ => SortIndicator::Unsorted,
        }
    }
}

enum SortKey {
    Text(String),
    Date(ParsedDate),
}

fn sort_key<Tz: TimeZone>(
    doc: &AnnotatedDocument,
    field: SortField,
    dates: &DateNormalizer<Tz>,
) -> SortKey
where
    Tz::Offset: std::fmt::Display,
{
    match field {
        SortField::Filename => SortKey::Text(doc.document.filename.to_lowercase()),
        SortField::SerialNumber => SortKey::Text(doc.document.serial_number.to_lowercase()),
        SortField::DateModified => SortKey::Date(dates.parse(&doc.document.date_modified)),
    }
}

/// Order two parsed dates; unparseable dates go last in either direction.
pub fn compare_dates(a: &ParsedDate, b: &ParsedDate, direction: SortDirection) -> Ordering {
    match (a, b) {
        (ParsedDate::Valid(x), ParsedDate::Valid(y)) => direction.apply(x.cmp(y)),
        (ParsedDate::Valid(_), ParsedDate::Invalid) => Ordering::Less,
        (ParsedDate::Invalid, ParsedDate::Valid(_)) => Ordering::Greater,
        (ParsedDate::Invalid, ParsedDate::Invalid) => Ordering::Equal,
    }
}

fn compare_keys(a: &SortKey, b: &SortKey, direction: SortDirection) -> Ordering {
    match (a, b) {
        (SortKey::Text(x), SortKey::Text(y)) => direction.apply(x.cmp(y)),
        (SortKey::Date(x), SortKey::Date(y)) => compare_dates(x, y, direction),
        _ => Ordering::Equal,
    }
}

/// Stable sort by the active column; a no-op when unsorted.
pub fn sort_documents<Tz: TimeZone>(
    docs: Vec<AnnotatedDocument>,
    state: &SortState,
    dates: &DateNormalizer<Tz>,
) -> Vec<AnnotatedDocument>
where
    Tz::Offset: std::fmt::Display,
{
    let Some((field, direction)) = state.active else {
        return docs;
    };

    let mut keyed: Vec<(SortKey, AnnotatedDocument)> = docs
        .into_iter()
        .map(|doc| (sort_key(&doc, field, dates), doc))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| compare_keys(a, b, direction));
    keyed.into_iter().map(|(_, doc)| doc).collect()
}
