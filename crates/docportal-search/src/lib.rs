//! # docportal-search
//!
//! Document query engine for docportal.
//!
//! Turns the catalog plus the viewer's current criteria into the exact,
//! annotated sequence of documents the documentation browser renders:
//!
//! 1. category filter
//! 2. machine scope filter
//! 3. case-insensitive text filter on filename and serial number
//! 4. favorite and novelty annotation
//! 5. optional three-state column sort
//!
//! Also provides the row selection contract behind bulk download, the
//! machine listing search/sort, and the cross-entity global search.

pub mod global;
pub mod machines;
pub mod query;
pub mod selection;
pub mod sort;

pub use global::{search_all, GlobalSearchResults};
pub use machines::{filter_machines, sort_machines, MachineSort};
pub use query::{DocumentQuery, QueryEngine};
pub use selection::Selection;
pub use sort::{SortDirection, SortField, SortIndicator, SortState};
