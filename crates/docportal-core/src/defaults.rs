//! Centralized default constants for docportal.
//!
//! **This module is the single source of truth** for shared default values.
//! Crates reference these constants instead of defining their own magic
//! numbers.

use crate::models::DocumentCategory;

// =============================================================================
// NOVELTY
// =============================================================================

/// Trailing window, in calendar months, during which a document counts as new.
pub const NEW_WINDOW_MONTHS: u32 = 3;

// =============================================================================
// RECENTLY VIEWED
// =============================================================================

/// Maximum number of recently viewed documents retained.
pub const RECENT_ITEMS_MAX: usize = 10;

/// Number of recently viewed documents shown in the sidebar widget
/// before a "View All" link appears.
pub const RECENT_WIDGET_LIMIT: usize = 5;

// =============================================================================
// STORAGE
// =============================================================================

/// Local storage key holding the favorites id list.
pub const FAVORITES_KEY: &str = "amf-favorites";

/// Local storage key holding the recently viewed document list.
pub const RECENT_DOCUMENTS_KEY: &str = "amf-recent-documents";

/// Default directory for file-backed local storage.
pub const DEFAULT_DATA_DIR: &str = ".docportal";

// =============================================================================
// BROWSING
// =============================================================================

/// Category tab selected when the documentation page opens.
pub const DEFAULT_CATEGORY: DocumentCategory = DocumentCategory::Manuals;
