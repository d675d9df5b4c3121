//! Structured logging field name constants for docportal.
//!
//! All crates use these constants for consistent structured logging fields
//! so log aggregation can query by the same names across subsystems.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Persistence lost, requires attention |
//! | WARN  | Recoverable issue, automatic fallback applied |
//! | INFO  | Session lifecycle (store opened, catalog loaded) |
//! | DEBUG | Decision points, stage counts, sort changes |
//! | TRACE | Per-item iteration (individual records, comparisons) |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Subsystem originating the log event.
/// Values: "dates", "catalog", "query", "selection", "store"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "favorites", "recents", "file_storage"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "parse", "query", "toggle", "download_selected"
pub const OPERATION: &str = "op";

/// Document id being operated on.
pub const DOCUMENT_ID: &str = "document_id";

/// Documentation category tag.
pub const CATEGORY: &str = "category";

/// Free-text search term.
pub const QUERY: &str = "query";

/// Machine id used as a query scope.
pub const MACHINE_ID: &str = "machine_id";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Number of records entering a pipeline stage.
pub const INPUT_COUNT: &str = "input_count";

/// Number of results returned by a query.
pub const RESULT_COUNT: &str = "result_count";

/// Number of ids in a selection or bulk action.
pub const SELECTION_COUNT: &str = "selection_count";

// ─── Storage fields ────────────────────────────────────────────────────────

/// Local storage key being read or written.
pub const STORAGE_KEY: &str = "storage_key";

/// Filesystem path backing a storage key.
pub const STORAGE_PATH: &str = "storage_path";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Raw input value that triggered a fallback.
pub const RAW_INPUT: &str = "raw_input";

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
