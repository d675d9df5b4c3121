//! # docportal-core
//!
//! Core types, traits, and abstractions for the docportal library.
//!
//! This crate provides the document and machine data model, the date
//! normalizer every date comparison and display funnels through, file type
//! classification, catalog ingestion, and the store traits that the query
//! engine and persistence layer meet at.

pub mod catalog;
pub mod dates;
pub mod defaults;
pub mod error;
pub mod file_kind;
pub mod logging;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use catalog::Catalog;
pub use dates::{DateNormalizer, ParsedDate};
pub use error::{Error, Result};
pub use file_kind::{FileIcon, FileKind};
pub use models::*;
pub use traits::*;
