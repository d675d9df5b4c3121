//! Catalog ingestion.
//!
//! The catalog is the full, ordered collection of document records for a
//! session. Raw records arrive with free-form category strings; this module
//! is the boundary where they are validated against the closed category
//! set. Records that fail validation are logged and dropped, so the query
//! engine only ever sees well-typed data.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::models::{DocumentCategory, DocumentRecord};

/// A document record as supplied by the catalog source, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDocumentRecord {
    pub id: String,
    pub filename: String,
    pub file_type: String,
    #[serde(default)]
    pub file_size: Option<String>,
    #[serde(default)]
    pub upload_date: Option<String>,
    pub date_modified: String,
    #[serde(default)]
    pub serial_number: String,
    #[serde(default)]
    pub machine_id: Option<String>,
    pub category: String,
    #[serde(default)]
    pub file_url: String,
}

impl TryFrom<RawDocumentRecord> for DocumentRecord {
    type Error = Error;

    fn try_from(raw: RawDocumentRecord) -> Result<Self> {
        if raw.filename.trim().is_empty() {
            return Err(Error::InvalidInput(format!(
                "document {} has an empty filename",
                raw.id
            )));
        }
        let category: DocumentCategory = raw.category.parse()?;
        Ok(Self {
            id: raw.id,
            filename: raw.filename,
            file_type: raw.file_type,
            file_size: raw.file_size,
            upload_date: raw.upload_date,
            date_modified: raw.date_modified,
            serial_number: raw.serial_number,
            machine_id: raw.machine_id,
            category,
            file_url: raw.file_url,
        })
    }
}

/// Validated, ordered document catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    documents: Vec<DocumentRecord>,
}

impl Catalog {
    pub fn new(documents: Vec<DocumentRecord>) -> Self {
        Self { documents }
    }

    /// Validate raw records, keeping the valid ones in source order.
    pub fn from_raw(records: impl IntoIterator<Item = RawDocumentRecord>) -> Self {
        let mut rejected = 0usize;
        let documents: Vec<DocumentRecord> = records
            .into_iter()
            .filter_map(|raw| {
                let id = raw.id.clone();
                DocumentRecord::try_from(raw)
                    .map_err(|e| {
                        rejected += 1;
                        warn!(
                            subsystem = "catalog",
                            document_id = %id,
                            error = %e,
                            "Skipping invalid catalog record"
                        );
                    })
                    .ok()
            })
            .collect();

        debug!(
            subsystem = "catalog",
            result_count = documents.len(),
            rejected,
            "Catalog loaded"
        );
        Self { documents }
    }

    /// Parse a JSON array of raw records, then validate as [`Catalog::from_raw`].
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Vec<RawDocumentRecord> = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw))
    }

    pub fn documents(&self) -> &[DocumentRecord] {
        &self.documents
    }

    pub fn get(&self, id: &str) -> Option<&DocumentRecord> {
        self.documents.iter().find(|d| d.id == id)
    }

    /// Like [`Catalog::get`], but a missing id is an error.
    pub fn require(&self, id: &str) -> Result<&DocumentRecord> {
        self.get(id)
            .ok_or_else(|| Error::NotFound(format!("document {id}")))
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl AsRef<[DocumentRecord]> for Catalog {
    fn as_ref(&self) -> &[DocumentRecord] {
        &self.documents
    }
}
