//! Core data models for docportal.

use serde::{Deserialize, Serialize};

// =============================================================================
// DOCUMENT CATEGORY
// =============================================================================

/// Closed set of documentation categories, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentCategory {
    CustomDocumentation,
    Manuals,
    MechanicalDrawings,
    ElectricalDrawings,
    Boms,
    Translations,
    Certificates,
    Training,
}

impl DocumentCategory {
    /// Every category in the order the tabs are rendered.
    pub const ALL: [DocumentCategory; 8] = [
        Self::CustomDocumentation,
        Self::Manuals,
        Self::MechanicalDrawings,
        Self::ElectricalDrawings,
        Self::Boms,
        Self::Translations,
        Self::Certificates,
        Self::Training,
    ];

    /// Kebab-case tag used in catalog data and URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CustomDocumentation => "custom-documentation",
            Self::Manuals => "manuals",
            Self::MechanicalDrawings => "mechanical-drawings",
            Self::ElectricalDrawings => "electrical-drawings",
            Self::Boms => "boms",
            Self::Translations => "translations",
            Self::Certificates => "certificates",
            Self::Training => "training",
        }
    }

    /// Caption shown on the category tab.
    pub fn label(&self) -> &'static str {
        match self {
            Self::CustomDocumentation => "Custom Documentation",
            Self::Manuals => "Manuals",
            Self::MechanicalDrawings => "Mechanical Drawings",
            Self::ElectricalDrawings => "Electrical Drawings",
            Self::Boms => "BOMs",
            Self::Translations => "Translations",
            Self::Certificates => "Certificates",
            Self::Training => "Training",
        }
    }

    /// True for tabs that navigate to their own page instead of filtering
    /// the document table.
    pub fn is_link(&self) -> bool {
        matches!(self, Self::Training)
    }
}

impl std::fmt::Display for DocumentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DocumentCategory {
    type Err = crate::Error;

    /// Exact, case-sensitive match on the kebab-case tag. Catalog tags are
    /// not normalized; anything else is a data-integrity error.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| crate::Error::UnknownCategory(s.to_string()))
    }
}

// =============================================================================
// DOCUMENTS
// =============================================================================

/// One retrievable file associated with a machine or a general topic.
///
/// Records are immutable for the lifetime of a session. Favorite and novelty
/// flags are derived per query and live on [`AnnotatedDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    pub id: String,
    pub filename: String,
    /// Short type tag ("pdf", "mp4", "html", "txt"), case-insensitive.
    pub file_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_date: Option<String>,
    /// `MM-DD-YYYY` or a standard date/time string.
    pub date_modified: String,
    /// Empty for documents not tied to a specific machine.
    pub serial_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub machine_id: Option<String>,
    pub category: DocumentCategory,
    #[serde(default)]
    pub file_url: String,
}

/// A document record with its per-session derived flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedDocument {
    #[serde(flatten)]
    pub document: DocumentRecord,
    pub is_favorite: bool,
    pub is_new: bool,
}

impl AnnotatedDocument {
    pub fn id(&self) -> &str {
        &self.document.id
    }
}

// =============================================================================
// RECENTLY VIEWED
// =============================================================================

/// A document the user opened, as retained by the recently viewed store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentDocument {
    pub id: String,
    pub filename: String,
    pub file_type: String,
    /// RFC 3339 timestamp of the view.
    pub viewed_at: String,
}

/// A view to record; the store stamps `viewed_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentEntry {
    pub id: String,
    pub filename: String,
    pub file_type: String,
}

impl From<&DocumentRecord> for RecentEntry {
    fn from(doc: &DocumentRecord) -> Self {
        Self {
            id: doc.id.clone(),
            filename: doc.filename.clone(),
            file_type: doc.file_type.clone(),
        }
    }
}

// =============================================================================
// MACHINES
// =============================================================================

/// Operational status of a machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MachineStatus {
    Operational,
    Maintenance,
    Offline,
}

/// A piece of installed equipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Machine {
    pub id: String,
    pub name: String,
    pub serial_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub status: MachineStatus,
    pub installation_date: String,
    pub location: String,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub document_count: u32,
}
