//! File type classification for document icons.
//!
//! Catalog `file_type` tags are free-form short strings. Rendering only
//! distinguishes a handful of kinds; everything else shares the generic
//! document icon.

use serde::{Deserialize, Serialize};

/// Recognized document file kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Pdf,
    Video,
    Html,
    Text,
    Other,
}

/// Icon glyph shown next to a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileIcon {
    FileText,
    Video,
    Code,
    FileType,
}

impl FileKind {
    /// Classify a catalog type tag, ignoring case.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "pdf" => Self::Pdf,
            "mp4" => Self::Video,
            "html" => Self::Html,
            "txt" => Self::Text,
            _ => Self::Other,
        }
    }

    pub fn icon(&self) -> FileIcon {
        match self {
            Self::Pdf | Self::Other => FileIcon::FileText,
            Self::Video => FileIcon::Video,
            Self::Html => FileIcon::Code,
            Self::Text => FileIcon::FileType,
        }
    }

    /// Utility class used to tint the icon.
    pub fn color_class(&self) -> &'static str {
        match self {
            Self::Pdf => "text-red-600",
            Self::Video => "text-purple-600",
            Self::Html => "text-blue-600",
            Self::Text => "text-gray-600",
            Self::Other => "text-muted-foreground",
        }
    }
}

impl From<&str> for FileKind {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}
