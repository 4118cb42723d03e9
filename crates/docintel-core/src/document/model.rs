//! Document domain model.

use crate::repository::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::{Display, EnumString};

const BYTES_PER_MEGABYTE: f64 = 1024.0 * 1024.0;

/// Processing status of a document.
///
/// Uploads only ever go `Processing -> Processed`; `Failed` exists for
/// seeded records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DocumentStatus {
    Processing,
    Processed,
    Failed,
}

/// An uploaded document record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub name: String,
    /// Upper-cased file extension (e.g. `PDF`).
    #[serde(rename = "type")]
    pub doc_type: String,
    /// Human-readable size (e.g. `2.4 MB`).
    pub size: String,
    pub status: DocumentStatus,
    pub uploaded_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

impl Document {
    /// Builds the `Processing` record for a freshly uploaded file.
    pub fn from_upload(id: String, file: &UploadFile, uploaded_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: file.name.clone(),
            doc_type: file.file_type(),
            size: file.display_size(),
            status: DocumentStatus::Processing,
            uploaded_at,
            content: None,
            metadata: None,
        }
    }

    /// Case-insensitive substring match on the document name.
    pub fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }

    /// Completes processing. Returns `false` (and changes nothing) unless the
    /// document is still `Processing`.
    pub fn mark_processed(&mut self) -> bool {
        if self.status != DocumentStatus::Processing {
            return false;
        }
        self.status = DocumentStatus::Processed;
        true
    }
}

impl Entity for Document {
    const ENTITY_TYPE: &'static str = "document";

    fn id(&self) -> &str {
        &self.id
    }
}

/// A file handed to the uploader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadFile {
    pub name: String,
    pub size_bytes: u64,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }

    /// Upper-cased extension, or `UNKNOWN` when the name has none.
    pub fn file_type(&self) -> String {
        match self.name.rsplit_once('.') {
            Some((_, ext)) if !ext.is_empty() => ext.to_uppercase(),
            _ => "UNKNOWN".to_string(),
        }
    }

    pub fn display_size(&self) -> String {
        format!("{:.1} MB", self.size_bytes as f64 / BYTES_PER_MEGABYTE)
    }
}

/// Processing flags chosen in the uploader.
///
/// The mock pipeline records them but does not branch on them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadOptions {
    pub extract_text: bool,
    pub auto_classify: bool,
    pub extract_entities: bool,
    pub summarize: bool,
    /// Flags not known to this build.
    #[serde(flatten)]
    pub extra: BTreeMap<String, bool>,
}

impl UploadOptions {
    /// Names of every flag that is switched on.
    pub fn enabled(&self) -> Vec<&str> {
        let named = [
            ("extract_text", self.extract_text),
            ("auto_classify", self.auto_classify),
            ("extract_entities", self.extract_entities),
            ("summarize", self.summarize),
        ];
        named
            .into_iter()
            .filter(|(_, on)| *on)
            .map(|(name, _)| name)
            .chain(
                self.extra
                    .iter()
                    .filter(|(_, on)| **on)
                    .map(|(name, _)| name.as_str()),
            )
            .collect()
    }
}

/// Read accessor snapshot handed to the view layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentsView {
    pub documents: Vec<Document>,
    pub is_loading: bool,
}
