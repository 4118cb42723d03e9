//! Insight synthesis capability.
//!
//! A real implementation would run analysis over the referenced documents;
//! the placeholder only records how many were selected.

use super::model::InsightKind;
use crate::error::Result;
use async_trait::async_trait;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsightRequest<'a> {
    pub document_ids: &'a [String],
    /// The type label the caller asked for (e.g. `"chart"`).
    pub requested_type: &'a str,
}

/// Everything about a new insight except its identity and timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedInsight {
    pub title: String,
    pub description: String,
    pub kind: InsightKind,
    pub category: String,
    pub data: serde_json::Value,
}

#[async_trait]
pub trait InsightGenerator: Send + Sync {
    async fn generate(&self, request: InsightRequest<'_>) -> Result<GeneratedInsight>;
}

#[derive(Debug, Clone, Default)]
pub struct PlaceholderInsightGenerator;

#[async_trait]
impl InsightGenerator for PlaceholderInsightGenerator {
    async fn generate(&self, request: InsightRequest<'_>) -> Result<GeneratedInsight> {
        let kind = InsightKind::parse_or_default(request.requested_type);
        let label = match request.requested_type.trim() {
            "" => kind.to_string(),
            requested => requested.to_string(),
        };

        Ok(GeneratedInsight {
            title: format!("Generated {} Analysis", label),
            description: "Automatically generated analysis based on selected documents".to_string(),
            kind,
            category: "Auto-generated".to_string(),
            data: json!({
                "summary": "This is an automatically generated insight based on the selected documents.",
                "keyFindings": [
                    "Finding 1 based on document analysis",
                    "Finding 2 based on document analysis",
                    "Finding 3 based on document analysis",
                ],
                "sourceDocumentCount": request.document_ids.len(),
            }),
        })
    }
}
