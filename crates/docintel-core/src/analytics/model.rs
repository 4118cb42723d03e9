//! Analytics insight domain model.

use crate::repository::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum InsightKind {
    Chart,
    Report,
    Insight,
}

impl InsightKind {
    /// Parses a requested type, falling back to `Insight` for anything unknown.
    pub fn parse_or_default(requested: &str) -> Self {
        requested.trim().parse().unwrap_or(InsightKind::Insight)
    }
}

/// A generated analytics artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub category: String,
    pub created_at: DateTime<Utc>,
    /// Opaque payload rendered by the view layer (chart series, findings, …).
    pub data: serde_json::Value,
}

impl Insight {
    /// Case-insensitive substring match on title, description, and category.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        [&self.title, &self.description, &self.category]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }
}

impl Entity for Insight {
    const ENTITY_TYPE: &'static str = "insight";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Read accessor snapshot handed to the view layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightsView {
    pub insights: Vec<Insight>,
    pub is_loading: bool,
}
