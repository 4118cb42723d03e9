pub mod auth;
pub mod chat;
pub mod config;
pub mod dashboard;
pub mod documents;
pub mod insights;
pub mod search;
pub mod workflows;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Chooses between JSON and human-readable rendering.
pub struct Output {
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// Prints `value` as pretty JSON in JSON mode, otherwise hands it to `human`.
    pub fn emit<T: Serialize>(&self, value: &T, human: impl FnOnce(&T)) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            human(value);
        }
        Ok(())
    }
}

pub fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

pub fn ago(timestamp: DateTime<Utc>) -> String {
    docintel_core::time::relative_label(timestamp, Utc::now())
}
