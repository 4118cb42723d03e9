//! Root configuration model.
//!
//! Every section is fully defaulted so a partial (or empty) `config.toml`
//! deserializes into a usable configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct RootConfig {
    pub latency: LatencySettings,
    pub sample_data: SampleDataSettings,
    pub random: RandomSettings,
    pub logging: LogSettings,
}

/// Simulated delays (milliseconds) standing in for backend round-trips.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LatencySettings {
    pub auth_check_ms: u64,
    pub auth_ms: u64,
    pub upload_ms: u64,
    pub processing_ms: u64,
    pub document_delete_ms: u64,
    pub document_search_ms: u64,
    pub workflow_ms: u64,
    pub workflow_run_ms: u64,
    pub chat_session_ms: u64,
    pub chat_reply_ms: u64,
    pub insight_generation_ms: u64,
    pub insight_search_ms: u64,
}

impl Default for LatencySettings {
    fn default() -> Self {
        Self {
            auth_check_ms: 1000,
            auth_ms: 1000,
            upload_ms: 2000,
            processing_ms: 5000,
            document_delete_ms: 1000,
            document_search_ms: 1000,
            workflow_ms: 1000,
            workflow_run_ms: 2000,
            chat_session_ms: 1000,
            chat_reply_ms: 2000,
            insight_generation_ms: 3000,
            insight_search_ms: 1000,
        }
    }
}

impl LatencySettings {
    /// A profile with every delay set to zero.
    pub fn none() -> Self {
        Self {
            auth_check_ms: 0,
            auth_ms: 0,
            upload_ms: 0,
            processing_ms: 0,
            document_delete_ms: 0,
            document_search_ms: 0,
            workflow_ms: 0,
            workflow_run_ms: 0,
            chat_session_ms: 0,
            chat_reply_ms: 0,
            insight_generation_ms: 0,
            insight_search_ms: 0,
        }
    }

    pub fn auth_check(&self) -> Duration {
        Duration::from_millis(self.auth_check_ms)
    }

    pub fn auth(&self) -> Duration {
        Duration::from_millis(self.auth_ms)
    }

    pub fn upload(&self) -> Duration {
        Duration::from_millis(self.upload_ms)
    }

    pub fn processing(&self) -> Duration {
        Duration::from_millis(self.processing_ms)
    }

    pub fn document_delete(&self) -> Duration {
        Duration::from_millis(self.document_delete_ms)
    }

    pub fn document_search(&self) -> Duration {
        Duration::from_millis(self.document_search_ms)
    }

    pub fn workflow(&self) -> Duration {
        Duration::from_millis(self.workflow_ms)
    }

    pub fn workflow_run(&self) -> Duration {
        Duration::from_millis(self.workflow_run_ms)
    }

    pub fn chat_session(&self) -> Duration {
        Duration::from_millis(self.chat_session_ms)
    }

    pub fn chat_reply(&self) -> Duration {
        Duration::from_millis(self.chat_reply_ms)
    }

    pub fn insight_generation(&self) -> Duration {
        Duration::from_millis(self.insight_generation_ms)
    }

    pub fn insight_search(&self) -> Duration {
        Duration::from_millis(self.insight_search_ms)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SampleDataSettings {
    /// Seed every store with the bundled sample records.
    pub enabled: bool,
}

impl Default for SampleDataSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RandomSettings {
    /// Fixed seed for reply selection; entropy-seeded when absent.
    pub seed: Option<u64>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LogSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "docintel=info".to_string(),
        }
    }
}
