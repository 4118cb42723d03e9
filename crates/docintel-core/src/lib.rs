//! Domain core for DocIntel.
//!
//! Each store in this crate owns one in-memory collection (documents,
//! workflows, chat sessions, analytics insights) or the current auth session,
//! and exposes a read accessor plus a constrained set of async mutators.
//! Stores never call each other; cross-store composition lives in the
//! application crate.
//!
//! # Module Structure
//!
//! - `auth`: current user session (`AuthStore`)
//! - `document`: document records and upload processing (`DocumentStore`)
//! - `workflow`: workflows and read-only templates (`WorkflowStore`)
//! - `chat`: chat sessions and synthesized replies (`ChatStore`)
//! - `analytics`: generated insights (`InsightStore`)
//! - `config`, `latency`, `loading`, `random`, `time`: shared helpers

pub mod analytics;
pub mod auth;
pub mod chat;
pub mod config;
pub mod document;
pub mod error;
pub mod latency;
pub mod loading;
pub mod random;
pub mod repository;
pub mod time;
pub mod workflow;

pub use error::DocIntelError;
