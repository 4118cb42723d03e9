//! Repository trait re-exports.
//!
//! This module provides centralized access to all repository traits and the
//! `Entity` bound shared by the in-memory implementations.

pub use crate::analytics::InsightRepository;
pub use crate::chat::ChatSessionRepository;
pub use crate::document::DocumentRepository;
pub use crate::workflow::{WorkflowRepository, WorkflowTemplateRepository};

/// A record addressable by a string id within its collection.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Name used in `NotFound` errors (e.g. `"document"`).
    const ENTITY_TYPE: &'static str;

    fn id(&self) -> &str;
}
