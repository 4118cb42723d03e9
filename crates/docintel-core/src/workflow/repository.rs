//! Workflow repository traits.

use super::model::{Workflow, WorkflowTemplate};
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for managing workflows.
///
/// `list_all` must return workflows in insertion order.
#[async_trait]
pub trait WorkflowRepository: Send + Sync {
    async fn find_by_id(&self, workflow_id: &str) -> Result<Option<Workflow>>;

    async fn list_all(&self) -> Result<Vec<Workflow>>;

    /// Appends a new workflow. Fails if the ID is already taken.
    async fn insert(&self, workflow: Workflow) -> Result<()>;

    /// Replaces the stored workflow with the same ID in place.
    ///
    /// Returns `NotFound` if no workflow with that ID exists.
    async fn save(&self, workflow: &Workflow) -> Result<()>;

    /// Returns `Ok(true)` if a record was removed.
    async fn delete(&self, workflow_id: &str) -> Result<bool>;
}

/// Read-only source of workflow templates.
#[async_trait]
pub trait WorkflowTemplateRepository: Send + Sync {
    async fn find_by_id(&self, template_id: &str) -> Result<Option<WorkflowTemplate>>;

    async fn list_all(&self) -> Result<Vec<WorkflowTemplate>>;
}
