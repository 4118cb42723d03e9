//! Workflow store: CRUD, template instantiation and search.

use super::model::{NewWorkflow, Workflow, WorkflowPatch, WorkflowTemplate, WorkflowsView};
use super::repository::{WorkflowRepository, WorkflowTemplateRepository};
use crate::config::LatencySettings;
use crate::error::{DocIntelError, Result};
use crate::latency;
use crate::loading::LoadingTracker;
use crate::repository::Entity;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Holds workflows and the read-only template gallery.
///
/// Every mutation reads the latest stored record under `write_gate` and
/// writes it back before releasing the gate.
pub struct WorkflowStore {
    repository: Arc<dyn WorkflowRepository>,
    templates: Arc<dyn WorkflowTemplateRepository>,
    latency: LatencySettings,
    write_gate: Mutex<()>,
    loading: LoadingTracker,
}

impl WorkflowStore {
    pub fn new(
        repository: Arc<dyn WorkflowRepository>,
        templates: Arc<dyn WorkflowTemplateRepository>,
        latency: LatencySettings,
    ) -> Self {
        Self {
            repository,
            templates,
            latency,
            write_gate: Mutex::new(()),
            loading: LoadingTracker::new(),
        }
    }

    pub async fn create_workflow(&self, new: NewWorkflow) -> Result<Workflow> {
        let _loading = self.loading.begin();
        latency::simulate("workflows.create", self.latency.workflow()).await;

        let workflow = Workflow::create(Uuid::new_v4().to_string(), new);
        {
            let _gate = self.write_gate.lock().await;
            self.repository.insert(workflow.clone()).await?;
        }

        tracing::info!(workflow_id = %workflow.id, title = %workflow.title, "Workflow created");
        Ok(workflow)
    }

    /// Creates an active workflow from a gallery template.
    pub async fn create_from_template(&self, template_id: &str) -> Result<Workflow> {
        let template = self
            .templates
            .find_by_id(template_id)
            .await?
            .ok_or_else(|| DocIntelError::not_found(WorkflowTemplate::ENTITY_TYPE, template_id))?;

        tracing::debug!(template_id, "Instantiating workflow template");
        self.create_workflow(template.instantiate()).await
    }

    pub async fn get_workflow(&self, workflow_id: &str) -> Result<Option<Workflow>> {
        self.repository.find_by_id(workflow_id).await
    }

    pub async fn list_workflows(&self) -> Result<Vec<Workflow>> {
        self.repository.list_all().await
    }

    pub async fn list_templates(&self) -> Result<Vec<WorkflowTemplate>> {
        self.templates.list_all().await
    }

    /// Merges `patch` into the workflow and returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` (leaving the collection untouched) when no workflow
    /// has that ID.
    pub async fn update_workflow(
        &self,
        workflow_id: &str,
        patch: WorkflowPatch,
    ) -> Result<Workflow> {
        let _loading = self.loading.begin();
        latency::simulate("workflows.update", self.latency.workflow()).await;

        let _gate = self.write_gate.lock().await;
        let mut workflow = self
            .repository
            .find_by_id(workflow_id)
            .await?
            .ok_or_else(|| DocIntelError::not_found(Workflow::ENTITY_TYPE, workflow_id))?;

        workflow.apply(patch);
        self.repository.save(&workflow).await?;

        tracing::info!(workflow_id, status = %workflow.status, "Workflow updated");
        Ok(workflow)
    }

    /// Removes a workflow. Unknown IDs are a no-op.
    pub async fn delete_workflow(&self, workflow_id: &str) -> Result<()> {
        let _loading = self.loading.begin();
        latency::simulate("workflows.delete", self.latency.workflow()).await;

        let _gate = self.write_gate.lock().await;
        if self.repository.delete(workflow_id).await? {
            tracing::info!(workflow_id, "Workflow deleted");
        }
        Ok(())
    }

    /// Runs the workflow, stamping `last_run` once the run completes.
    /// Document and automation counters are left as they are.
    pub async fn run_workflow(&self, workflow_id: &str) -> Result<()> {
        let _loading = self.loading.begin();
        latency::simulate("workflows.run", self.latency.workflow_run()).await;

        let _gate = self.write_gate.lock().await;
        let Some(mut workflow) = self.repository.find_by_id(workflow_id).await? else {
            tracing::warn!(workflow_id, "Run requested for unknown workflow");
            return Ok(());
        };

        workflow.last_run = Some(Utc::now());
        self.repository.save(&workflow).await?;

        tracing::info!(workflow_id, "Workflow run completed");
        Ok(())
    }

    /// Case-insensitive search over title, description, and department.
    pub async fn search_workflows(&self, query: &str) -> Result<Vec<Workflow>> {
        let results: Vec<Workflow> = self
            .repository
            .list_all()
            .await?
            .into_iter()
            .filter(|workflow| workflow.matches(query))
            .collect();

        tracing::debug!(query, matches = results.len(), "Workflow search");
        Ok(results)
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    pub async fn view(&self) -> Result<WorkflowsView> {
        Ok(WorkflowsView {
            workflows: self.list_workflows().await?,
            templates: self.list_templates().await?,
            is_loading: self.is_loading(),
        })
    }
}
