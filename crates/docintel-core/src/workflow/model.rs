//! Workflow domain model.

use crate::repository::Entity;
use crate::time::relative_label;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum WorkflowStatus {
    Active,
    Paused,
    Archived,
}

/// A department-scoped automation definition with run counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workflow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub department: String,
    pub status: WorkflowStatus,
    /// `None` until the workflow runs for the first time.
    pub last_run: Option<DateTime<Utc>>,
    pub documents: u32,
    pub automations: u32,
}

impl Workflow {
    /// Builds a never-run workflow with no processed documents.
    pub fn create(id: String, new: NewWorkflow) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            department: new.department,
            status: new.status,
            last_run: None,
            documents: 0,
            automations: new.automations,
        }
    }

    /// Merges every field present in `patch`.
    pub fn apply(&mut self, patch: WorkflowPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(department) = patch.department {
            self.department = department;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(last_run) = patch.last_run {
            self.last_run = Some(last_run);
        }
        if let Some(documents) = patch.documents {
            self.documents = documents;
        }
        if let Some(automations) = patch.automations {
            self.automations = automations;
        }
    }

    /// Case-insensitive substring match on title, description, and department.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        [&self.title, &self.description, &self.department]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }

    /// "Never" or a relative label such as "10 minutes ago".
    pub fn last_run_label(&self, now: DateTime<Utc>) -> String {
        match self.last_run {
            Some(at) => relative_label(at, now),
            None => "Never".to_string(),
        }
    }
}

impl Entity for Workflow {
    const ENTITY_TYPE: &'static str = "workflow";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Fields supplied when creating a workflow. Run counters start at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWorkflow {
    pub title: String,
    pub description: String,
    pub department: String,
    pub status: WorkflowStatus,
    #[serde(default)]
    pub automations: u32,
}

/// Partial update for a workflow. The ID itself is never patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub department: Option<String>,
    pub status: Option<WorkflowStatus>,
    pub last_run: Option<DateTime<Utc>>,
    pub documents: Option<u32>,
    pub automations: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Level {
    Low,
    Medium,
    High,
}

/// Read-only reference workflow offered in the template gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowTemplate {
    pub id: String,
    pub title: String,
    pub description: String,
    pub department: String,
    pub complexity: Level,
    pub popularity: Level,
}

impl WorkflowTemplate {
    /// The creation input used by "Use Template".
    pub fn instantiate(&self) -> NewWorkflow {
        NewWorkflow {
            title: self.title.clone(),
            description: self.description.clone(),
            department: self.department.clone(),
            status: WorkflowStatus::Active,
            automations: 0,
        }
    }
}

impl Entity for WorkflowTemplate {
    const ENTITY_TYPE: &'static str = "workflow template";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Read accessor snapshot handed to the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowsView {
    pub workflows: Vec<Workflow>,
    pub templates: Vec<WorkflowTemplate>,
    pub is_loading: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn new_workflow() -> NewWorkflow {
        NewWorkflow {
            title: "Invoice Processing".to_string(),
            description: "Extract and validate invoice data".to_string(),
            department: "Finance".to_string(),
            status: WorkflowStatus::Active,
            automations: 5,
        }
    }

    #[test]
    fn test_create_resets_counters() {
        let workflow = Workflow::create("w1".to_string(), new_workflow());
        assert_eq!(workflow.last_run, None);
        assert_eq!(workflow.documents, 0);
        assert_eq!(workflow.automations, 5);
        assert_eq!(workflow.last_run_label(Utc::now()), "Never");
    }

    #[test]
    fn test_apply_patch_only_touches_present_fields() {
        let mut workflow = Workflow::create("w1".to_string(), new_workflow());
        workflow.apply(WorkflowPatch {
            status: Some(WorkflowStatus::Paused),
            documents: Some(12),
            ..Default::default()
        });

        assert_eq!(workflow.id, "w1");
        assert_eq!(workflow.title, "Invoice Processing");
        assert_eq!(workflow.status, WorkflowStatus::Paused);
        assert_eq!(workflow.documents, 12);
        assert_eq!(workflow.automations, 5);
    }

    #[test]
    fn test_matches_title_description_department() {
        let workflow = Workflow::create("w1".to_string(), new_workflow());
        assert!(workflow.matches("invoice"));
        assert!(workflow.matches("VALIDATE"));
        assert!(workflow.matches("finance"));
        assert!(!workflow.matches("legal"));
    }

    #[test]
    fn test_last_run_label() {
        let now = Utc::now();
        let mut workflow = Workflow::create("w1".to_string(), new_workflow());
        workflow.last_run = Some(now - Duration::minutes(10));
        assert_eq!(workflow.last_run_label(now), "10 minutes ago");
    }

    #[test]
    fn test_level_parsing() {
        assert_eq!("high".parse::<Level>().unwrap(), Level::High);
        assert_eq!(Level::Medium.to_string(), "Medium");
        assert_eq!(serde_json::to_value(Level::Low).unwrap(), "Low");
    }
}
