//! Dashboard summary across all stores.

use chrono::{DateTime, Utc};
use docintel_core::analytics::InsightStore;
use docintel_core::chat::ChatStore;
use docintel_core::document::{DocumentStatus, DocumentStore};
use docintel_core::error::Result;
use docintel_core::workflow::{WorkflowStatus, WorkflowStore};
use serde::Serialize;
use std::sync::Arc;

const RECENT_ACTIVITY_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub processing: usize,
    pub processed: usize,
    pub failed: usize,
}

impl StatusCounts {
    fn record(&mut self, status: DocumentStatus) {
        match status {
            DocumentStatus::Processing => self.processing += 1,
            DocumentStatus::Processed => self.processed += 1,
            DocumentStatus::Failed => self.failed += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    DocumentUploaded,
    WorkflowRun,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityItem {
    pub kind: ActivityKind,
    /// Document or workflow ID.
    pub subject_id: String,
    pub title: String,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardOverview {
    pub total_documents: usize,
    pub documents_by_status: StatusCounts,
    pub active_workflows: usize,
    pub total_workflows: usize,
    pub insight_count: usize,
    pub chat_session_count: usize,
    /// Newest first.
    pub recent_activity: Vec<ActivityItem>,
}

pub struct DashboardService {
    documents: Arc<DocumentStore>,
    workflows: Arc<WorkflowStore>,
    chat: Arc<ChatStore>,
    insights: Arc<InsightStore>,
}

impl DashboardService {
    pub fn new(
        documents: Arc<DocumentStore>,
        workflows: Arc<WorkflowStore>,
        chat: Arc<ChatStore>,
        insights: Arc<InsightStore>,
    ) -> Self {
        Self {
            documents,
            workflows,
            chat,
            insights,
        }
    }

    pub async fn overview(&self) -> Result<DashboardOverview> {
        let (documents, workflows, sessions, insights) = futures::try_join!(
            self.documents.list_documents(),
            self.workflows.list_workflows(),
            self.chat.list_sessions(),
            self.insights.list_insights(),
        )?;

        let mut documents_by_status = StatusCounts::default();
        for document in &documents {
            documents_by_status.record(document.status);
        }

        let uploads = documents.iter().map(|document| ActivityItem {
            kind: ActivityKind::DocumentUploaded,
            subject_id: document.id.clone(),
            title: document.name.clone(),
            at: document.uploaded_at,
        });
        let runs = workflows.iter().filter_map(|workflow| {
            workflow.last_run.map(|at| ActivityItem {
                kind: ActivityKind::WorkflowRun,
                subject_id: workflow.id.clone(),
                title: workflow.title.clone(),
                at,
            })
        });
        let mut recent_activity: Vec<ActivityItem> = uploads.chain(runs).collect();
        recent_activity.sort_by(|a, b| b.at.cmp(&a.at));
        recent_activity.truncate(RECENT_ACTIVITY_LIMIT);

        Ok(DashboardOverview {
            total_documents: documents.len(),
            documents_by_status,
            active_workflows: workflows
                .iter()
                .filter(|workflow| workflow.status == WorkflowStatus::Active)
                .count(),
            total_workflows: workflows.len(),
            insight_count: insights.len(),
            chat_session_count: sessions.len(),
            recent_activity,
        })
    }
}
