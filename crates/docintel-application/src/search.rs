//! Cross-store keyword search.

use docintel_core::analytics::{Insight, InsightStore};
use docintel_core::document::{Document, DocumentStore};
use docintel_core::error::Result;
use docintel_core::workflow::{Workflow, WorkflowStore};
use serde::Serialize;
use std::sync::Arc;

/// Matches grouped by store, one group per search tab.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResults {
    pub documents: Vec<Document>,
    pub workflows: Vec<Workflow>,
    pub insights: Vec<Insight>,
}

impl SearchResults {
    pub fn total(&self) -> usize {
        self.documents.len() + self.workflows.len() + self.insights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

pub struct UnifiedSearchService {
    documents: Arc<DocumentStore>,
    workflows: Arc<WorkflowStore>,
    insights: Arc<InsightStore>,
}

impl UnifiedSearchService {
    pub fn new(
        documents: Arc<DocumentStore>,
        workflows: Arc<WorkflowStore>,
        insights: Arc<InsightStore>,
    ) -> Self {
        Self {
            documents,
            workflows,
            insights,
        }
    }

    /// Searches documents, workflows and insights concurrently.
    pub async fn search(&self, query: &str) -> Result<SearchResults> {
        let (documents, workflows, insights) = futures::try_join!(
            self.documents.search_documents(query),
            self.workflows.search_workflows(query),
            self.insights.search_insights(query),
        )?;

        let results = SearchResults {
            documents,
            workflows,
            insights,
        };
        tracing::debug!(query, total = results.total(), "Unified search");
        Ok(results)
    }
}
