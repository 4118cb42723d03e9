//! Ordered in-memory repository.
//!
//! One generic collection backs every store. Records keep insertion order,
//! which is also the order the view layer displays them in.

use async_trait::async_trait;
use docintel_core::DocIntelError;
use docintel_core::analytics::{Insight, InsightRepository};
use docintel_core::chat::{ChatSession, ChatSessionRepository};
use docintel_core::document::{Document, DocumentRepository};
use docintel_core::error::Result;
use docintel_core::repository::Entity;
use docintel_core::workflow::{
    Workflow, WorkflowRepository, WorkflowTemplate, WorkflowTemplateRepository,
};
use tokio::sync::RwLock;

/// Insertion-ordered collection of `T`, keyed by [`Entity::id`].
#[derive(Debug)]
pub struct InMemoryRepository<T: Entity> {
    records: RwLock<Vec<T>>,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Creates a repository pre-populated with `records`, in order.
    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    async fn find(&self, id: &str) -> Option<T> {
        let records = self.records.read().await;
        records.iter().find(|record| record.id() == id).cloned()
    }

    async fn all(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    async fn push(&self, record: T) -> Result<()> {
        let mut records = self.records.write().await;
        if records.iter().any(|existing| existing.id() == record.id()) {
            return Err(DocIntelError::internal(format!(
                "Duplicate {} id '{}'",
                T::ENTITY_TYPE,
                record.id()
            )));
        }
        records.push(record);
        Ok(())
    }

    async fn replace(&self, record: &T) -> Result<()> {
        let mut records = self.records.write().await;
        let slot = records
            .iter_mut()
            .find(|existing| existing.id() == record.id())
            .ok_or_else(|| DocIntelError::not_found(T::ENTITY_TYPE, record.id()))?;
        *slot = record.clone();
        Ok(())
    }

    async fn remove(&self, id: &str) -> bool {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|record| record.id() != id);
        records.len() != before
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentRepository for InMemoryRepository<Document> {
    async fn find_by_id(&self, document_id: &str) -> Result<Option<Document>> {
        Ok(self.find(document_id).await)
    }

    async fn list_all(&self) -> Result<Vec<Document>> {
        Ok(self.all().await)
    }

    async fn insert(&self, document: Document) -> Result<()> {
        self.push(document).await
    }

    async fn save(&self, document: &Document) -> Result<()> {
        self.replace(document).await
    }

    async fn delete(&self, document_id: &str) -> Result<bool> {
        Ok(self.remove(document_id).await)
    }
}

#[async_trait]
impl WorkflowRepository for InMemoryRepository<Workflow> {
    async fn find_by_id(&self, workflow_id: &str) -> Result<Option<Workflow>> {
        Ok(self.find(workflow_id).await)
    }

    async fn list_all(&self) -> Result<Vec<Workflow>> {
        Ok(self.all().await)
    }

    async fn insert(&self, workflow: Workflow) -> Result<()> {
        self.push(workflow).await
    }

    async fn save(&self, workflow: &Workflow) -> Result<()> {
        self.replace(workflow).await
    }

    async fn delete(&self, workflow_id: &str) -> Result<bool> {
        Ok(self.remove(workflow_id).await)
    }
}

#[async_trait]
impl WorkflowTemplateRepository for InMemoryRepository<WorkflowTemplate> {
    async fn find_by_id(&self, template_id: &str) -> Result<Option<WorkflowTemplate>> {
        Ok(self.find(template_id).await)
    }

    async fn list_all(&self) -> Result<Vec<WorkflowTemplate>> {
        Ok(self.all().await)
    }
}

#[async_trait]
impl ChatSessionRepository for InMemoryRepository<ChatSession> {
    async fn find_by_id(&self, session_id: &str) -> Result<Option<ChatSession>> {
        Ok(self.find(session_id).await)
    }

    async fn list_all(&self) -> Result<Vec<ChatSession>> {
        Ok(self.all().await)
    }

    async fn insert(&self, session: ChatSession) -> Result<()> {
        self.push(session).await
    }

    async fn save(&self, session: &ChatSession) -> Result<()> {
        self.replace(session).await
    }

    async fn delete(&self, session_id: &str) -> Result<bool> {
        Ok(self.remove(session_id).await)
    }
}

#[async_trait]
impl InsightRepository for InMemoryRepository<Insight> {
    async fn find_by_id(&self, insight_id: &str) -> Result<Option<Insight>> {
        Ok(self.find(insight_id).await)
    }

    async fn list_all(&self) -> Result<Vec<Insight>> {
        Ok(self.all().await)
    }

    async fn insert(&self, insight: Insight) -> Result<()> {
        self.push(insight).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_data;
    use chrono::Utc;

    #[tokio::test]
    async fn test_insert_preserves_order_and_rejects_duplicates() {
        let repo = InMemoryRepository::with_records(sample_data::documents(Utc::now()));
        let mut extra = sample_data::documents(Utc::now()).remove(0);
        assert!(repo.insert(extra.clone()).await.is_err());

        extra.id = "99".to_string();
        repo.insert(extra).await.unwrap();

        let ids: Vec<String> = DocumentRepository::list_all(&repo)
            .await
            .unwrap()
            .into_iter()
            .map(|doc| doc.id)
            .collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "99"]);
    }

    #[tokio::test]
    async fn test_save_replaces_in_place() {
        let repo = InMemoryRepository::with_records(sample_data::workflows(Utc::now()));
        let mut workflow = WorkflowRepository::find_by_id(&repo, "3")
            .await
            .unwrap()
            .unwrap();
        workflow.documents = 1;
        WorkflowRepository::save(&repo, &workflow).await.unwrap();

        let all = WorkflowRepository::list_all(&repo).await.unwrap();
        assert_eq!(all[2].id, "3");
        assert_eq!(all[2].documents, 1);
    }

    #[tokio::test]
    async fn test_save_unknown_is_not_found() {
        let repo: InMemoryRepository<Workflow> = InMemoryRepository::new();
        let workflow = sample_data::workflows(Utc::now()).remove(0);
        let err = WorkflowRepository::save(&repo, &workflow).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(WorkflowRepository::list_all(&repo).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_reports_removal() {
        let repo = InMemoryRepository::with_records(sample_data::chat_sessions(Utc::now()));
        assert!(ChatSessionRepository::delete(&repo, "1").await.unwrap());
        assert!(!ChatSessionRepository::delete(&repo, "1").await.unwrap());
        assert_eq!(ChatSessionRepository::list_all(&repo).await.unwrap().len(), 1);
    }
}
