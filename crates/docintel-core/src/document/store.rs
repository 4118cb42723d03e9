//! Document store: upload, background processing and lookup.

use super::model::{Document, DocumentsView, UploadFile, UploadOptions};
use super::repository::DocumentRepository;
use crate::config::LatencySettings;
use crate::error::Result;
use crate::latency;
use crate::loading::LoadingTracker;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Holds the document collection and drives the upload/processing lifecycle.
///
/// Mutations are applied one at a time through `write_gate`; the simulated
/// round-trip happens before the gate is taken, so a slow upload never
/// blocks a concurrent delete from landing.
pub struct DocumentStore {
    repository: Arc<dyn DocumentRepository>,
    latency: LatencySettings,
    write_gate: Arc<Mutex<()>>,
    loading: LoadingTracker,
}

impl DocumentStore {
    pub fn new(repository: Arc<dyn DocumentRepository>, latency: LatencySettings) -> Self {
        Self {
            repository,
            latency,
            write_gate: Arc::new(Mutex::new(())),
            loading: LoadingTracker::new(),
        }
    }

    /// Uploads a file and returns its record in the `Processing` state.
    ///
    /// Processing completes in the background after the configured delay,
    /// flipping the same record to `Processed` in place.
    pub async fn upload_document(
        &self,
        file: UploadFile,
        options: UploadOptions,
    ) -> Result<Document> {
        let _loading = self.loading.begin();
        latency::simulate("documents.upload", self.latency.upload()).await;

        let document = Document::from_upload(Uuid::new_v4().to_string(), &file, Utc::now());
        {
            let _gate = self.write_gate.lock().await;
            self.repository.insert(document.clone()).await?;
        }

        tracing::info!(
            document_id = %document.id,
            name = %document.name,
            size = %document.size,
            options = ?options.enabled(),
            "Document uploaded"
        );

        self.schedule_processing(document.id.clone());
        Ok(document)
    }

    pub async fn get_document(&self, document_id: &str) -> Result<Option<Document>> {
        self.repository.find_by_id(document_id).await
    }

    pub async fn list_documents(&self) -> Result<Vec<Document>> {
        self.repository.list_all().await
    }

    /// Removes a document. Unknown IDs are a no-op.
    pub async fn delete_document(&self, document_id: &str) -> Result<()> {
        let _loading = self.loading.begin();
        latency::simulate("documents.delete", self.latency.document_delete()).await;

        let _gate = self.write_gate.lock().await;
        if self.repository.delete(document_id).await? {
            tracing::info!(document_id, "Document deleted");
        } else {
            tracing::debug!(document_id, "Delete requested for unknown document");
        }
        Ok(())
    }

    /// Returns the documents whose name contains `query`, ignoring case.
    /// An empty query returns every document.
    pub async fn search_documents(&self, query: &str) -> Result<Vec<Document>> {
        let _loading = self.loading.begin();
        latency::simulate("documents.search", self.latency.document_search()).await;

        let results: Vec<Document> = self
            .repository
            .list_all()
            .await?
            .into_iter()
            .filter(|doc| doc.matches(query))
            .collect();

        tracing::debug!(query, matches = results.len(), "Document search");
        Ok(results)
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    pub async fn view(&self) -> Result<DocumentsView> {
        Ok(DocumentsView {
            documents: self.list_documents().await?,
            is_loading: self.is_loading(),
        })
    }

    fn schedule_processing(&self, document_id: String) {
        let repository = Arc::clone(&self.repository);
        let write_gate = Arc::clone(&self.write_gate);
        let delay = self.latency.processing();

        tokio::spawn(async move {
            latency::simulate("documents.processing", delay).await;

            let _gate = write_gate.lock().await;
            match repository.find_by_id(&document_id).await {
                Ok(Some(mut document)) => {
                    if !document.mark_processed() {
                        return;
                    }
                    match repository.save(&document).await {
                        Ok(()) => tracing::info!(document_id = %document.id, "Document processed"),
                        Err(e) => {
                            tracing::warn!(
                                %document_id,
                                "Failed to store processed document: {}",
                                e
                            )
                        }
                    }
                }
                Ok(None) => {
                    tracing::debug!(%document_id, "Document removed before processing completed");
                }
                Err(e) => {
                    tracing::warn!(%document_id, "Failed to load document for processing: {}", e)
                }
            }
        });
    }
}
