//! Document repository trait.
//!
//! Defines the interface for document persistence operations.

use super::model::Document;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for managing document records.
///
/// # Implementation Notes
///
/// Implementations must preserve insertion order in `list_all`; it is the
/// display order of the document list.
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Finds a document by its ID.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Document))`: Document found
    /// - `Ok(None)`: Document not found
    async fn find_by_id(&self, document_id: &str) -> Result<Option<Document>>;

    /// Lists all documents in insertion order.
    async fn list_all(&self) -> Result<Vec<Document>>;

    /// Appends a new document. Fails if the ID is already taken.
    async fn insert(&self, document: Document) -> Result<()>;

    /// Replaces the stored document with the same ID in place.
    ///
    /// Returns `NotFound` if no document with that ID exists.
    async fn save(&self, document: &Document) -> Result<()>;

    /// Deletes a document.
    ///
    /// Returns `Ok(true)` if a record was removed, `Ok(false)` if none existed.
    async fn delete(&self, document_id: &str) -> Result<bool>;
}
