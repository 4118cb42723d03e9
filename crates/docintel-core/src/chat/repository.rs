//! Chat session repository trait.

use super::model::ChatSession;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for managing chat sessions.
///
/// `list_all` must return sessions in insertion order; the first remaining
/// session becomes current when the current one is deleted.
#[async_trait]
pub trait ChatSessionRepository: Send + Sync {
    async fn find_by_id(&self, session_id: &str) -> Result<Option<ChatSession>>;

    async fn list_all(&self) -> Result<Vec<ChatSession>>;

    /// Appends a new session. Fails if the ID is already taken.
    async fn insert(&self, session: ChatSession) -> Result<()>;

    /// Replaces the stored session with the same ID in place.
    ///
    /// Returns `NotFound` if no session with that ID exists.
    async fn save(&self, session: &ChatSession) -> Result<()>;

    /// Returns `Ok(true)` if a record was removed.
    async fn delete(&self, session_id: &str) -> Result<bool>;
}
