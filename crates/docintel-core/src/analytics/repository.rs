//! Insight repository trait.

use super::model::Insight;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for analytics insights, kept in insertion order.
#[async_trait]
pub trait InsightRepository: Send + Sync {
    async fn find_by_id(&self, insight_id: &str) -> Result<Option<Insight>>;

    async fn list_all(&self) -> Result<Vec<Insight>>;

    /// Appends a new insight. Fails if the ID is already taken.
    async fn insert(&self, insight: Insight) -> Result<()>;
}
