//! Insight store: listing, search and generation with loading state.

use super::generator::{InsightGenerator, InsightRequest};
use super::model::{Insight, InsightsView};
use super::repository::InsightRepository;
use crate::config::LatencySettings;
use crate::error::Result;
use crate::latency;
use crate::loading::LoadingTracker;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Holds generated analytics insights.
pub struct InsightStore {
    repository: Arc<dyn InsightRepository>,
    generator: Arc<dyn InsightGenerator>,
    latency: LatencySettings,
    write_gate: Mutex<()>,
    loading: LoadingTracker,
}

impl InsightStore {
    pub fn new(
        repository: Arc<dyn InsightRepository>,
        generator: Arc<dyn InsightGenerator>,
        latency: LatencySettings,
    ) -> Self {
        Self {
            repository,
            generator,
            latency,
            write_gate: Mutex::new(()),
            loading: LoadingTracker::new(),
        }
    }

    pub async fn get_insight(&self, insight_id: &str) -> Result<Option<Insight>> {
        self.repository.find_by_id(insight_id).await
    }

    pub async fn list_insights(&self) -> Result<Vec<Insight>> {
        self.repository.list_all().await
    }

    /// Generates an insight over `document_ids` and appends it.
    pub async fn generate_insight(
        &self,
        document_ids: &[String],
        requested_type: &str,
    ) -> Result<Insight> {
        let _loading = self.loading.begin();
        latency::simulate("insights.generate", self.latency.insight_generation()).await;

        let generated = self
            .generator
            .generate(InsightRequest {
                document_ids,
                requested_type,
            })
            .await?;

        let insight = Insight {
            id: Uuid::new_v4().to_string(),
            title: generated.title,
            description: generated.description,
            kind: generated.kind,
            category: generated.category,
            created_at: Utc::now(),
            data: generated.data,
        };
        {
            let _gate = self.write_gate.lock().await;
            self.repository.insert(insight.clone()).await?;
        }

        tracing::info!(
            insight_id = %insight.id,
            kind = %insight.kind,
            documents = document_ids.len(),
            "Insight generated"
        );
        Ok(insight)
    }

    /// Case-insensitive search over title, description, and category.
    pub async fn search_insights(&self, query: &str) -> Result<Vec<Insight>> {
        let _loading = self.loading.begin();
        latency::simulate("insights.search", self.latency.insight_search()).await;

        let results: Vec<Insight> = self
            .repository
            .list_all()
            .await?
            .into_iter()
            .filter(|insight| insight.matches(query))
            .collect();

        tracing::debug!(query, matches = results.len(), "Insight search");
        Ok(results)
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    pub async fn view(&self) -> Result<InsightsView> {
        Ok(InsightsView {
            insights: self.list_insights().await?,
            is_loading: self.is_loading(),
        })
    }
}
