//! Wires repositories, stores and services from a loaded configuration.

use crate::dashboard::DashboardService;
use crate::search::UnifiedSearchService;
use chrono::Utc;
use docintel_core::analytics::{InsightStore, PlaceholderInsightGenerator};
use docintel_core::auth::AuthStore;
use docintel_core::chat::{CannedResponder, ChatStore};
use docintel_core::config::RootConfig;
use docintel_core::document::DocumentStore;
use docintel_core::random::{RandomSource, SeededRandom};
use docintel_core::workflow::WorkflowStore;
use docintel_infrastructure::{InMemoryRepository, sample_data};
use std::sync::Arc;

/// Every store and service the view layer talks to.
#[derive(Clone)]
pub struct AppServices {
    pub auth: Arc<AuthStore>,
    pub documents: Arc<DocumentStore>,
    pub workflows: Arc<WorkflowStore>,
    pub chat: Arc<ChatStore>,
    pub insights: Arc<InsightStore>,
    pub search: Arc<UnifiedSearchService>,
    pub dashboard: Arc<DashboardService>,
}

pub struct AppBootstrap;

impl AppBootstrap {
    /// Builds all stores from `config`.
    ///
    /// With `sample_data.enabled` the repositories start with the bundled
    /// records (all stamped against one `now`) and the chat store points at
    /// the first sample session; otherwise every collection starts empty.
    pub fn from_config(config: &RootConfig) -> AppServices {
        let latency = config.latency.clone();
        let random: Arc<dyn RandomSource> =
            Arc::new(SeededRandom::from_optional_seed(config.random.seed));

        let now = Utc::now();
        let seed = config.sample_data.enabled;

        let documents = seeded(seed, sample_data::documents(now));
        let workflows = seeded(seed, sample_data::workflows(now));
        let chat_sessions = seeded(seed, sample_data::chat_sessions(now));
        let insights = seeded(seed, sample_data::insights(now));
        // The template gallery is reference data, not sample content.
        let templates = sample_data::workflow_templates();

        let current_session = chat_sessions.first().map(|session| session.id.clone());
        tracing::info!(
            sample_data = seed,
            documents = documents.len(),
            workflows = workflows.len(),
            chat_sessions = chat_sessions.len(),
            insights = insights.len(),
            seeded_random = config.random.seed.is_some(),
            "[Bootstrap] Stores initialized"
        );

        let auth = Arc::new(AuthStore::new(latency.clone()));
        let documents = Arc::new(DocumentStore::new(
            Arc::new(InMemoryRepository::with_records(documents)),
            latency.clone(),
        ));
        let workflows = Arc::new(WorkflowStore::new(
            Arc::new(InMemoryRepository::with_records(workflows)),
            Arc::new(InMemoryRepository::with_records(templates)),
            latency.clone(),
        ));
        let chat = Arc::new(
            ChatStore::new(
                Arc::new(InMemoryRepository::with_records(chat_sessions)),
                Arc::new(CannedResponder::new(random)),
                latency.clone(),
            )
            .with_current_session(current_session),
        );
        let insights = Arc::new(InsightStore::new(
            Arc::new(InMemoryRepository::with_records(insights)),
            Arc::new(PlaceholderInsightGenerator),
            latency,
        ));

        let search = Arc::new(UnifiedSearchService::new(
            Arc::clone(&documents),
            Arc::clone(&workflows),
            Arc::clone(&insights),
        ));
        let dashboard = Arc::new(DashboardService::new(
            Arc::clone(&documents),
            Arc::clone(&workflows),
            Arc::clone(&chat),
            Arc::clone(&insights),
        ));

        AppServices {
            auth,
            documents,
            workflows,
            chat,
            insights,
            search,
            dashboard,
        }
    }
}

fn seeded<T>(enabled: bool, records: Vec<T>) -> Vec<T> {
    if enabled { records } else { Vec::new() }
}
