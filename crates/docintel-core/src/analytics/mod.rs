//! Analytics domain module.
//!
//! - `model`: `Insight`, `InsightKind`
//! - `generator`: insight synthesis capability (`InsightGenerator`)
//! - `repository`: persistence seam (`InsightRepository`)
//! - `store`: generation and keyword search (`InsightStore`)

mod generator;
mod model;
mod repository;
mod store;

pub use generator::{
    GeneratedInsight, InsightGenerator, InsightRequest, PlaceholderInsightGenerator,
};
pub use model::{Insight, InsightKind, InsightsView};
pub use repository::InsightRepository;
pub use store::InsightStore;
