//! Application layer for DocIntel.
//!
//! Wires the five domain stores together from configuration and provides the
//! read-only services that span more than one store.

pub mod bootstrap;
pub mod dashboard;
pub mod search;

pub use bootstrap::{AppBootstrap, AppServices};
pub use dashboard::{ActivityItem, ActivityKind, DashboardOverview, DashboardService, StatusCounts};
pub use search::{SearchResults, UnifiedSearchService};
