//! Workflow domain module.
//!
//! - `model`: `Workflow`, `WorkflowTemplate` and their inputs
//! - `repository`: persistence seams for workflows and templates
//! - `store`: CRUD, runs, and template instantiation (`WorkflowStore`)

mod model;
mod repository;
mod store;

pub use model::{
    Level, NewWorkflow, Workflow, WorkflowPatch, WorkflowStatus, WorkflowTemplate, WorkflowsView,
};
pub use repository::{WorkflowRepository, WorkflowTemplateRepository};
pub use store::WorkflowStore;
