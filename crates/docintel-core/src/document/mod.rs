//! Document domain module.
//!
//! - `model`: `Document`, `DocumentStatus`, upload inputs
//! - `repository`: persistence seam (`DocumentRepository`)
//! - `store`: upload/processing lifecycle and search (`DocumentStore`)

mod model;
mod repository;
mod store;

pub use model::{Document, DocumentStatus, DocumentsView, UploadFile, UploadOptions};
pub use repository::DocumentRepository;
pub use store::DocumentStore;
