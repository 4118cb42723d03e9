//! Chat domain module.
//!
//! - `model`: `ChatSession`
//! - `message`: `ChatMessage`, `Sender`, `PageReference`
//! - `responder`: assistant reply capability (`ChatResponder`, `CannedResponder`)
//! - `repository`: persistence seam (`ChatSessionRepository`)
//! - `store`: session lifecycle and message exchange (`ChatStore`)

mod message;
mod model;
mod repository;
mod responder;
mod store;

pub use message::{ChatMessage, PageReference, Sender};
pub use model::{ChatSession, ChatView};
pub use repository::ChatSessionRepository;
pub use responder::{CANNED_REPLIES, CannedResponder, ChatResponder, Reply, ReplyPrompt};
pub use store::ChatStore;
