//! Chat session domain model.

use super::message::ChatMessage;
use crate::repository::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const DOCUMENT_GREETING: &str = "I've analyzed this document. How can I help you with it?";
const GENERAL_GREETING: &str = "Hello! I'm your AI assistant. How can I help you today?";

/// An append-only conversation, optionally anchored to one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    pub messages: Vec<ChatMessage>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ChatSession {
    /// Opens a session seeded with the assistant's greeting.
    pub fn open(id: String, document_id: Option<String>, now: DateTime<Utc>) -> Self {
        let (title, greeting) = match document_id {
            Some(_) => ("New Document Chat", DOCUMENT_GREETING),
            None => ("New Chat", GENERAL_GREETING),
        };

        Self {
            id,
            title: title.to_string(),
            document_id,
            messages: vec![ChatMessage::assistant(greeting, now)],
            created_at: now,
            updated_at: now,
        }
    }

    /// Appends a message and returns the stored copy.
    ///
    /// The timestamp is clamped so it never precedes the previous message.
    pub fn append(&mut self, mut message: ChatMessage) -> ChatMessage {
        if let Some(last) = self.last_timestamp() {
            message.timestamp = message.timestamp.max(last);
        }
        self.updated_at = self.updated_at.max(message.timestamp);
        self.messages.push(message.clone());
        message
    }

    pub fn last_timestamp(&self) -> Option<DateTime<Utc>> {
        self.messages.last().map(|message| message.timestamp)
    }
}

impl Entity for ChatSession {
    const ENTITY_TYPE: &'static str = "chat session";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Read accessor snapshot handed to the view layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatView {
    pub sessions: Vec<ChatSession>,
    pub current_session: Option<ChatSession>,
    pub is_loading: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::message::Sender;
    use chrono::Duration;

    #[test]
    fn test_open_document_session() {
        let now = Utc::now();
        let session = ChatSession::open("s1".to_string(), Some("doc-1".to_string()), now);

        assert_eq!(session.title, "New Document Chat");
        assert_eq!(session.messages.len(), 1);
        assert_eq!(session.messages[0].sender, Sender::Ai);
        assert_eq!(session.messages[0].content, DOCUMENT_GREETING);
    }

    #[test]
    fn test_open_general_session() {
        let session = ChatSession::open("s1".to_string(), None, Utc::now());
        assert_eq!(session.title, "New Chat");
        assert_eq!(session.messages[0].content, GENERAL_GREETING);
    }

    #[test]
    fn test_append_clamps_timestamp_and_bumps_updated_at() {
        let now = Utc::now();
        let mut session = ChatSession::open("s1".to_string(), None, now);

        let stale = ChatMessage::user("hello", now - Duration::minutes(5));
        let stored = session.append(stale);
        assert_eq!(stored.timestamp, now);

        let later = now + Duration::seconds(3);
        session.append(ChatMessage::assistant("hi", later));
        assert_eq!(session.updated_at, later);
        assert_eq!(session.messages.len(), 3);
        assert!(
            session
                .messages
                .windows(2)
                .all(|pair| pair[0].timestamp <= pair[1].timestamp)
        );
    }
}
