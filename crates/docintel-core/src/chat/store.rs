//! Chat store: sessions, message exchange and simulated replies.

use super::message::ChatMessage;
use super::model::{ChatSession, ChatView};
use super::repository::ChatSessionRepository;
use super::responder::{ChatResponder, ReplyPrompt};
use crate::config::LatencySettings;
use crate::error::{DocIntelError, Result};
use crate::latency;
use crate::loading::LoadingTracker;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

/// Manages chat sessions and the current-session pointer.
///
/// `ChatStore` is responsible for:
/// - Creating sessions (which become current)
/// - Switching and deleting sessions
/// - Appending the user's message and the synthesized assistant reply
///
/// The repository is the only copy of each session; `current_session`
/// always re-reads it, so the pointer and the collection cannot drift apart.
pub struct ChatStore {
    repository: Arc<dyn ChatSessionRepository>,
    responder: Arc<dyn ChatResponder>,
    current_session_id: RwLock<Option<String>>,
    latency: LatencySettings,
    write_gate: Mutex<()>,
    loading: LoadingTracker,
}

impl ChatStore {
    pub fn new(
        repository: Arc<dyn ChatSessionRepository>,
        responder: Arc<dyn ChatResponder>,
        latency: LatencySettings,
    ) -> Self {
        Self {
            repository,
            responder,
            current_session_id: RwLock::new(None),
            latency,
            write_gate: Mutex::new(()),
            loading: LoadingTracker::new(),
        }
    }

    /// Starts with `session_id` as the current session.
    pub fn with_current_session(mut self, session_id: Option<String>) -> Self {
        self.current_session_id = RwLock::new(session_id);
        self
    }

    /// Creates a session seeded with a greeting and makes it current.
    pub async fn create_session(&self, document_id: Option<String>) -> Result<ChatSession> {
        let _loading = self.loading.begin();
        latency::simulate("chat.create_session", self.latency.chat_session()).await;

        let session = ChatSession::open(Uuid::new_v4().to_string(), document_id, Utc::now());
        {
            let _gate = self.write_gate.lock().await;
            self.repository.insert(session.clone()).await?;
            *self.current_session_id.write().await = Some(session.id.clone());
        }

        tracing::info!(
            session_id = %session.id,
            document_id = ?session.document_id,
            "Chat session created"
        );
        Ok(session)
    }

    pub async fn get_session(&self, session_id: &str) -> Result<Option<ChatSession>> {
        self.repository.find_by_id(session_id).await
    }

    pub async fn list_sessions(&self) -> Result<Vec<ChatSession>> {
        self.repository.list_all().await
    }

    pub async fn current_session(&self) -> Result<Option<ChatSession>> {
        let current = self.current_session_id.read().await.clone();
        match current {
            Some(session_id) => self.repository.find_by_id(&session_id).await,
            None => Ok(None),
        }
    }

    /// Points the store at an existing session.
    ///
    /// Returns `false` and leaves the pointer unchanged when the ID is unknown.
    pub async fn set_current_session(&self, session_id: &str) -> Result<bool> {
        let _gate = self.write_gate.lock().await;
        if self.repository.find_by_id(session_id).await?.is_none() {
            tracing::debug!(session_id, "Ignoring switch to unknown chat session");
            return Ok(false);
        }

        *self.current_session_id.write().await = Some(session_id.to_string());
        tracing::debug!(session_id, "Switched current chat session");
        Ok(true)
    }

    /// Sends `content` in the current session and waits for the reply.
    ///
    /// The user message is appended immediately; the assistant reply is
    /// appended after the simulated inference delay. Returns the stored user
    /// message.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` when there is no current session.
    pub async fn send_message(&self, content: &str) -> Result<ChatMessage> {
        let session_id = self
            .current_session_id
            .read()
            .await
            .clone()
            .ok_or_else(|| DocIntelError::invalid_state("No active chat session"))?;

        let _loading = self.loading.begin();

        let (user_message, document_id) = {
            let _gate = self.write_gate.lock().await;
            let mut session = self
                .repository
                .find_by_id(&session_id)
                .await?
                .ok_or_else(|| DocIntelError::invalid_state("No active chat session"))?;

            let stored = session.append(ChatMessage::user(content, Utc::now()));
            self.repository.save(&session).await?;
            (stored, session.document_id)
        };
        tracing::debug!(
            session_id = %session_id,
            message_id = %user_message.id,
            "User message appended"
        );

        latency::simulate("chat.reply", self.latency.chat_reply()).await;
        let reply = self
            .responder
            .respond(ReplyPrompt {
                content,
                document_id: document_id.as_deref(),
            })
            .await?;

        let _gate = self.write_gate.lock().await;
        let Some(mut session) = self.repository.find_by_id(&session_id).await? else {
            tracing::warn!(
                session_id = %session_id,
                "Chat session deleted before the reply arrived"
            );
            return Ok(user_message);
        };

        let reply_message = session.append(
            ChatMessage::assistant(reply.content, Utc::now())
                .with_document(document_id)
                .with_references(reply.references),
        );
        self.repository.save(&session).await?;

        tracing::info!(
            session_id = %session_id,
            reply_id = %reply_message.id,
            references = reply_message.references.len(),
            "Assistant reply appended"
        );
        Ok(user_message)
    }

    /// Deletes a session. If it was current, the first remaining session
    /// (or none) becomes current.
    pub async fn delete_session(&self, session_id: &str) -> Result<()> {
        let _loading = self.loading.begin();
        latency::simulate("chat.delete_session", self.latency.chat_session()).await;

        let _gate = self.write_gate.lock().await;
        if !self.repository.delete(session_id).await? {
            return Ok(());
        }

        let mut current = self.current_session_id.write().await;
        if current.as_deref() == Some(session_id) {
            *current = self
                .repository
                .list_all()
                .await?
                .into_iter()
                .next()
                .map(|session| session.id);
        }

        tracing::info!(session_id, current = ?*current, "Chat session deleted");
        Ok(())
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    pub async fn view(&self) -> Result<ChatView> {
        Ok(ChatView {
            sessions: self.list_sessions().await?,
            current_session: self.current_session().await?,
            is_loading: self.is_loading(),
        })
    }
}
