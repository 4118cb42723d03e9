//! End-to-end store behaviour over the in-memory repositories.
//!
//! Every test runs on a paused clock, so the simulated latencies are
//! auto-advanced instead of slept through.

use chrono::Utc;
use docintel_core::analytics::{InsightKind, InsightStore, PlaceholderInsightGenerator};
use docintel_core::chat::{CannedResponder, ChatStore, Sender, CANNED_REPLIES};
use docintel_core::config::LatencySettings;
use docintel_core::document::{DocumentStatus, DocumentStore, UploadFile, UploadOptions};
use docintel_core::random::SeededRandom;
use docintel_core::workflow::{NewWorkflow, WorkflowPatch, WorkflowStatus, WorkflowStore};
use docintel_infrastructure::{InMemoryRepository, sample_data};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

fn document_store() -> DocumentStore {
    let repository = InMemoryRepository::with_records(sample_data::documents(Utc::now()));
    DocumentStore::new(Arc::new(repository), LatencySettings::default())
}

fn workflow_store() -> WorkflowStore {
    let now = Utc::now();
    WorkflowStore::new(
        Arc::new(InMemoryRepository::with_records(sample_data::workflows(now))),
        Arc::new(InMemoryRepository::with_records(sample_data::workflow_templates())),
        LatencySettings::default(),
    )
}

fn chat_store(current: Option<&str>) -> ChatStore {
    let repository = InMemoryRepository::with_records(sample_data::chat_sessions(Utc::now()));
    let responder = CannedResponder::new(Arc::new(SeededRandom::from_seed(7)));
    ChatStore::new(Arc::new(repository), Arc::new(responder), LatencySettings::default())
        .with_current_session(current.map(str::to_string))
}

fn insight_store() -> InsightStore {
    let repository = InMemoryRepository::with_records(sample_data::insights(Utc::now()));
    InsightStore::new(
        Arc::new(repository),
        Arc::new(PlaceholderInsightGenerator),
        LatencySettings::default(),
    )
}

fn new_workflow(title: &str) -> NewWorkflow {
    NewWorkflow {
        title: title.to_string(),
        description: "Routes purchase orders".to_string(),
        department: "Procurement".to_string(),
        status: WorkflowStatus::Paused,
        automations: 2,
    }
}

async fn workflow_ids(store: &WorkflowStore) -> Vec<String> {
    store
        .list_workflows()
        .await
        .unwrap()
        .into_iter()
        .map(|workflow| workflow.id)
        .collect()
}

async fn session_ids(store: &ChatStore) -> Vec<String> {
    store
        .list_sessions()
        .await
        .unwrap()
        .into_iter()
        .map(|session| session.id)
        .collect()
}

// ============================================================================
// Documents
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_upload_then_processing_completes() {
    let store = document_store();
    let uploaded = store
        .upload_document(UploadFile::new("a.pdf", 1_048_576), UploadOptions::default())
        .await
        .unwrap();

    assert_eq!(uploaded.doc_type, "PDF");
    assert_eq!(uploaded.size, "1.0 MB");
    assert_eq!(uploaded.status, DocumentStatus::Processing);

    let documents = store.list_documents().await.unwrap();
    assert_eq!(documents.len(), 6);
    assert_eq!(documents.last().unwrap().id, uploaded.id);

    let stored = store.get_document(&uploaded.id).await.unwrap().unwrap();
    assert_eq!(stored.status, DocumentStatus::Processing);

    tokio::time::sleep(LatencySettings::default().processing() + Duration::from_millis(1)).await;

    let stored = store.get_document(&uploaded.id).await.unwrap().unwrap();
    assert_eq!(stored.status, DocumentStatus::Processed);
    assert_eq!(store.list_documents().await.unwrap().len(), 6);
}

#[tokio::test(start_paused = true)]
async fn test_delete_before_processing_completes() {
    let store = document_store();
    let uploaded = store
        .upload_document(UploadFile::new("notes.txt", 10), UploadOptions::default())
        .await
        .unwrap();

    store.delete_document(&uploaded.id).await.unwrap();
    tokio::time::sleep(LatencySettings::default().processing() * 2).await;

    assert!(store.get_document(&uploaded.id).await.unwrap().is_none());
    assert_eq!(store.list_documents().await.unwrap().len(), 5);
}

#[tokio::test(start_paused = true)]
async fn test_upload_without_extension_is_unknown_type() {
    let store = document_store();
    let uploaded = store
        .upload_document(UploadFile::new("README", 0), UploadOptions::default())
        .await
        .unwrap();
    assert_eq!(uploaded.doc_type, "UNKNOWN");
    assert_eq!(uploaded.size, "0.0 MB");
}

#[tokio::test(start_paused = true)]
async fn test_uploaded_ids_are_unique() {
    let store = document_store();
    let mut ids = HashSet::new();
    for n in 0..5 {
        let doc = store
            .upload_document(UploadFile::new(format!("file{n}.pdf"), 100), UploadOptions::default())
            .await
            .unwrap();
        assert!(ids.insert(doc.id));
    }
    let all: HashSet<String> = store
        .list_documents()
        .await
        .unwrap()
        .into_iter()
        .map(|doc| doc.id)
        .collect();
    assert_eq!(all.len(), 10);
}

#[tokio::test(start_paused = true)]
async fn test_document_ids_not_reused_after_delete() {
    let store = document_store();
    store.delete_document("5").await.unwrap();

    let uploaded = store
        .upload_document(UploadFile::new("replacement.pptx", 512), UploadOptions::default())
        .await
        .unwrap();

    assert_ne!(uploaded.id, "5");
    let ids: Vec<String> = store
        .list_documents()
        .await
        .unwrap()
        .into_iter()
        .map(|doc| doc.id)
        .collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", uploaded.id.as_str()]);
}

#[tokio::test(start_paused = true)]
async fn test_is_loading_during_upload() {
    let store = Arc::new(document_store());
    assert!(!store.is_loading());

    let handle = tokio::spawn({
        let store = Arc::clone(&store);
        async move {
            store
                .upload_document(UploadFile::new("big.pptx", 7_000_000), UploadOptions::default())
                .await
        }
    });
    tokio::task::yield_now().await;
    assert!(store.is_loading());

    handle.await.unwrap().unwrap();
    assert!(!store.is_loading());
}

#[tokio::test(start_paused = true)]
async fn test_document_search() {
    let store = document_store();

    let results = store.search_documents("report").await.unwrap();
    let names: Vec<&str> = results.iter().map(|doc| doc.name.as_str()).collect();
    assert_eq!(names, vec!["Q2 Financial Report.pdf"]);

    let results = store.search_documents("PDF").await.unwrap();
    assert_eq!(results.len(), 2);

    assert_eq!(store.search_documents("").await.unwrap().len(), 5);
    assert!(store.search_documents("zzz").await.unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_delete_unknown_document_is_noop() {
    let store = document_store();
    store.delete_document("missing").await.unwrap();
    assert_eq!(store.list_documents().await.unwrap().len(), 5);
}

// ============================================================================
// Workflows
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_create_workflow_starts_with_zero_documents() {
    let store = workflow_store();
    let created = store.create_workflow(new_workflow("PO Routing")).await.unwrap();

    assert_eq!(created.documents, 0);
    assert_eq!(created.automations, 2);
    assert!(created.last_run.is_none());
    assert_eq!(created.last_run_label(Utc::now()), "Never");

    let fetched = store.get_workflow(&created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test(start_paused = true)]
async fn test_create_workflow_appends_once_at_end() {
    let store = workflow_store();
    let before: Vec<String> = workflow_ids(&store).await;

    let created = store.create_workflow(new_workflow("PO Routing")).await.unwrap();

    let after = workflow_ids(&store).await;
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(&after[..before.len()], &before[..]);
    assert_eq!(after.last(), Some(&created.id));
    assert_eq!(after.iter().filter(|id| **id == created.id).count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_get_workflow_is_idempotent() {
    let store = workflow_store();
    let first = store.get_workflow("3").await.unwrap();
    let second = store.get_workflow("3").await.unwrap();
    assert!(first.is_some());
    assert_eq!(first, second);
    assert_eq!(store.list_workflows().await.unwrap().len(), 5);
}

#[tokio::test(start_paused = true)]
async fn test_workflow_ids_not_reused_after_delete() {
    let store = workflow_store();
    store.delete_workflow("5").await.unwrap();

    let created = store.create_workflow(new_workflow("PO Routing")).await.unwrap();
    let from_template = store.create_from_template("1").await.unwrap();

    for id in [&created.id, &from_template.id] {
        assert_ne!(id, "5");
        assert!(!["1", "2", "3", "4"].contains(&id.as_str()));
    }
    assert_ne!(created.id, from_template.id);

    let ids = workflow_ids(&store).await;
    let unique: HashSet<&String> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
}

#[tokio::test(start_paused = true)]
async fn test_update_unknown_workflow_leaves_collection_untouched() {
    let store = workflow_store();
    let before = store.list_workflows().await.unwrap();

    let err = store
        .update_workflow(
            "missing",
            WorkflowPatch {
                title: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(store.list_workflows().await.unwrap(), before);
}

#[tokio::test(start_paused = true)]
async fn test_update_merges_patch() {
    let store = workflow_store();
    let updated = store
        .update_workflow(
            "2",
            WorkflowPatch {
                status: Some(WorkflowStatus::Paused),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.status, WorkflowStatus::Paused);
    assert_eq!(updated.title, "Invoice Processing");
    assert_eq!(updated.documents, 156);
    assert_eq!(store.get_workflow("2").await.unwrap().unwrap(), updated);
}

#[tokio::test(start_paused = true)]
async fn test_delete_then_get_is_absent() {
    let store = workflow_store();
    store.delete_workflow("4").await.unwrap();

    assert!(store.get_workflow("4").await.unwrap().is_none());
    assert_eq!(store.list_workflows().await.unwrap().len(), 4);
}

#[tokio::test(start_paused = true)]
async fn test_run_workflow_stamps_last_run_only() {
    let store = workflow_store();
    let before = store.get_workflow("5").await.unwrap().unwrap();

    store.run_workflow("5").await.unwrap();

    let after = store.get_workflow("5").await.unwrap().unwrap();
    assert!(after.last_run > before.last_run);
    assert_eq!(after.documents, before.documents);
    assert_eq!(after.automations, before.automations);
    assert_eq!(after.last_run_label(Utc::now()), "Just now");
}

#[tokio::test(start_paused = true)]
async fn test_run_unknown_workflow_is_noop() {
    let store = workflow_store();
    let before = store.list_workflows().await.unwrap();
    store.run_workflow("missing").await.unwrap();
    assert_eq!(store.list_workflows().await.unwrap(), before);
}

#[tokio::test(start_paused = true)]
async fn test_create_from_template() {
    let store = workflow_store();
    let created = store.create_from_template("3").await.unwrap();
    assert_eq!(created.title, "Expense Report Processing");
    assert_eq!(created.department, "Finance");
    assert_eq!(created.status, WorkflowStatus::Active);

    let err = store.create_from_template("missing").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(store.list_workflows().await.unwrap().len(), 6);
}

#[tokio::test(start_paused = true)]
async fn test_workflow_search_covers_department() {
    let store = workflow_store();
    let results = store.search_workflows("legal").await.unwrap();
    let ids: Vec<&str> = results.iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "5"]);
}

// ============================================================================
// Chat
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_send_message_appends_user_and_reply() {
    let store = chat_store(Some("1"));
    let before = store.current_session().await.unwrap().unwrap().messages.len();

    let sent = store.send_message("What about Q3?").await.unwrap();
    assert_eq!(sent.sender, Sender::User);

    let session = store.current_session().await.unwrap().unwrap();
    assert_eq!(session.messages.len(), before + 2);

    let user = &session.messages[before];
    let reply = &session.messages[before + 1];
    assert_eq!(user.content, "What about Q3?");
    assert_eq!(reply.sender, Sender::Ai);
    assert!(CANNED_REPLIES.contains(&reply.content.as_str()));
    assert_eq!(reply.document_id.as_deref(), Some("1"));
    assert!((1..=2).contains(&reply.references.len()));
    for reference in &reply.references {
        assert!((1..=20).contains(&reference.page));
        assert!((0.80..0.95).contains(&reference.confidence));
    }
    assert!(reply.timestamp >= user.timestamp);
}

#[tokio::test(start_paused = true)]
async fn test_send_without_session_is_invalid_state() {
    let store = chat_store(None);
    let before = store.list_sessions().await.unwrap();

    let err = store.send_message("hello").await.unwrap_err();
    assert!(err.is_invalid_state());
    assert_eq!(store.list_sessions().await.unwrap(), before);
}

#[tokio::test(start_paused = true)]
async fn test_create_session_becomes_current() {
    let store = chat_store(Some("1"));

    let general = store.create_session(None).await.unwrap();
    assert_eq!(general.title, "New Chat");
    assert_eq!(general.messages.len(), 1);
    assert_eq!(general.messages[0].sender, Sender::Ai);

    let current = store.current_session().await.unwrap().unwrap();
    assert_eq!(current.id, general.id);

    let document_chat = store.create_session(Some("3".to_string())).await.unwrap();
    assert_eq!(document_chat.title, "New Document Chat");
    assert_eq!(store.list_sessions().await.unwrap().len(), 4);
}

#[tokio::test(start_paused = true)]
async fn test_create_session_appends_once_at_end() {
    let store = chat_store(Some("1"));
    let before = session_ids(&store).await;

    let created = store.create_session(Some("4".to_string())).await.unwrap();

    let after = session_ids(&store).await;
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(&after[..before.len()], &before[..]);
    assert_eq!(after.last(), Some(&created.id));
    assert_eq!(after.iter().filter(|id| **id == created.id).count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_session_ids_not_reused_after_delete() {
    let store = chat_store(Some("1"));
    store.delete_session("2").await.unwrap();

    let created = store.create_session(None).await.unwrap();
    assert_ne!(created.id, "1");
    assert_ne!(created.id, "2");
    assert_eq!(session_ids(&store).await, vec!["1".to_string(), created.id]);
}

#[tokio::test(start_paused = true)]
async fn test_set_unknown_session_keeps_pointer() {
    let store = chat_store(Some("2"));
    assert!(!store.set_current_session("missing").await.unwrap());
    assert_eq!(store.current_session().await.unwrap().unwrap().id, "2");

    assert!(store.set_current_session("1").await.unwrap());
    assert_eq!(store.current_session().await.unwrap().unwrap().id, "1");
}

#[tokio::test(start_paused = true)]
async fn test_delete_current_session_falls_back_to_first() {
    let store = chat_store(Some("2"));
    store.delete_session("2").await.unwrap();
    assert_eq!(store.current_session().await.unwrap().unwrap().id, "1");

    store.delete_session("1").await.unwrap();
    assert!(store.current_session().await.unwrap().is_none());
    assert!(store.list_sessions().await.unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_delete_other_session_keeps_current() {
    let store = chat_store(Some("2"));
    store.delete_session("1").await.unwrap();
    assert_eq!(store.current_session().await.unwrap().unwrap().id, "2");
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_sends_lose_no_messages() {
    let store = chat_store(None);
    let session = store.create_session(None).await.unwrap();

    let (first, second) = tokio::join!(store.send_message("one"), store.send_message("two"));
    first.unwrap();
    second.unwrap();

    let stored = store.get_session(&session.id).await.unwrap().unwrap();
    assert_eq!(stored.messages.len(), 5);
    assert_eq!(
        stored.messages.iter().filter(|m| m.sender == Sender::User).count(),
        2
    );
    assert!(
        stored
            .messages
            .windows(2)
            .all(|pair| pair[0].timestamp <= pair[1].timestamp)
    );
}

#[tokio::test(start_paused = true)]
async fn test_reply_dropped_when_session_deleted_mid_flight() {
    let store = chat_store(Some("1"));
    let (sent, deleted) = tokio::join!(store.send_message("hello"), async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        store.delete_session("1").await
    });

    assert_eq!(sent.unwrap().content, "hello");
    deleted.unwrap();
    assert!(store.get_session("1").await.unwrap().is_none());
}

// ============================================================================
// Analytics
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_generate_insight_appends() {
    let store = insight_store();
    let ids = vec!["1".to_string(), "4".to_string()];
    let insight = store.generate_insight(&ids, "report").await.unwrap();

    assert_eq!(insight.kind, InsightKind::Report);
    assert_eq!(insight.category, "Auto-generated");
    assert_eq!(insight.data["sourceDocumentCount"], 2);

    let all = store.list_insights().await.unwrap();
    assert_eq!(all.len(), 4);
    assert_eq!(all.last().unwrap().id, insight.id);
}

#[tokio::test(start_paused = true)]
async fn test_generated_insight_ids_are_fresh() {
    let store = insight_store();
    let ids = vec!["2".to_string()];
    let first = store.generate_insight(&ids, "chart").await.unwrap();
    let second = store.generate_insight(&ids, "chart").await.unwrap();

    assert_ne!(first.id, second.id);
    for id in [&first.id, &second.id] {
        assert!(!["1", "2", "3", "4", "5"].contains(&id.as_str()));
    }
    assert_eq!(store.list_insights().await.unwrap().len(), 5);
}

#[tokio::test(start_paused = true)]
async fn test_insight_search() {
    let store = insight_store();
    let titles: Vec<String> = store
        .search_insights("analysis")
        .await
        .unwrap()
        .into_iter()
        .map(|insight| insight.title)
        .collect();
    assert_eq!(
        titles,
        vec!["Revenue Trend Analysis", "Customer Sentiment Analysis", "HR Recruitment Efficiency"]
    );

    assert_eq!(store.search_insights("finance").await.unwrap().len(), 1);
    assert!(store.search_insights("zzz").await.unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_get_is_idempotent() {
    let store = insight_store();
    let first = store.get_insight("2").await.unwrap();
    let second = store.get_insight("2").await.unwrap();
    assert_eq!(first, second);
    assert!(store.get_insight("missing").await.unwrap().is_none());
}
