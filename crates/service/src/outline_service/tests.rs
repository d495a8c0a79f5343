use std::sync::Arc;

use async_trait::async_trait;
use outliner_core::{AuthSession, NewOutline, Outline, OutlineContent, OutlinePage, UserId};
use outliner_llm::{LlmClient, LlmError};
use outliner_storage::{MemoryStorage, OutlineStore, StorageError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::OutlineService;
use crate::ServiceError;

fn session(user: &str) -> AuthSession {
    AuthSession::new(UserId::new(user), None, format!("token-{user}"))
}

fn completion(content: &str) -> serde_json::Value {
    serde_json::json!({
        "choices": [{ "message": { "role": "assistant", "content": content } }]
    })
}

async fn model_replying(content: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(content)))
        .mount(&server)
        .await;
    server
}

fn service(store: Arc<dyn OutlineStore>, server: &MockServer) -> OutlineService {
    let llm = LlmClient::new("test-key".to_owned(), server.uri()).unwrap();
    OutlineService::new(store, Arc::new(llm))
}

/// Accepts reads but rejects every insert, like a store whose row policy
/// refuses the caller.
struct FailingStore;

#[async_trait]
impl OutlineStore for FailingStore {
    async fn insert_outline(
        &self,
        _session: &AuthSession,
        _outline: NewOutline,
    ) -> Result<Outline, StorageError> {
        Err(StorageError::Rejected {
            status: 403,
            message: "new row violates row-level security policy".to_owned(),
        })
    }

    async fn list_outlines(
        &self,
        _session: &AuthSession,
        _page: OutlinePage,
    ) -> Result<Vec<Outline>, StorageError> {
        Ok(Vec::new())
    }

    async fn get_outline(
        &self,
        _session: &AuthSession,
        _id: &str,
    ) -> Result<Option<Outline>, StorageError> {
        Ok(None)
    }
}

#[tokio::test]
async fn test_generate_inserts_once_with_question_as_title() {
    let server = model_replying("Thesis line\nPoint A\nPoint B\n\nPoint C").await;
    let store = MemoryStorage::new();
    let svc = service(Arc::new(store.clone()), &server);
    let alice = session("alice");

    let outline = svc.generate_outline(&alice, "Why study history?").await.unwrap();

    assert_eq!(outline.title, "Why study history?");
    assert_eq!(outline.user_id, alice.user_id);
    assert_eq!(outline.content.thesis, "Thesis line");
    assert_eq!(outline.content.points, vec!["Point A", "Point B", "Point C"]);
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_generate_round_trips_through_store_in_order() {
    let server = model_replying("T\nthird\nfirst\nsecond").await;
    let store = MemoryStorage::new();
    let svc = service(Arc::new(store), &server);
    let alice = session("alice");

    let created = svc.generate_outline(&alice, "Q").await.unwrap();
    let fetched = svc.get_outline(&alice, &created.id).await.unwrap();
    assert_eq!(fetched.content.points, vec!["third", "first", "second"]);
}

#[tokio::test]
async fn test_blank_reply_is_invalid_and_not_stored() {
    let server = model_replying("\n   \n").await;
    let store = MemoryStorage::new();
    let svc = service(Arc::new(store.clone()), &server);

    let err = svc.generate_outline(&session("alice"), "Q").await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidGeneration), "got {err:?}");
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_thesis_without_points_is_invalid() {
    let server = model_replying("Only a thesis").await;
    let store = MemoryStorage::new();
    let svc = service(Arc::new(store.clone()), &server);

    let err = svc.generate_outline(&session("alice"), "Q").await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidGeneration));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_upstream_failure_is_llm_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;
    let store = MemoryStorage::new();
    let svc = service(Arc::new(store.clone()), &server);

    let err = svc.generate_outline(&session("alice"), "Q").await.unwrap_err();
    assert!(
        matches!(err, ServiceError::Llm(LlmError::HttpStatus { code: 500, .. })),
        "got {err:?}"
    );
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_persistence_failure_surfaces_store_message() {
    let server = model_replying("T\nP").await;
    let svc = service(Arc::new(FailingStore), &server);

    let err = svc.generate_outline(&session("alice"), "Q").await.unwrap_err();
    match err {
        ServiceError::Storage(e) => {
            assert_eq!(e.to_string(), "new row violates row-level security policy");
        },
        other => panic!("expected storage error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_question_never_calls_model() {
    let server = MockServer::start().await;
    Mock::given(method("POST")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;
    let svc = service(Arc::new(MemoryStorage::new()), &server);

    let err = svc.generate_outline(&session("alice"), "").await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(_)));
}

#[tokio::test]
async fn test_whitespace_question_is_generated_and_stored() {
    let server = model_replying("T\nP").await;
    let store = MemoryStorage::new();
    let svc = service(Arc::new(store.clone()), &server);

    let outline = svc.generate_outline(&session("alice"), "   ").await.unwrap();
    assert_eq!(outline.title, "   ");
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_submit_keeps_content_as_given() {
    let server = MockServer::start().await;
    let svc = service(Arc::new(MemoryStorage::new()), &server);
    let alice = session("alice");
    let content = OutlineContent::new("", vec!["lonely point".to_owned()]);

    let stored = svc.submit_outline(&alice, "Draft".to_owned(), content.clone()).await.unwrap();
    assert_eq!(stored.content, content);
    assert_eq!(stored.user_id, alice.user_id);
}

#[tokio::test]
async fn test_list_filters_by_title_and_recent_is_capped() {
    let server = MockServer::start().await;
    let svc = service(Arc::new(MemoryStorage::new()), &server);
    let alice = session("alice");
    for title in ["Climate policy", "Roman history", "climate science", "Jazz"] {
        svc.submit_outline(&alice, title.to_owned(), OutlineContent::default()).await.unwrap();
    }

    let titles: Vec<String> = svc
        .list_outlines(&alice, Some("CLIMATE"), OutlinePage::all())
        .await
        .unwrap()
        .into_iter()
        .map(|o| o.title)
        .collect();
    assert_eq!(titles, vec!["climate science", "Climate policy"]);

    let all = svc.list_outlines(&alice, Some(""), OutlinePage::all()).await.unwrap();
    assert_eq!(all.len(), 4);

    let recent = svc.recent_outlines(&alice).await.unwrap();
    assert_eq!(recent.len(), 3);
    assert_eq!(recent.first().map(|o| o.title.as_str()), Some("Jazz"));
}

#[tokio::test]
async fn test_get_other_users_outline_is_not_found() {
    let server = MockServer::start().await;
    let svc = service(Arc::new(MemoryStorage::new()), &server);
    let stored = svc
        .submit_outline(&session("alice"), "Mine".to_owned(), OutlineContent::default())
        .await
        .unwrap();

    let err = svc.get_outline(&session("bob"), &stored.id).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}
