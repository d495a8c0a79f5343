use crate::error::StorageError;
use crate::hosted::HostedStorage;
use crate::traits::OutlineStore;
use outliner_core::{AuthSession, NewOutline, OutlineContent, OutlinePage, UserId};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const OUTLINE_ID: &str = "0b7e2c59-2a3c-4f3e-9d53-6e2b7f1d8a10";

fn session() -> AuthSession {
    AuthSession::new(UserId::new("user-1"), Some("a@example.com".to_owned()), "user-jwt")
}

fn row(id: &str, title: &str, points: &[&str]) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "user_id": "user-1",
        "title": title,
        "content": { "thesis": "T", "points": points },
        "created_at": "2025-03-01T10:00:00.123456+00:00"
    })
}

#[tokio::test]
async fn test_insert_sends_owner_and_returns_row() {
    let server = MockServer::start().await;
    let store = HostedStorage::new(&server.uri(), "anon-key".to_owned()).unwrap();

    Mock::given(method("POST"))
        .and(path("/rest/v1/outlines"))
        .and(header("apikey", "anon-key"))
        .and(header("Authorization", "Bearer user-jwt"))
        .and(header("Prefer", "return=representation"))
        .and(body_json(serde_json::json!([{
            "user_id": "user-1",
            "title": "Q",
            "content": { "thesis": "T", "points": ["a", "b"] }
        }])))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(serde_json::json!([row(OUTLINE_ID, "Q", &["a", "b"])])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let content = OutlineContent::new("T", vec!["a".to_owned(), "b".to_owned()]);
    let stored = store.insert_outline(&session(), NewOutline::new("Q", content)).await.unwrap();
    assert_eq!(stored.id, OUTLINE_ID);
    assert_eq!(stored.content.points, vec!["a".to_owned(), "b".to_owned()]);
}

#[tokio::test]
async fn test_insert_rejection_surfaces_store_message() {
    let server = MockServer::start().await;
    let store = HostedStorage::new(&server.uri(), "anon-key".to_owned()).unwrap();

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "code": "42501",
            "message": "new row violates row-level security policy for table \"outlines\""
        })))
        .mount(&server)
        .await;

    let err = store
        .insert_outline(&session(), NewOutline::new("Q", OutlineContent::default()))
        .await
        .unwrap_err();
    match err {
        StorageError::Rejected { status, message } => {
            assert_eq!(status, 403);
            assert!(message.starts_with("new row violates row-level security"));
        },
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn test_list_filters_by_owner_newest_first() {
    let server = MockServer::start().await;
    let store = HostedStorage::new(&format!("{}/", server.uri()), "anon-key".to_owned()).unwrap();

    Mock::given(method("GET"))
        .and(path("/rest/v1/outlines"))
        .and(query_param("user_id", "eq.user-1"))
        .and(query_param("order", "created_at.desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            row(OUTLINE_ID, "newer", &["x"]),
            {
                "id": "11111111-2222-3333-4444-555555555555",
                "user_id": "user-1",
                "title": null,
                "content": null,
                "created_at": "2025-02-01T10:00:00+00:00"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let rows = store.list_outlines(&session(), OutlinePage::all()).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows.first().map(|o| o.title.as_str()), Some("newer"));
    let older = rows.get(1).unwrap();
    assert_eq!(older.title, "");
    assert_eq!(older.content, OutlineContent::default());
}

#[tokio::test]
async fn test_list_sends_limit_when_paged() {
    let server = MockServer::start().await;
    let store = HostedStorage::new(&server.uri(), "anon-key".to_owned()).unwrap();

    Mock::given(method("GET"))
        .and(path("/rest/v1/outlines"))
        .and(query_param("limit", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let rows = store.list_outlines(&session(), OutlinePage::latest(3)).await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_get_returns_none_for_empty_result() {
    let server = MockServer::start().await;
    let store = HostedStorage::new(&server.uri(), "anon-key".to_owned()).unwrap();

    Mock::given(method("GET"))
        .and(query_param("id", format!("eq.{OUTLINE_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    assert!(store.get_outline(&session(), OUTLINE_ID).await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_with_malformed_id_skips_request() {
    let server = MockServer::start().await;
    let store = HostedStorage::new(&server.uri(), "anon-key".to_owned()).unwrap();

    Mock::given(method("GET")).respond_with(ResponseTemplate::new(500)).expect(0).mount(&server).await;

    assert!(store.get_outline(&session(), "not-a-uuid").await.unwrap().is_none());
}
