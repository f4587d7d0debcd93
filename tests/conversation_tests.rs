//! End-to-end tests for conversation, user and mailbox resources.
//!
//! Each test mounts the exact endpoints a resource operation should hit
//! and asserts the request count with `expect`.

use std::collections::HashMap;

use helpscout_api::{
    AccessToken, Attributes, BaseUrl, ClientId, ClientSecret, Conversation, HelpScoutConfig,
    Mailbox, Record, ResourceError, RestClient, RestResource, User,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_client(server: &MockServer) -> RestClient {
    let config = HelpScoutConfig::builder()
        .client_id(ClientId::new("app-id").unwrap())
        .client_secret(ClientSecret::new("app-secret").unwrap())
        .base_url(BaseUrl::new(format!("{}/v2", server.uri())).unwrap())
        .build()
        .unwrap();
    RestClient::new(&config, &AccessToken::new("test-token")).unwrap()
}

fn conversation_body() -> serde_json::Value {
    json!({
        "id": 123,
        "number": 42,
        "subject": "Where is my order?",
        "status": "active",
        "mailboxId": 85,
        "createdAt": "2024-03-01T10:15:00Z",
        "assignee": {"id": 7, "first": "Jane", "email": "jane@example.com"}
    })
}

// ============================================================================
// Conversation Tests
// ============================================================================

#[tokio::test]
async fn test_find_conversation() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/conversations/123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(conversation_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let conversation = Conversation::find(&client, "123").await.unwrap();

    assert_eq!(conversation.id(), Some("123".to_string()));
    assert_eq!(conversation.subject(), Some("Where is my order?"));
    assert_eq!(conversation.number(), Some(42));
    assert_eq!(conversation.field("mailbox_id"), Some(&json!(85)));
}

#[tokio::test]
async fn test_all_conversations_with_query_and_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/conversations"))
        .and(query_param("status", "active"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_embedded": {"conversations": [{"id": 1}, {"id": 2}]},
            "page": {"size": 2, "totalElements": 3, "totalPages": 2, "number": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut query = HashMap::new();
    query.insert("status".to_string(), "active".to_string());

    let client = create_client(&server);
    let conversations = Conversation::all(&client, Some(query)).await.unwrap();

    let ids: Vec<_> = conversations.iter().filter_map(|c| c.id()).collect();
    assert_eq!(ids, vec!["1", "2"]);
    assert_eq!(conversations.page().map(|p| p.total_elements), Some(3));
    assert_eq!(conversations.next_page(), Some(2));
}

#[tokio::test]
async fn test_threads_reads_embedded_threads() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/conversations/123/threads"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_embedded": {"threads": [
                {"id": "t1", "type": "customer"},
                {"id": "t2", "type": "note"}
            ]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let threads = Conversation::threads(&client, "123").await.unwrap();

    let ids: Vec<_> = threads.iter().filter_map(Record::id).collect();
    assert_eq!(ids, vec!["t1", "t2"]);
    assert_eq!(threads[1].get("type"), Some(&json!("note")));
}

#[tokio::test]
async fn test_threads_not_found_propagates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/conversations/999/threads"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let error = Conversation::threads(&client, "999").await.unwrap_err();

    assert!(matches!(error, ResourceError::Rest(_)));
    assert_eq!(error.status(), Some(404));
}

#[tokio::test]
async fn test_create_note_posts_text_and_extras() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/conversations/123/notes"))
        .and(body_json(json!({"user": "u1", "text": "hello"})))
        .respond_with(ResponseTemplate::new(201).insert_header("Resource-ID", "555"))
        .expect(1)
        .mount(&server)
        .await;

    let mut extras = Attributes::new();
    extras.insert("user", "u1");

    let client = create_client(&server);
    let body = Conversation::create_note(&client, "123", "hello", extras)
        .await
        .unwrap();

    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn test_create_note_returns_plain_text_body_unchanged() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/conversations/1/notes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("note created"))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let body = Conversation::create_note(&client, "1", "hello", Attributes::new())
        .await
        .unwrap();

    assert_eq!(body, json!("note created"));
}

#[tokio::test]
async fn test_assignee_fetches_user_each_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/users/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "jane@example.com"
        })))
        .expect(2)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let conversation = Conversation::from_record(Record::from_value(conversation_body()));

    let first = conversation.assignee(&client).await.unwrap().unwrap();
    let second = conversation.assignee(&client).await.unwrap().unwrap();

    assert_eq!(first.first_name(), Some("Jane"));
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_unassigned_conversation_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let conversation = Conversation::from_record(Record::from_value(json!({"id": 1})));

    assert!(conversation.assignee(&client).await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_conversation_reads_headers() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/conversations"))
        .and(body_json(json!({"subject": "New", "mailboxId": 85})))
        .respond_with(
            ResponseTemplate::new(201)
                .insert_header("Resource-ID", "2048")
                .insert_header("Location", "https://api.helpscout.net/v2/conversations/2048"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let attributes = Attributes::from_json(json!({"subject": "New", "mailboxId": 85}));

    let client = create_client(&server);
    let created = Conversation::create(&client, attributes).await.unwrap();

    assert_eq!(created.id.as_deref(), Some("2048"));
    assert_eq!(
        created.location.as_deref(),
        Some("https://api.helpscout.net/v2/conversations/2048")
    );
}

#[tokio::test]
async fn test_save_then_update_then_delete() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/conversations"))
        .respond_with(ResponseTemplate::new(201).insert_header("Resource-ID", "300"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/v2/conversations/300"))
        .and(body_json(json!({"id": 300, "subject": "Renamed"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v2/conversations/300"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let mut conversation =
        Conversation::from_record(Record::from_value(json!({"subject": "Draft"})));

    conversation.save(&client).await.unwrap();
    assert_eq!(conversation.id(), Some("300".to_string()));

    conversation.record_mut().set("subject", "Renamed");
    conversation.save(&client).await.unwrap();
    assert_eq!(conversation.subject(), Some("Renamed"));

    conversation.delete(&client).await.unwrap();
}

#[tokio::test]
async fn test_instance_forwarders_without_id_send_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let conversation = Conversation::from_record(Record::new());

    assert!(matches!(
        conversation.load_threads(&client).await,
        Err(ResourceError::MissingId { .. })
    ));
}

// ============================================================================
// User and Mailbox Tests
// ============================================================================

#[tokio::test]
async fn test_user_me() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "email": "owner@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let me = User::me(&client).await.unwrap();

    assert_eq!(me.email(), Some("owner@example.com"));
}

#[tokio::test]
async fn test_mailbox_folders() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/mailboxes/85/folders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_embedded": {"folders": [{"id": 1, "name": "Unassigned"}]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let folders = Mailbox::folders(&client, "85").await.unwrap();

    assert_eq!(folders.len(), 1);
    assert_eq!(folders[0].get("name"), Some(&json!("Unassigned")));
}
