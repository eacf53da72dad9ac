//! Integration tests for message dispatch against a mock chat endpoint
//!
//! These tests use wiremock to simulate the remote chat endpoint and
//! verify the dispatch contract end to end: the request shape, the
//! exactly-one-reply-per-input invariant, and the fixed fallback and
//! error placeholder strings.

use chatling::backend::HttpBackend;
use chatling::config::{HttpConfig, LogConfig};
use chatling::dispatch::{ERROR_REPLY, FALLBACK_REPLY};
use chatling::session::Sender;
use chatling::Dispatcher;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn dispatcher_for(server: &MockServer) -> Dispatcher {
    let config = HttpConfig {
        base_url: format!("{}/chat", server.uri()),
        timeout_seconds: 5,
    };
    let backend = HttpBackend::new(config).expect("Failed to create backend");
    Dispatcher::new(Arc::new(backend), &LogConfig::default())
}

#[tokio::test]
async fn test_reply_is_integrated_into_log() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "Hi there"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut dispatcher = dispatcher_for(&mock_server).await;
    let bot = dispatcher.send("Hello!").await.expect("Expected a reply");
    assert_eq!(bot.text, "Hi there");
    assert_eq!(bot.sender, Sender::Bot);

    let messages = dispatcher.log().messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].text, "Hello!");
    assert_eq!(messages[0].sender, Sender::User);
}

#[tokio::test]
async fn test_request_carries_session_id_and_message() {
    let mock_server = MockServer::start().await;

    let mut dispatcher = dispatcher_for(&mock_server).await;
    let session_id = dispatcher.session().id.clone();

    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(body_partial_json(json!({
            "session_id": session_id,
            "message": "ping"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "pong"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let bot = dispatcher.send("ping").await.expect("Expected a reply");
    assert_eq!(bot.text, "pong");
}

#[tokio::test]
async fn test_empty_input_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "unreachable"
        })))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut dispatcher = dispatcher_for(&mock_server).await;
    assert!(dispatcher.send("").await.is_none());
    assert!(dispatcher.send("   \t ").await.is_none());
    assert!(dispatcher.log().is_empty());
}

#[tokio::test]
async fn test_missing_response_field_uses_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok"
        })))
        .mount(&mock_server)
        .await;

    let mut dispatcher = dispatcher_for(&mock_server).await;
    let bot = dispatcher.send("hello").await.expect("Expected a reply");
    assert_eq!(bot.text, FALLBACK_REPLY);
}

#[tokio::test]
async fn test_empty_response_field_uses_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": ""
        })))
        .mount(&mock_server)
        .await;

    let mut dispatcher = dispatcher_for(&mock_server).await;
    let bot = dispatcher.send("hello").await.expect("Expected a reply");
    assert_eq!(bot.text, FALLBACK_REPLY);
}

#[tokio::test]
async fn test_non_json_body_uses_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let mut dispatcher = dispatcher_for(&mock_server).await;
    let bot = dispatcher.send("hello").await.expect("Expected a reply");
    assert_eq!(bot.text, FALLBACK_REPLY);
}

#[tokio::test]
async fn test_server_error_uses_error_placeholder() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let mut dispatcher = dispatcher_for(&mock_server).await;
    let bot = dispatcher.send("hello").await.expect("Expected a reply");
    assert_eq!(bot.text, ERROR_REPLY);
    assert_eq!(bot.sender, Sender::Bot);
}

#[tokio::test]
async fn test_unreachable_endpoint_uses_error_placeholder() {
    // Nothing listens on this port; the request fails at the transport.
    let config = HttpConfig {
        base_url: "http://127.0.0.1:1/chat".to_string(),
        timeout_seconds: 5,
    };
    let backend = HttpBackend::new(config).expect("Failed to create backend");
    let mut dispatcher = Dispatcher::new(Arc::new(backend), &LogConfig::default());

    let bot = dispatcher.send("hello").await.expect("Expected a reply");
    assert_eq!(bot.text, ERROR_REPLY);
}

#[tokio::test]
async fn test_log_order_is_stable_across_sends() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "ack"
        })))
        .expect(3)
        .mount(&mock_server)
        .await;

    let mut dispatcher = dispatcher_for(&mock_server).await;
    dispatcher.send("one").await;
    dispatcher.send("two").await;
    dispatcher.send("three").await;

    let messages = dispatcher.log().messages();
    assert_eq!(messages.len(), 6);
    let user_texts: Vec<&str> = messages
        .iter()
        .filter(|m| m.sender == Sender::User)
        .map(|m| m.text.as_str())
        .collect();
    assert_eq!(user_texts, ["one", "two", "three"]);
    assert_eq!(dispatcher.log().count_from(Sender::Bot), 3);
}

#[tokio::test]
async fn test_distinct_dispatchers_have_distinct_sessions() {
    let mock_server = MockServer::start().await;

    let first = dispatcher_for(&mock_server).await;
    let second = dispatcher_for(&mock_server).await;
    assert_ne!(first.session().id, second.session().id);
}
