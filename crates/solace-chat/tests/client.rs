use std::time::Duration;

use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use solace_chat::client::SupportChatClient;
use solace_chat::context::page_context;
use solace_chat::error::ChatError;

fn client(server: &MockServer) -> SupportChatClient {
    SupportChatClient::new(&server.uri(), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn create_session_posts_context_and_returns_the_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/sessions"))
        .and(body_partial_json(serde_json::json!({
            "context": { "pageKind": "condition", "topic": "adhd" }
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "sessionId": "sess-42" })),
        )
        .mount(&server)
        .await;

    let id = client(&server)
        .create_session(&page_context("/conditions/adhd"))
        .await
        .unwrap();
    assert_eq!(id, "sess-42");
}

#[tokio::test]
async fn send_message_returns_reply_and_crisis_flag() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/sessions/sess-42/messages"))
        .and(body_partial_json(serde_json::json!({ "message": "hello" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "response": { "content": "Hi — how can I help today?" },
            "isCrisis": false
        })))
        .mount(&server)
        .await;

    let reply = client(&server)
        .send_message("sess-42", "hello")
        .await
        .unwrap();
    assert_eq!(reply.response.content, "Hi — how can I help today?");
    assert!(!reply.is_crisis);
}

#[tokio::test]
async fn crisis_replies_are_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/sessions/sess-9/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "response": { "content": "Please reach out to the 988 lifeline right now." },
            "isCrisis": true
        })))
        .mount(&server)
        .await;

    let reply = client(&server).send_message("sess-9", "...").await.unwrap();
    assert!(reply.is_crisis);
}

#[tokio::test]
async fn backend_errors_map_to_typed_api_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/sessions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = client(&server)
        .create_session(&page_context("/"))
        .await
        .unwrap_err();
    match err {
        ChatError::Api { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "maintenance");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}
