//! Integration tests for the chat-completion provider
//!
//! Each test starts an in-process axum stub on an ephemeral port and points
//! the provider at it.

use axum::{http::StatusCode, routing::post, Json, Router};
use influence_domain::CompletionProvider;
use influence_llm::{ChatCompletionProvider, LlmError};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Serve `router` on 127.0.0.1 and return the chat-completion URL
async fn spawn_stub(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/chat/completions", addr)
}

/// Echoes the request back: content is the user message, role is the model
async fn echo(Json(body): Json<Value>) -> Json<Value> {
    let content = body["messages"][0]["content"].clone();
    let role = body["messages"][0]["role"].clone();
    let model = body.get("model").cloned().unwrap_or(Value::Null);
    Json(json!({
        "choices": [{
            "message": {
                "role": "assistant",
                "content": format!("{}|{}|{}", role.as_str().unwrap_or(""), content.as_str().unwrap_or(""), model)
            }
        }]
    }))
}

#[tokio::test]
async fn test_sends_prompt_as_single_user_message() {
    let url = spawn_stub(Router::new().route("/chat/completions", post(echo))).await;
    let provider = ChatCompletionProvider::new(url);

    let reply = provider.complete("Give me two people").await.unwrap();
    assert_eq!(reply, "user|Give me two people|null");
}

#[tokio::test]
async fn test_includes_model_when_configured() {
    let url = spawn_stub(Router::new().route("/chat/completions", post(echo))).await;
    let provider = ChatCompletionProvider::new(url).with_model("tiny");

    let reply = provider.complete("hi").await.unwrap();
    assert_eq!(reply, "user|hi|\"tiny\"");
}

#[tokio::test]
async fn test_non_success_status_is_transport_error() {
    let router = Router::new().route(
        "/chat/completions",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
    );
    let url = spawn_stub(router).await;
    let provider = ChatCompletionProvider::new(url);

    match provider.complete("hi").await {
        Err(LlmError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "upstream exploded");
        }
        other => panic!("Expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_choices_is_invalid_response() {
    let router = Router::new().route(
        "/chat/completions",
        post(|| async { Json(json!({ "error": "no completions today" })) }),
    );
    let url = spawn_stub(router).await;
    let provider = ChatCompletionProvider::new(url);

    let result = provider.complete("hi").await;
    assert!(matches!(result, Err(LlmError::InvalidResponse(_))));
}

#[tokio::test]
async fn test_non_json_body_is_invalid_response() {
    let router = Router::new().route("/chat/completions", post(|| async { "plain text" }));
    let url = spawn_stub(router).await;
    let provider = ChatCompletionProvider::new(url);

    let result = provider.complete("hi").await;
    assert!(matches!(result, Err(LlmError::InvalidResponse(_))));
}

#[tokio::test]
async fn test_wrong_route_is_status_error() {
    let url = spawn_stub(Router::new().route("/chat/completions", post(echo))).await;
    let provider = ChatCompletionProvider::new(url.replace("/chat/completions", "/nowhere"));

    let result = provider.complete("hi").await;
    assert!(matches!(result, Err(LlmError::Status { status: 404, .. })));
}
