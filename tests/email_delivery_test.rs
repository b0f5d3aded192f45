// ABOUTME: Tests for the Resend email client against a local stub HTTP server
// ABOUTME: Covers receipts, provider rejections, unparseable replies, unreachable hosts, and bad URLs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use pierre_health_server::errors::ErrorCode;
use pierre_health_server::external::{EmailSender, OutboundEmail, ResendEmailSender};
use reqwest::Client;
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// What the stub answers with
#[derive(Clone)]
enum StubReply {
    Json(StatusCode, Value),
    Text(StatusCode, &'static str),
}

struct StubProvider {
    reply: StubReply,
    received: Mutex<Vec<(Option<String>, Value)>>,
}

impl StubProvider {
    fn received(&self) -> Vec<(Option<String>, Value)> {
        self.received.lock().unwrap().clone()
    }
}

async fn handle_emails(
    State(stub): State<Arc<StubProvider>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let auth = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(ToOwned::to_owned);
    stub.received.lock().unwrap().push((auth, body));
    match stub.reply.clone() {
        StubReply::Json(status, value) => (status, Json(value)).into_response(),
        StubReply::Text(status, text) => (status, text).into_response(),
    }
}

/// Serve the stub on an ephemeral port and return its base URL
async fn start_stub(reply: StubReply) -> (String, Arc<StubProvider>) {
    let stub = Arc::new(StubProvider {
        reply,
        received: Mutex::new(Vec::new()),
    });
    let app = Router::new()
        .route("/emails", post(handle_emails))
        .with_state(stub.clone());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), stub)
}

/// Resend client pointed at `base_url`, bypassing any proxy from the environment
fn sender_for(base_url: &str) -> ResendEmailSender {
    let client = Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .connect_timeout(Duration::from_secs(2))
        .build()
        .unwrap();
    ResendEmailSender::with_client(client, base_url, "re_test_key")
}

fn message() -> OutboundEmail {
    OutboundEmail {
        from: "Pierre Calculators <contact@pierre.fitness>".to_owned(),
        to: vec!["support@pierre.fitness".to_owned()],
        reply_to: Some("jane@example.com".to_owned()),
        subject: "[Contact] Question".to_owned(),
        html: "<p>Hello</p>".to_owned(),
        text: "Hello".to_owned(),
    }
}

#[tokio::test]
async fn test_accepted_message_returns_receipt() {
    let (base_url, stub) = start_stub(StubReply::Json(StatusCode::OK, json!({ "id": "em_123" }))).await;
    let sender = sender_for(&base_url);

    let receipt = sender.send(&message()).await.unwrap();
    assert_eq!(receipt.id, "em_123");

    let received = stub.received();
    assert_eq!(received.len(), 1);
    let (auth, body) = &received[0];
    assert_eq!(auth.as_deref(), Some("Bearer re_test_key"));
    assert_eq!(body["to"][0], "support@pierre.fitness");
    assert_eq!(body["reply_to"], "jane@example.com");
    assert_eq!(body["subject"], "[Contact] Question");
}

#[tokio::test]
async fn test_rejection_carries_provider_message_and_status() {
    let (base_url, _stub) = start_stub(StubReply::Json(
        StatusCode::UNPROCESSABLE_ENTITY,
        json!({ "statusCode": 422, "name": "validation_error", "message": "Invalid `to` field" }),
    ))
    .await;
    let sender = sender_for(&base_url);

    let error = sender.send(&message()).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert_eq!(error.message, "Resend: API returned 422: Invalid `to` field");
    assert_eq!(error.details["upstream_status"], 422);
}

#[tokio::test]
async fn test_rejection_without_json_body_uses_status_reason() {
    let (base_url, _stub) =
        start_stub(StubReply::Text(StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded")).await;
    let sender = sender_for(&base_url);

    let error = sender.send(&message()).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert_eq!(error.message, "Resend: API returned 500: Internal Server Error");
    assert_eq!(error.details["upstream_status"], 500);
}

#[tokio::test]
async fn test_unreadable_receipt_is_service_error() {
    let (base_url, _stub) = start_stub(StubReply::Json(StatusCode::OK, json!({ "queued": true }))).await;
    let sender = sender_for(&base_url);

    let error = sender.send(&message()).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert!(error.message.starts_with("Resend: JSON parse error"), "{}", error.message);
}

#[tokio::test]
async fn test_unreachable_provider_is_unavailable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let sender = sender_for(&format!("http://{addr}"));

    let error = sender.send(&message()).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);
    assert!(error.message.starts_with("Resend: "), "{}", error.message);
}

#[tokio::test]
async fn test_unusable_base_url_is_config_error() {
    let sender = sender_for("not a url");

    let error = sender.send(&message()).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigError);
    assert!(error.message.contains("not a url"), "{}", error.message);
}
