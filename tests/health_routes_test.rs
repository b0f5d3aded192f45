// ABOUTME: HTTP tests for health endpoints and cross-cutting middleware
// ABOUTME: Covers liveness, readiness, request id propagation, CORS, and unknown routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::axum_test::AxumTestRequest;
use helpers::test_utils::test_router;
use serde_json::Value;

#[tokio::test]
async fn test_health() {
    let response = AxumTestRequest::get("/health").send(test_router()).await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "pierre-health-server");
}

#[tokio::test]
async fn test_ready_reports_calculators() {
    let response = AxumTestRequest::get("/ready").send(test_router()).await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "ready");
    assert!(body["calculators"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn test_request_id_is_generated() {
    let response = AxumTestRequest::get("/health").send(test_router()).await;
    let request_id = response.header("x-request-id").unwrap();
    assert!(!request_id.is_empty());
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let response = AxumTestRequest::get("/health")
        .header("x-request-id", "trace-me-42")
        .send(test_router())
        .await;
    assert_eq!(response.header("x-request-id").as_deref(), Some("trace-me-42"));
}

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() {
    let response = AxumTestRequest::get("/api/calculators")
        .header("origin", "https://pierre.fitness")
        .send(test_router())
        .await;
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.header("access-control-allow-origin").as_deref(),
        Some("*")
    );
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let response = AxumTestRequest::get("/api/nothing-here")
        .send(test_router())
        .await;
    assert_eq!(response.status(), 404);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
}
