// ABOUTME: HTTP tests for calculator listing, description, and evaluation routes
// ABOUTME: Exercises the full router in-process, including error status mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::axum_test::AxumTestRequest;
use helpers::test_utils::test_router;
use serde_json::{json, Value};

#[tokio::test]
async fn test_list_calculators() {
    let response = AxumTestRequest::get("/api/calculators")
        .send(test_router())
        .await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    let calculators = body["calculators"].as_array().unwrap();
    assert_eq!(body["total"], calculators.len());
    assert!(calculators.iter().any(|c| c["id"] == "creatinine-clearance"));
    for calculator in calculators {
        let id = calculator["id"].as_str().unwrap();
        assert_eq!(calculator["href"], format!("/calculators/{id}"));
    }
}

#[tokio::test]
async fn test_describe_calculator_includes_tables() {
    let response = AxumTestRequest::get("/api/calculators/bmi")
        .send(test_router())
        .await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    assert!(body["calculator"]["title"].is_string());
    let rows = body["tables"][0]["rows"].as_array().unwrap();
    assert_eq!(rows.first().unwrap()["lower"], Value::Null);
    assert_eq!(rows.last().unwrap()["upper"], Value::Null);
    assert_eq!(rows[1]["lower"], 18.5);
    assert_eq!(rows[1]["label"], "Normal weight");
}

#[tokio::test]
async fn test_evaluate_bmi() {
    let response = AxumTestRequest::post("/api/calculators/bmi")
        .json(&json!({
            "unit_system": "metric",
            "fields": { "weight": 70, "height": "175" }
        }))
        .send(test_router())
        .await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    assert_eq!(body["calculator"], "bmi");
    assert_eq!(body["values"][0]["key"], "bmi");
    assert_eq!(body["values"][0]["value"], 22.9);
    assert_eq!(body["category"]["label"], "Normal weight");
}

#[tokio::test]
async fn test_evaluate_imperial_input() {
    let response = AxumTestRequest::post("/api/calculators/bmi")
        .json(&json!({
            "unit_system": "imperial",
            "fields": { "weight": 154.3, "height": 68.9 }
        }))
        .send(test_router())
        .await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    let bmi = body["values"][0]["value"].as_f64().unwrap();
    assert!((bmi - 22.9).abs() <= 0.1, "bmi was {bmi}");
}

#[tokio::test]
async fn test_missing_field_is_bad_request() {
    let response = AxumTestRequest::post("/api/calculators/bmi")
        .json(&json!({ "fields": { "weight": 70 } }))
        .send(test_router())
        .await;
    assert_eq!(response.status(), 400);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "MISSING_REQUIRED_FIELD");
    assert_eq!(body["error"]["details"]["fields"][0]["field"], "height");
}

#[tokio::test]
async fn test_cross_field_violation_is_bad_request() {
    let response = AxumTestRequest::post("/api/calculators/mean-arterial-pressure")
        .json(&json!({ "fields": { "systolic": 80, "diastolic": 90 } }))
        .send(test_router())
        .await;
    assert_eq!(response.status(), 400);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "CONSTRAINT_VIOLATION");
}

#[tokio::test]
async fn test_friedewald_precondition_is_unprocessable() {
    let response = AxumTestRequest::post("/api/calculators/ldl-cholesterol")
        .json(&json!({
            "fields": { "total_cholesterol": 260, "hdl": 40, "triglycerides": 450 }
        }))
        .send(test_router())
        .await;
    assert_eq!(response.status(), 422);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "PRECONDITION_FAILED");
    assert_eq!(body["error"]["details"]["field"], "triglycerides");
}

#[tokio::test]
async fn test_unknown_calculator_is_not_found() {
    let get = AxumTestRequest::get("/api/calculators/horoscope")
        .send(test_router())
        .await;
    assert_eq!(get.status(), 404);

    let post = AxumTestRequest::post("/api/calculators/horoscope")
        .json(&json!({ "fields": {} }))
        .send(test_router())
        .await;
    assert_eq!(post.status(), 404);
    let body: Value = post.json();
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let response = AxumTestRequest::post("/api/calculators/bmi")
        .raw_body("{not json", "application/json")
        .send(test_router())
        .await;
    assert_eq!(response.status(), 400);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_creatinine_clearance_over_http() {
    let response = AxumTestRequest::post("/api/calculators/creatinine-clearance")
        .json(&json!({
            "fields": { "age": 60, "weight": 72, "serum_creatinine": 1.0 },
            "selectors": { "gender": "female" }
        }))
        .send(test_router())
        .await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    assert_eq!(body["values"][0]["key"], "crcl");
    assert_eq!(body["values"][0]["value"], 68.0);
    assert_eq!(body["category"]["label"], "Mildly decreased");
}

#[tokio::test]
async fn test_newborn_ponderal_index_takes_grams() {
    let response = AxumTestRequest::post("/api/calculators/ponderal-index")
        .json(&json!({
            "fields": { "weight": 3500, "height": 50 },
            "selectors": { "user_type": "child" }
        }))
        .send(test_router())
        .await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    assert_eq!(body["values"][0]["value"], 2.8);
    assert_eq!(body["category"]["label"], "Normal");
}

#[tokio::test]
async fn test_thousands_separator_is_rejected() {
    let response = AxumTestRequest::post("/api/calculators/one-rep-max")
        .json(&json!({ "fields": { "weight": "1,000", "reps": 5 } }))
        .send(test_router())
        .await;
    assert_eq!(response.status(), 400);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_FORMAT");
    assert_eq!(body["error"]["details"]["fields"][0]["field"], "weight");
}
