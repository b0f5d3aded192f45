// ABOUTME: JSON response utilities shared by routes with a success/error envelope
// ABOUTME: Provides standardized response builders for the contact endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::{json, Value};

/// `{ "success": true, "data": ... }`
#[must_use]
pub fn success_with_data(data: &Value) -> Value {
    json!({
        "success": true,
        "data": data
    })
}

/// `{ "success": false, "error": ... }`
#[must_use]
pub fn failure(message: &str) -> Value {
    json!({
        "success": false,
        "error": message
    })
}

/// `{ "success": false, "error": ..., "details": ... }`
#[must_use]
pub fn failure_with_details(message: &str, details: &Value) -> Value {
    json!({
        "success": false,
        "error": message,
        "details": details
    })
}
