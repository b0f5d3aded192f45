// ABOUTME: Contact form route forwarding submissions to the site owner by email
// ABOUTME: Responds with a success/error envelope the site's form script understands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Contact route
//!
//! `POST /api/contact` answers `200 {success: true, data: {id}}` when the
//! provider accepted the message, `400 {success: false, error, details}` for an
//! invalid payload, and `500 {success: false, error}` when delivery failed.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;
use tracing::error;

use crate::{
    contact::ContactSubmission,
    errors::AppError,
    server::ServerResources,
    utils::json_responses::{failure, failure_with_details, success_with_data},
};

const DELIVERY_FAILED: &str = "Failed to send your message. Please try again later.";

/// Contact routes
pub struct ContactRoutes;

impl ContactRoutes {
    /// Create the contact route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/contact", post(Self::handle_contact))
            .with_state(resources)
    }

    fn error_response(error: &AppError) -> Response {
        if error.code.is_validation() {
            return (
                StatusCode::BAD_REQUEST,
                Json(failure_with_details(&error.message, &error.details)),
            )
                .into_response();
        }
        error!(code = ?error.code, "Contact delivery failed: {}", error.message);
        (StatusCode::INTERNAL_SERVER_ERROR, Json(failure(DELIVERY_FAILED))).into_response()
    }

    /// POST /api/contact
    async fn handle_contact(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<ContactSubmission>, JsonRejection>,
    ) -> Response {
        let submission = match payload {
            Ok(Json(submission)) => submission,
            Err(rejection) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(failure(&format!("Invalid request body: {}", rejection.body_text()))),
                )
                    .into_response();
            }
        };

        match resources.contact.submit(&submission).await {
            Ok(receipt) => (
                StatusCode::OK,
                Json(success_with_data(&json!({ "id": receipt.id }))),
            )
                .into_response(),
            Err(error) => Self::error_response(&error),
        }
    }
}
