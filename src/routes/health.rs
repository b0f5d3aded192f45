// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides liveness and readiness endpoints for load balancers and uptime checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring
//!
//! Readiness reports how many calculators are registered so a deploy with an
//! empty registry is caught before it takes traffic.

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use chrono::Utc;
use pierre_calculators::registry;
use pierre_core::constants::{
    endpoints::{HEALTH_CHECK, READY_CHECK},
    service_names::PIERRE_HEALTH_SERVER,
};
use serde_json::json;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes() -> Router {
        Router::new()
            .route(HEALTH_CHECK, get(Self::handle_health))
            .route(READY_CHECK, get(Self::handle_ready))
    }

    async fn handle_health() -> impl IntoResponse {
        Json(json!({
            "status": "healthy",
            "service": PIERRE_HEALTH_SERVER,
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": Utc::now().to_rfc3339()
        }))
    }

    async fn handle_ready() -> impl IntoResponse {
        let calculators = registry::all().len();
        let status = if calculators == 0 {
            StatusCode::SERVICE_UNAVAILABLE
        } else {
            StatusCode::OK
        };
        (
            status,
            Json(json!({
                "status": if status == StatusCode::OK { "ready" } else { "not_ready" },
                "calculators": calculators,
                "timestamp": Utc::now().to_rfc3339()
            })),
        )
    }
}
