// ABOUTME: HTTP middleware for request tracing and cross-origin access
// ABOUTME: Provides the request span builder and the CORS layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS layer configuration
pub mod cors;
/// Request span and request id helpers
pub mod tracing;

pub use cors::setup_cors;
pub use self::tracing::{create_request_span, request_id, REQUEST_ID_HEADER};
