// ABOUTME: Utility modules shared across the server
// ABOUTME: HTTP client construction and JSON response envelopes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Shared outbound HTTP client
pub mod http_client;
/// Standard JSON response envelopes
pub mod json_responses;
