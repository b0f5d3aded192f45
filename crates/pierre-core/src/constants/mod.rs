// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for unit conversion, networking, and service identity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Unit conversion and measurement constants
pub mod units;

/// API endpoints
pub mod endpoints {
    /// Health check endpoint
    pub const HEALTH_CHECK: &str = "/health";
    /// Readiness endpoint
    pub const READY_CHECK: &str = "/ready";
    /// API base path
    pub const API_BASE: &str = "/api";
    /// Public page prefix for calculator pages
    pub const CALCULATOR_PAGES: &str = "/calculators";
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// Service names for structured logging
pub mod service_names {
    /// Server binary and log service name
    pub const PIERRE_HEALTH_SERVER: &str = "pierre-health-server";
}

/// Contact form delivery defaults and limits
pub mod contact {
    /// Default transactional email API base URL
    pub const DEFAULT_EMAIL_API_BASE_URL: &str = "https://api.resend.com";
    /// Default sender address
    pub const DEFAULT_FROM_EMAIL: &str = "Pierre Calculators <contact@pierre.fitness>";
    /// Default recipient address
    pub const DEFAULT_TO_EMAIL: &str = "support@pierre.fitness";
    /// Maximum length of the name field
    pub const MAX_NAME_LENGTH: usize = 100;
    /// Maximum length of the subject field
    pub const MAX_SUBJECT_LENGTH: usize = 200;
    /// Maximum length of the message field
    pub const MAX_MESSAGE_LENGTH: usize = 5000;
    /// Minimum length of the message field
    pub const MIN_MESSAGE_LENGTH: usize = 10;
    /// Maximum length of phone and country fields
    pub const MAX_SHORT_FIELD_LENGTH: usize = 50;
}
