// ABOUTME: Main library entry point for the Pierre health calculator server
// ABOUTME: HTTP API over the calculator engine plus catalog search and the contact form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Health Server
//!
//! Serves the health and fitness calculators of the Pierre site over HTTP.
//! The formulas, validation, and classification live in `pierre-calculators`;
//! this crate adds configuration, logging, routing, and contact-form delivery.
//!
//! ## Architecture
//!
//! - **Config**: environment-only configuration
//! - **Routes**: calculators, search, contact, health
//! - **Contact**: submission validation and HTML email rendering
//! - **External**: transactional email providers
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pierre_health_server::config::ServerConfig;
//! use pierre_health_server::server::{build_router, ServerResources};
//! use std::sync::Arc;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = ServerConfig::from_env()?;
//! let router = build_router(Arc::new(ServerResources::from_config(config)));
//! # drop(router);
//! # Ok(())
//! # }
//! ```

/// Environment-based configuration
pub mod config;

/// Contact form validation, rendering, and delivery
pub mod contact;

/// Error types shared with the calculator engine
pub mod errors;

/// Outbound provider clients
pub mod external;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// HTTP route handlers
pub mod routes;

/// Router assembly and serve loop
pub mod server;

/// Shared utilities
pub mod utils;
