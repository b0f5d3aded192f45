// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Environment-only configuration for the HTTP listener and contact email delivery
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment and server configuration
pub mod environment;

pub use environment::{EmailConfig, Environment, HttpConfig, ServerConfig};
