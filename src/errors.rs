// ABOUTME: Error types for the server crate, re-exported from pierre-core
// ABOUTME: Keeps `crate::errors::AppError` paths stable across the server modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! The error types live in `pierre-core` so the calculator engine and the HTTP
//! layer share one code table and one HTTP mapping.

pub use pierre_core::errors::{
    AppError, AppResult, ErrorCode, ErrorResponse, ErrorResponseDetails, FieldError,
    ValidationReport,
};
