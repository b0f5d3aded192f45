// ABOUTME: Core types and constants for the Pierre health calculators
// ABOUTME: Foundation crate with error handling, unit conversion, models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Core
//!
//! Foundation crate providing shared types and constants for the Pierre health
//! calculators. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and validation reports
//! - **constants**: Application-wide constants organized by domain
//! - **units**: Metric/imperial and laboratory unit normalization
//! - **models**: Calculator input, result, and catalog records

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants and configuration values organized by domain
pub mod constants;

/// Unit normalization (length, mass, lab concentrations)
pub mod units;

/// Core data models (`CalculatorInput`, `CalculationResult`, catalog metadata)
pub mod models;
