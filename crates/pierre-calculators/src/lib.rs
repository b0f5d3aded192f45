// ABOUTME: Health calculator engine: validation, formulas, threshold classification, catalog
// ABOUTME: Every calculator is a pure function from CalculatorInput to CalculationResult
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Calculators
//!
//! Stateless evaluation engine behind the calculator pages. Each calculator
//! follows the same pipeline:
//!
//! 1. [`validation::InputReader`] parses and range-checks the submission,
//!    converting imperial entries into canonical metric units
//! 2. a pure formula from [`algorithms`] computes the outputs
//! 3. [`classification::ThresholdTable`] places the primary output in a band
//!
//! Calculators are looked up by id through [`registry`].

/// Formula implementations grouped by domain
pub mod algorithms;

/// Static catalog entries and substring search
pub mod catalog;

/// Threshold tables and band lookup
pub mod classification;

/// `Calculator` trait and the id-to-calculator registry
pub mod registry;

/// Clinical cut-off tables
pub mod tables;

/// Submission parsing and validation
pub mod validation;

pub use classification::{Band, ThresholdRow, ThresholdTable, ThresholdTableView};
pub use registry::{evaluate, find, Calculator};
