// ABOUTME: Core data models for calculator submissions, results, and catalog metadata
// ABOUTME: Ephemeral per-request value objects; nothing here is persisted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Calculator catalog metadata
pub mod catalog;
/// Raw calculator submissions
pub mod input;
/// Calculation results
pub mod result;

pub use catalog::{CalculatorCategory, CalculatorMetadata};
pub use input::{CalculatorInput, Gender, ParsedNumber, RawValue};
pub use result::{CalculationResult, Category, ReferenceRow, ResultValue};
