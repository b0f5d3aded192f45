// ABOUTME: Calculator trait and the registry of every available calculator
// ABOUTME: Maps calculator ids to their metadata, reference tables, and evaluation function
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::algorithms::{
    anthropometric::{
        BmiCalculator, BodyFatCalculator, BodySurfaceAreaCalculator, LeanBodyMassCalculator,
        PonderalIndexCalculator, WaistToHeightCalculator, WaistToHipCalculator,
    },
    body_weight::{AdjustedBodyWeightCalculator, IdealBodyWeightCalculator},
    cardiovascular::{BloodPressureCalculator, LdlCholesterolCalculator, MeanArterialPressureCalculator},
    heart_rate::TargetHeartRateCalculator,
    metabolic::BmrCalculator,
    renal::CreatinineClearanceCalculator,
    strength::OneRepMaxCalculator,
};
use crate::catalog;
use crate::classification::ThresholdTable;
use pierre_core::errors::{AppError, AppResult};
use pierre_core::models::{CalculationResult, CalculatorCategory, CalculatorInput, CalculatorMetadata};
use tracing::debug;

/// A single-purpose calculator
///
/// Implementations are stateless: `evaluate` validates and normalizes the
/// submission, applies the formula, and classifies the result.
pub trait Calculator: Send + Sync {
    /// Catalog entry
    fn metadata(&self) -> &'static CalculatorMetadata;

    /// Threshold tables the calculator classifies against
    fn tables(&self) -> &'static [&'static ThresholdTable] {
        &[]
    }

    /// Evaluate one submission
    ///
    /// # Errors
    ///
    /// Returns a validation error for missing, malformed, out-of-range, or
    /// inconsistent fields, and a precondition error when the formula cannot
    /// be applied to the values supplied.
    fn evaluate(&self, input: &CalculatorInput) -> AppResult<CalculationResult>;
}

static CALCULATORS: [&dyn Calculator; 16] = [
    &BmiCalculator,
    &WaistToHeightCalculator,
    &WaistToHipCalculator,
    &PonderalIndexCalculator,
    &BodySurfaceAreaCalculator,
    &LeanBodyMassCalculator,
    &BodyFatCalculator,
    &IdealBodyWeightCalculator,
    &AdjustedBodyWeightCalculator,
    &CreatinineClearanceCalculator,
    &MeanArterialPressureCalculator,
    &BloodPressureCalculator,
    &LdlCholesterolCalculator,
    &OneRepMaxCalculator,
    &TargetHeartRateCalculator,
    &BmrCalculator,
];

/// Every registered calculator, in listing order
#[must_use]
pub fn all() -> &'static [&'static dyn Calculator] {
    &CALCULATORS
}

/// Look up a calculator by id
#[must_use]
pub fn find(id: &str) -> Option<&'static dyn Calculator> {
    CALCULATORS
        .iter()
        .copied()
        .find(|calculator| calculator.metadata().id == id)
}

/// Evaluate `input` with the calculator named `id`
///
/// # Errors
///
/// Returns `RESOURCE_NOT_FOUND` for an unknown id, otherwise whatever the
/// calculator reports.
pub fn evaluate(id: &str, input: &CalculatorInput) -> AppResult<CalculationResult> {
    let calculator = find(id).ok_or_else(|| AppError::not_found(format!("Calculator '{id}'")))?;
    let result = calculator.evaluate(input);
    debug!(calculator = id, ok = result.is_ok(), "calculator evaluated");
    result
}

/// Catalog entries of every calculator
pub fn metadata() -> impl Iterator<Item = &'static CalculatorMetadata> {
    CALCULATORS.iter().map(|calculator| calculator.metadata())
}

/// Search the catalog
#[must_use]
pub fn search(query: &str, category: Option<CalculatorCategory>) -> Vec<&'static CalculatorMetadata> {
    catalog::search(metadata(), query, category)
}
