// ABOUTME: Calculator formula implementations grouped by physiological domain
// ABOUTME: Pure formula functions plus the Calculator implementations that wrap them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// BMI, ratios, ponderal index, BSA, lean mass, and body fat
pub mod anthropometric;
/// Ideal and adjusted body weight
pub mod body_weight;
/// Mean arterial pressure, blood pressure category, and lipids
pub mod cardiovascular;
/// Karvonen target heart rate
pub mod heart_rate;
/// Maximum heart rate estimation
pub mod maxhr;
/// BMR and TDEE
pub mod metabolic;
/// Cockcroft-Gault creatinine clearance
pub mod renal;
/// One-rep max estimation
pub mod strength;

use crate::classification::ThresholdTable;
use pierre_core::errors::{AppError, AppResult};
use pierre_core::models::{CalculationResult, ResultValue};
use pierre_core::units::{Quantity, UnitSystem};

/// Mass output expressed in the submission's unit system
pub(crate) fn mass_value(
    key: &str,
    label: &str,
    kg: f64,
    system: UnitSystem,
    decimals: u32,
) -> ResultValue {
    ResultValue::new(
        key,
        label,
        Quantity::Mass.from_canonical(kg, system),
        Quantity::Mass.unit_label(system),
        decimals,
    )
}

/// Length output expressed in the submission's unit system
pub(crate) fn length_value(
    key: &str,
    label: &str,
    cm: f64,
    system: UnitSystem,
    decimals: u32,
) -> ResultValue {
    ResultValue::new(
        key,
        label,
        Quantity::Length.from_canonical(cm, system),
        Quantity::Length.unit_label(system),
        decimals,
    )
}

/// Classify the displayed value under `key` and use the band text as interpretation
///
/// The rounded display value is classified so the category always agrees with
/// the number shown next to it.
pub(crate) fn classify_value(
    result: CalculationResult,
    table: &ThresholdTable,
    key: &str,
) -> AppResult<CalculationResult> {
    let value = result
        .get(key)
        .ok_or_else(|| AppError::internal(format!("Result value '{key}' is missing")))?;
    let category = table.classify(key, value)?;
    let interpretation = category.description.clone();
    Ok(result.category(category).interpretation(interpretation))
}
