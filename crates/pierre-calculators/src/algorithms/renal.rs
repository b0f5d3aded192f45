// ABOUTME: Cockcroft-Gault creatinine clearance with selectable weight basis and lab unit
// ABOUTME: Classifies the estimate into kidney function stages for dosing decisions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Creatinine clearance
//!
//! Cockcroft D.W., Gault M.H. (1976). Prediction of creatinine clearance from
//! serum creatinine. *Nephron*, 16(1), 31-41.

use super::body_weight::{adjusted_body_weight, ideal_body_weight, IbwFormula};
use super::{classify_value, mass_value};
use crate::classification::ThresholdTable;
use crate::registry::Calculator;
use crate::validation::{InputReader, NumericField};
use crate::{catalog, tables};
use pierre_core::errors::{AppError, AppResult, ErrorCode};
use pierre_core::models::{CalculationResult, CalculatorInput, CalculatorMetadata, Gender, ResultValue};
use pierre_core::units::{CreatinineUnit, Quantity};
use std::str::FromStr;

const AGE: NumericField = NumericField::new("age", "Age", Quantity::Fixed("years"), 18.0, 120.0);
const WEIGHT: NumericField = NumericField::new("weight", "Weight", Quantity::Mass, 20.0, 350.0);
const HEIGHT: NumericField = NumericField::new("height", "Height", Quantity::Length, 100.0, 250.0);
const CREATININE_MGDL: NumericField = NumericField::new(
    "serum_creatinine",
    "Serum creatinine",
    Quantity::Fixed("mg/dL"),
    0.1,
    20.0,
);
const CREATININE_UMOLL: NumericField = NumericField::new(
    "serum_creatinine",
    "Serum creatinine",
    Quantity::Fixed("µmol/L"),
    8.8,
    1768.0,
);

/// Female correction factor
pub const FEMALE_FACTOR: f64 = 0.85;

/// Cockcroft-Gault creatinine clearance (mL/min)
///
/// Creatinine in mg/dL, weight in kg.
#[must_use]
pub fn cockcroft_gault(age: f64, weight_kg: f64, creatinine_mgdl: f64, gender: Gender) -> f64 {
    let clearance = ((140.0 - age) * weight_kg) / (72.0 * creatinine_mgdl);
    match gender {
        Gender::Male => clearance,
        Gender::Female => clearance * FEMALE_FACTOR,
    }
}

/// Which body weight enters the equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeightBasis {
    /// Actual body weight, as in the original publication
    #[default]
    Actual,
    /// Devine ideal body weight
    Ideal,
    /// Adjusted body weight, common for obese patients
    Adjusted,
}

impl FromStr for WeightBasis {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "actual" | "total" => Ok(Self::Actual),
            "ideal" | "ibw" => Ok(Self::Ideal),
            "adjusted" | "ajbw" => Ok(Self::Adjusted),
            other => Err(AppError::invalid_input(format!(
                "Unknown weight basis: '{other}'. Valid options: actual, ideal, adjusted"
            ))),
        }
    }
}

/// Creatinine clearance calculator
pub struct CreatinineClearanceCalculator;

static CRCL_TABLES: [&ThresholdTable; 1] = [&tables::CREATININE_CLEARANCE];

impl Calculator for CreatinineClearanceCalculator {
    fn metadata(&self) -> &'static CalculatorMetadata {
        &catalog::CREATININE_CLEARANCE
    }

    fn tables(&self) -> &'static [&'static ThresholdTable] {
        &CRCL_TABLES
    }

    fn evaluate(&self, input: &CalculatorInput) -> AppResult<CalculationResult> {
        let mut reader = InputReader::new(input);
        let system = reader.unit_system();
        let creatinine_unit = reader.selector_or("creatinine_unit", CreatinineUnit::default());
        let basis = reader.selector_or("weight_basis", WeightBasis::default());
        let gender = reader.selector::<Gender>("gender", "Gender");
        let age = reader.required(&AGE);
        let weight = reader.required(&WEIGHT);
        let creatinine = creatinine_unit.and_then(|unit| {
            let field = match unit {
                CreatinineUnit::MgDl => &CREATININE_MGDL,
                CreatinineUnit::UmolL => &CREATININE_UMOLL,
            };
            reader.required(field).map(|value| unit.to_mgdl(value))
        });
        let height = match basis {
            Some(WeightBasis::Actual) | None => None,
            Some(_) => {
                let height = reader.optional(&HEIGHT);
                if !reader.is_supplied(HEIGHT.name) {
                    reader.reject(
                        HEIGHT.name,
                        ErrorCode::MissingRequiredField,
                        "Height is required to use ideal or adjusted body weight",
                    );
                }
                height
            }
        };
        let (Some(basis), Some(gender), Some(age), Some(weight), Some(creatinine)) =
            (basis, gender, age, weight, creatinine)
        else {
            return Err(reader.into_error());
        };
        if basis != WeightBasis::Actual && height.is_none() {
            return Err(reader.into_error());
        }
        reader.finish()?;

        let (weight_used, weight_label) = match (basis, height) {
            (WeightBasis::Ideal, Some(height)) => {
                (ideal_body_weight(IbwFormula::Devine, height, gender), "Ideal body weight used")
            }
            (WeightBasis::Adjusted, Some(height)) => (
                adjusted_body_weight(ideal_body_weight(IbwFormula::Devine, height, gender), weight),
                "Adjusted body weight used",
            ),
            _ => (weight, "Actual body weight used"),
        };
        let result = CalculationResult::new(catalog::CREATININE_CLEARANCE.id, system)
            .value(ResultValue::new(
                "crcl",
                "Creatinine clearance",
                cockcroft_gault(age, weight_used, creatinine, gender),
                "mL/min",
                1,
            ))
            .value(mass_value("weight_used", weight_label, weight_used, system, 1))
            .value(ResultValue::new("serum_creatinine_mgdl", "Serum creatinine", creatinine, "mg/dL", 2))
            .note("Cockcroft-Gault: ((140 − age) × weight) / (72 × creatinine), × 0.85 for women");
        classify_value(result, &tables::CREATININE_CLEARANCE, "crcl")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
mod tests {
    use super::*;
    use pierre_core::units::UnitSystem;

    #[test]
    fn test_cockcroft_gault() {
        let male = cockcroft_gault(60.0, 72.0, 1.0, Gender::Male);
        assert!((male - 80.0).abs() < 1e-9);
        let female = cockcroft_gault(60.0, 72.0, 1.0, Gender::Female);
        assert!((female - 68.0).abs() < 1e-9);
    }

    #[test]
    fn test_micromolar_input() {
        let input = CalculatorInput::new(UnitSystem::Metric)
            .with_selector("gender", "male")
            .with_selector("creatinine_unit", "umol_l")
            .with_number("age", 60.0)
            .with_number("weight", 72.0)
            .with_number("serum_creatinine", 88.4);
        let result = CreatinineClearanceCalculator.evaluate(&input).unwrap();
        assert_eq!(result.get("crcl"), Some(80.0));
        assert_eq!(result.category.unwrap().label, "Mildly decreased");
    }

    #[test]
    fn test_ideal_weight_basis_requires_height() {
        let input = CalculatorInput::new(UnitSystem::Metric)
            .with_selector("gender", "female")
            .with_selector("weight_basis", "ideal")
            .with_number("age", 60.0)
            .with_number("weight", 72.0)
            .with_number("serum_creatinine", 1.0);
        let error = CreatinineClearanceCalculator.evaluate(&input).unwrap_err();
        assert_eq!(error.code, ErrorCode::MissingRequiredField);
        assert_eq!(error.details["fields"][0]["field"], "height");
    }
}
