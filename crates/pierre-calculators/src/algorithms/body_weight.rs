// ABOUTME: Ideal body weight formulas and adjusted body weight for dosing
// ABOUTME: Devine, Robinson, Miller, and Hamwi IBW plus the 0.4 correction-factor AjBW
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Ideal and adjusted body weight
//!
//! Every IBW formula is `base + per_inch × (height_in − 60)`. Below five feet
//! the height term is clamped at zero so the result never drops below the
//! base weight.
//!
//! # Scientific References
//!
//! - Devine B.J. (1974). Gentamicin therapy. *Drug Intell Clin Pharm*, 8, 650-655.
//! - Robinson J.D. et al. (1983). Determination of ideal body weight for drug dosage calculations. *Am J Hosp Pharm*, 40, 1016-1019.
//! - Miller D.R. et al. (1983). Determining ideal body weight. *Am J Hosp Pharm*, 40, 1622-1625.
//! - Hamwi G.J. (1964). Therapy: changing dietary concepts. *Diabetes Mellitus: Diagnosis and Treatment*, 1, 73-78.

use super::{classify_value, mass_value};
use crate::classification::ThresholdTable;
use crate::registry::Calculator;
use crate::validation::{InputReader, NumericField};
use crate::{catalog, tables};
use pierre_core::constants::units::INCHES_PER_FOOT;
use pierre_core::errors::{AppError, AppResult};
use pierre_core::models::{CalculationResult, CalculatorInput, CalculatorMetadata, Gender, ResultValue};
use pierre_core::units::{cm_to_in, Quantity};
use std::str::FromStr;

const HEIGHT: NumericField = NumericField::new("height", "Height", Quantity::Length, 100.0, 250.0);
const WEIGHT: NumericField = NumericField::new("weight", "Actual body weight", Quantity::Mass, 20.0, 350.0);

/// Weight-adjustment factor applied to the excess over IBW
pub const AJBW_CORRECTION_FACTOR: f64 = 0.4;

const BASE_HEIGHT_IN: f64 = 5.0 * INCHES_PER_FOOT;

/// Ideal body weight formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IbwFormula {
    /// 50 / 45.5 kg + 2.3 kg per inch
    #[default]
    Devine,
    /// 52 / 49 kg + 1.9 / 1.7 kg per inch
    Robinson,
    /// 56.2 / 53.1 kg + 1.41 / 1.36 kg per inch
    Miller,
    /// 48 / 45.5 kg + 2.7 / 2.2 kg per inch
    Hamwi,
}

impl IbwFormula {
    /// Every formula, in display order
    pub const ALL: [Self; 4] = [Self::Devine, Self::Robinson, Self::Miller, Self::Hamwi];

    /// `(base kg, kg per inch over five feet)`
    const fn coefficients(self, gender: Gender) -> (f64, f64) {
        match (self, gender) {
            (Self::Devine, Gender::Male) => (50.0, 2.3),
            (Self::Devine, Gender::Female) => (45.5, 2.3),
            (Self::Robinson, Gender::Male) => (52.0, 1.9),
            (Self::Robinson, Gender::Female) => (49.0, 1.7),
            (Self::Miller, Gender::Male) => (56.2, 1.41),
            (Self::Miller, Gender::Female) => (53.1, 1.36),
            (Self::Hamwi, Gender::Male) => (48.0, 2.7),
            (Self::Hamwi, Gender::Female) => (45.5, 2.2),
        }
    }

    /// Formula name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Devine => "devine",
            Self::Robinson => "robinson",
            Self::Miller => "miller",
            Self::Hamwi => "hamwi",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Devine => "Devine",
            Self::Robinson => "Robinson",
            Self::Miller => "Miller",
            Self::Hamwi => "Hamwi",
        }
    }
}

impl FromStr for IbwFormula {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|formula| formula.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Unknown IBW formula: '{s}'. Valid options: devine, robinson, miller, hamwi"
                ))
            })
    }
}

/// Ideal body weight (kg)
#[must_use]
pub fn ideal_body_weight(formula: IbwFormula, height_cm: f64, gender: Gender) -> f64 {
    let (base, per_inch) = formula.coefficients(gender);
    let inches_over = (cm_to_in(height_cm) - BASE_HEIGHT_IN).max(0.0);
    per_inch.mul_add(inches_over, base)
}

/// Adjusted body weight (kg); equals `actual_kg` when at or below IBW
#[must_use]
pub fn adjusted_body_weight(ibw_kg: f64, actual_kg: f64) -> f64 {
    if actual_kg > ibw_kg {
        AJBW_CORRECTION_FACTOR.mul_add(actual_kg - ibw_kg, ibw_kg)
    } else {
        actual_kg
    }
}

fn short_stature_note(height_cm: f64) -> Option<&'static str> {
    (cm_to_in(height_cm) < BASE_HEIGHT_IN)
        .then_some("Height is under 5 feet; the formulas are not validated below this height and return their base weight")
}

/// Ideal body weight calculator
pub struct IdealBodyWeightCalculator;

impl Calculator for IdealBodyWeightCalculator {
    fn metadata(&self) -> &'static CalculatorMetadata {
        &catalog::IDEAL_BODY_WEIGHT
    }

    fn evaluate(&self, input: &CalculatorInput) -> AppResult<CalculationResult> {
        let mut reader = InputReader::new(input);
        let system = reader.unit_system();
        let values = (
            reader.required(&HEIGHT),
            reader.selector::<Gender>("gender", "Gender"),
            reader.selector_or("formula", IbwFormula::default()),
        );
        let (Some(height), Some(gender), Some(selected)) = values else {
            return Err(reader.into_error());
        };
        reader.finish()?;

        let mut result = CalculationResult::new(catalog::IDEAL_BODY_WEIGHT.id, system).value(mass_value(
            "ibw",
            &format!("Ideal body weight ({})", selected.label()),
            ideal_body_weight(selected, height, gender),
            system,
            1,
        ));
        for formula in IbwFormula::ALL {
            result = result.value(mass_value(
                &format!("ibw_{}", formula.name()),
                formula.label(),
                ideal_body_weight(formula, height, gender),
                system,
                1,
            ));
        }
        let (low, high) = IbwFormula::ALL
            .into_iter()
            .map(|formula| ideal_body_weight(formula, height, gender))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(low, high), ibw| (low.min(ibw), high.max(ibw)));
        let unit = Quantity::Mass.unit_label(system);
        result = result.interpretation(format!(
            "The four formulas place your ideal weight between {:.1} and {:.1} {unit}.",
            Quantity::Mass.from_canonical(low, system),
            Quantity::Mass.from_canonical(high, system),
        ));
        if let Some(note) = short_stature_note(height) {
            result = result.note(note);
        }
        Ok(result)
    }
}

/// Adjusted body weight calculator
pub struct AdjustedBodyWeightCalculator;

static AJBW_TABLES: [&ThresholdTable; 1] = [&tables::PERCENT_IDEAL_BODY_WEIGHT];

impl Calculator for AdjustedBodyWeightCalculator {
    fn metadata(&self) -> &'static CalculatorMetadata {
        &catalog::ADJUSTED_BODY_WEIGHT
    }

    fn tables(&self) -> &'static [&'static ThresholdTable] {
        &AJBW_TABLES
    }

    fn evaluate(&self, input: &CalculatorInput) -> AppResult<CalculationResult> {
        let mut reader = InputReader::new(input);
        let system = reader.unit_system();
        let values = (
            reader.required(&HEIGHT),
            reader.required(&WEIGHT),
            reader.selector::<Gender>("gender", "Gender"),
            reader.selector_or("formula", IbwFormula::default()),
        );
        let (Some(height), Some(actual), Some(gender), Some(formula)) = values else {
            return Err(reader.into_error());
        };
        reader.finish()?;

        let ibw = ideal_body_weight(formula, height, gender);
        let ajbw = adjusted_body_weight(ibw, actual);
        let mut result = CalculationResult::new(catalog::ADJUSTED_BODY_WEIGHT.id, system)
            .value(mass_value("ajbw", "Adjusted body weight", ajbw, system, 1))
            .value(mass_value("ibw", &format!("Ideal body weight ({})", formula.label()), ibw, system, 1))
            .value(mass_value("actual", "Actual body weight", actual, system, 1))
            .value(ResultValue::new("percent_ibw", "Actual weight as % of IBW", actual / ibw * 100.0, "%", 0))
            .note("AjBW = IBW + 0.4 × (actual − IBW) when actual weight exceeds IBW");
        if let Some(note) = short_stature_note(height) {
            result = result.note(note);
        }
        classify_value(result, &tables::PERCENT_IDEAL_BODY_WEIGHT, "percent_ibw")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
mod tests {
    use super::*;
    use pierre_core::units::{in_to_cm, UnitSystem};

    #[test]
    fn test_devine() {
        let male = ideal_body_weight(IbwFormula::Devine, in_to_cm(70.0), Gender::Male);
        assert!((male - 73.0).abs() < 1e-9);
        let female = ideal_body_weight(IbwFormula::Devine, in_to_cm(64.0), Gender::Female);
        assert!((female - 54.7).abs() < 1e-9);
    }

    #[test]
    fn test_height_term_clamped_below_five_feet() {
        let ibw = ideal_body_weight(IbwFormula::Devine, in_to_cm(55.0), Gender::Female);
        assert!((ibw - 45.5).abs() < 1e-9);
    }

    #[test]
    fn test_ajbw() {
        assert!((adjusted_body_weight(73.0, 100.0) - 83.8).abs() < 1e-9);
        assert!((adjusted_body_weight(73.0, 60.0) - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_calculator_imperial_output() {
        let input = CalculatorInput::new(UnitSystem::Imperial)
            .with_number("height", 70.0)
            .with_number("weight", 220.462)
            .with_selector("gender", "male");
        let result = AdjustedBodyWeightCalculator.evaluate(&input).unwrap();
        assert_eq!(result.primary().unwrap().unit, "lb");
        assert_eq!(result.get("percent_ibw"), Some(137.0));
        assert_eq!(result.category.unwrap().label, "Obese (>= 120% of IBW)");
    }
}
