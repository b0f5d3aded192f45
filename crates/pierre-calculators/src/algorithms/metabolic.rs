// ABOUTME: Basal metabolic rate and total daily energy expenditure
// ABOUTME: Mifflin-St Jeor and revised Harris-Benedict equations with activity multipliers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::mass_value;
use crate::catalog;
use crate::registry::Calculator;
use crate::validation::{InputReader, NumericField};
use pierre_core::errors::{AppError, AppResult};
use pierre_core::models::{
    CalculationResult, CalculatorInput, CalculatorMetadata, Gender, ReferenceRow, ResultValue,
};
use pierre_core::units::Quantity;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const WEIGHT: NumericField = NumericField::new("weight", "Weight", Quantity::Mass, 20.0, 300.0);
const HEIGHT: NumericField = NumericField::new("height", "Height", Quantity::Length, 100.0, 250.0);
const AGE: NumericField = NumericField::new("age", "Age", Quantity::Fixed("years"), 10.0, 120.0);

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Sedentary (little/no exercise)
    #[default]
    Sedentary,
    /// Lightly active (1-3 days/week)
    LightlyActive,
    /// Moderately active (3-5 days/week)
    ModeratelyActive,
    /// Very active (6-7 days/week)
    VeryActive,
    /// Extra active (hard training 2x/day)
    ExtraActive,
}

impl ActivityLevel {
    /// Every level, least active first
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::ExtraActive,
    ];

    /// Multiplier applied to BMR (`McArdle` et al. 2010)
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::LightlyActive => 1.375,
            Self::ModeratelyActive => 1.55,
            Self::VeryActive => 1.725,
            Self::ExtraActive => 1.9,
        }
    }

    /// Selector value
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::LightlyActive => "lightly_active",
            Self::ModeratelyActive => "moderately_active",
            Self::VeryActive => "very_active",
            Self::ExtraActive => "extra_active",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary (little or no exercise)",
            Self::LightlyActive => "Lightly active (1-3 days/week)",
            Self::ModeratelyActive => "Moderately active (3-5 days/week)",
            Self::VeryActive => "Very active (6-7 days/week)",
            Self::ExtraActive => "Extra active (hard training 2x/day)",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase().replace([' ', '-'], "_");
        Self::ALL
            .into_iter()
            .find(|level| level.name() == normalized)
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Unknown activity level: '{s}'. Valid options: sedentary, lightly_active, moderately_active, very_active, extra_active"
                ))
            })
    }
}

/// BMR equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BmrFormula {
    /// Mifflin-St Jeor (1990)
    #[default]
    MifflinStJeor,
    /// Harris-Benedict, Roza and Shizgal revision (1984)
    HarrisBenedict,
}

impl BmrFormula {
    /// Basal metabolic rate (kcal/day)
    #[must_use]
    pub fn bmr(self, weight_kg: f64, height_cm: f64, age: f64, gender: Gender) -> f64 {
        match (self, gender) {
            (Self::MifflinStJeor, Gender::Male) => mifflin_st_jeor(weight_kg, height_cm, age) + 5.0,
            (Self::MifflinStJeor, Gender::Female) => mifflin_st_jeor(weight_kg, height_cm, age) - 161.0,
            (Self::HarrisBenedict, Gender::Male) => {
                5.677f64.mul_add(-age, 4.799f64.mul_add(height_cm, 13.397f64.mul_add(weight_kg, 88.362)))
            }
            (Self::HarrisBenedict, Gender::Female) => {
                4.330f64.mul_add(-age, 3.098f64.mul_add(height_cm, 9.247f64.mul_add(weight_kg, 447.593)))
            }
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MifflinStJeor => "Mifflin-St Jeor",
            Self::HarrisBenedict => "Harris-Benedict (revised)",
        }
    }
}

impl FromStr for BmrFormula {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace([' ', '-', '_'], "").as_str() {
            "mifflinstjeor" | "mifflin" => Ok(Self::MifflinStJeor),
            "harrisbenedict" | "harris" => Ok(Self::HarrisBenedict),
            other => Err(AppError::invalid_input(format!(
                "Unknown BMR formula: '{other}'. Valid options: mifflin_st_jeor, harris_benedict"
            ))),
        }
    }
}

/// Mifflin-St Jeor without the sex constant: 10W + 6.25H − 5A
fn mifflin_st_jeor(weight_kg: f64, height_cm: f64, age: f64) -> f64 {
    5.0f64.mul_add(-age, 6.25f64.mul_add(height_cm, 10.0 * weight_kg))
}

/// Total daily energy expenditure (kcal/day)
#[must_use]
pub fn tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_level.factor()
}

/// BMR and TDEE calculator
pub struct BmrCalculator;

impl Calculator for BmrCalculator {
    fn metadata(&self) -> &'static CalculatorMetadata {
        &catalog::BMR
    }

    fn evaluate(&self, input: &CalculatorInput) -> AppResult<CalculationResult> {
        let mut reader = InputReader::new(input);
        let system = reader.unit_system();
        let values = (
            reader.required(&WEIGHT),
            reader.required(&HEIGHT),
            reader.required(&AGE),
            reader.selector::<Gender>("gender", "Gender"),
            reader.selector_or("formula", BmrFormula::default()),
            reader.selector_or("activity_level", ActivityLevel::default()),
        );
        let (Some(weight), Some(height), Some(age), Some(gender), Some(formula), Some(activity)) = values
        else {
            return Err(reader.into_error());
        };
        reader.finish()?;

        let bmr = formula.bmr(weight, height, age, gender);
        if bmr <= 0.0 {
            return Err(AppError::precondition("weight", "The BMR equation gives no meaningful result for these values"));
        }
        let mut result = CalculationResult::new(catalog::BMR.id, system)
            .value(ResultValue::new("bmr", "Basal metabolic rate", bmr, "kcal/day", 0))
            .value(ResultValue::new("tdee", "Total daily energy expenditure", tdee(bmr, activity), "kcal/day", 0))
            .value(ResultValue::new("activity_factor", "Activity factor", activity.factor(), "", 3))
            .value(mass_value("weight", "Weight", weight, system, 1))
            .interpretation(format!(
                "At rest you burn about {:.0} kcal per day; at your activity level you need about {:.0} kcal to maintain your weight.",
                bmr,
                tdee(bmr, activity)
            ))
            .note(format!("{} equation", formula.label()));
        for level in ActivityLevel::ALL {
            result = result.reference_row(
                ReferenceRow::new(level.label(), tdee(bmr, level), "kcal/day", 0)
                    .with_detail(format!("× {}", level.factor())),
            );
        }
        Ok(result)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
mod tests {
    use super::*;
    use pierre_core::units::UnitSystem;

    #[test]
    fn test_mifflin_st_jeor() {
        let male = BmrFormula::MifflinStJeor.bmr(70.0, 175.0, 30.0, Gender::Male);
        assert!((male - 1648.75).abs() < 1e-9);
        let female = BmrFormula::MifflinStJeor.bmr(60.0, 165.0, 30.0, Gender::Female);
        assert!((female - 1320.25).abs() < 1e-9);
    }

    #[test]
    fn test_harris_benedict() {
        let male = BmrFormula::HarrisBenedict.bmr(70.0, 175.0, 30.0, Gender::Male);
        assert!((male - 1695.667).abs() < 0.001);
    }

    #[test]
    fn test_activity_table() {
        let input = CalculatorInput::new(UnitSystem::Metric)
            .with_number("weight", 70.0)
            .with_number("height", 175.0)
            .with_number("age", 30.0)
            .with_selector("gender", "male")
            .with_selector("activity_level", "moderately active");
        let result = BmrCalculator.evaluate(&input).unwrap();
        assert_eq!(result.get("bmr"), Some(1649.0));
        assert_eq!(result.get("tdee"), Some(2556.0));
        assert_eq!(result.reference.len(), 5);
    }
}
