// ABOUTME: Karvonen target heart rate from heart rate reserve and training intensity
// ABOUTME: Max heart rate is estimated from age or entered manually
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Target heart rate
//!
//! Karvonen M.J. et al. (1957). The effects of training on heart rate.
//! *Ann Med Exp Biol Fenn*, 35(3), 307-315.

use super::classify_value;
use super::maxhr::MaxHrAlgorithm;
use crate::classification::ThresholdTable;
use crate::registry::Calculator;
use crate::validation::{InputReader, NumericField};
use crate::{catalog, tables};
use pierre_core::errors::{AppError, AppResult};
use pierre_core::models::{
    CalculationResult, CalculatorInput, CalculatorMetadata, Gender, ReferenceRow, ResultValue,
};
use pierre_core::units::Quantity;
use std::str::FromStr;

const AGE: NumericField = NumericField::new("age", "Age", Quantity::Fixed("years"), 1.0, 120.0);
const RESTING: NumericField = NumericField::new(
    "resting_heart_rate",
    "Resting heart rate",
    Quantity::Fixed("bpm"),
    30.0,
    120.0,
);
const MAX_HR: NumericField = NumericField::new(
    "max_heart_rate",
    "Maximum heart rate",
    Quantity::Fixed("bpm"),
    80.0,
    230.0,
);
const INTENSITY: NumericField =
    NumericField::new("intensity", "Intensity", Quantity::Fixed("%"), 1.0, 100.0);

/// Karvonen target heart rate (bpm) at `intensity_percent` of heart rate reserve
#[must_use]
pub fn karvonen(max_hr: f64, resting_hr: f64, intensity_percent: f64) -> f64 {
    (max_hr - resting_hr).mul_add(intensity_percent / 100.0, resting_hr)
}

/// How the maximum heart rate is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxHrMethod {
    /// Age-predicted
    Estimated(MaxHrAlgorithm),
    /// Entered by the user (e.g. from a field test)
    Manual,
}

impl Default for MaxHrMethod {
    fn default() -> Self {
        Self::Estimated(MaxHrAlgorithm::default())
    }
}

impl FromStr for MaxHrMethod {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("manual") {
            return Ok(Self::Manual);
        }
        s.parse::<MaxHrAlgorithm>().map(Self::Estimated).map_err(|_| {
            AppError::invalid_input(format!(
                "Unknown max heart rate method: '{s}'. Valid options: fox, tanaka, gellish, nes, gulati, manual"
            ))
        })
    }
}

/// Target heart rate calculator
pub struct TargetHeartRateCalculator;

static HEART_RATE_TABLES: [&ThresholdTable; 1] = [&tables::HEART_RATE_INTENSITY];

impl Calculator for TargetHeartRateCalculator {
    fn metadata(&self) -> &'static CalculatorMetadata {
        &catalog::TARGET_HEART_RATE
    }

    fn tables(&self) -> &'static [&'static ThresholdTable] {
        &HEART_RATE_TABLES
    }

    fn evaluate(&self, input: &CalculatorInput) -> AppResult<CalculationResult> {
        let mut reader = InputReader::new(input);
        let system = reader.unit_system();
        let method = reader.selector_or("max_hr_method", MaxHrMethod::default());
        let resting = reader.required(&RESTING);
        let intensity = reader.required(&INTENSITY);
        let gender = reader.optional_selector::<Gender>("gender");
        let max_hr = match method {
            Some(MaxHrMethod::Manual) => reader.required(&MAX_HR),
            Some(MaxHrMethod::Estimated(algorithm)) => reader
                .required(&AGE)
                .map(|age| algorithm.estimate(age, gender)),
            None => None,
        };
        let (Some(method), Some(max_hr), Some(resting), Some(intensity)) =
            (method, max_hr, resting, intensity)
        else {
            return Err(reader.into_error());
        };
        reader.require(
            resting < max_hr,
            "Resting heart rate must be lower than maximum heart rate",
        );
        reader.finish()?;

        let note = match method {
            MaxHrMethod::Manual => "Maximum heart rate entered manually",
            MaxHrMethod::Estimated(algorithm) => algorithm.description(),
        };
        let mut result = CalculationResult::new(catalog::TARGET_HEART_RATE.id, system)
            .value(ResultValue::new(
                "target_heart_rate",
                "Target heart rate",
                karvonen(max_hr, resting, intensity),
                "bpm",
                0,
            ))
            .value(ResultValue::new("max_heart_rate", "Maximum heart rate", max_hr, "bpm", 0))
            .value(ResultValue::new(
                "heart_rate_reserve",
                "Heart rate reserve",
                max_hr - resting,
                "bpm",
                0,
            ))
            .value(ResultValue::new("intensity", "Intensity", intensity, "% HRR", 0))
            .note(note);
        for percent in (50..=100).step_by(10) {
            let percent = f64::from(percent);
            let mut row = ReferenceRow::new(
                format!("{percent}%"),
                karvonen(max_hr, resting, percent),
                "bpm",
                0,
            );
            if let Some(band) = tables::HEART_RATE_INTENSITY.band(percent) {
                row = row.with_detail(band.label);
            }
            result = result.reference_row(row);
        }
        classify_value(result, &tables::HEART_RATE_INTENSITY, "intensity")
    }
}
