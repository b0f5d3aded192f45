// ABOUTME: One-repetition maximum estimation from a submaximal set
// ABOUTME: Epley, Brzycki, and Lombardi formulas plus a percentage-of-1RM load table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! One-rep max
//!
//! # Scientific References
//!
//! - Epley B. (1985). *Poundage Chart*. Boyd Epley Workout.
//! - Brzycki M. (1993). Strength testing: predicting a one-rep max from reps-to-fatigue. *JOPERD*, 64(1), 88-90.
//! - Lombardi V.P. (1989). *Beginning Weight Training*. W.C. Brown.

use super::mass_value;
use crate::catalog;
use crate::registry::Calculator;
use crate::validation::{InputReader, NumericField};
use pierre_core::errors::{AppError, AppResult};
use pierre_core::models::{CalculationResult, CalculatorInput, CalculatorMetadata, ReferenceRow};
use pierre_core::units::{Quantity, UnitSystem};
use std::str::FromStr;

const WEIGHT: NumericField = NumericField::new("weight", "Weight lifted", Quantity::Mass, 1.0, 500.0);
const REPS: NumericField = NumericField::new("reps", "Repetitions", Quantity::Fixed("reps"), 1.0, 30.0);

/// Percent of 1RM and the approximate repetitions achievable at that load
const LOAD_TABLE: [(u8, u8); 11] = [
    (100, 1),
    (95, 2),
    (90, 4),
    (85, 6),
    (80, 8),
    (75, 10),
    (70, 12),
    (65, 15),
    (60, 20),
    (55, 24),
    (50, 30),
];

/// One-rep max estimation formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OneRepMaxFormula {
    /// weight × (1 + reps / 30)
    #[default]
    Epley,
    /// weight × 36 / (37 − reps)
    Brzycki,
    /// weight × reps^0.10
    Lombardi,
}

impl OneRepMaxFormula {
    /// Every formula, in display order
    pub const ALL: [Self; 3] = [Self::Epley, Self::Brzycki, Self::Lombardi];

    /// Estimate 1RM from `weight` lifted for `reps` repetitions
    ///
    /// Reps are validated to 1..=30 by the caller, keeping Brzycki's
    /// denominator positive.
    #[must_use]
    pub fn estimate(self, weight: f64, reps: f64) -> f64 {
        match self {
            Self::Epley => weight * (1.0 + reps / 30.0),
            Self::Brzycki => weight * 36.0 / (37.0 - reps),
            Self::Lombardi => weight * reps.powf(0.10),
        }
    }

    /// Formula name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Epley => "epley",
            Self::Brzycki => "brzycki",
            Self::Lombardi => "lombardi",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Epley => "Epley",
            Self::Brzycki => "Brzycki",
            Self::Lombardi => "Lombardi",
        }
    }
}

impl FromStr for OneRepMaxFormula {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|formula| formula.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Unknown 1RM formula: '{s}'. Valid options: epley, brzycki, lombardi"
                ))
            })
    }
}

fn load_rows(one_rep_max_kg: f64, system: UnitSystem) -> impl Iterator<Item = ReferenceRow> {
    LOAD_TABLE.into_iter().map(move |(percent, reps)| {
        let load = Quantity::Mass.from_canonical(one_rep_max_kg * f64::from(percent) / 100.0, system);
        let detail = if reps == 1 { "1 rep".to_owned() } else { format!("~{reps} reps") };
        ReferenceRow::new(format!("{percent}%"), load, Quantity::Mass.unit_label(system), 1).with_detail(detail)
    })
}

/// One-rep max calculator
pub struct OneRepMaxCalculator;

impl Calculator for OneRepMaxCalculator {
    fn metadata(&self) -> &'static CalculatorMetadata {
        &catalog::ONE_REP_MAX
    }

    fn evaluate(&self, input: &CalculatorInput) -> AppResult<CalculationResult> {
        let mut reader = InputReader::new(input);
        let system = reader.unit_system();
        let values = (
            reader.required(&WEIGHT),
            reader.required_whole(&REPS),
            reader.selector_or("formula", OneRepMaxFormula::default()),
        );
        let (Some(weight), Some(reps), Some(formula)) = values else {
            return Err(reader.into_error());
        };
        reader.finish()?;

        let one_rep_max = formula.estimate(weight, reps);
        let mut result = CalculationResult::new(catalog::ONE_REP_MAX.id, system)
            .value(mass_value("one_rep_max", "Estimated 1RM", one_rep_max, system, 1));
        for other in OneRepMaxFormula::ALL.into_iter().filter(|other| *other != formula) {
            result = result.value(mass_value(
                &format!("one_rep_max_{}", other.name()),
                other.label(),
                other.estimate(weight, reps),
                system,
                1,
            ));
        }
        for row in load_rows(one_rep_max, system) {
            result = result.reference_row(row);
        }
        if reps > 10.0 {
            result = result.note("Estimates become less accurate above 10 repetitions");
        }
        Ok(result
            .interpretation(format!(
                "Based on the {} formula, your estimated one-rep max is {:.1} {}.",
                formula.label(),
                Quantity::Mass.from_canonical(one_rep_max, system),
                Quantity::Mass.unit_label(system)
            ))
            .note(format!("{} formula", formula.label())))
    }
}
