// ABOUTME: Unit normalization between metric and imperial representations
// ABOUTME: Pure conversion functions for length, mass, and laboratory concentration units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Unit normalization
//!
//! Every formula works in canonical units: centimeters, kilograms, mg/dL.
//! Inputs submitted in imperial or SI laboratory units are converted here,
//! once, before any formula runs.

use crate::constants::units::{
    CHOLESTEROL_MGDL_PER_MMOL, CM_PER_INCH, CREATININE_UMOL_PER_MGDL, GRAMS_PER_KG, LB_PER_KG,
    TRIGLYCERIDE_MGDL_PER_MMOL,
};
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Measurement system a submission was entered in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Centimeters and kilograms
    #[default]
    Metric,
    /// Inches and pounds
    Imperial,
}

impl FromStr for UnitSystem {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "si" => Ok(Self::Metric),
            "imperial" | "us" => Ok(Self::Imperial),
            other => Err(AppError::invalid_input(format!(
                "Unknown unit system: '{other}'. Valid options: metric, imperial"
            ))),
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "metric"),
            Self::Imperial => write!(f, "imperial"),
        }
    }
}

/// Physical dimension of a numeric input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    /// Converted between centimeters and inches
    Length,
    /// Converted between kilograms and pounds
    Mass,
    /// Newborn weight: grams metric, pounds imperial
    BirthMass,
    /// Never converted; the label is the fixed unit
    Fixed(&'static str),
}

impl Quantity {
    /// Unit label for this quantity in the given system
    #[must_use]
    pub const fn unit_label(self, system: UnitSystem) -> &'static str {
        match (self, system) {
            (Self::Length, UnitSystem::Metric) => "cm",
            (Self::Length, UnitSystem::Imperial) => "in",
            (Self::Mass, UnitSystem::Metric) => "kg",
            (Self::Mass | Self::BirthMass, UnitSystem::Imperial) => "lb",
            (Self::BirthMass, UnitSystem::Metric) => "g",
            (Self::Fixed(label), _) => label,
        }
    }

    /// Convert a value entered in `system` into canonical (metric) units
    #[must_use]
    pub fn to_canonical(self, value: f64, system: UnitSystem) -> f64 {
        match (self, system) {
            (Self::Length, UnitSystem::Imperial) => in_to_cm(value),
            (Self::Mass, UnitSystem::Imperial) => lb_to_kg(value),
            (Self::BirthMass, UnitSystem::Imperial) => lb_to_kg(value) * GRAMS_PER_KG,
            _ => value,
        }
    }

    /// Convert a canonical value back into `system` for display
    #[must_use]
    pub fn from_canonical(self, value: f64, system: UnitSystem) -> f64 {
        match (self, system) {
            (Self::Length, UnitSystem::Imperial) => cm_to_in(value),
            (Self::Mass, UnitSystem::Imperial) => kg_to_lb(value),
            (Self::BirthMass, UnitSystem::Imperial) => kg_to_lb(value / GRAMS_PER_KG),
            _ => value,
        }
    }
}

/// Centimeters to inches
#[must_use]
pub fn cm_to_in(cm: f64) -> f64 {
    cm / CM_PER_INCH
}

/// Inches to centimeters
#[must_use]
pub fn in_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

/// Kilograms to pounds
#[must_use]
pub fn kg_to_lb(kg: f64) -> f64 {
    kg * LB_PER_KG
}

/// Pounds to kilograms
#[must_use]
pub fn lb_to_kg(lb: f64) -> f64 {
    lb / LB_PER_KG
}

/// Round to a fixed number of decimal places for display
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    (value * factor).round() / factor
}

/// Concentration unit for lipid panels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LipidUnit {
    /// Milligrams per deciliter (US)
    #[default]
    MgDl,
    /// Millimoles per liter (SI)
    MmolL,
}

impl FromStr for LipidUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['/', ' ', '_'], "").as_str() {
            "mgdl" => Ok(Self::MgDl),
            "mmoll" => Ok(Self::MmolL),
            other => Err(AppError::invalid_input(format!(
                "Unknown lipid unit: '{other}'. Valid options: mg_dl, mmol_l"
            ))),
        }
    }
}

impl LipidUnit {
    /// Cholesterol (total/HDL/LDL) value to mg/dL
    #[must_use]
    pub fn cholesterol_to_mgdl(self, value: f64) -> f64 {
        match self {
            Self::MgDl => value,
            Self::MmolL => value * CHOLESTEROL_MGDL_PER_MMOL,
        }
    }

    /// Triglyceride value to mg/dL
    #[must_use]
    pub fn triglycerides_to_mgdl(self, value: f64) -> f64 {
        match self {
            Self::MgDl => value,
            Self::MmolL => value * TRIGLYCERIDE_MGDL_PER_MMOL,
        }
    }

    /// Cholesterol mg/dL back into this unit
    #[must_use]
    pub fn cholesterol_from_mgdl(self, mgdl: f64) -> f64 {
        match self {
            Self::MgDl => mgdl,
            Self::MmolL => mgdl / CHOLESTEROL_MGDL_PER_MMOL,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MgDl => "mg/dL",
            Self::MmolL => "mmol/L",
        }
    }
}

/// Serum creatinine unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreatinineUnit {
    /// Milligrams per deciliter
    #[default]
    MgDl,
    /// Micromoles per liter
    UmolL,
}

impl FromStr for CreatinineUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['/', ' ', '_'], "").as_str() {
            "mgdl" => Ok(Self::MgDl),
            "umoll" | "µmoll" | "micromoll" => Ok(Self::UmolL),
            other => Err(AppError::invalid_input(format!(
                "Unknown creatinine unit: '{other}'. Valid options: mg_dl, umol_l"
            ))),
        }
    }
}

impl CreatinineUnit {
    /// Creatinine value to mg/dL
    #[must_use]
    pub fn to_mgdl(self, value: f64) -> f64 {
        match self {
            Self::MgDl => value,
            Self::UmolL => value / CREATININE_UMOL_PER_MGDL,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MgDl => "mg/dL",
            Self::UmolL => "µmol/L",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_length_round_trip_within_tolerance() {
        for cm in [45.0, 100.0, 152.4, 175.3, 210.9] {
            let back = in_to_cm(round_to(cm_to_in(cm), 1));
            assert!((back - cm).abs() < 0.1 * 2.54, "cm={cm} back={back}");
            assert!((in_to_cm(cm_to_in(cm)) - cm).abs() < 1e-9);
        }
    }

    #[test]
    fn test_mass_round_trip_within_tolerance() {
        for kg in [2.5, 55.0, 70.0, 123.4, 250.0] {
            assert!((lb_to_kg(kg_to_lb(kg)) - kg).abs() < 0.1);
        }
    }

    #[test]
    fn test_quantity_conversion_is_identity_for_metric() {
        assert!((Quantity::Length.to_canonical(180.0, UnitSystem::Metric) - 180.0).abs() < f64::EPSILON);
        assert!((Quantity::Mass.to_canonical(154.0, UnitSystem::Imperial) - 69.853).abs() < 0.001);
        assert_eq!(Quantity::Fixed("mmHg").unit_label(UnitSystem::Imperial), "mmHg");
    }

    #[test]
    fn test_birth_mass_is_grams_in_metric() {
        assert_eq!(Quantity::BirthMass.unit_label(UnitSystem::Metric), "g");
        assert!((Quantity::BirthMass.to_canonical(3500.0, UnitSystem::Metric) - 3500.0).abs() < f64::EPSILON);
        let grams = Quantity::BirthMass.to_canonical(7.72, UnitSystem::Imperial);
        assert!((grams - 3501.7).abs() < 0.1, "grams={grams}");
        assert!((Quantity::BirthMass.from_canonical(grams, UnitSystem::Imperial) - 7.72).abs() < 1e-9);
    }

    #[test]
    fn test_round_to() {
        assert!((round_to(93.333_333, 2) - 93.33).abs() < 1e-12);
        assert!((round_to(116.666_67, 2) - 116.67).abs() < 1e-12);
    }

    #[test]
    fn test_parse_units() {
        assert_eq!("Imperial".parse::<UnitSystem>().unwrap(), UnitSystem::Imperial);
        assert_eq!("mmol/L".parse::<LipidUnit>().unwrap(), LipidUnit::MmolL);
        assert_eq!("umol_l".parse::<CreatinineUnit>().unwrap(), CreatinineUnit::UmolL);
        assert!("stone".parse::<UnitSystem>().is_err());
    }

    #[test]
    fn test_lab_conversions() {
        assert!((LipidUnit::MmolL.cholesterol_to_mgdl(5.0) - 193.35).abs() < 1e-9);
        assert!((CreatinineUnit::UmolL.to_mgdl(88.4) - 1.0).abs() < 1e-12);
    }
}
