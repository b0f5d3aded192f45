// ABOUTME: Anthropometric indices: BMI, waist ratios, ponderal index, BSA, lean mass, body fat
// ABOUTME: Pure formulas in canonical units and the calculators that validate and classify them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Anthropometric calculators
//!
//! # Scientific References
//!
//! - Keys A. et al. (1972). Indices of relative weight and obesity. *J Chronic Dis*, 25(6), 329-343.
//! - Ashwell M., Gibson S. (2016). Waist-to-height ratio as an indicator of early health risk. *BMJ Open*, 6, e010159.
//! - Mosteller R.D. (1987). Simplified calculation of body-surface area. *N Engl J Med*, 317(17), 1098.
//! - Du Bois D., Du Bois E.F. (1916). A formula to estimate the approximate surface area. *Arch Intern Med*, 17, 863-871.
//! - Boer P. (1984). Estimated lean body mass as an index for normalization of body fluid volumes. *Am J Physiol*, 247, F632-F636.
//! - Hodgdon J.A., Beckett M.B. (1984). Prediction of percent body fat for U.S. Navy men and women. NHRC Report 84-11.

use super::{classify_value, length_value, mass_value};
use crate::classification::ThresholdTable;
use crate::registry::Calculator;
use crate::validation::{InputReader, NumericField};
use crate::{catalog, tables};
use pierre_core::constants::units::CM_PER_METER;
use pierre_core::errors::{AppError, AppResult, ErrorCode};
use pierre_core::models::{CalculationResult, CalculatorInput, CalculatorMetadata, Gender, ResultValue};
use pierre_core::units::{cm_to_in, Quantity};
use std::str::FromStr;

const WEIGHT: NumericField = NumericField::new("weight", "Weight", Quantity::Mass, 20.0, 350.0);
const HEIGHT: NumericField = NumericField::new("height", "Height", Quantity::Length, 100.0, 250.0);
const WAIST: NumericField = NumericField::new("waist", "Waist circumference", Quantity::Length, 40.0, 250.0);
const HIP: NumericField = NumericField::new("hip", "Hip circumference", Quantity::Length, 50.0, 250.0);
const NECK: NumericField = NumericField::new("neck", "Neck circumference", Quantity::Length, 20.0, 80.0);
const NEWBORN_WEIGHT: NumericField = NumericField::new("weight", "Birth weight", Quantity::BirthMass, 300.0, 7000.0);
const NEWBORN_LENGTH: NumericField = NumericField::new("height", "Birth length", Quantity::Length, 25.0, 65.0);
const BSA_WEIGHT: NumericField = NumericField::new("weight", "Weight", Quantity::Mass, 0.5, 350.0);
const BSA_HEIGHT: NumericField = NumericField::new("height", "Height", Quantity::Length, 30.0, 250.0);

/// BMI (kg/m²)
#[must_use]
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / CM_PER_METER;
    weight_kg / (height_m * height_m)
}

/// Waist-to-height ratio; both lengths in the same unit
#[must_use]
pub fn waist_to_height_ratio(waist: f64, height: f64) -> f64 {
    waist / height
}

/// Waist-to-hip ratio; both lengths in the same unit
#[must_use]
pub fn waist_to_hip_ratio(waist: f64, hip: f64) -> f64 {
    waist / hip
}

/// Adult ponderal index: kg / m³
#[must_use]
pub fn ponderal_index_adult(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / CM_PER_METER;
    weight_kg / height_m.powi(3)
}

/// Neonatal ponderal index: (g / cm³) × 100
#[must_use]
pub fn ponderal_index_child(weight_g: f64, length_cm: f64) -> f64 {
    weight_g / length_cm.powi(3) * 100.0
}

/// Mosteller body surface area (m²)
#[must_use]
pub fn bsa_mosteller(weight_kg: f64, height_cm: f64) -> f64 {
    (height_cm * weight_kg / 3600.0).sqrt()
}

/// DuBois body surface area (m²)
#[must_use]
pub fn bsa_dubois(weight_kg: f64, height_cm: f64) -> f64 {
    0.007_184 * weight_kg.powf(0.425) * height_cm.powf(0.725)
}

/// Boer lean body mass (kg)
#[must_use]
pub fn lean_body_mass_boer(weight_kg: f64, height_cm: f64, gender: Gender) -> f64 {
    match gender {
        Gender::Male => 0.267f64.mul_add(height_cm, 0.407 * weight_kg) - 19.2,
        Gender::Female => 0.473f64.mul_add(height_cm, 0.252 * weight_kg) - 48.3,
    }
}

/// US Navy circumference body fat (%)
///
/// Measurements in centimeters; the published coefficients are for inches so
/// they are converted first. `hip_cm` is only used for women.
#[must_use]
pub fn navy_body_fat(gender: Gender, height_cm: f64, neck_cm: f64, waist_cm: f64, hip_cm: f64) -> f64 {
    let height = cm_to_in(height_cm);
    let neck = cm_to_in(neck_cm);
    let waist = cm_to_in(waist_cm);
    match gender {
        Gender::Male => {
            86.010f64.mul_add((waist - neck).log10(), -70.041 * height.log10()) + 36.76
        }
        Gender::Female => {
            let hip = cm_to_in(hip_cm);
            163.205f64.mul_add((waist + hip - neck).log10(), -97.684 * height.log10()) - 78.387
        }
    }
}

/// BMI calculator
pub struct BmiCalculator;

static BMI_TABLES: [&ThresholdTable; 1] = [&tables::BMI_ADULT];

impl Calculator for BmiCalculator {
    fn metadata(&self) -> &'static CalculatorMetadata {
        &catalog::BMI
    }

    fn tables(&self) -> &'static [&'static ThresholdTable] {
        &BMI_TABLES
    }

    fn evaluate(&self, input: &CalculatorInput) -> AppResult<CalculationResult> {
        let mut reader = InputReader::new(input);
        let system = reader.unit_system();
        let (Some(weight), Some(height)) = (reader.required(&WEIGHT), reader.required(&HEIGHT)) else {
            return Err(reader.into_error());
        };
        reader.finish()?;

        let height_m = height / CM_PER_METER;
        let healthy_min = 18.5 * height_m * height_m;
        let healthy_max = 24.9 * height_m * height_m;
        let result = CalculationResult::new(catalog::BMI.id, system)
            .value(ResultValue::new("bmi", "BMI", body_mass_index(weight, height), "kg/m²", 1))
            .value(mass_value("healthy_weight_min", "Healthy weight from", healthy_min, system, 1))
            .value(mass_value("healthy_weight_max", "Healthy weight to", healthy_max, system, 1));
        classify_value(result, &tables::BMI_ADULT, "bmi")
    }
}

/// Waist-to-height ratio calculator
pub struct WaistToHeightCalculator;

static WHTR_TABLES: [&ThresholdTable; 1] = [&tables::WAIST_TO_HEIGHT];

impl Calculator for WaistToHeightCalculator {
    fn metadata(&self) -> &'static CalculatorMetadata {
        &catalog::WAIST_TO_HEIGHT_RATIO
    }

    fn tables(&self) -> &'static [&'static ThresholdTable] {
        &WHTR_TABLES
    }

    fn evaluate(&self, input: &CalculatorInput) -> AppResult<CalculationResult> {
        let mut reader = InputReader::new(input);
        let system = reader.unit_system();
        let (Some(waist), Some(height)) = (reader.required(&WAIST), reader.required(&HEIGHT)) else {
            return Err(reader.into_error());
        };
        reader.finish()?;

        let result = CalculationResult::new(catalog::WAIST_TO_HEIGHT_RATIO.id, system)
            .value(ResultValue::new("whtr", "Waist-to-height ratio", waist_to_height_ratio(waist, height), "", 2))
            .value(length_value("healthy_waist_limit", "Keep waist below", height / 2.0, system, 1));
        classify_value(result, &tables::WAIST_TO_HEIGHT, "whtr")
    }
}

/// Waist-to-hip ratio calculator
pub struct WaistToHipCalculator;

static WHR_TABLES: [&ThresholdTable; 2] = [&tables::WAIST_TO_HIP_MALE, &tables::WAIST_TO_HIP_FEMALE];

impl Calculator for WaistToHipCalculator {
    fn metadata(&self) -> &'static CalculatorMetadata {
        &catalog::WAIST_TO_HIP_RATIO
    }

    fn tables(&self) -> &'static [&'static ThresholdTable] {
        &WHR_TABLES
    }

    fn evaluate(&self, input: &CalculatorInput) -> AppResult<CalculationResult> {
        let mut reader = InputReader::new(input);
        let system = reader.unit_system();
        let values = (
            reader.required(&WAIST),
            reader.required(&HIP),
            reader.selector::<Gender>("gender", "Gender"),
        );
        let (Some(waist), Some(hip), Some(gender)) = values else {
            return Err(reader.into_error());
        };
        reader.finish()?;

        let table = match gender {
            Gender::Male => &tables::WAIST_TO_HIP_MALE,
            Gender::Female => &tables::WAIST_TO_HIP_FEMALE,
        };
        let result = CalculationResult::new(catalog::WAIST_TO_HIP_RATIO.id, system)
            .value(ResultValue::new("whr", "Waist-to-hip ratio", waist_to_hip_ratio(waist, hip), "", 2));
        classify_value(result, table, "whr")
    }
}

/// Who a ponderal index is computed for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PonderalSubject {
    /// Adult: kg/m³
    Adult,
    /// Newborn: (g/cm³) × 100
    Child,
}

impl FromStr for PonderalSubject {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "adult" => Ok(Self::Adult),
            "child" | "newborn" | "infant" | "neonate" => Ok(Self::Child),
            other => Err(AppError::invalid_input(format!(
                "Unknown user type: '{other}'. Valid options: adult, child"
            ))),
        }
    }
}

/// Ponderal index calculator
pub struct PonderalIndexCalculator;

static PONDERAL_TABLES: [&ThresholdTable; 2] = [&tables::PONDERAL_ADULT, &tables::PONDERAL_CHILD];

impl Calculator for PonderalIndexCalculator {
    fn metadata(&self) -> &'static CalculatorMetadata {
        &catalog::PONDERAL_INDEX
    }

    fn tables(&self) -> &'static [&'static ThresholdTable] {
        &PONDERAL_TABLES
    }

    fn evaluate(&self, input: &CalculatorInput) -> AppResult<CalculationResult> {
        let mut reader = InputReader::new(input);
        let system = reader.unit_system();
        let Some(subject) = reader.selector_or("user_type", PonderalSubject::Adult) else {
            return Err(reader.into_error());
        };
        let (weight_field, height_field) = match subject {
            PonderalSubject::Adult => (&WEIGHT, &HEIGHT),
            PonderalSubject::Child => (&NEWBORN_WEIGHT, &NEWBORN_LENGTH),
        };
        let (Some(weight), Some(height)) = (reader.required(weight_field), reader.required(height_field)) else {
            return Err(reader.into_error());
        };
        reader.finish()?;

        let (index, table, note) = match subject {
            PonderalSubject::Adult => (
                ponderal_index_adult(weight, height),
                &tables::PONDERAL_ADULT,
                "Adult formula: weight (kg) / height (m)³",
            ),
            PonderalSubject::Child => (
                ponderal_index_child(weight, height),
                &tables::PONDERAL_CHILD,
                "Newborn formula: weight (g) / length (cm)³ × 100",
            ),
        };
        let result = CalculationResult::new(catalog::PONDERAL_INDEX.id, system)
            .value(ResultValue::new("ponderal_index", "Ponderal index", index, table.unit, 2))
            .note(note);
        classify_value(result, table, "ponderal_index")
    }
}

/// Body surface area formula
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BsaFormula {
    /// sqrt(height × weight / 3600)
    Mosteller,
    /// 0.007184 × W^0.425 × H^0.725
    DuBois,
}

impl FromStr for BsaFormula {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace([' ', '_', '-'], "").as_str() {
            "mosteller" => Ok(Self::Mosteller),
            "dubois" => Ok(Self::DuBois),
            other => Err(AppError::invalid_input(format!(
                "Unknown BSA formula: '{other}'. Valid options: mosteller, dubois"
            ))),
        }
    }
}

/// Body surface area calculator
pub struct BodySurfaceAreaCalculator;

impl Calculator for BodySurfaceAreaCalculator {
    fn metadata(&self) -> &'static CalculatorMetadata {
        &catalog::BODY_SURFACE_AREA
    }

    fn evaluate(&self, input: &CalculatorInput) -> AppResult<CalculationResult> {
        let mut reader = InputReader::new(input);
        let system = reader.unit_system();
        let values = (
            reader.required(&BSA_WEIGHT),
            reader.required(&BSA_HEIGHT),
            reader.selector_or("formula", BsaFormula::Mosteller),
        );
        let (Some(weight), Some(height), Some(formula)) = values else {
            return Err(reader.into_error());
        };
        reader.finish()?;

        let mosteller = bsa_mosteller(weight, height);
        let dubois = bsa_dubois(weight, height);
        let (primary, secondary, note) = match formula {
            BsaFormula::Mosteller => (
                ResultValue::new("bsa", "Body surface area (Mosteller)", mosteller, "m²", 2),
                ResultValue::new("bsa_dubois", "Body surface area (DuBois)", dubois, "m²", 2),
                "Mosteller: √(height cm × weight kg / 3600)",
            ),
            BsaFormula::DuBois => (
                ResultValue::new("bsa", "Body surface area (DuBois)", dubois, "m²", 2),
                ResultValue::new("bsa_mosteller", "Body surface area (Mosteller)", mosteller, "m²", 2),
                "DuBois: 0.007184 × weight^0.425 × height^0.725",
            ),
        };
        Ok(CalculationResult::new(catalog::BODY_SURFACE_AREA.id, system)
            .value(primary)
            .value(secondary)
            .interpretation("Average adult body surface area is about 1.9 m² for men and 1.6 m² for women.")
            .note(note))
    }
}

/// Lean body mass calculator
pub struct LeanBodyMassCalculator;

impl Calculator for LeanBodyMassCalculator {
    fn metadata(&self) -> &'static CalculatorMetadata {
        &catalog::LEAN_BODY_MASS
    }

    fn evaluate(&self, input: &CalculatorInput) -> AppResult<CalculationResult> {
        let mut reader = InputReader::new(input);
        let system = reader.unit_system();
        let values = (
            reader.required(&WEIGHT),
            reader.required(&HEIGHT),
            reader.selector::<Gender>("gender", "Gender"),
        );
        let (Some(weight), Some(height), Some(gender)) = values else {
            return Err(reader.into_error());
        };
        reader.finish()?;

        let lean = lean_body_mass_boer(weight, height, gender);
        if lean <= 0.0 || lean >= weight {
            return Err(AppError::precondition(
                "weight",
                "The Boer formula does not give a meaningful lean mass for this height and weight",
            ));
        }
        let fat_percent = 100.0 * (1.0 - lean / weight);
        Ok(CalculationResult::new(catalog::LEAN_BODY_MASS.id, system)
            .value(mass_value("lean_body_mass", "Lean body mass", lean, system, 1))
            .value(mass_value("fat_mass", "Fat mass", weight - lean, system, 1))
            .value(ResultValue::new("body_fat_percent", "Estimated body fat", fat_percent, "%", 1))
            .interpretation(format!(
                "About {:.0}% of your body weight is lean tissue (muscle, bone, organs, water).",
                100.0 - fat_percent
            ))
            .note("Boer formula"))
    }
}

/// US Navy body fat calculator
pub struct BodyFatCalculator;

static BODY_FAT_TABLES: [&ThresholdTable; 2] = [&tables::BODY_FAT_MALE, &tables::BODY_FAT_FEMALE];

impl Calculator for BodyFatCalculator {
    fn metadata(&self) -> &'static CalculatorMetadata {
        &catalog::BODY_FAT
    }

    fn tables(&self) -> &'static [&'static ThresholdTable] {
        &BODY_FAT_TABLES
    }

    fn evaluate(&self, input: &CalculatorInput) -> AppResult<CalculationResult> {
        let mut reader = InputReader::new(input);
        let system = reader.unit_system();
        let values = (
            reader.selector::<Gender>("gender", "Gender"),
            reader.required(&HEIGHT),
            reader.required(&NECK),
            reader.required(&WAIST),
        );
        let hip = reader.optional(&HIP);
        let weight = reader.optional(&WEIGHT);
        let (Some(gender), Some(height), Some(neck), Some(waist)) = values else {
            return Err(reader.into_error());
        };

        let hip = match (gender, hip) {
            (Gender::Female, None) => {
                if !reader.is_supplied(HIP.name) {
                    reader.reject(
                        HIP.name,
                        ErrorCode::MissingRequiredField,
                        "Hip circumference is required for women",
                    );
                }
                return Err(reader.into_error());
            }
            (Gender::Female, Some(hip)) => {
                reader.require(
                    waist + hip > neck,
                    "Waist plus hip circumference must be greater than neck circumference",
                );
                hip
            }
            (Gender::Male, _) => {
                reader.require(waist > neck, "Waist circumference must be greater than neck circumference");
                0.0
            }
        };
        reader.finish()?;

        let body_fat = navy_body_fat(gender, height, neck, waist, hip);
        if !(0.0..75.0).contains(&body_fat) {
            return Err(AppError::precondition(
                "waist",
                "These measurements fall outside the range the Navy formula was validated for; please re-measure",
            ));
        }
        let table = match gender {
            Gender::Male => &tables::BODY_FAT_MALE,
            Gender::Female => &tables::BODY_FAT_FEMALE,
        };
        let mut result = CalculationResult::new(catalog::BODY_FAT.id, system)
            .value(ResultValue::new("body_fat_percent", "Body fat", body_fat, "%", 1))
            .note("US Navy circumference method");
        if let Some(weight) = weight {
            let fat_mass = weight * body_fat / 100.0;
            result = result
                .value(mass_value("fat_mass", "Fat mass", fat_mass, system, 1))
                .value(mass_value("lean_mass", "Lean mass", weight - fat_mass, system, 1));
        }
        classify_value(result, table, "body_fat_percent")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
mod tests {
    use super::*;
    use pierre_core::units::UnitSystem;

    #[test]
    fn test_bmi_formula() {
        assert!((body_mass_index(70.0, 175.0) - 22.857).abs() < 0.001);
    }

    #[test]
    fn test_ponderal_variants_are_distinct() {
        assert!((ponderal_index_adult(70.0, 175.0) - 13.06).abs() < 0.01);
        assert!((ponderal_index_child(3500.0, 50.0) - 2.8).abs() < 1e-9);
        assert!((ponderal_index_adult(3.5, 50.0) - ponderal_index_child(3500.0, 50.0)).abs() > 1.0);
    }

    #[test]
    fn test_bsa_formulas_agree_roughly() {
        let mosteller = bsa_mosteller(70.0, 175.0);
        let dubois = bsa_dubois(70.0, 175.0);
        assert!((mosteller - 1.84).abs() < 0.01);
        assert!((mosteller - dubois).abs() < 0.05);
    }

    #[test]
    fn test_navy_body_fat_male() {
        let inches = |v: f64| v * 2.54;
        let fat = navy_body_fat(Gender::Male, inches(70.0), inches(15.0), inches(34.0), 0.0);
        assert!((fat - 17.5).abs() < 0.1, "got {fat}");
    }

    #[test]
    fn test_body_fat_female_requires_hip() {
        let input = CalculatorInput::new(UnitSystem::Metric)
            .with_selector("gender", "female")
            .with_number("height", 165.0)
            .with_number("neck", 32.0)
            .with_number("waist", 75.0);
        let error = BodyFatCalculator.evaluate(&input).unwrap_err();
        assert_eq!(error.code, ErrorCode::MissingRequiredField);
        assert_eq!(error.details["fields"][0]["field"], "hip");
    }

    #[test]
    fn test_ponderal_uses_child_table() {
        let input = CalculatorInput::new(UnitSystem::Metric)
            .with_selector("user_type", "child")
            .with_number("weight", 3500.0)
            .with_number("height", 50.0);
        let result = PonderalIndexCalculator.evaluate(&input).unwrap();
        assert_eq!(result.get("ponderal_index"), Some(2.8));
        assert_eq!(result.category.unwrap().label, "Normal");
    }

    #[test]
    fn test_newborn_weight_in_kilograms_is_out_of_range() {
        let input = CalculatorInput::new(UnitSystem::Metric)
            .with_selector("user_type", "child")
            .with_number("weight", 3.5)
            .with_number("height", 50.0);
        let error = PonderalIndexCalculator.evaluate(&input).unwrap_err();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert_eq!(error.message, "Birth weight must be between 300 and 7000 g");
    }

    #[test]
    fn test_newborn_weight_in_pounds() {
        let input = CalculatorInput::new(UnitSystem::Imperial)
            .with_selector("user_type", "child")
            .with_number("weight", 7.72)
            .with_number("height", 19.7);
        let result = PonderalIndexCalculator.evaluate(&input).unwrap();
        assert_eq!(result.get("ponderal_index"), Some(2.8));
    }
}
