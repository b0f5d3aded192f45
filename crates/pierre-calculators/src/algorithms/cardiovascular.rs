// ABOUTME: Cardiovascular calculators: mean arterial pressure, blood pressure category, LDL
// ABOUTME: Friedewald LDL estimation with measured-LDL fallback and lipid unit conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Cardiovascular calculators
//!
//! # Scientific References
//!
//! - Whelton P.K. et al. (2018). 2017 ACC/AHA Guideline for High Blood Pressure in Adults. *Hypertension*, 71, e13-e115.
//! - Friedewald W.T. et al. (1972). Estimation of the concentration of low-density lipoprotein cholesterol. *Clin Chem*, 18(6), 499-502.
//! - NCEP Expert Panel (2001). Adult Treatment Panel III. *JAMA*, 285(19), 2486-2497.

use super::classify_value;
use crate::classification::ThresholdTable;
use crate::registry::Calculator;
use crate::validation::{InputReader, NumericField};
use crate::{catalog, tables};
use pierre_core::constants::units::{CHOLESTEROL_MGDL_PER_MMOL, TRIGLYCERIDE_MGDL_PER_MMOL};
use pierre_core::errors::{AppError, AppResult, ErrorCode};
use pierre_core::models::{CalculationResult, CalculatorInput, CalculatorMetadata, ResultValue};
use pierre_core::units::{LipidUnit, Quantity};

const MMHG: Quantity = Quantity::Fixed("mmHg");
const SYSTOLIC: NumericField = NumericField::new("systolic", "Systolic pressure", MMHG, 50.0, 300.0);
const DIASTOLIC: NumericField = NumericField::new("diastolic", "Diastolic pressure", MMHG, 20.0, 200.0);

/// Triglyceride level (mg/dL) at and above which Friedewald is not applied
pub const FRIEDEWALD_TRIGLYCERIDE_LIMIT: f64 = 400.0;

/// Mean arterial pressure (mmHg)
#[must_use]
pub fn mean_arterial_pressure(systolic: f64, diastolic: f64) -> f64 {
    diastolic + (systolic - diastolic) / 3.0
}

/// Pulse pressure (mmHg)
#[must_use]
pub fn pulse_pressure(systolic: f64, diastolic: f64) -> f64 {
    systolic - diastolic
}

/// Friedewald LDL estimate (mg/dL)
#[must_use]
pub fn friedewald_ldl(total_mgdl: f64, hdl_mgdl: f64, triglycerides_mgdl: f64) -> f64 {
    total_mgdl - hdl_mgdl - triglycerides_mgdl / 5.0
}

/// ACC/AHA stage index (0 = normal .. 4 = crisis) of a reading
///
/// The more severe of the systolic and diastolic categories wins. Diastolic
/// has no "elevated" band, so its bands map onto stages 0, 2, 3, 4.
#[must_use]
pub fn blood_pressure_stage(systolic: f64, diastolic: f64) -> Option<usize> {
    const DIASTOLIC_TO_STAGE: [usize; 4] = [0, 2, 3, 4];
    let systolic_stage = tables::BP_SYSTOLIC.band_index(systolic)?;
    let diastolic_stage = DIASTOLIC_TO_STAGE
        .get(tables::BP_DIASTOLIC.band_index(diastolic)?)
        .copied()?;
    Some(systolic_stage.max(diastolic_stage))
}

fn read_pressures(reader: &mut InputReader<'_>) -> (Option<f64>, Option<f64>) {
    let systolic = reader.required(&SYSTOLIC);
    let diastolic = reader.required(&DIASTOLIC);
    if let (Some(systolic), Some(diastolic)) = (systolic, diastolic) {
        reader.require(
            systolic > diastolic,
            "Systolic pressure must be greater than diastolic pressure",
        );
    }
    (systolic, diastolic)
}

/// Mean arterial pressure calculator
pub struct MeanArterialPressureCalculator;

static MAP_TABLES: [&ThresholdTable; 1] = [&tables::MEAN_ARTERIAL_PRESSURE];

impl Calculator for MeanArterialPressureCalculator {
    fn metadata(&self) -> &'static CalculatorMetadata {
        &catalog::MEAN_ARTERIAL_PRESSURE
    }

    fn tables(&self) -> &'static [&'static ThresholdTable] {
        &MAP_TABLES
    }

    fn evaluate(&self, input: &CalculatorInput) -> AppResult<CalculationResult> {
        let mut reader = InputReader::new(input);
        let system = reader.unit_system();
        let (Some(systolic), Some(diastolic)) = read_pressures(&mut reader) else {
            return Err(reader.into_error());
        };
        reader.finish()?;

        let result = CalculationResult::new(catalog::MEAN_ARTERIAL_PRESSURE.id, system)
            .value(ResultValue::new(
                "map",
                "Mean arterial pressure",
                mean_arterial_pressure(systolic, diastolic),
                "mmHg",
                1,
            ))
            .value(ResultValue::new(
                "pulse_pressure",
                "Pulse pressure",
                pulse_pressure(systolic, diastolic),
                "mmHg",
                0,
            ))
            .note("MAP = diastolic + (systolic − diastolic) / 3");
        classify_value(result, &tables::MEAN_ARTERIAL_PRESSURE, "map")
    }
}

/// Blood pressure category calculator
pub struct BloodPressureCalculator;

static BP_TABLES: [&ThresholdTable; 3] = [&tables::BP_STAGE, &tables::BP_SYSTOLIC, &tables::BP_DIASTOLIC];

impl Calculator for BloodPressureCalculator {
    fn metadata(&self) -> &'static CalculatorMetadata {
        &catalog::BLOOD_PRESSURE
    }

    fn tables(&self) -> &'static [&'static ThresholdTable] {
        &BP_TABLES
    }

    fn evaluate(&self, input: &CalculatorInput) -> AppResult<CalculationResult> {
        let mut reader = InputReader::new(input);
        let system = reader.unit_system();
        let (Some(systolic), Some(diastolic)) = read_pressures(&mut reader) else {
            return Err(reader.into_error());
        };
        reader.finish()?;

        let stage = blood_pressure_stage(systolic, diastolic)
            .ok_or_else(|| AppError::internal("Blood pressure reading fell outside every category"))?;
        #[allow(clippy::cast_precision_loss)] // stage index is at most 4
        let stage_value = stage as f64;
        let mut result = CalculationResult::new(catalog::BLOOD_PRESSURE.id, system)
            .value(ResultValue::new("stage", "Category", stage_value, "", 0))
            .value(ResultValue::new("systolic", "Systolic", systolic, "mmHg", 0))
            .value(ResultValue::new("diastolic", "Diastolic", diastolic, "mmHg", 0))
            .value(ResultValue::new(
                "pulse_pressure",
                "Pulse pressure",
                pulse_pressure(systolic, diastolic),
                "mmHg",
                0,
            ));
        if let Some(band) = tables::BP_SYSTOLIC.band(systolic) {
            result = result.note(format!("Systolic: {}", band.label));
        }
        if let Some(band) = tables::BP_DIASTOLIC.band(diastolic) {
            result = result.note(format!("Diastolic: {}", band.label));
        }
        classify_value(result, &tables::BP_STAGE, "stage")
    }
}

struct LipidFields {
    total: NumericField,
    hdl: NumericField,
    triglycerides: NumericField,
    ldl: NumericField,
}

impl LipidFields {
    const fn new(unit: &'static str, scale: f64, triglyceride_scale: f64) -> Self {
        let quantity = Quantity::Fixed(unit);
        Self {
            total: NumericField::new("total_cholesterol", "Total cholesterol", quantity, 50.0 / scale, 1000.0 / scale),
            hdl: NumericField::new("hdl", "HDL cholesterol", quantity, 5.0 / scale, 200.0 / scale),
            triglycerides: NumericField::new(
                "triglycerides",
                "Triglycerides",
                quantity,
                10.0 / triglyceride_scale,
                5000.0 / triglyceride_scale,
            ),
            ldl: NumericField::new("ldl", "Measured LDL cholesterol", quantity, 10.0 / scale, 500.0 / scale),
        }
    }
}

static LIPIDS_MGDL: LipidFields = LipidFields::new("mg/dL", 1.0, 1.0);
static LIPIDS_MMOLL: LipidFields =
    LipidFields::new("mmol/L", CHOLESTEROL_MGDL_PER_MMOL, TRIGLYCERIDE_MGDL_PER_MMOL);

/// LDL cholesterol calculator
pub struct LdlCholesterolCalculator;

static LDL_TABLES: [&ThresholdTable; 1] = [&tables::LDL_CHOLESTEROL];

impl Calculator for LdlCholesterolCalculator {
    fn metadata(&self) -> &'static CalculatorMetadata {
        &catalog::LDL_CHOLESTEROL
    }

    fn tables(&self) -> &'static [&'static ThresholdTable] {
        &LDL_TABLES
    }

    fn evaluate(&self, input: &CalculatorInput) -> AppResult<CalculationResult> {
        let mut reader = InputReader::new(input);
        let system = reader.unit_system();
        let Some(unit) = reader.selector_or("lipid_unit", LipidUnit::default()) else {
            return Err(reader.into_error());
        };
        let fields = match unit {
            LipidUnit::MgDl => &LIPIDS_MGDL,
            LipidUnit::MmolL => &LIPIDS_MMOLL,
        };
        let total = reader.required(&fields.total);
        let hdl = reader.required(&fields.hdl);
        let triglycerides = reader.optional(&fields.triglycerides);
        let measured_ldl = reader.optional(&fields.ldl);
        let ldl_supplied = reader.is_supplied(fields.ldl.name);
        if !ldl_supplied && !reader.is_supplied(fields.triglycerides.name) {
            reader.reject(
                fields.triglycerides.name,
                ErrorCode::MissingRequiredField,
                "Triglycerides are required to estimate LDL when measured LDL is not given",
            );
        }
        let (Some(total), Some(hdl)) = (total, hdl) else {
            return Err(reader.into_error());
        };
        reader.require(hdl < total, "HDL cholesterol must be lower than total cholesterol");
        reader.finish()?;

        let total_mgdl = unit.cholesterol_to_mgdl(total);
        let hdl_mgdl = unit.cholesterol_to_mgdl(hdl);
        let (ldl_mgdl, method_note) = match (measured_ldl, triglycerides) {
            (Some(ldl), _) => (unit.cholesterol_to_mgdl(ldl), "Measured LDL cholesterol used"),
            (None, Some(triglycerides)) => {
                let triglycerides_mgdl = unit.triglycerides_to_mgdl(triglycerides);
                if triglycerides_mgdl >= FRIEDEWALD_TRIGLYCERIDE_LIMIT {
                    return Err(AppError::precondition(
                        "ldl",
                        "Triglycerides are 400 mg/dL (4.5 mmol/L) or higher, so LDL cannot be estimated reliably; enter a directly measured LDL value",
                    ));
                }
                let estimate = friedewald_ldl(total_mgdl, hdl_mgdl, triglycerides_mgdl);
                if estimate <= 0.0 {
                    return Err(AppError::precondition(
                        "ldl",
                        "The Friedewald estimate is not positive for these values; check the entries or enter a measured LDL value",
                    ));
                }
                (estimate, "LDL estimated with the Friedewald equation: TC − HDL − TG/5")
            }
            (None, None) => {
                return Err(AppError::internal("Lipid panel reached evaluation without LDL or triglycerides"));
            }
        };

        let decimals = match unit {
            LipidUnit::MgDl => 0,
            LipidUnit::MmolL => 2,
        };
        let mut result = CalculationResult::new(catalog::LDL_CHOLESTEROL.id, system).value(ResultValue::new(
            "ldl",
            "LDL cholesterol",
            unit.cholesterol_from_mgdl(ldl_mgdl),
            unit.label(),
            decimals,
        ));
        let basis = match unit {
            LipidUnit::MgDl => "ldl",
            LipidUnit::MmolL => {
                result = result.value(ResultValue::new("ldl_mgdl", "LDL cholesterol", ldl_mgdl, "mg/dL", 0));
                "ldl_mgdl"
            }
        };
        result = result
            .value(ResultValue::new(
                "non_hdl",
                "Non-HDL cholesterol",
                unit.cholesterol_from_mgdl(total_mgdl - hdl_mgdl),
                unit.label(),
                decimals,
            ))
            .value(ResultValue::new("tc_hdl_ratio", "Total/HDL ratio", total_mgdl / hdl_mgdl, "", 1))
            .note(method_note);
        classify_value(result, &tables::LDL_CHOLESTEROL, basis)
    }
}
