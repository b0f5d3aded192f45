// ABOUTME: Unit conversion constants for length, mass, and laboratory measurements
// ABOUTME: Provides named constants to eliminate magic numbers in calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Centimeters per inch (exact)
pub const CM_PER_INCH: f64 = 2.54;

/// Pounds per kilogram
pub const LB_PER_KG: f64 = 2.20462;

/// Centimeters per meter
pub const CM_PER_METER: f64 = 100.0;

/// Grams per kilogram
pub const GRAMS_PER_KG: f64 = 1000.0;

/// Inches per foot
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Cholesterol (total, HDL, LDL) mg/dL per mmol/L
pub const CHOLESTEROL_MGDL_PER_MMOL: f64 = 38.67;

/// Triglycerides mg/dL per mmol/L
pub const TRIGLYCERIDE_MGDL_PER_MMOL: f64 = 88.57;

/// Serum creatinine µmol/L per mg/dL
pub const CREATININE_UMOL_PER_MGDL: f64 = 88.4;
