// ABOUTME: Static threshold tables used to categorize calculator results
// ABOUTME: Clinical cut-offs for BMI, ratios, kidney function, blood pressure, lipids, and body fat
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Threshold tables
//!
//! All tables follow the lower-inclusive convention of [`ThresholdTable`].
//! Where a published source writes a cut-off as `> x` rather than `>= x`, the
//! table keeps the published number as the lower bound of the higher band, so
//! a value exactly on the cut-off is placed in the higher band. Those tables
//! say so in their doc comment.

use crate::classification::{Band, ThresholdTable};

/// WHO adult BMI classification (kg/m²)
pub static BMI_ADULT: ThresholdTable = ThresholdTable {
    id: "bmi-adult",
    title: "Body Mass Index",
    unit: "kg/m²",
    source: "WHO Technical Report Series 894 (2000)",
    bands: &[
        Band::below("Underweight", "Below the healthy range; may indicate undernutrition."),
        Band::new(18.5, "Normal weight", "Within the range associated with the lowest health risk."),
        Band::new(25.0, "Overweight", "Moderately increased risk of weight-related conditions."),
        Band::new(30.0, "Obesity class I", "Increased risk of cardiovascular and metabolic disease."),
        Band::new(35.0, "Obesity class II", "High risk of weight-related disease."),
        Band::new(40.0, "Obesity class III", "Very high risk; medical guidance is recommended."),
    ],
};

/// Waist-to-height ratio boundaries (Ashwell); dimensionless
pub static WAIST_TO_HEIGHT: ThresholdTable = ThresholdTable {
    id: "waist-to-height",
    title: "Waist-to-Height Ratio",
    unit: "",
    source: "Ashwell M, Gibson S. BMJ Open 2016;6:e010159",
    bands: &[
        Band::below("Low", "Waist is small relative to height; check for underweight."),
        Band::new(0.4, "Healthy", "Keep your waist to less than half your height."),
        Band::new(0.5, "Increased risk", "Central fat is raising cardiometabolic risk."),
        Band::new(0.6, "High risk", "Substantially increased cardiometabolic risk."),
    ],
};

/// WHO waist-to-hip ratio, men
///
/// WHO writes the high-risk cut-off as `> 1.0`; here 1.0 itself is high risk.
pub static WAIST_TO_HIP_MALE: ThresholdTable = ThresholdTable {
    id: "waist-to-hip-male",
    title: "Waist-to-Hip Ratio (men)",
    unit: "",
    source: "WHO Expert Consultation on Waist Circumference and Waist-Hip Ratio (2008)",
    bands: &[
        Band::below("Low risk", "Fat distribution carries low cardiovascular risk."),
        Band::new(0.95, "Moderate risk", "Abdominal fat is moderately raising risk."),
        Band::new(1.0, "High risk", "Abdominal obesity; substantially increased risk."),
    ],
};

/// WHO waist-to-hip ratio, women
///
/// WHO writes the high-risk cut-off as `> 0.85`; here 0.85 itself is high risk.
pub static WAIST_TO_HIP_FEMALE: ThresholdTable = ThresholdTable {
    id: "waist-to-hip-female",
    title: "Waist-to-Hip Ratio (women)",
    unit: "",
    source: "WHO Expert Consultation on Waist Circumference and Waist-Hip Ratio (2008)",
    bands: &[
        Band::below("Low risk", "Fat distribution carries low cardiovascular risk."),
        Band::new(0.80, "Moderate risk", "Abdominal fat is moderately raising risk."),
        Band::new(0.85, "High risk", "Abdominal obesity; substantially increased risk."),
    ],
};

/// Adult ponderal index (kg/m³)
pub static PONDERAL_ADULT: ThresholdTable = ThresholdTable {
    id: "ponderal-adult",
    title: "Ponderal Index (adult)",
    unit: "kg/m³",
    source: "Rohrer F. (1921); adult reference range 11-15 kg/m³",
    bands: &[
        Band::below("Underweight", "Low mass for height, independent of stature."),
        Band::new(11.0, "Normal", "Mass is proportionate to height."),
        Band::new(15.0, "Overweight", "High mass for height, independent of stature."),
    ],
};

/// Neonatal ponderal index ((g/cm³) × 100)
pub static PONDERAL_CHILD: ThresholdTable = ThresholdTable {
    id: "ponderal-child",
    title: "Ponderal Index (newborn)",
    unit: "g/cm³ × 100",
    source: "Miller HC, Hassanein K. Pediatrics 1971;48(4):511-522",
    bands: &[
        Band::below("Low (disproportionate)", "Suggests asymmetric fetal growth restriction; discuss with a pediatrician."),
        Band::new(2.2, "Normal", "Weight is proportionate to length."),
        Band::new(3.0, "High", "Heavy for length; may follow maternal diabetes or excess growth."),
    ],
};

/// Creatinine clearance staging (mL/min)
pub static CREATININE_CLEARANCE: ThresholdTable = ThresholdTable {
    id: "creatinine-clearance",
    title: "Creatinine Clearance",
    unit: "mL/min",
    source: "KDIGO 2012 GFR categories applied to Cockcroft-Gault CrCl",
    bands: &[
        Band::below("Kidney failure", "Severely impaired filtration; most renally cleared drugs need major adjustment."),
        Band::new(15.0, "Severely decreased", "Significant dose adjustment is usually required."),
        Band::new(30.0, "Moderately decreased", "Dose adjustment is often required."),
        Band::new(60.0, "Mildly decreased", "Adjustment is needed for some narrow-margin drugs."),
        Band::new(90.0, "Normal", "Filtration is within the normal range."),
    ],
};

/// Mean arterial pressure (mmHg)
///
/// The normal range is usually quoted as 70-100 mmHg inclusive; here 100 mmHg
/// itself falls in the high band.
pub static MEAN_ARTERIAL_PRESSURE: ThresholdTable = ThresholdTable {
    id: "mean-arterial-pressure",
    title: "Mean Arterial Pressure",
    unit: "mmHg",
    source: "Critical care perfusion targets (MAP >= 60-65 mmHg)",
    bands: &[
        Band::below("Critically low", "Organ perfusion may be inadequate; seek medical attention."),
        Band::new(60.0, "Low", "Below the usual range; may cause dizziness or fatigue."),
        Band::new(70.0, "Normal", "Adequate pressure to perfuse the organs."),
        Band::new(100.0, "High", "Elevated average pressure; associated with hypertension."),
    ],
};

/// AHA/ACC 2017 systolic bands (mmHg)
pub static BP_SYSTOLIC: ThresholdTable = ThresholdTable {
    id: "bp-systolic",
    title: "Systolic Blood Pressure",
    unit: "mmHg",
    source: "2017 ACC/AHA High Blood Pressure Guideline",
    bands: &[
        Band::below("Normal", "Systolic pressure below 120 mmHg."),
        Band::new(120.0, "Elevated", "Systolic pressure 120-129 mmHg."),
        Band::new(130.0, "Hypertension stage 1", "Systolic pressure 130-139 mmHg."),
        Band::new(140.0, "Hypertension stage 2", "Systolic pressure 140 mmHg or higher."),
        Band::new(180.0, "Hypertensive crisis", "Systolic pressure 180 mmHg or higher."),
    ],
};

/// AHA/ACC 2017 diastolic bands (mmHg); there is no diastolic "elevated" band
pub static BP_DIASTOLIC: ThresholdTable = ThresholdTable {
    id: "bp-diastolic",
    title: "Diastolic Blood Pressure",
    unit: "mmHg",
    source: "2017 ACC/AHA High Blood Pressure Guideline",
    bands: &[
        Band::below("Normal", "Diastolic pressure below 80 mmHg."),
        Band::new(80.0, "Hypertension stage 1", "Diastolic pressure 80-89 mmHg."),
        Band::new(90.0, "Hypertension stage 2", "Diastolic pressure 90 mmHg or higher."),
        Band::new(120.0, "Hypertensive crisis", "Diastolic pressure 120 mmHg or higher."),
    ],
};

/// Combined AHA category over the stage number (0 = normal ... 4 = crisis)
pub static BP_STAGE: ThresholdTable = ThresholdTable {
    id: "bp-stage",
    title: "Blood Pressure Category",
    unit: "stage",
    source: "2017 ACC/AHA High Blood Pressure Guideline",
    bands: &[
        Band::below("Normal", "Maintain a heart-healthy lifestyle."),
        Band::new(1.0, "Elevated", "Lifestyle changes are recommended to prevent hypertension."),
        Band::new(2.0, "Hypertension stage 1", "Lifestyle changes; medication may be considered based on overall risk."),
        Band::new(3.0, "Hypertension stage 2", "Lifestyle changes and blood pressure medication are usually recommended."),
        Band::new(4.0, "Hypertensive crisis", "Recheck in 5 minutes; with symptoms, call emergency services."),
    ],
};

/// NCEP ATP III LDL cholesterol (mg/dL)
pub static LDL_CHOLESTEROL: ThresholdTable = ThresholdTable {
    id: "ldl-cholesterol",
    title: "LDL Cholesterol",
    unit: "mg/dL",
    source: "NCEP Adult Treatment Panel III (2002)",
    bands: &[
        Band::below("Optimal", "LDL is at the recommended level."),
        Band::new(100.0, "Near optimal", "Slightly above optimal."),
        Band::new(130.0, "Borderline high", "Lifestyle changes are recommended."),
        Band::new(160.0, "High", "Increased cardiovascular risk; discuss treatment."),
        Band::new(190.0, "Very high", "Substantially increased risk; treatment is usually indicated."),
    ],
};

/// ACE body fat categories, men (%)
pub static BODY_FAT_MALE: ThresholdTable = ThresholdTable {
    id: "body-fat-male",
    title: "Body Fat (men)",
    unit: "%",
    source: "American Council on Exercise body fat categories",
    bands: &[
        Band::below("Below essential", "Below the fat needed for basic physiological function."),
        Band::new(2.0, "Essential fat", "Minimum fat for normal function."),
        Band::new(6.0, "Athletes", "Typical of competitive athletes."),
        Band::new(14.0, "Fitness", "Typical of fit, active adults."),
        Band::new(18.0, "Average", "Typical of the general population."),
        Band::new(25.0, "Obese", "Excess body fat; increased health risk."),
    ],
};

/// ACE body fat categories, women (%)
pub static BODY_FAT_FEMALE: ThresholdTable = ThresholdTable {
    id: "body-fat-female",
    title: "Body Fat (women)",
    unit: "%",
    source: "American Council on Exercise body fat categories",
    bands: &[
        Band::below("Below essential", "Below the fat needed for basic physiological function."),
        Band::new(10.0, "Essential fat", "Minimum fat for normal function."),
        Band::new(14.0, "Athletes", "Typical of competitive athletes."),
        Band::new(21.0, "Fitness", "Typical of fit, active adults."),
        Band::new(25.0, "Average", "Typical of the general population."),
        Band::new(32.0, "Obese", "Excess body fat; increased health risk."),
    ],
};

/// Training zone by percentage of heart rate reserve
pub static HEART_RATE_INTENSITY: ThresholdTable = ThresholdTable {
    id: "heart-rate-intensity",
    title: "Training Intensity",
    unit: "% HRR",
    source: "ACSM Guidelines for Exercise Testing and Prescription, intensity classification",
    bands: &[
        Band::below("Very light", "Below the intensity that produces training adaptations."),
        Band::new(50.0, "Zone 1 - Warm-up", "Recovery and warm-up effort."),
        Band::new(60.0, "Zone 2 - Fat burn", "Easy aerobic effort; builds base endurance."),
        Band::new(70.0, "Zone 3 - Aerobic", "Moderate effort; improves cardiovascular fitness."),
        Band::new(80.0, "Zone 4 - Threshold", "Hard effort near the anaerobic threshold."),
        Band::new(90.0, "Zone 5 - Maximum", "Maximal effort; sustainable only briefly."),
    ],
};

/// Actual weight as a percentage of ideal body weight
pub static PERCENT_IDEAL_BODY_WEIGHT: ThresholdTable = ThresholdTable {
    id: "percent-ideal-body-weight",
    title: "Percent of Ideal Body Weight",
    unit: "%",
    source: "Clinical dosing convention (AjBW when actual weight >= 120% of IBW)",
    bands: &[
        Band::below("At or below ideal", "Use actual body weight for weight-based dosing."),
        Band::new(100.0, "Above ideal", "Actual weight exceeds ideal; adjusted weight differs only slightly."),
        Band::new(120.0, "Obese (>= 120% of IBW)", "Adjusted body weight is commonly used for dosing."),
    ],
};

/// Every table, for reference listings and partition checks
pub static ALL_TABLES: &[&ThresholdTable] = &[
    &BMI_ADULT,
    &WAIST_TO_HEIGHT,
    &WAIST_TO_HIP_MALE,
    &WAIST_TO_HIP_FEMALE,
    &PONDERAL_ADULT,
    &PONDERAL_CHILD,
    &CREATININE_CLEARANCE,
    &MEAN_ARTERIAL_PRESSURE,
    &BP_SYSTOLIC,
    &BP_DIASTOLIC,
    &BP_STAGE,
    &LDL_CHOLESTEROL,
    &BODY_FAT_MALE,
    &BODY_FAT_FEMALE,
    &HEART_RATE_INTENSITY,
    &PERCENT_IDEAL_BODY_WEIGHT,
];
