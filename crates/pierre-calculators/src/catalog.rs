// ABOUTME: Static calculator catalog and substring search over it
// ABOUTME: Backs the calculator listing and the site search box without any storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_core::models::{CalculatorCategory, CalculatorMetadata};

/// Body Mass Index
pub static BMI: CalculatorMetadata = CalculatorMetadata {
    id: "bmi",
    title: "BMI Calculator",
    description: "Calculate your Body Mass Index from height and weight and see your WHO weight category.",
    href: "/calculators/bmi",
    category: CalculatorCategory::BodyComposition,
    tags: &["weight", "bmi", "obesity"],
    keywords: &["body mass index", "quetelet", "overweight", "underweight"],
};

/// Waist-to-height ratio
pub static WAIST_TO_HEIGHT_RATIO: CalculatorMetadata = CalculatorMetadata {
    id: "waist-to-height-ratio",
    title: "Waist-to-Height Ratio Calculator",
    description: "Check whether your waist is less than half your height, a simple marker of central obesity.",
    href: "/calculators/waist-to-height-ratio",
    category: CalculatorCategory::BodyComposition,
    tags: &["waist", "central obesity", "ratio"],
    keywords: &["whtr", "waist to height", "ashwell", "belly fat"],
};

/// Waist-to-hip ratio
pub static WAIST_TO_HIP_RATIO: CalculatorMetadata = CalculatorMetadata {
    id: "waist-to-hip-ratio",
    title: "Waist-to-Hip Ratio Calculator",
    description: "Measure fat distribution with the WHO waist-to-hip ratio and its sex-specific risk bands.",
    href: "/calculators/waist-to-hip-ratio",
    category: CalculatorCategory::BodyComposition,
    tags: &["waist", "hip", "ratio"],
    keywords: &["whr", "apple shape", "pear shape", "abdominal obesity"],
};

/// Ponderal index
pub static PONDERAL_INDEX: CalculatorMetadata = CalculatorMetadata {
    id: "ponderal-index",
    title: "Ponderal Index Calculator",
    description: "Compute the ponderal (Rohrer's) index for adults or newborns, a height-independent leanness measure.",
    href: "/calculators/ponderal-index",
    category: CalculatorCategory::BodyComposition,
    tags: &["newborn", "leanness", "index"],
    keywords: &["rohrer", "corpulence index", "pi", "fetal growth", "iugr"],
};

/// Body surface area
pub static BODY_SURFACE_AREA: CalculatorMetadata = CalculatorMetadata {
    id: "body-surface-area",
    title: "Body Surface Area Calculator",
    description: "Estimate body surface area with the Mosteller or DuBois formula for dosing and indexing.",
    href: "/calculators/body-surface-area",
    category: CalculatorCategory::Clinical,
    tags: &["bsa", "dosing", "chemotherapy"],
    keywords: &["mosteller", "dubois", "m2"],
};

/// Lean body mass
pub static LEAN_BODY_MASS: CalculatorMetadata = CalculatorMetadata {
    id: "lean-body-mass",
    title: "Lean Body Mass Calculator",
    description: "Estimate fat-free mass from height, weight, and sex with the Boer formula.",
    href: "/calculators/lean-body-mass",
    category: CalculatorCategory::BodyComposition,
    tags: &["lean mass", "muscle", "fat-free mass"],
    keywords: &["lbm", "boer", "ffm"],
};

/// Body fat (US Navy)
pub static BODY_FAT: CalculatorMetadata = CalculatorMetadata {
    id: "body-fat",
    title: "Body Fat Calculator",
    description: "Estimate body fat percentage from tape measurements using the US Navy method.",
    href: "/calculators/body-fat",
    category: CalculatorCategory::BodyComposition,
    tags: &["body fat", "navy", "measurements"],
    keywords: &["bf%", "us navy", "circumference", "ace categories"],
};

/// Ideal body weight
pub static IDEAL_BODY_WEIGHT: CalculatorMetadata = CalculatorMetadata {
    id: "ideal-body-weight",
    title: "Ideal Body Weight Calculator",
    description: "Compare ideal body weight from the Devine, Robinson, Miller, and Hamwi formulas.",
    href: "/calculators/ideal-body-weight",
    category: CalculatorCategory::Clinical,
    tags: &["ideal weight", "ibw", "dosing"],
    keywords: &["devine", "robinson", "miller", "hamwi"],
};

/// Adjusted body weight
pub static ADJUSTED_BODY_WEIGHT: CalculatorMetadata = CalculatorMetadata {
    id: "adjusted-body-weight",
    title: "Adjusted Body Weight Calculator",
    description: "Calculate ideal and adjusted body weight (AjBW) for drug dosing in patients above ideal weight.",
    href: "/calculators/adjusted-body-weight",
    category: CalculatorCategory::Clinical,
    tags: &["dosing", "ajbw", "ibw"],
    keywords: &["adjusted body weight", "devine", "obesity dosing"],
};

/// Creatinine clearance
pub static CREATININE_CLEARANCE: CalculatorMetadata = CalculatorMetadata {
    id: "creatinine-clearance",
    title: "Creatinine Clearance Calculator",
    description: "Estimate kidney function with the Cockcroft-Gault creatinine clearance equation.",
    href: "/calculators/creatinine-clearance",
    category: CalculatorCategory::Clinical,
    tags: &["kidney", "renal", "dosing"],
    keywords: &["crcl", "cockcroft-gault", "gfr", "serum creatinine"],
};

/// Mean arterial pressure
pub static MEAN_ARTERIAL_PRESSURE: CalculatorMetadata = CalculatorMetadata {
    id: "mean-arterial-pressure",
    title: "Mean Arterial Pressure Calculator",
    description: "Calculate mean arterial pressure and pulse pressure from a blood pressure reading.",
    href: "/calculators/mean-arterial-pressure",
    category: CalculatorCategory::Cardiovascular,
    tags: &["blood pressure", "perfusion", "heart"],
    keywords: &["map", "pulse pressure", "systolic", "diastolic"],
};

/// Blood pressure category
pub static BLOOD_PRESSURE: CalculatorMetadata = CalculatorMetadata {
    id: "blood-pressure",
    title: "Blood Pressure Category Calculator",
    description: "Find your 2017 ACC/AHA blood pressure category from systolic and diastolic readings.",
    href: "/calculators/blood-pressure",
    category: CalculatorCategory::Cardiovascular,
    tags: &["blood pressure", "hypertension", "heart"],
    keywords: &["aha", "systolic", "diastolic", "stage 1", "stage 2"],
};

/// LDL cholesterol
pub static LDL_CHOLESTEROL: CalculatorMetadata = CalculatorMetadata {
    id: "ldl-cholesterol",
    title: "LDL Cholesterol Calculator",
    description: "Estimate LDL cholesterol with the Friedewald equation and see your lipid risk category.",
    href: "/calculators/ldl-cholesterol",
    category: CalculatorCategory::Cardiovascular,
    tags: &["cholesterol", "lipids", "heart"],
    keywords: &["ldl", "friedewald", "hdl", "triglycerides", "non-hdl"],
};

/// One-rep max
pub static ONE_REP_MAX: CalculatorMetadata = CalculatorMetadata {
    id: "one-rep-max",
    title: "One-Rep Max Calculator",
    description: "Estimate your one-repetition maximum from a submaximal set and get training loads.",
    href: "/calculators/one-rep-max",
    category: CalculatorCategory::Fitness,
    tags: &["strength", "lifting", "1rm"],
    keywords: &["epley", "brzycki", "lombardi", "one rep max"],
};

/// Target heart rate
pub static TARGET_HEART_RATE: CalculatorMetadata = CalculatorMetadata {
    id: "target-heart-rate",
    title: "Target Heart Rate Calculator",
    description: "Find your training heart rate with the Karvonen heart rate reserve method.",
    href: "/calculators/target-heart-rate",
    category: CalculatorCategory::Fitness,
    tags: &["heart rate", "cardio", "zones"],
    keywords: &["karvonen", "max heart rate", "resting heart rate", "hrr", "tanaka", "fox", "gellish"],
};

/// Basal metabolic rate
pub static BMR: CalculatorMetadata = CalculatorMetadata {
    id: "bmr",
    title: "BMR & TDEE Calculator",
    description: "Estimate basal metabolic rate and total daily energy expenditure by activity level.",
    href: "/calculators/bmr",
    category: CalculatorCategory::Nutrition,
    tags: &["calories", "metabolism", "energy"],
    keywords: &["basal metabolic rate", "tdee", "mifflin-st jeor", "harris-benedict"],
};

fn matches(metadata: &CalculatorMetadata, needle: &str) -> bool {
    let contains = |text: &str| text.to_lowercase().contains(needle);
    contains(metadata.title)
        || contains(metadata.description)
        || contains(metadata.category.slug())
        || contains(metadata.category.label())
        || metadata.tags.iter().any(|tag| contains(tag))
        || metadata.keywords.iter().any(|keyword| contains(keyword))
}

/// Filter catalog entries by case-insensitive substring
///
/// The query is matched against title, description, category, tags, and
/// keywords. A blank query matches everything. When `category` is given only
/// entries in that category are returned.
#[must_use]
pub fn search<'a>(
    entries: impl IntoIterator<Item = &'a CalculatorMetadata>,
    query: &str,
    category: Option<CalculatorCategory>,
) -> Vec<&'a CalculatorMetadata> {
    let needle = query.trim().to_lowercase();
    entries
        .into_iter()
        .filter(|metadata| category.is_none_or(|wanted| metadata.category == wanted))
        .filter(|metadata| needle.is_empty() || matches(metadata, &needle))
        .collect()
}

/// Parse a category slug or its section heading
#[must_use]
pub fn parse_category(value: &str) -> Option<CalculatorCategory> {
    let value = value.trim();
    CalculatorCategory::ALL.into_iter().find(|candidate| {
        candidate.slug().eq_ignore_ascii_case(value) || candidate.label().eq_ignore_ascii_case(value)
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
mod tests {
    use super::*;

    static ENTRIES: [&CalculatorMetadata; 3] = [&BMI, &CREATININE_CLEARANCE, &ONE_REP_MAX];

    #[test]
    fn test_blank_query_returns_all() {
        assert_eq!(search(ENTRIES, "  ", None).len(), 3);
    }

    #[test]
    fn test_matches_keywords_case_insensitively() {
        let hits = search(ENTRIES, "COCKCROFT", None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "creatinine-clearance");
    }

    #[test]
    fn test_category_filter() {
        let hits = search(ENTRIES, "", Some(CalculatorCategory::Fitness));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "one-rep-max");
        assert_eq!(parse_category("Fitness"), Some(CalculatorCategory::Fitness));
        assert_eq!(parse_category("astrology"), None);
    }

    #[test]
    fn test_matches_category_heading() {
        let hits = search(ENTRIES, "body composition", None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "bmi");
        assert_eq!(
            parse_category("Body Composition"),
            Some(CalculatorCategory::BodyComposition)
        );
    }
}
