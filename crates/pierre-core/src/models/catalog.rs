// ABOUTME: Calculator catalog metadata used for listing and site search
// ABOUTME: Static, build-time records describing each calculator page
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use std::fmt;

/// Section of the site a calculator is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalculatorCategory {
    /// Weight, size, and body-composition indices
    BodyComposition,
    /// Blood pressure, lipids, and heart
    Cardiovascular,
    /// Kidney function and dosing weights
    Clinical,
    /// Training and exercise
    Fitness,
    /// Energy expenditure
    Nutrition,
}

impl CalculatorCategory {
    /// Every category, in listing order
    pub const ALL: [Self; 5] = [
        Self::BodyComposition,
        Self::Cardiovascular,
        Self::Clinical,
        Self::Fitness,
        Self::Nutrition,
    ];

    /// Slug used in URLs and search
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::BodyComposition => "body-composition",
            Self::Cardiovascular => "cardiovascular",
            Self::Clinical => "clinical",
            Self::Fitness => "fitness",
            Self::Nutrition => "nutrition",
        }
    }

    /// Section heading shown on the site
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BodyComposition => "Body Composition",
            Self::Cardiovascular => "Cardiovascular",
            Self::Clinical => "Clinical",
            Self::Fitness => "Fitness",
            Self::Nutrition => "Nutrition",
        }
    }
}

impl fmt::Display for CalculatorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Catalog entry for one calculator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculatorMetadata {
    /// Calculator id, also the API path segment
    pub id: &'static str,
    /// Page title
    pub title: &'static str,
    /// One-sentence description
    pub description: &'static str,
    /// Page route
    pub href: &'static str,
    /// Listing section
    pub category: CalculatorCategory,
    /// Short tags
    pub tags: &'static [&'static str],
    /// Extra search keywords (abbreviations, formula names)
    pub keywords: &'static [&'static str],
}
