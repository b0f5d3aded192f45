// ABOUTME: Calculation result model returned by every calculator
// ABOUTME: Named numeric outputs, an optional category, interpretation text, and reference rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::units::{round_to, UnitSystem};
use serde::{Deserialize, Serialize};

/// One named numeric output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultValue {
    /// Stable machine key (e.g. `crcl`)
    pub key: String,
    /// Display label
    pub label: String,
    /// Value rounded to display precision
    pub value: f64,
    /// Unit label, empty for dimensionless values
    pub unit: String,
}

impl ResultValue {
    /// Build a value rounded to `decimals` places
    #[must_use]
    pub fn new(key: &str, label: &str, value: f64, unit: &str, decimals: u32) -> Self {
        Self {
            key: key.to_owned(),
            label: label.to_owned(),
            value: round_to(value, decimals),
            unit: unit.to_owned(),
        }
    }
}

/// The threshold band a result falls into
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Key of the [`ResultValue`] that was classified
    pub basis: String,
    /// Band label (e.g. "Normal")
    pub label: String,
    /// Static interpretive text for the band
    pub description: String,
    /// Position of the band in its table, lowest first
    pub band_index: usize,
    /// Inclusive lower bound, `None` when unbounded below
    pub lower: Option<f64>,
    /// Exclusive upper bound, `None` when unbounded above
    pub upper: Option<f64>,
}

/// A row of a static reference table shown alongside a result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRow {
    /// Row label (e.g. "90%")
    pub label: String,
    /// Row value
    pub value: f64,
    /// Unit of `value`
    pub unit: String,
    /// Optional extra column
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ReferenceRow {
    /// Build a row rounded to `decimals` places
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64, unit: &str, decimals: u32) -> Self {
        Self {
            label: label.into(),
            value: round_to(value, decimals),
            unit: unit.to_owned(),
            detail: None,
        }
    }

    /// Attach the extra column
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Output of one calculator evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Calculator id
    pub calculator: String,
    /// Unit system the display values are expressed in
    pub unit_system: UnitSystem,
    /// Numeric outputs, primary value first
    pub values: Vec<ResultValue>,
    /// Category of the primary value, if the calculator classifies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// Free-text interpretation
    pub interpretation: String,
    /// Reference rows (zones, percentage tables)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reference: Vec<ReferenceRow>,
    /// Method notes (formula used, fallbacks taken)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl CalculationResult {
    /// Start a result for `calculator`
    #[must_use]
    pub fn new(calculator: &str, unit_system: UnitSystem) -> Self {
        Self {
            calculator: calculator.to_owned(),
            unit_system,
            values: Vec::new(),
            category: None,
            interpretation: String::new(),
            reference: Vec::new(),
            notes: Vec::new(),
        }
    }

    /// Append a numeric output
    #[must_use]
    pub fn value(mut self, value: ResultValue) -> Self {
        self.values.push(value);
        self
    }

    /// Set the category
    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Set the interpretation text
    #[must_use]
    pub fn interpretation(mut self, text: impl Into<String>) -> Self {
        self.interpretation = text.into();
        self
    }

    /// Append a reference row
    #[must_use]
    pub fn reference_row(mut self, row: ReferenceRow) -> Self {
        self.reference.push(row);
        self
    }

    /// Append a method note
    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Look up an output by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.iter().find(|v| v.key == key).map(|v| v.value)
    }

    /// Primary output (the first one)
    #[must_use]
    pub fn primary(&self) -> Option<&ResultValue> {
        self.values.first()
    }
}
