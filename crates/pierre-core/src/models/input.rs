// ABOUTME: Raw calculator submission model with unit system and categorical selectors
// ABOUTME: Created per request, parsed by the validator, and discarded after evaluation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use crate::units::UnitSystem;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A raw field value as submitted by a form
///
/// Forms post either JSON numbers or the text of an input element, so both are
/// accepted; an empty string or `null` counts as "not supplied".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Field posted as a JSON number
    Number(f64),
    /// Field posted as text
    Text(String),
    /// Field posted as `null`
    Empty,
}

/// Result of interpreting a [`RawValue`] as a number
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedNumber {
    /// Nothing was supplied
    Missing,
    /// A finite number
    Value(f64),
    /// Something was supplied but it is not a finite number
    Malformed,
}

impl RawValue {
    /// Interpret the raw value as a finite number
    #[must_use]
    pub fn parse_number(&self) -> ParsedNumber {
        let value = match self {
            Self::Empty => return ParsedNumber::Missing,
            Self::Number(n) => *n,
            Self::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return ParsedNumber::Missing;
                }
                let Some(normalized) = normalize_decimal_comma(trimmed) else {
                    return ParsedNumber::Malformed;
                };
                match normalized.parse::<f64>() {
                    Ok(n) => n,
                    Err(_) => return ParsedNumber::Malformed,
                }
            }
        };
        if value.is_finite() {
            ParsedNumber::Value(value)
        } else {
            ParsedNumber::Malformed
        }
    }
}

/// Accept `72,5` as a decimal comma; reject anything that may be a grouping separator
///
/// A comma is only read as the decimal point when it is the sole separator in
/// the text and at most two digits follow it, so `1,000` and `1.234,5` are
/// refused rather than misread.
fn normalize_decimal_comma(text: &str) -> Option<String> {
    let Some((whole, fraction)) = text.split_once(',') else {
        return Some(text.to_owned());
    };
    let plain_fraction = !fraction.is_empty()
        && fraction.len() <= 2
        && fraction.chars().all(|c| c.is_ascii_digit());
    if whole.contains('.') || !plain_fraction {
        return None;
    }
    Some(format!("{whole}.{fraction}"))
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// One calculator form submission
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInput {
    /// System the length and mass fields were entered in
    #[serde(default)]
    pub unit_system: UnitSystem,
    /// Named numeric fields
    #[serde(default)]
    pub fields: BTreeMap<String, RawValue>,
    /// Categorical selectors (gender, formula, `user_type`, ...)
    #[serde(default)]
    pub selectors: BTreeMap<String, String>,
}

impl CalculatorInput {
    /// Empty submission in the given unit system
    #[must_use]
    pub fn new(unit_system: UnitSystem) -> Self {
        Self {
            unit_system,
            ..Self::default()
        }
    }

    /// Add a numeric field
    #[must_use]
    pub fn with_number(mut self, name: &str, value: f64) -> Self {
        self.fields.insert(name.to_owned(), RawValue::Number(value));
        self
    }

    /// Add a text field
    #[must_use]
    pub fn with_text(mut self, name: &str, value: &str) -> Self {
        self.fields.insert(name.to_owned(), RawValue::from(value));
        self
    }

    /// Add a selector
    #[must_use]
    pub fn with_selector(mut self, name: &str, value: &str) -> Self {
        self.selectors.insert(name.to_owned(), value.to_owned());
        self
    }

    /// Look up a field
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&RawValue> {
        self.fields.get(name)
    }

    /// Look up a selector, ignoring blank values
    #[must_use]
    pub fn selector(&self, name: &str) -> Option<&str> {
        self.selectors
            .get(name)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }
}

/// Biological sex used by sex-specific formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" | "man" => Ok(Self::Male),
            "female" | "f" | "woman" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown gender: '{other}'. Valid options: male, female"
            ))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_value_parsing() {
        assert_eq!(RawValue::Number(70.0).parse_number(), ParsedNumber::Value(70.0));
        assert_eq!(RawValue::from(" 72,5 ").parse_number(), ParsedNumber::Value(72.5));
        assert_eq!(RawValue::from("").parse_number(), ParsedNumber::Missing);
        assert_eq!(RawValue::Empty.parse_number(), ParsedNumber::Missing);
        assert_eq!(RawValue::from("abc").parse_number(), ParsedNumber::Malformed);
        assert_eq!(RawValue::from("NaN").parse_number(), ParsedNumber::Malformed);
    }

    #[test]
    fn test_grouping_separators_are_malformed() {
        assert_eq!(RawValue::from("1,000").parse_number(), ParsedNumber::Malformed);
        assert_eq!(RawValue::from("1.234,5").parse_number(), ParsedNumber::Malformed);
        assert_eq!(RawValue::from("1,2,3").parse_number(), ParsedNumber::Malformed);
        assert_eq!(RawValue::from("80,").parse_number(), ParsedNumber::Malformed);
        assert_eq!(RawValue::from("1,25").parse_number(), ParsedNumber::Value(1.25));
        assert_eq!(RawValue::from("1234.5").parse_number(), ParsedNumber::Value(1234.5));
    }

    #[test]
    fn test_input_deserializes_mixed_values() {
        let input: CalculatorInput = serde_json::from_str(
            r#"{"unit_system":"imperial","fields":{"weight":154,"height":"69","hip":null},"selectors":{"gender":"female"}}"#,
        )
        .unwrap();
        assert_eq!(input.unit_system, UnitSystem::Imperial);
        assert_eq!(input.field("weight"), Some(&RawValue::Number(154.0)));
        assert_eq!(input.field("hip"), Some(&RawValue::Empty));
        assert_eq!(input.selector("gender"), Some("female"));
    }

    #[test]
    fn test_defaults_to_metric() {
        let input: CalculatorInput = serde_json::from_str(r#"{"fields":{}}"#).unwrap();
        assert_eq!(input.unit_system, UnitSystem::Metric);
        assert!(input.selectors.is_empty());
    }
}
