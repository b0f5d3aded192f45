// ABOUTME: Input validation and unit normalization for calculator submissions
// ABOUTME: Collects field-level and cross-field errors, converts accepted values to canonical units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Input validation
//!
//! Every calculator declares its numeric fields as [`NumericField`]s with a
//! plausible range in canonical units. [`InputReader`] parses the raw
//! submission against those declarations, converts imperial values to metric,
//! and records every problem it finds so the caller can report them together.

use pierre_core::errors::{AppError, ErrorCode, ValidationReport};
use pierre_core::models::{CalculatorInput, ParsedNumber, RawValue};
use pierre_core::units::{round_to, Quantity, UnitSystem};
use std::str::FromStr;

/// Declaration of one numeric input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericField {
    /// Field name in the submission
    pub name: &'static str,
    /// Label used in messages
    pub label: &'static str,
    /// Dimension, decides unit conversion
    pub quantity: Quantity,
    /// Inclusive lower bound in canonical units
    pub min: f64,
    /// Inclusive upper bound in canonical units
    pub max: f64,
}

impl NumericField {
    /// Declare a field
    #[must_use]
    pub const fn new(
        name: &'static str,
        label: &'static str,
        quantity: Quantity,
        min: f64,
        max: f64,
    ) -> Self {
        Self {
            name,
            label,
            quantity,
            min,
            max,
        }
    }

    /// Whether a canonical value lies within the declared range
    #[must_use]
    pub fn accepts(&self, canonical: f64) -> bool {
        (self.min..=self.max).contains(&canonical)
    }

    fn range_message(&self, system: UnitSystem) -> String {
        let min = round_to(self.quantity.from_canonical(self.min, system), 1);
        let max = round_to(self.quantity.from_canonical(self.max, system), 1);
        let unit = self.quantity.unit_label(system);
        if unit.is_empty() {
            format!("{} must be between {min} and {max}", self.label)
        } else {
            format!("{} must be between {min} and {max} {unit}", self.label)
        }
    }
}

/// Reads one submission, accumulating a [`ValidationReport`]
#[derive(Debug)]
pub struct InputReader<'a> {
    input: &'a CalculatorInput,
    report: ValidationReport,
}

impl<'a> InputReader<'a> {
    /// Start reading `input`
    #[must_use]
    pub const fn new(input: &'a CalculatorInput) -> Self {
        Self {
            input,
            report: ValidationReport::new(),
        }
    }

    /// Unit system of the submission
    #[must_use]
    pub const fn unit_system(&self) -> UnitSystem {
        self.input.unit_system
    }

    /// Read a field that must be present
    ///
    /// Returns the canonical value, or `None` after recording why it was rejected.
    pub fn required(&mut self, field: &NumericField) -> Option<f64> {
        let parsed = self
            .input
            .field(field.name)
            .map_or(ParsedNumber::Missing, RawValue::parse_number);
        if parsed == ParsedNumber::Missing {
            self.report.field(
                field.name,
                ErrorCode::MissingRequiredField,
                format!("{} is required", field.label),
            );
            return None;
        }
        self.accept(field, parsed)
    }

    /// Read a field that may be left blank
    ///
    /// Returns `None` both when the field is blank and when it was rejected;
    /// use [`InputReader::is_supplied`] to tell the two apart.
    pub fn optional(&mut self, field: &NumericField) -> Option<f64> {
        let parsed = self
            .input
            .field(field.name)
            .map_or(ParsedNumber::Missing, RawValue::parse_number);
        if parsed == ParsedNumber::Missing {
            return None;
        }
        self.accept(field, parsed)
    }

    /// Read a required field that must be a whole number
    pub fn required_whole(&mut self, field: &NumericField) -> Option<f64> {
        let value = self.required(field)?;
        if value.fract() == 0.0 {
            Some(value)
        } else {
            self.report.field(
                field.name,
                ErrorCode::InvalidFormat,
                format!("{} must be a whole number", field.label),
            );
            None
        }
    }

    /// Whether a field carries any non-blank value
    #[must_use]
    pub fn is_supplied(&self, name: &str) -> bool {
        self.input
            .field(name)
            .is_some_and(|raw| raw.parse_number() != ParsedNumber::Missing)
    }

    fn accept(&mut self, field: &NumericField, parsed: ParsedNumber) -> Option<f64> {
        let ParsedNumber::Value(raw) = parsed else {
            self.report.field(
                field.name,
                ErrorCode::InvalidFormat,
                format!("{} must be a number", field.label),
            );
            return None;
        };
        let canonical = field.quantity.to_canonical(raw, self.unit_system());
        if field.accepts(canonical) {
            Some(canonical)
        } else {
            let message = field.range_message(self.unit_system());
            self.report
                .field(field.name, ErrorCode::ValueOutOfRange, message);
            None
        }
    }

    /// Read a selector that must be present
    pub fn selector<T>(&mut self, name: &str, label: &str) -> Option<T>
    where
        T: FromStr<Err = AppError>,
    {
        let Some(raw) = self.input.selector(name) else {
            self.report.field(
                name,
                ErrorCode::MissingRequiredField,
                format!("{label} is required"),
            );
            return None;
        };
        self.parse_selector(name, raw)
    }

    /// Read a selector, falling back to `default` when absent
    pub fn selector_or<T>(&mut self, name: &str, default: T) -> Option<T>
    where
        T: FromStr<Err = AppError>,
    {
        match self.input.selector(name) {
            Some(raw) => self.parse_selector(name, raw),
            None => Some(default),
        }
    }

    /// Read a selector that may be omitted
    pub fn optional_selector<T>(&mut self, name: &str) -> Option<T>
    where
        T: FromStr<Err = AppError>,
    {
        let raw = self.input.selector(name)?;
        self.parse_selector(name, raw)
    }

    fn parse_selector<T>(&mut self, name: &str, raw: &str) -> Option<T>
    where
        T: FromStr<Err = AppError>,
    {
        match raw.parse::<T>() {
            Ok(value) => Some(value),
            Err(error) => {
                self.report
                    .field(name, ErrorCode::InvalidFormat, error.message);
                None
            }
        }
    }

    /// Record a cross-field constraint; `message` is reported when `holds` is false
    pub fn require(&mut self, holds: bool, message: &str) {
        if !holds {
            self.report.form(message);
        }
    }

    /// Record an error against a specific field
    pub fn reject(&mut self, field: &str, code: ErrorCode, message: impl Into<String>) {
        self.report.field(field, code, message);
    }

    /// Finish reading
    ///
    /// # Errors
    ///
    /// Returns the accumulated report when anything was rejected
    pub fn finish(self) -> Result<(), AppError> {
        self.report.into_result()
    }

    /// Convert the accumulated report into an error
    ///
    /// Used when a required value is absent; a `None` from the reader always
    /// has a matching entry in the report.
    #[must_use]
    pub fn into_error(self) -> AppError {
        if self.report.is_empty() {
            AppError::internal("Calculator input was incomplete without a recorded reason")
        } else {
            self.report.into()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
mod tests {
    use super::*;
    use pierre_core::models::Gender;

    const HEIGHT: NumericField = NumericField::new("height", "Height", Quantity::Length, 50.0, 250.0);
    const AGE: NumericField = NumericField::new("age", "Age", Quantity::Fixed("years"), 0.0, 120.0);

    #[test]
    fn test_required_converts_imperial() {
        let input = CalculatorInput::new(UnitSystem::Imperial).with_number("height", 70.0);
        let mut reader = InputReader::new(&input);
        let height = reader.required(&HEIGHT).unwrap();
        assert!((height - 177.8).abs() < 1e-9);
        assert!(reader.finish().is_ok());
    }

    #[test]
    fn test_collects_every_problem() {
        let input = CalculatorInput::new(UnitSystem::Metric)
            .with_text("height", "tall")
            .with_number("age", 130.0);
        let mut reader = InputReader::new(&input);
        assert!(reader.required(&HEIGHT).is_none());
        assert!(reader.required(&AGE).is_none());
        let gender: Option<Gender> = reader.selector("gender", "Gender");
        assert!(gender.is_none());
        let error = reader.finish().unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert_eq!(error.details["fields"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_range_message_uses_submitted_units() {
        let input = CalculatorInput::new(UnitSystem::Imperial).with_number("height", 5.0);
        let mut reader = InputReader::new(&input);
        assert!(reader.required(&HEIGHT).is_none());
        let error = reader.finish().unwrap_err();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert_eq!(error.message, "Height must be between 19.7 and 98.4 in");
    }

    #[test]
    fn test_optional_blank_is_not_an_error() {
        let input = CalculatorInput::new(UnitSystem::Metric).with_text("height", "  ");
        let mut reader = InputReader::new(&input);
        assert!(reader.optional(&HEIGHT).is_none());
        assert!(!reader.is_supplied("height"));
        assert!(reader.finish().is_ok());
    }

    #[test]
    fn test_cross_field_is_form_level() {
        let input = CalculatorInput::default();
        let mut reader = InputReader::new(&input);
        reader.require(false, "Systolic pressure must be greater than diastolic pressure");
        let error = reader.finish().unwrap_err();
        assert_eq!(error.code, ErrorCode::ConstraintViolation);
    }

    #[test]
    fn test_selector_default_and_invalid() {
        let input = CalculatorInput::default().with_selector("gender", "other");
        let mut reader = InputReader::new(&input);
        assert_eq!(reader.selector_or("unit", UnitSystem::Metric), Some(UnitSystem::Metric));
        let gender: Option<Gender> = reader.selector_or("gender", Gender::Male);
        assert!(gender.is_none());
        assert_eq!(reader.finish().unwrap_err().code, ErrorCode::InvalidFormat);
    }
}
