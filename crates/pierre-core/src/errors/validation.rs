// ABOUTME: Collected validation failures for a single calculator submission
// ABOUTME: Separates field-level messages from form-level (cross-field) messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A message attached to one input field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Field name as submitted
    pub field: String,
    /// Failure category
    pub code: ErrorCode,
    /// User-facing message
    pub message: String,
}

/// Every problem found in one submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Errors tied to a specific field
    pub fields: Vec<FieldError>,
    /// Errors that concern the form as a whole
    pub form: Vec<String>,
}

impl ValidationReport {
    /// Empty report
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fields: Vec::new(),
            form: Vec::new(),
        }
    }

    /// Record a field-level error
    pub fn field(&mut self, field: &str, code: ErrorCode, message: impl Into<String>) {
        self.fields.push(FieldError {
            field: field.to_owned(),
            code,
            message: message.into(),
        });
    }

    /// Record a form-level error
    pub fn form(&mut self, message: impl Into<String>) {
        self.form.push(message.into());
    }

    /// True when nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.form.is_empty()
    }

    /// `Ok(())` when empty, the report as an [`AppError`] otherwise
    ///
    /// # Errors
    ///
    /// Returns the collected report when at least one error was recorded
    pub fn into_result(self) -> Result<(), AppError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self.into())
        }
    }
}

impl From<ValidationReport> for AppError {
    fn from(report: ValidationReport) -> Self {
        let code = match (report.fields.as_slice(), report.form.is_empty()) {
            ([], false) => ErrorCode::ConstraintViolation,
            ([only], true) => only.code,
            _ => ErrorCode::InvalidInput,
        };
        let message = match (report.fields.first(), report.form.first()) {
            (Some(first), _) if report.fields.len() + report.form.len() == 1 => {
                first.message.clone()
            }
            (None, Some(first)) if report.form.len() == 1 => first.clone(),
            _ => format!(
                "{} problems found in the submitted values",
                report.fields.len() + report.form.len()
            ),
        };
        let details = serde_json::to_value(&report).unwrap_or(Value::Null);
        Self::new(code, message).with_details(details)
    }
}
