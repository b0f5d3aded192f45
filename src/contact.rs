// ABOUTME: Contact form validation, email rendering, and delivery
// ABOUTME: Submissions are forwarded to the site owner and never stored
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Contact Form
//!
//! A submission is validated field by field, rendered into an HTML and a
//! plain-text body, and handed to the configured [`EmailSender`] in a single
//! request. Every user-supplied string is HTML-escaped before it is placed in
//! the HTML body.

use crate::config::EmailConfig;
use crate::errors::{AppError, AppResult, ErrorCode, ValidationReport};
use crate::external::email::{DeliveryReceipt, EmailSender, OutboundEmail};
use crate::logging::AppLogger;
use html_escape::encode_text;
use pierre_core::constants::contact::{
    MAX_MESSAGE_LENGTH, MAX_NAME_LENGTH, MAX_SHORT_FIELD_LENGTH, MAX_SUBJECT_LENGTH,
    MIN_MESSAGE_LENGTH,
};
use regex::Regex;
use serde::Deserialize;
use std::fmt::Write;
use std::sync::{Arc, LazyLock};
use tracing::info;

const DEFAULT_SUBJECT: &str = "New contact form submission";

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

fn is_valid_email(address: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(address))
}

/// Raw contact form payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactSubmission {
    /// Sender name
    pub name: Option<String>,
    /// Sender email, used as reply-to
    pub email: Option<String>,
    /// Optional subject line
    pub subject: Option<String>,
    /// Optional phone number
    pub phone: Option<String>,
    /// Optional country
    pub country: Option<String>,
    /// Message body
    pub message: Option<String>,
}

/// A submission that passed validation, with blank optionals removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    /// Sender name
    pub name: String,
    /// Sender email
    pub email: String,
    /// Subject line
    pub subject: Option<String>,
    /// Phone number
    pub phone: Option<String>,
    /// Country
    pub country: Option<String>,
    /// Message body
    pub message: String,
}

fn trimmed(value: Option<&String>) -> Option<String> {
    value
        .map(|text| text.trim())
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
}

fn check_length(
    report: &mut ValidationReport,
    field: &str,
    label: &str,
    value: Option<&String>,
    max: usize,
) {
    if value.is_some_and(|text| text.chars().count() > max) {
        report.field(
            field,
            ErrorCode::ValueOutOfRange,
            format!("{label} must be at most {max} characters"),
        );
    }
}

impl ContactSubmission {
    /// Validate every field and collect the problems
    ///
    /// # Errors
    ///
    /// Returns a validation error listing each offending field
    pub fn validate(&self) -> AppResult<ContactMessage> {
        let mut report = ValidationReport::new();

        let name = trimmed(self.name.as_ref());
        if name.is_none() {
            report.field("name", ErrorCode::MissingRequiredField, "Name is required");
        }
        check_length(&mut report, "name", "Name", name.as_ref(), MAX_NAME_LENGTH);

        let email = trimmed(self.email.as_ref());
        match &email {
            None => report.field("email", ErrorCode::MissingRequiredField, "Email is required"),
            Some(address) if !is_valid_email(address) => report.field(
                "email",
                ErrorCode::InvalidFormat,
                "Please enter a valid email address",
            ),
            Some(_) => {}
        }

        let subject = trimmed(self.subject.as_ref());
        check_length(&mut report, "subject", "Subject", subject.as_ref(), MAX_SUBJECT_LENGTH);
        let phone = trimmed(self.phone.as_ref());
        check_length(&mut report, "phone", "Phone", phone.as_ref(), MAX_SHORT_FIELD_LENGTH);
        let country = trimmed(self.country.as_ref());
        check_length(&mut report, "country", "Country", country.as_ref(), MAX_SHORT_FIELD_LENGTH);

        let message = trimmed(self.message.as_ref());
        match message.as_ref().map(|text| text.chars().count()) {
            None => report.field("message", ErrorCode::MissingRequiredField, "Message is required"),
            Some(length) if length < MIN_MESSAGE_LENGTH => report.field(
                "message",
                ErrorCode::ValueOutOfRange,
                format!("Message must be at least {MIN_MESSAGE_LENGTH} characters"),
            ),
            Some(length) if length > MAX_MESSAGE_LENGTH => report.field(
                "message",
                ErrorCode::ValueOutOfRange,
                format!("Message must be at most {MAX_MESSAGE_LENGTH} characters"),
            ),
            Some(_) => {}
        }

        report.into_result()?;
        match (name, email, message) {
            (Some(name), Some(email), Some(message)) => Ok(ContactMessage {
                name,
                email,
                subject,
                phone,
                country,
                message,
            }),
            _ => Err(AppError::internal("validated submission is incomplete")),
        }
    }
}

impl ContactMessage {
    fn subject_line(&self) -> String {
        self.subject.as_deref().map_or_else(
            || format!("{DEFAULT_SUBJECT} from {}", self.name),
            |subject| format!("[Contact] {subject}"),
        )
    }

    fn rows(&self) -> Vec<(&'static str, &str)> {
        let mut rows = vec![("Name", self.name.as_str()), ("Email", self.email.as_str())];
        if let Some(subject) = &self.subject {
            rows.push(("Subject", subject.as_str()));
        }
        if let Some(phone) = &self.phone {
            rows.push(("Phone", phone.as_str()));
        }
        if let Some(country) = &self.country {
            rows.push(("Country", country.as_str()));
        }
        rows
    }

    /// HTML body with every user-supplied value escaped
    #[must_use]
    pub fn render_html(&self) -> String {
        let mut html = String::from("<h2>New contact form submission</h2>\n<table>\n");
        for (label, value) in self.rows() {
            let _ = writeln!(
                html,
                "<tr><td><strong>{label}</strong></td><td>{}</td></tr>",
                encode_text(value)
            );
        }
        html.push_str("</table>\n<h3>Message</h3>\n<p>");
        html.push_str(&encode_text(&self.message).replace('\n', "<br>"));
        html.push_str("</p>\n");
        html
    }

    /// Plain-text alternative body
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut text = String::new();
        for (label, value) in self.rows() {
            let _ = writeln!(text, "{label}: {value}");
        }
        let _ = write!(text, "\n{}\n", self.message);
        text
    }

    /// Full message addressed from `from` to `to`, replying to the sender
    #[must_use]
    pub fn to_email(&self, from: &str, to: &str) -> OutboundEmail {
        OutboundEmail {
            from: from.to_owned(),
            to: vec![to.to_owned()],
            reply_to: Some(self.email.clone()),
            subject: self.subject_line(),
            html: self.render_html(),
            text: self.render_text(),
        }
    }
}

/// Validates and forwards contact submissions
#[derive(Clone)]
pub struct ContactService {
    sender: Arc<dyn EmailSender>,
    from: String,
    to: String,
}

impl ContactService {
    /// Create a service delivering through `sender` with addresses from `config`
    #[must_use]
    pub fn new(sender: Arc<dyn EmailSender>, config: &EmailConfig) -> Self {
        Self {
            sender,
            from: config.from.clone(),
            to: config.to.clone(),
        }
    }

    /// Validate, render, and send one submission
    ///
    /// # Errors
    ///
    /// Returns a validation error for a bad payload, and the sender's error
    /// when delivery fails. Delivery is attempted once.
    pub async fn submit(&self, submission: &ContactSubmission) -> AppResult<DeliveryReceipt> {
        let message = submission.validate()?;
        let email = message.to_email(&self.from, &self.to);
        info!(provider = self.sender.provider(), "Forwarding contact submission");

        let result = self.sender.send(&email).await;
        AppLogger::log_contact_delivery(
            self.sender.provider(),
            result.is_ok(),
            result.as_ref().ok().map(|receipt| receipt.id.as_str()),
        );
        result
    }
}
