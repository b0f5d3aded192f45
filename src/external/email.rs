// ABOUTME: Transactional email delivery used by the contact form
// ABOUTME: EmailSender trait with a Resend HTTP implementation and a disabled fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Email delivery
//!
//! One outbound request per message. Failures are returned to the caller as
//! `EXTERNAL_SERVICE_ERROR`; nothing is retried.

use crate::config::EmailConfig;
use crate::errors::{AppError, AppResult};
use crate::utils::http_client::shared_client;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const RESEND: &str = "Resend";

/// A fully rendered message ready for hand-off
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OutboundEmail {
    /// Sender address
    pub from: String,
    /// Recipients
    pub to: Vec<String>,
    /// Address replies go to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    /// Subject line
    pub subject: String,
    /// HTML body
    pub html: String,
    /// Plain-text body
    pub text: String,
}

/// Provider acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeliveryReceipt {
    /// Provider message id
    pub id: String,
}

/// Anything that can deliver an [`OutboundEmail`]
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Provider name for logs
    fn provider(&self) -> &'static str;

    /// Deliver one message
    ///
    /// # Errors
    ///
    /// Returns an external service error when the provider rejects the message
    /// or cannot be reached, and a configuration error when delivery is disabled.
    async fn send(&self, email: &OutboundEmail) -> AppResult<DeliveryReceipt>;
}

/// Resend REST API client
#[derive(Clone)]
pub struct ResendEmailSender {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Deserialize)]
struct ResendErrorBody {
    message: Option<String>,
}

impl ResendEmailSender {
    /// Create a client against `base_url` using the shared HTTP client
    #[must_use]
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self::with_client(shared_client().clone(), base_url, api_key)
    }

    /// Create a client against `base_url` with a caller-supplied HTTP client
    #[must_use]
    pub fn with_client(client: Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key: api_key.to_owned(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/emails", self.base_url)
    }
}

#[async_trait]
impl EmailSender for ResendEmailSender {
    fn provider(&self) -> &'static str {
        RESEND
    }

    async fn send(&self, email: &OutboundEmail) -> AppResult<DeliveryReceipt> {
        debug!(recipients = email.to.len(), "Sending email via Resend");

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await
            .map_err(|e| {
                if e.is_builder() {
                    AppError::config(format!("Invalid email API URL '{}': {e}", self.base_url))
                } else if e.is_timeout() || e.is_connect() {
                    AppError::external_unavailable(RESEND, e.to_string())
                } else {
                    AppError::external_service(RESEND, e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let reason = serde_json::from_str::<ResendErrorBody>(&body)
                .ok()
                .and_then(|parsed| parsed.message)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_owned());
            warn!(status = status.as_u16(), "Resend rejected the message");
            return Err(AppError::external_service(
                RESEND,
                format!("API returned {}: {reason}", status.as_u16()),
            )
            .with_details(serde_json::json!({ "upstream_status": status.as_u16() })));
        }

        response
            .json::<DeliveryReceipt>()
            .await
            .map_err(|e| AppError::external_service(RESEND, format!("JSON parse error: {e}")))
    }
}

/// Sender used when no API key is configured
pub struct UnconfiguredEmailSender;

#[async_trait]
impl EmailSender for UnconfiguredEmailSender {
    fn provider(&self) -> &'static str {
        "unconfigured"
    }

    async fn send(&self, _email: &OutboundEmail) -> AppResult<DeliveryReceipt> {
        Err(AppError::config_missing(
            "Email delivery is not configured (RESEND_API_KEY is not set)",
        ))
    }
}

/// Build the sender matching `config`
#[must_use]
pub fn sender_from_config(config: &EmailConfig) -> Box<dyn EmailSender> {
    match &config.api_key {
        Some(api_key) => Box::new(ResendEmailSender::new(&config.base_url, api_key)),
        None => Box::new(UnconfiguredEmailSender),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let sender = ResendEmailSender::new("https://api.resend.com/", "re_test");
        assert_eq!(sender.endpoint(), "https://api.resend.com/emails");
    }

    #[test]
    fn test_sender_selection() {
        let mut config = EmailConfig::default();
        assert_eq!(sender_from_config(&config).provider(), "unconfigured");
        config.api_key = Some("re_test".to_owned());
        assert_eq!(sender_from_config(&config).provider(), "Resend");
    }

    #[tokio::test]
    async fn test_unconfigured_sender_fails() {
        let email = OutboundEmail {
            from: "a@b.c".to_owned(),
            to: vec!["d@e.f".to_owned()],
            reply_to: None,
            subject: "s".to_owned(),
            html: String::new(),
            text: String::new(),
        };
        let error = UnconfiguredEmailSender.send(&email).await.unwrap_err();
        assert_eq!(error.code, ErrorCode::ConfigMissing);
    }
}
