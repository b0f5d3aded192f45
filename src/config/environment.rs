// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses HTTP, CORS, and email delivery settings from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment

use anyhow::{anyhow, Context, Result};
use pierre_core::constants::{contact, ports};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::time::Duration;
use tracing::{info, warn};

/// Default request timeout applied by the HTTP layer
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Environment type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Public deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HttpConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Allowed CORS origins; `["*"]` allows any
    pub cors_origins: Vec<String>,
}

impl HttpConfig {
    /// Request timeout as a `Duration`
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Whether any origin is allowed
    #[must_use]
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|origin| origin == "*")
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_owned(),
            port: ports::DEFAULT_HTTP_PORT,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            cors_origins: vec!["*".to_owned()],
        }
    }
}

/// Transactional email configuration for the contact form
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailConfig {
    /// Provider API key; delivery is disabled without it
    pub api_key: Option<String>,
    /// Provider API base URL
    pub base_url: String,
    /// Sender address
    pub from: String,
    /// Recipient address
    pub to: String,
}

impl EmailConfig {
    /// Whether delivery can be attempted
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

// Keeps the API key out of logs
impl fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("from", &self.from)
            .field("to", &self.to)
            .finish()
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: contact::DEFAULT_EMAIL_API_BASE_URL.to_owned(),
            from: contact::DEFAULT_FROM_EMAIL.to_owned(),
            to: contact::DEFAULT_TO_EMAIL.to_owned(),
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Deployment environment
    pub environment: Environment,
    /// HTTP listener
    pub http: HttpConfig,
    /// Contact form email delivery
    pub email: EmailConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but malformed, or if the
    /// resulting configuration fails validation
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            environment: Environment::from_str_or_default(&env_var_or("ENVIRONMENT", "development")),
            http: HttpConfig {
                host: env_var_or("HTTP_HOST", "0.0.0.0"),
                port: env_var_or("HTTP_PORT", &ports::DEFAULT_HTTP_PORT.to_string())
                    .parse()
                    .context("Invalid HTTP_PORT value")?,
                request_timeout_secs: env_var_or(
                    "REQUEST_TIMEOUT_SECS",
                    &DEFAULT_REQUEST_TIMEOUT_SECS.to_string(),
                )
                .parse()
                .context("Invalid REQUEST_TIMEOUT_SECS value")?,
                cors_origins: parse_origins(&env_var_or("CORS_ALLOWED_ORIGINS", "*")),
            },
            email: EmailConfig {
                api_key: env::var("RESEND_API_KEY")
                    .ok()
                    .filter(|key| !key.trim().is_empty()),
                base_url: env_var_or("EMAIL_API_BASE_URL", contact::DEFAULT_EMAIL_API_BASE_URL),
                from: env_var_or("CONTACT_FROM_EMAIL", contact::DEFAULT_FROM_EMAIL),
                to: env_var_or("CONTACT_TO_EMAIL", contact::DEFAULT_TO_EMAIL),
            },
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error for a zero timeout, an empty origin list, or email
    /// addresses without an `@`
    pub fn validate(&self) -> Result<()> {
        if self.http.request_timeout_secs == 0 {
            return Err(anyhow!("REQUEST_TIMEOUT_SECS must be greater than zero"));
        }
        if self.http.cors_origins.is_empty() {
            return Err(anyhow!("CORS_ALLOWED_ORIGINS must list at least one origin or '*'"));
        }
        for (name, address) in [("CONTACT_FROM_EMAIL", &self.email.from), ("CONTACT_TO_EMAIL", &self.email.to)] {
            if !address.contains('@') {
                return Err(anyhow!("{name} is not an email address: {address}"));
            }
        }
        if !self.email.is_configured() {
            warn!("RESEND_API_KEY is not set; contact form submissions will fail");
        }
        if self.environment.is_production() && self.http.allows_any_origin() {
            warn!("CORS allows any origin in production");
        }
        Ok(())
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Pierre Health Server Configuration:\n\
             - Environment: {}\n\
             - HTTP: {}:{}\n\
             - Request timeout: {}s\n\
             - CORS origins: {}\n\
             - Contact email: {}",
            self.environment,
            self.http.host,
            self.http.port,
            self.http.request_timeout_secs,
            self.http.cors_origins.join(", "),
            if self.email.is_configured() {
                "Enabled"
            } else {
                "Disabled"
            },
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str.trim() == "*" {
        vec!["*".to_owned()]
    } else {
        origins_str
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
