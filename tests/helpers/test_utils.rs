// ABOUTME: Server fixtures for route tests with a scripted email sender
// ABOUTME: Builds a full router without network access or environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use pierre_health_server::{
    config::ServerConfig,
    errors::{AppError, AppResult},
    external::email::{DeliveryReceipt, EmailSender, OutboundEmail},
    server::{build_router, ServerResources},
};

/// How the scripted sender answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SenderBehavior {
    /// Accept every message
    Accept,
    /// Reject every message as the provider would
    Reject,
}

/// Email sender that records messages instead of sending them
pub struct ScriptedEmailSender {
    behavior: SenderBehavior,
    sent: Mutex<Vec<OutboundEmail>>,
}

impl ScriptedEmailSender {
    pub fn new(behavior: SenderBehavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            sent: Mutex::new(Vec::new()),
        })
    }

    /// Messages handed to the sender so far
    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for ScriptedEmailSender {
    fn provider(&self) -> &'static str {
        "scripted"
    }

    async fn send(&self, email: &OutboundEmail) -> AppResult<DeliveryReceipt> {
        self.sent.lock().unwrap().push(email.clone());
        match self.behavior {
            SenderBehavior::Accept => Ok(DeliveryReceipt {
                id: format!("msg_{}", self.sent.lock().unwrap().len()),
            }),
            SenderBehavior::Reject => Err(AppError::external_service(
                "scripted",
                "API returned 422: invalid from address",
            )),
        }
    }
}

/// Router backed by `sender` and the default configuration
pub fn router_with_sender(sender: Arc<ScriptedEmailSender>) -> Router {
    let resources = ServerResources::new(ServerConfig::default(), sender);
    build_router(Arc::new(resources))
}

/// Router whose email sender accepts everything
pub fn test_router() -> Router {
    router_with_sender(ScriptedEmailSender::new(SenderBehavior::Accept))
}
