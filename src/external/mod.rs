// ABOUTME: External API client modules
// ABOUTME: Transactional email delivery for the contact form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! External API Clients

/// Transactional email providers
pub mod email;

pub use email::{
    sender_from_config, DeliveryReceipt, EmailSender, OutboundEmail, ResendEmailSender,
    UnconfiguredEmailSender,
};
