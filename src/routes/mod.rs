// ABOUTME: Route module organization for the calculator server HTTP endpoints
// ABOUTME: Each domain module holds route definitions and thin handlers over the service layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! HTTP routes, organized by domain

/// Calculator listing, description, and evaluation
pub mod calculators;
/// Contact form delivery
pub mod contact;
/// Liveness and readiness
pub mod health;
/// Catalog search
pub mod search;

pub use calculators::CalculatorRoutes;
pub use contact::ContactRoutes;
pub use health::HealthRoutes;
pub use search::SearchRoutes;
