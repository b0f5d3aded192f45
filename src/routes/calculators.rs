// ABOUTME: Calculator REST routes for listing, describing, and evaluating calculators
// ABOUTME: Thin handlers over the pierre-calculators registry with timing and outcome logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calculator routes
//!
//! - `GET /api/calculators` lists the catalog
//! - `GET /api/calculators/:id` returns metadata and reference tables
//! - `POST /api/calculators/:id` evaluates a submission
//!
//! Submitted values are never logged; only the calculator id, the outcome, and
//! the evaluation time are recorded.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, Path},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use pierre_calculators::{registry, Calculator, ThresholdTableView};
use pierre_core::models::{CalculationResult, CalculatorInput, CalculatorMetadata};
use serde::Serialize;

use crate::{
    errors::{AppError, AppResult},
    logging::AppLogger,
};

/// Catalog listing response
#[derive(Debug, Serialize)]
pub struct CalculatorListResponse {
    /// Every calculator, in listing order
    pub calculators: Vec<&'static CalculatorMetadata>,
    /// Number of calculators
    pub total: usize,
}

/// Single calculator description
#[derive(Debug, Serialize)]
pub struct CalculatorDetailResponse {
    /// Catalog entry
    pub calculator: &'static CalculatorMetadata,
    /// Reference threshold tables used for classification
    pub tables: Vec<ThresholdTableView>,
}

/// Calculator routes
pub struct CalculatorRoutes;

impl CalculatorRoutes {
    /// Create all calculator routes
    pub fn routes() -> Router {
        Router::new()
            .route("/api/calculators", get(Self::handle_list))
            .route(
                "/api/calculators/:id",
                get(Self::handle_describe).post(Self::handle_evaluate),
            )
    }

    fn lookup(id: &str) -> AppResult<&'static dyn Calculator> {
        registry::find(id).ok_or_else(|| AppError::not_found(format!("Calculator '{id}'")))
    }

    /// GET /api/calculators
    async fn handle_list() -> impl IntoResponse {
        let calculators: Vec<_> = registry::metadata().collect();
        Json(CalculatorListResponse {
            total: calculators.len(),
            calculators,
        })
    }

    /// GET `/api/calculators/:id`
    async fn handle_describe(Path(id): Path<String>) -> AppResult<Json<CalculatorDetailResponse>> {
        let calculator = Self::lookup(&id)?;
        Ok(Json(CalculatorDetailResponse {
            calculator: calculator.metadata(),
            tables: calculator.tables().iter().map(|table| table.view()).collect(),
        }))
    }

    /// POST `/api/calculators/:id`
    async fn handle_evaluate(
        Path(id): Path<String>,
        payload: Result<Json<CalculatorInput>, JsonRejection>,
    ) -> AppResult<Json<CalculationResult>> {
        let calculator = Self::lookup(&id)?;
        let Json(input) = payload.map_err(|rejection| {
            AppError::invalid_input(format!("Invalid request body: {}", rejection.body_text()))
        })?;

        let started = Instant::now();
        let result = calculator.evaluate(&input);
        let elapsed = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);

        let outcome = match &result {
            Ok(_) => "ok",
            Err(error) if error.code.is_validation() => "rejected",
            Err(_) => "error",
        };
        AppLogger::log_calculation(calculator.metadata().id, outcome, elapsed);

        result.map(Json)
    }
}
