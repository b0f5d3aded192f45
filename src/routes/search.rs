// ABOUTME: Site search route over the static calculator catalog
// ABOUTME: Case-insensitive substring search with an optional exact category filter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::{extract::Query, routing::get, Json, Router};
use pierre_calculators::{catalog, registry};
use pierre_core::models::{CalculatorCategory, CalculatorMetadata};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::errors::{AppError, AppResult};

/// Query string for `GET /api/search`
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    /// Free-text query; blank returns every calculator
    #[serde(default)]
    pub q: Option<String>,
    /// Category slug
    #[serde(default)]
    pub category: Option<String>,
}

/// Search results
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// The query as received
    pub query: String,
    /// Matching catalog entries
    pub results: Vec<&'static CalculatorMetadata>,
    /// Number of matches
    pub total: usize,
}

/// Search routes
pub struct SearchRoutes;

impl SearchRoutes {
    /// Create the search route
    pub fn routes() -> Router {
        Router::new().route("/api/search", get(Self::handle_search))
    }

    /// GET /api/search?q=&category=
    async fn handle_search(Query(params): Query<SearchParams>) -> AppResult<Json<SearchResponse>> {
        let category = match params.category.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(slug) => Some(catalog::parse_category(slug).ok_or_else(|| {
                let valid: Vec<&str> = CalculatorCategory::ALL.into_iter().map(CalculatorCategory::slug).collect();
                AppError::invalid_input(format!("Unknown category: '{slug}'"))
                    .with_details(json!({ "valid_categories": valid }))
            })?),
        };

        let query = params.q.unwrap_or_default();
        let results = registry::search(&query, category);
        Ok(Json(SearchResponse {
            total: results.len(),
            query,
            results,
        }))
    }
}
