// ABOUTME: Threshold tables and category lookup for continuous calculator results
// ABOUTME: Bands are lower-inclusive, upper-exclusive, and cover the whole number line
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Category classification
//!
//! A [`ThresholdTable`] stores only the lower bound of each band. The first band
//! starts at negative infinity and band `i` ends where band `i + 1` starts, the
//! last band extending to positive infinity. Every real value therefore lands
//! in exactly one band; [`ThresholdTable::check_partition`] verifies the bounds
//! are strictly ascending.

use pierre_core::errors::{AppError, AppResult};
use pierre_core::models::Category;
use serde::Serialize;

/// One labelled band of a threshold table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    /// Inclusive lower bound
    pub lower: f64,
    /// Category label
    pub label: &'static str,
    /// Static interpretive text
    pub description: &'static str,
}

impl Band {
    /// Band starting at `lower`
    #[must_use]
    pub const fn new(lower: f64, label: &'static str, description: &'static str) -> Self {
        Self {
            lower,
            label,
            description,
        }
    }

    /// Bottom band, unbounded below
    #[must_use]
    pub const fn below(label: &'static str, description: &'static str) -> Self {
        Self::new(f64::NEG_INFINITY, label, description)
    }
}

/// Ordered partition of the number line into labelled bands
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdTable {
    /// Stable table id
    pub id: &'static str,
    /// Display title
    pub title: &'static str,
    /// Unit of the classified value
    pub unit: &'static str,
    /// Source the thresholds come from
    pub source: &'static str,
    /// Bands, ascending by lower bound
    pub bands: &'static [Band],
}

impl ThresholdTable {
    /// Exclusive upper bound of band `index` (`+inf` for the top band)
    #[must_use]
    pub fn upper(&self, index: usize) -> f64 {
        self.bands
            .get(index + 1)
            .map_or(f64::INFINITY, |next| next.lower)
    }

    /// Index of the band containing `value`, `None` only for NaN
    #[must_use]
    pub fn band_index(&self, value: f64) -> Option<usize> {
        self.bands
            .iter()
            .enumerate()
            .rev()
            .find(|(_, band)| band.lower <= value)
            .map(|(index, _)| index)
    }

    /// The band containing `value`
    #[must_use]
    pub fn band(&self, value: f64) -> Option<&'static Band> {
        self.band_index(value).and_then(|index| self.bands.get(index))
    }

    /// Classify `value`, recording `basis` as the result key it came from
    ///
    /// # Errors
    ///
    /// Returns an internal error when `value` is NaN; validated input never
    /// produces one.
    pub fn classify(&self, basis: &str, value: f64) -> AppResult<Category> {
        let index = self.band_index(value).ok_or_else(|| {
            AppError::internal(format!("Cannot classify a non-numeric {} value", self.title))
        })?;
        let band = &self.bands[index];
        let upper = self.upper(index);
        Ok(Category {
            basis: basis.to_owned(),
            label: band.label.to_owned(),
            description: band.description.to_owned(),
            band_index: index,
            lower: band.lower.is_finite().then_some(band.lower),
            upper: upper.is_finite().then_some(upper),
        })
    }

    /// Verify the table partitions the number line
    ///
    /// # Errors
    ///
    /// Describes the first defect: an empty table, a first band not starting
    /// at negative infinity, a non-finite inner bound, or bounds out of order.
    pub fn check_partition(&self) -> Result<(), String> {
        let Some(first) = self.bands.first() else {
            return Err(format!("{}: table has no bands", self.id));
        };
        if first.lower != f64::NEG_INFINITY {
            return Err(format!("{}: first band must be unbounded below", self.id));
        }
        for pair in self.bands.windows(2) {
            let (current, next) = (&pair[0], &pair[1]);
            if !next.lower.is_finite() {
                return Err(format!("{}: band '{}' has a non-finite bound", self.id, next.label));
            }
            if next.lower <= current.lower {
                return Err(format!(
                    "{}: band '{}' does not start above '{}'",
                    self.id, next.label, current.label
                ));
            }
        }
        Ok(())
    }

    /// Serializable reference view
    #[must_use]
    pub fn view(&self) -> ThresholdTableView {
        ThresholdTableView {
            id: self.id,
            title: self.title,
            unit: self.unit,
            source: self.source,
            rows: self
                .bands
                .iter()
                .enumerate()
                .map(|(index, band)| {
                    let upper = self.upper(index);
                    ThresholdRow {
                        lower: band.lower.is_finite().then_some(band.lower),
                        upper: upper.is_finite().then_some(upper),
                        label: band.label,
                        description: band.description,
                    }
                })
                .collect(),
        }
    }
}

/// Reference-table representation returned by the API
#[derive(Debug, Clone, Serialize)]
pub struct ThresholdTableView {
    /// Table id
    pub id: &'static str,
    /// Display title
    pub title: &'static str,
    /// Unit of the classified value
    pub unit: &'static str,
    /// Source of the thresholds
    pub source: &'static str,
    /// `(lower, upper, label, description)` rows
    pub rows: Vec<ThresholdRow>,
}

/// One row of a [`ThresholdTableView`]
#[derive(Debug, Clone, Serialize)]
pub struct ThresholdRow {
    /// Inclusive lower bound, `None` when unbounded
    pub lower: Option<f64>,
    /// Exclusive upper bound, `None` when unbounded
    pub upper: Option<f64>,
    /// Category label
    pub label: &'static str,
    /// Interpretive text
    pub description: &'static str,
}
