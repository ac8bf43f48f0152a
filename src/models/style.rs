// ABOUTME: Beer style guideline model with per-metric numeric ranges and tags
// ABOUTME: Absent ranges mean unconstrained; ranges are matched by the style matcher
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wortsmith Brewing Intelligence

//! Style guideline model.

use serde::{Deserialize, Serialize};

use super::metrics::MetricField;

/// Inclusive numeric range for one metric in a style guideline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleRange {
    /// Lower bound, inclusive
    pub min: f64,
    /// Upper bound, inclusive
    pub max: f64,
}

impl StyleRange {
    /// Construct a range
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether the value falls inside the range
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Width of the range; zero-width ranges are legal
    #[must_use]
    pub fn width(&self) -> f64 {
        (self.max - self.min).max(0.0)
    }

    /// Distance from the value to the nearest bound, zero when inside
    #[must_use]
    pub fn distance_outside(&self, value: f64) -> f64 {
        if value < self.min {
            self.min - value
        } else if value > self.max {
            value - self.max
        } else {
            0.0
        }
    }
}

/// A beer style guideline from the catalog.
///
/// An absent range means the style does not constrain that metric.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeerStyleGuideline {
    /// Catalog identifier (e.g. a BJCP code like "21A")
    pub id: String,
    /// Style name (e.g. "American IPA")
    pub name: String,
    /// Style category (e.g. "IPA")
    pub category: String,
    /// Original gravity range
    pub og_range: Option<StyleRange>,
    /// Final gravity range
    pub fg_range: Option<StyleRange>,
    /// Alcohol by volume range
    pub abv_range: Option<StyleRange>,
    /// Bitterness range
    pub ibu_range: Option<StyleRange>,
    /// Color range
    pub srm_range: Option<StyleRange>,
    /// Descriptive tags used by fuzzy search ("hoppy", "sessionable", ...)
    pub tags: Vec<String>,
}

impl BeerStyleGuideline {
    /// The range constraining a given metric, if any
    #[must_use]
    pub const fn range(&self, field: MetricField) -> Option<&StyleRange> {
        match field {
            MetricField::Og => self.og_range.as_ref(),
            MetricField::Fg => self.fg_range.as_ref(),
            MetricField::Abv => self.abv_range.as_ref(),
            MetricField::Ibu => self.ibu_range.as_ref(),
            MetricField::Srm => self.srm_range.as_ref(),
        }
    }
}
