// ABOUTME: Analysis configuration with matcher tolerances and suggestion thresholds
// ABOUTME: Default-constructed typed config injected into matcher, engine, and catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wortsmith Brewing Intelligence

//! Analysis Configuration
//!
//! Thresholds and weights that steer style matching, suggestion generation,
//! and catalog search. Everything has a working default; callers override
//! only what they need.

use serde::{Deserialize, Serialize};

use crate::constants::{balance, gravity, rounding};
use crate::models::MetricField;

/// Top-level configuration for the analysis core
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Style matcher scoring parameters
    pub matcher: MatcherConfig,
    /// Suggestion engine thresholds
    pub suggestions: SuggestionConfig,
    /// Catalog fuzzy search limits
    pub search: SearchConfig,
}

/// Style matcher scoring parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Fraction of a range's width over which fit decays linearly to zero
    /// outside the range
    pub tolerance_fraction: f64,
    /// Blend weight of name similarity when a target style label is present;
    /// the numeric score takes the remaining weight
    pub name_blend_weight: f64,
    /// Matches scoring below this are excluded from results
    pub min_match_score: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            tolerance_fraction: 0.5,
            name_blend_weight: 0.3,
            min_match_score: 0.2,
        }
    }
}

impl MatcherConfig {
    /// Absolute floor for the decay tolerance of a metric, keeping the
    /// linear falloff defined for zero-width ranges
    #[must_use]
    pub const fn min_tolerance(field: MetricField) -> f64 {
        match field {
            MetricField::Og | MetricField::Fg => 0.005,
            MetricField::Abv => 0.5,
            MetricField::Ibu => 5.0,
            MetricField::Srm => 2.0,
        }
    }
}

/// Suggestion engine thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionConfig {
    /// Deviation from a round amount, in the ingredient's unit, beyond which
    /// a normalization suggestion is emitted
    pub normalize_tolerance: f64,
    /// Minimum best-match score for style alignment suggestions to be useful
    pub style_usefulness_threshold: f64,
    /// Lower bound of the balanced BU:GU band
    pub balance_band_low: f64,
    /// Upper bound of the balanced BU:GU band
    pub balance_band_high: f64,
    /// Attenuation (%) assumed when the recipe has no yeast
    pub default_attenuation_percent: f64,
    /// Hard cap on suggestions returned from one analysis pass
    pub max_suggestions: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            normalize_tolerance: rounding::DEVIATION_TOLERANCE,
            style_usefulness_threshold: 0.35,
            balance_band_low: balance::BALANCED_BAND_LOW,
            balance_band_high: balance::BALANCED_BAND_HIGH,
            default_attenuation_percent: gravity::DEFAULT_ATTENUATION_PERCENT,
            max_suggestions: 12,
        }
    }
}

/// Catalog fuzzy search limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Minimum Jaro-Winkler similarity for a search hit
    pub similarity_threshold: f64,
    /// Maximum results returned per search
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.6,
            max_results: 10,
        }
    }
}
