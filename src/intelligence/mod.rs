// ABOUTME: Analysis engines and their shared output types
// ABOUTME: StyleMatch, Suggestion, and ingredient patches produced by the engines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wortsmith Brewing Intelligence

//! Analysis engines for recipe intelligence.
//!
//! Three engines consume the caller's recipe state:
//!
//! - [`MetricsCalculator`] derives OG, FG, ABV, IBU, and SRM from ingredients
//! - [`StyleMatcher`] ranks style guidelines against computed metrics
//! - [`SuggestionEngine`] runs independent analyzers and emits corrective
//!   [`Suggestion`]s, each carrying a patch the caller can apply through its
//!   ingredient-update hook
//!
//! All engines are pure: same inputs, same ordered outputs.

mod metrics;
mod style_matcher;
mod suggestion_engine;

pub use metrics::MetricsCalculator;
pub use style_matcher::StyleMatcher;
pub use suggestion_engine::SuggestionEngine;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{BeerStyleGuideline, MetricField};

/// A ranked match between computed metrics and one style guideline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleMatch {
    /// The matched style
    pub style: BeerStyleGuideline,
    /// Overall match score in `[0, 1]`
    pub score: f64,
    /// Per-factor breakdown contributing to the score
    pub factors: MatchFactors,
}

/// Per-factor breakdown of a style match score.
///
/// A `None` fit means the style leaves that metric unconstrained; its weight
/// was redistributed to the constrained metrics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchFactors {
    /// Fit of OG against the style's range
    pub og_fit: Option<f64>,
    /// Fit of FG against the style's range
    pub fg_fit: Option<f64>,
    /// Fit of ABV against the style's range
    pub abv_fit: Option<f64>,
    /// Fit of IBU against the style's range
    pub ibu_fit: Option<f64>,
    /// Fit of SRM against the style's range
    pub srm_fit: Option<f64>,
    /// Fuzzy similarity between the recipe's target style label and the
    /// style name, when a label was supplied
    pub name_similarity: Option<f64>,
}

impl MatchFactors {
    /// Fit for a given metric field
    #[must_use]
    pub const fn fit(&self, field: MetricField) -> Option<f64> {
        match field {
            MetricField::Og => self.og_fit,
            MetricField::Fg => self.fg_fit,
            MetricField::Abv => self.abv_fit,
            MetricField::Ibu => self.ibu_fit,
            MetricField::Srm => self.srm_fit,
        }
    }

    /// Record the fit for a given metric field
    pub fn set_fit(&mut self, field: MetricField, value: f64) {
        match field {
            MetricField::Og => self.og_fit = Some(value),
            MetricField::Fg => self.fg_fit = Some(value),
            MetricField::Abv => self.abv_fit = Some(value),
            MetricField::Ibu => self.ibu_fit = Some(value),
            MetricField::Srm => self.srm_fit = Some(value),
        }
    }
}

/// Categories of suggestions the engine can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    /// An ingredient amount deviates from a standard round quantity
    NormalizeAmount,
    /// A whole ingredient class (yeast, hops) is absent
    MissingIngredient,
    /// A metric falls outside the best-matching style's range
    StyleAlignment,
    /// Bitterness/gravity balance sits outside the balanced band
    BalanceAdjustment,
}

/// A field-level change to one ingredient, applied by the caller through its
/// ingredient-update hook. Absent fields are left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IngredientPatch {
    /// The ingredient to change
    pub ingredient_id: Uuid,
    /// New amount, in the ingredient's existing unit
    pub amount: Option<f64>,
    /// New boil time in minutes (hops only)
    pub time_minutes: Option<f64>,
}

impl IngredientPatch {
    /// Patch that only changes the amount
    #[must_use]
    pub const fn set_amount(ingredient_id: Uuid, amount: f64) -> Self {
        Self {
            ingredient_id,
            amount: Some(amount),
            time_minutes: None,
        }
    }
}

/// A corrective suggestion for a recipe.
///
/// Suggestions are pure outputs: applying or dismissing them is the caller's
/// concern, and the engine holds no memory of either.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    /// Category of the suggestion
    pub kind: SuggestionKind,
    /// Short human-readable title
    pub title: String,
    /// Longer description with the reasoning
    pub description: String,
    /// Ingredients this suggestion refers to, possibly empty
    pub target_ingredient_ids: Vec<Uuid>,
    /// Proposed changes; empty for informational suggestions
    pub patch: Vec<IngredientPatch>,
    /// Urgency, lower is more urgent
    pub priority: u8,
    /// Stable key for deduplication across analyzers and reruns
    pub dedup_key: String,
}

impl Suggestion {
    /// Whether the suggestion carries an applicable patch
    #[must_use]
    pub fn is_applicable(&self) -> bool {
        !self.patch.is_empty()
    }
}
