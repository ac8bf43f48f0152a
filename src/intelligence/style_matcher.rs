// ABOUTME: Ranks style guidelines against computed metrics with per-metric fit scores
// ABOUTME: Linear decay outside ranges, weight redistribution, optional name blending
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wortsmith Brewing Intelligence

//! Style matching.
//!
//! Each guideline gets a numeric score from the per-metric fits: 1.0 inside
//! the range, decaying linearly to 0.0 over a tolerance proportional to the
//! range width. Metrics a style leaves unconstrained carry no weight. When
//! the recipe names a target style, fuzzy name similarity is blended in.

use strsim::jaro_winkler;
use tracing::debug;

use crate::config::MatcherConfig;
use crate::intelligence::{MatchFactors, StyleMatch};
use crate::models::{BeerStyleGuideline, MetricField, Recipe, RecipeMetrics, StyleRange};

/// Ranks style guidelines against a recipe's computed metrics
#[derive(Debug, Clone, Default)]
pub struct StyleMatcher {
    config: MatcherConfig,
}

impl StyleMatcher {
    /// Matcher with default scoring parameters
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Matcher with caller-supplied scoring parameters
    #[must_use]
    pub const fn with_config(config: MatcherConfig) -> Self {
        Self { config }
    }

    /// Score every guideline and return matches sorted by descending score.
    ///
    /// Matches below the configured minimum score are dropped. Ties keep
    /// catalog order.
    #[must_use]
    pub fn match_styles(
        &self,
        metrics: &RecipeMetrics,
        recipe: &Recipe,
        styles: &[BeerStyleGuideline],
    ) -> Vec<StyleMatch> {
        let mut matches: Vec<StyleMatch> = styles
            .iter()
            .map(|style| self.score_style(metrics, recipe, style))
            .filter(|m| m.score >= self.config.min_match_score)
            .collect();

        matches.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        debug!(
            candidates = styles.len(),
            kept = matches.len(),
            "style matching complete"
        );
        matches
    }

    fn score_style(
        &self,
        metrics: &RecipeMetrics,
        recipe: &Recipe,
        style: &BeerStyleGuideline,
    ) -> StyleMatch {
        let mut factors = MatchFactors::default();
        let mut fit_sum = 0.0;
        let mut fit_count = 0u32;

        for field in MetricField::ALL {
            let Some(range) = style.range(field) else {
                continue;
            };
            let fit = self.range_fit(metrics.get(field), range, field);
            factors.set_fit(field, fit);
            fit_sum += fit;
            fit_count += 1;
        }

        // A style with no ranges constrains nothing, so everything fits it
        let numeric_score = if fit_count == 0 {
            1.0
        } else {
            fit_sum / f64::from(fit_count)
        };

        let score = match &recipe.style_name {
            Some(label) => {
                let similarity =
                    jaro_winkler(&label.to_lowercase(), &style.name.to_lowercase());
                factors.name_similarity = Some(similarity);
                numeric_score * (1.0 - self.config.name_blend_weight)
                    + similarity * self.config.name_blend_weight
            }
            None => numeric_score,
        };

        StyleMatch {
            style: style.clone(),
            score,
            factors,
        }
    }

    /// Fit of one value against one range: 1.0 inside, linear decay outside.
    ///
    /// The decay tolerance is a fraction of the range width with an absolute
    /// floor per metric, so zero-width ranges still decay gracefully.
    fn range_fit(&self, value: f64, range: &StyleRange, field: MetricField) -> f64 {
        let distance = range.distance_outside(value);
        if distance == 0.0 {
            return 1.0;
        }
        let tolerance = (range.width() * self.config.tolerance_fraction)
            .max(MatcherConfig::min_tolerance(field));
        (1.0 - distance / tolerance).max(0.0)
    }
}
