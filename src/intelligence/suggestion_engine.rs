// ABOUTME: Runs independent recipe analyzers and merges their suggestions
// ABOUTME: Amount normalization, missing classes, style alignment, and BU:GU balance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wortsmith Brewing Intelligence

//! Suggestion generation.
//!
//! Four analyzers run independently over the same inputs, then their outputs
//! are merged: duplicates collapse on `dedup_key` (first wins), survivors
//! sort by priority with generation order breaking ties, and the list is
//! capped. The engine is stateless; rerunning on unchanged inputs yields the
//! same suggestions.

use std::collections::HashSet;

use tracing::debug;

use crate::config::SuggestionConfig;
use crate::constants::{balance, rounding};
use crate::intelligence::{IngredientPatch, StyleMatch, Suggestion, SuggestionKind};
use crate::models::{
    HopUse, IngredientKind, MetricField, Recipe, RecipeIngredient, RecipeMetrics,
};

/// Priority for a missing yeast, the most urgent finding
const PRIORITY_MISSING_YEAST: u8 = 1;
/// Priority for missing hops
const PRIORITY_MISSING_HOPS: u8 = 2;
/// Priority for amount normalization
const PRIORITY_NORMALIZE: u8 = 3;
/// Priority for style alignment
const PRIORITY_STYLE: u8 = 4;
/// Priority for balance commentary
const PRIORITY_BALANCE: u8 = 5;

/// Generates corrective suggestions for a recipe
#[derive(Debug, Clone, Default)]
pub struct SuggestionEngine {
    config: SuggestionConfig,
}

impl SuggestionEngine {
    /// Engine with default thresholds
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with caller-supplied thresholds
    #[must_use]
    pub const fn with_config(config: SuggestionConfig) -> Self {
        Self { config }
    }

    /// Run all analyzers and return the merged, prioritized suggestion list.
    ///
    /// A recipe with no ingredients, or one whose metrics have not been
    /// computed, produces no suggestions.
    #[must_use]
    pub fn analyze(
        &self,
        recipe: &Recipe,
        ingredients: &[RecipeIngredient],
        metrics: Option<&RecipeMetrics>,
        style_matches: &[StyleMatch],
    ) -> Vec<Suggestion> {
        let Some(metrics) = metrics else {
            debug!(recipe = %recipe.name, "metrics not computed, skipping analysis");
            return Vec::new();
        };
        if ingredients.is_empty() {
            debug!(recipe = %recipe.name, "no ingredients, skipping analysis");
            return Vec::new();
        }

        let mut suggestions = Vec::new();
        self.analyze_amounts(ingredients, &mut suggestions);
        Self::analyze_missing_classes(ingredients, &mut suggestions);
        self.analyze_style_alignment(ingredients, metrics, style_matches, &mut suggestions);
        self.analyze_balance(metrics, &mut suggestions);

        let mut seen = HashSet::new();
        suggestions.retain(|s| seen.insert(s.dedup_key.clone()));
        suggestions.sort_by_key(|s| s.priority);
        suggestions.truncate(self.config.max_suggestions);

        debug!(
            recipe = %recipe.name,
            count = suggestions.len(),
            "suggestion analysis complete"
        );
        suggestions
    }

    /// Flag ingredient amounts that deviate from the unit's round step
    fn analyze_amounts(&self, ingredients: &[RecipeIngredient], out: &mut Vec<Suggestion>) {
        for ingredient in ingredients {
            let Some(step) = rounding_step(&ingredient.unit) else {
                continue;
            };

            let mut rounded = (ingredient.amount / step).round() * step;
            if rounded <= 0.0 {
                rounded = step;
            }
            let deviation = (ingredient.amount - rounded).abs();
            if deviation <= self.config.normalize_tolerance {
                continue;
            }

            out.push(Suggestion {
                kind: SuggestionKind::NormalizeAmount,
                title: format!("Round off the {} amount", ingredient.name),
                description: format!(
                    "{} {} of {} is an unusual quantity; {} {} is easier to measure",
                    ingredient.amount, ingredient.unit, ingredient.name, rounded, ingredient.unit
                ),
                target_ingredient_ids: vec![ingredient.id],
                patch: vec![IngredientPatch::set_amount(ingredient.id, rounded)],
                priority: PRIORITY_NORMALIZE,
                dedup_key: format!("normalize_amount:{}", ingredient.id),
            });
        }
    }

    /// Flag whole ingredient classes that are absent
    fn analyze_missing_classes(ingredients: &[RecipeIngredient], out: &mut Vec<Suggestion>) {
        if !ingredients.iter().any(|i| i.is_yeast()) {
            out.push(Suggestion {
                kind: SuggestionKind::MissingIngredient,
                title: "Add a yeast".to_string(),
                description:
                    "The recipe has no yeast, so it cannot ferment; gravity and alcohol \
                     figures assume a default attenuation until one is chosen"
                        .to_string(),
                target_ingredient_ids: Vec::new(),
                patch: Vec::new(),
                priority: PRIORITY_MISSING_YEAST,
                dedup_key: "missing_ingredient:yeast".to_string(),
            });
        }

        if !ingredients.iter().any(|i| i.is_hop()) {
            out.push(Suggestion {
                kind: SuggestionKind::MissingIngredient,
                title: "Add hops".to_string(),
                description:
                    "The recipe has no hops; nearly every beer style expects at least \
                     a bittering addition"
                        .to_string(),
                target_ingredient_ids: Vec::new(),
                patch: Vec::new(),
                priority: PRIORITY_MISSING_HOPS,
                dedup_key: "missing_ingredient:hops".to_string(),
            });
        }
    }

    /// Compare metrics against the best style match and suggest corrections.
    ///
    /// Only the top-ranked match is consulted, and only when its score clears
    /// the usefulness threshold; aligning toward a style the recipe barely
    /// resembles would be noise.
    fn analyze_style_alignment(
        &self,
        ingredients: &[RecipeIngredient],
        metrics: &RecipeMetrics,
        style_matches: &[StyleMatch],
        out: &mut Vec<Suggestion>,
    ) {
        let Some(best) = style_matches
            .first()
            .filter(|m| m.score >= self.config.style_usefulness_threshold)
        else {
            return;
        };

        for field in MetricField::ALL {
            let Some(range) = best.style.range(field) else {
                continue;
            };
            let value = metrics.get(field);
            if range.contains(value) {
                continue;
            }

            let below = value < range.min;
            let mut patch = Vec::new();
            let mut target_ids = Vec::new();
            if field == MetricField::Ibu && metrics.ibu > 0.0 {
                let target = if below { range.min } else { range.max };
                (patch, target_ids) =
                    Self::hop_scaling_patch(ingredients, metrics.ibu, target);
            }

            let hint = direction_hint(field, below);
            out.push(Suggestion {
                kind: SuggestionKind::StyleAlignment,
                title: format!("{} is outside the {} range", field.label(), best.style.name),
                description: format!(
                    "{} {value:.3} is {} the {} range {}-{}; {hint}",
                    field.label(),
                    if below { "below" } else { "above" },
                    best.style.name,
                    range.min,
                    range.max,
                ),
                target_ingredient_ids: target_ids,
                patch,
                priority: PRIORITY_STYLE,
                dedup_key: format!("style_alignment:{}:{}", best.style.id, field.key()),
            });
        }
    }

    /// Proportionally scale every boil hop so total bitterness lands on the
    /// target. Utilization is linear in amount, so one shared factor suffices.
    fn hop_scaling_patch(
        ingredients: &[RecipeIngredient],
        current_ibu: f64,
        target_ibu: f64,
    ) -> (Vec<IngredientPatch>, Vec<uuid::Uuid>) {
        let factor = target_ibu / current_ibu;
        let mut patch = Vec::new();
        let mut target_ids = Vec::new();

        for ingredient in ingredients {
            let IngredientKind::Hop { usage, .. } = &ingredient.kind else {
                continue;
            };
            if !matches!(usage, HopUse::Boil | HopUse::Whirlpool) {
                continue;
            }
            let scaled = (ingredient.amount * factor * 100.0).round() / 100.0;
            patch.push(IngredientPatch::set_amount(ingredient.id, scaled));
            target_ids.push(ingredient.id);
        }

        (patch, target_ids)
    }

    /// Comment on the bitterness-to-gravity ratio when it leaves the
    /// balanced band. Informational only, no patch.
    fn analyze_balance(&self, metrics: &RecipeMetrics, out: &mut Vec<Suggestion>) {
        let og_points = metrics.og_points();
        if og_points < balance::MIN_GRAVITY_POINTS {
            return;
        }

        let ratio = metrics.ibu / og_points;
        let description = if ratio < self.config.balance_band_low {
            format!(
                "BU:GU ratio {ratio:.2} leans heavily toward malt; consider a larger \
                 bittering addition if a drier balance is wanted"
            )
        } else if ratio > self.config.balance_band_high {
            format!(
                "BU:GU ratio {ratio:.2} leans heavily toward bitterness; consider \
                 scaling hops back or raising the gravity"
            )
        } else {
            return;
        };

        out.push(Suggestion {
            kind: SuggestionKind::BalanceAdjustment,
            title: "Bitterness balance is off-center".to_string(),
            description,
            target_ingredient_ids: Vec::new(),
            patch: Vec::new(),
            priority: PRIORITY_BALANCE,
            dedup_key: "balance:bu_gu".to_string(),
        });
    }
}

/// Round-amount step for a unit, `None` for units without a conventional step
fn rounding_step(unit: &str) -> Option<f64> {
    match unit.trim().to_lowercase().as_str() {
        "lb" | "lbs" | "pound" | "pounds" | "oz" | "ounce" | "ounces" => {
            Some(rounding::QUARTER_STEP)
        }
        "kg" | "kilogram" | "kilograms" => Some(rounding::HALF_STEP),
        "g" | "gram" | "grams" => Some(rounding::GRAM_STEP),
        "l" | "liter" | "liters" | "litre" | "litres" | "gal" | "gallon" | "gallons" | "qt"
        | "quart" | "quarts" => Some(rounding::QUARTER_STEP),
        "ml" | "milliliter" | "milliliters" => Some(rounding::MILLILITER_STEP),
        _ => None,
    }
}

/// Human-readable corrective hint for a metric sitting outside a style range
const fn direction_hint(field: MetricField, below: bool) -> &'static str {
    match (field, below) {
        (MetricField::Og, true) => "add more base malt or extract",
        (MetricField::Og, false) => "cut back on fermentables or raise the batch size",
        (MetricField::Fg, true) => "pick a lower-attenuating yeast or mash warmer",
        (MetricField::Fg, false) => "pick a higher-attenuating yeast or mash cooler",
        (MetricField::Abv, true) => "add fermentables to raise the alcohol",
        (MetricField::Abv, false) => "reduce fermentables to lower the alcohol",
        (MetricField::Ibu, true) => "increase the boil hop additions",
        (MetricField::Ibu, false) => "scale the boil hop additions back",
        (MetricField::Srm, true) => "add a darker specialty malt",
        (MetricField::Srm, false) => "swap dark malt for a paler one",
    }
}
