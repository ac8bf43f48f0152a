// ABOUTME: Derives OG, FG, ABV, IBU, and SRM from a recipe's ingredient list
// ABOUTME: Tinseth bitterness and Morey color; validation-first with no partial output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wortsmith Brewing Intelligence

//! Metrics calculation.
//!
//! Formula choices are documented in `constants`: gravity contributions are
//! summed in points per pound per gallon scaled by mash efficiency, bitterness
//! uses the Tinseth utilization model, color uses the Morey power equation.
//! Calculation is deterministic and synchronous; invalid ingredients abort
//! the whole calculation rather than producing partial metrics.

use tracing::debug;

use crate::constants::{gravity, ibu, srm};
use crate::errors::AppResult;
use crate::models::{HopUse, IngredientKind, Recipe, RecipeIngredient, RecipeMetrics};
use crate::units::UnitConverter;

/// Calculator for derived recipe metrics
#[derive(Debug, Clone)]
pub struct MetricsCalculator {
    /// Attenuation (%) assumed when the recipe has no yeast
    default_attenuation_percent: f64,
}

impl Default for MetricsCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsCalculator {
    /// Create a calculator with the standard default attenuation
    #[must_use]
    pub const fn new() -> Self {
        Self {
            default_attenuation_percent: gravity::DEFAULT_ATTENUATION_PERCENT,
        }
    }

    /// Override the attenuation assumed for yeastless recipes
    #[must_use]
    pub const fn with_default_attenuation(mut self, percent: f64) -> Self {
        self.default_attenuation_percent = percent;
        self
    }

    /// Calculate all metrics for a recipe.
    ///
    /// An empty ingredient list yields [`RecipeMetrics::empty`] exactly.
    ///
    /// # Errors
    /// Returns [`crate::errors::AppError::InvalidRecipe`] or
    /// [`crate::errors::AppError::InvalidIngredient`] when an invariant is
    /// violated, and [`crate::errors::AppError::UnsupportedUnit`] when an
    /// amount cannot be converted. No partial metrics are produced.
    pub fn calculate(
        &self,
        recipe: &Recipe,
        ingredients: &[RecipeIngredient],
    ) -> AppResult<RecipeMetrics> {
        recipe.validate()?;
        for ingredient in ingredients {
            ingredient.validate()?;
        }

        if ingredients.is_empty() {
            debug!(recipe = %recipe.name, "no ingredients, returning baseline metrics");
            return Ok(RecipeMetrics::empty());
        }

        let batch_gallons = UnitConverter::to_gallons(recipe.batch_size, &recipe.batch_unit)?;

        let og = Self::calculate_og(recipe, ingredients, batch_gallons)?;
        let fg = self.calculate_fg(og, ingredients);
        let abv = (og - fg) * gravity::ABV_FACTOR;
        let ibu = Self::calculate_ibu(recipe, ingredients, og, batch_gallons)?;
        let srm = Self::calculate_srm(ingredients, batch_gallons)?;

        Ok(RecipeMetrics {
            og,
            fg,
            abv,
            ibu,
            srm,
        })
    }

    /// Sum gravity contributions from grains and fermentable extras.
    ///
    /// Each fermentable contributes `points x lb x efficiency / gallons`
    /// where points are the ingredient's potential above 1.000 in thousandths.
    fn calculate_og(
        recipe: &Recipe,
        ingredients: &[RecipeIngredient],
        batch_gallons: f64,
    ) -> AppResult<f64> {
        let efficiency = recipe.efficiency_percent / 100.0;
        let mut total_points = 0.0;

        for ingredient in ingredients {
            let potential = match &ingredient.kind {
                IngredientKind::Grain { potential, .. } => Some(*potential),
                IngredientKind::Other { potential } => *potential,
                IngredientKind::Hop { .. } | IngredientKind::Yeast { .. } => None,
            };
            let Some(potential) = potential else {
                continue;
            };

            let pounds = UnitConverter::to_pounds(ingredient.amount, &ingredient.unit)?;
            let points_per_lb_gal = (potential - 1.0) * gravity::POINTS_PER_GRAVITY_UNIT;
            total_points += points_per_lb_gal * pounds * efficiency / batch_gallons;
        }

        Ok(1.0 + total_points / gravity::POINTS_PER_GRAVITY_UNIT)
    }

    /// Apply average yeast attenuation to the gravity points above 1.000
    fn calculate_fg(&self, og: f64, ingredients: &[RecipeIngredient]) -> f64 {
        let attenuations: Vec<f64> = ingredients
            .iter()
            .filter_map(|i| match &i.kind {
                IngredientKind::Yeast {
                    attenuation_percent,
                } => Some(*attenuation_percent),
                _ => None,
            })
            .collect();

        let attenuation = if attenuations.is_empty() {
            debug!(
                assumed = self.default_attenuation_percent,
                "no yeast present, assuming default attenuation"
            );
            self.default_attenuation_percent
        } else {
            attenuations.iter().sum::<f64>() / attenuations.len() as f64
        };

        let og_points = (og - 1.0) * gravity::POINTS_PER_GRAVITY_UNIT;
        let fg_points = og_points * (1.0 - attenuation / 100.0);
        1.0 + fg_points / gravity::POINTS_PER_GRAVITY_UNIT
    }

    /// Tinseth utilization summed over boil and whirlpool hops.
    ///
    /// Whirlpool additions credit a fixed 10-minute-equivalent boil factor;
    /// mash and dry hops contribute nothing.
    fn calculate_ibu(
        recipe: &Recipe,
        ingredients: &[RecipeIngredient],
        og: f64,
        batch_gallons: f64,
    ) -> AppResult<f64> {
        let bigness = ibu::BIGNESS_COEFFICIENT * ibu::BIGNESS_BASE.powf(og - 1.0);
        let mut total_ibu = 0.0;

        for ingredient in ingredients {
            let IngredientKind::Hop {
                usage,
                time_minutes,
                alpha_acid_percent,
            } = &ingredient.kind
            else {
                continue;
            };

            let minutes = match usage {
                // Validation guarantees boil hops carry a time
                HopUse::Boil => time_minutes
                    .unwrap_or_default()
                    .min(recipe.boil_time_minutes),
                HopUse::Whirlpool => ibu::WHIRLPOOL_CREDIT_MINUTES,
                HopUse::Mash | HopUse::DryHop => continue,
            };

            let time_factor = (1.0 - (-ibu::TIME_DECAY_RATE * minutes).exp())
                / ibu::TIME_FACTOR_DIVISOR;
            let utilization = bigness * time_factor;

            let ounces = UnitConverter::to_ounces(ingredient.amount, &ingredient.unit)?;
            total_ibu += utilization
                * (alpha_acid_percent / 100.0)
                * ounces
                * ibu::IMPERIAL_SCALING
                / batch_gallons;
        }

        Ok(total_ibu)
    }

    /// Morey color from malt color units, clamped to the physical maximum
    fn calculate_srm(ingredients: &[RecipeIngredient], batch_gallons: f64) -> AppResult<f64> {
        let mut mcu = 0.0;

        for ingredient in ingredients {
            let IngredientKind::Grain { color_lovibond, .. } = &ingredient.kind else {
                continue;
            };
            let pounds = UnitConverter::to_pounds(ingredient.amount, &ingredient.unit)?;
            mcu += color_lovibond * pounds / batch_gallons;
        }

        if mcu <= 0.0 {
            return Ok(0.0);
        }
        Ok((srm::MOREY_COEFFICIENT * mcu.powf(srm::MOREY_EXPONENT)).min(srm::MAX_SRM))
    }
}
