// ABOUTME: Recipe ingredient model as a tagged union over grain, hop, yeast, and other
// ABOUTME: Kind-specific fields live on the variant so invalid combinations cannot exist
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wortsmith Brewing Intelligence

//! Ingredient model.
//!
//! The ingredient kind is a tagged enum with exhaustive matching: a hop
//! cannot carry a grain color, a yeast cannot carry an alpha acid. The one
//! invariant the type system cannot hold is that a boil hop needs a boil
//! time; [`RecipeIngredient::validate`] enforces it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// A single ingredient in a recipe, unit-tagged and kind-discriminated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Ingredient identity, stable across edits
    pub id: Uuid,
    /// Display name (e.g. "Maris Otter", "Cascade")
    pub name: String,
    /// Quantity in `unit`; must be positive
    pub amount: f64,
    /// Unit for `amount` (weight or volume unit string)
    pub unit: String,
    /// Kind-specific data
    #[serde(flatten)]
    pub kind: IngredientKind,
}

/// Kind-specific ingredient fields
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IngredientKind {
    /// Malted or unmalted grain contributing gravity and color
    Grain {
        /// Malt classification
        grain_type: GrainType,
        /// Gravity potential as specific gravity per lb/gal (e.g. 1.037)
        potential: f64,
        /// Color contribution in degrees Lovibond
        color_lovibond: f64,
    },
    /// Hop addition contributing bitterness and aroma
    Hop {
        /// Where in the process the hop is added
        #[serde(rename = "use")]
        usage: HopUse,
        /// Minutes in the boil; required when `usage` is boil, meaningful
        /// for whirlpool, ignored otherwise
        time_minutes: Option<f64>,
        /// Alpha acid content as a percentage
        alpha_acid_percent: f64,
    },
    /// Yeast strain driving attenuation
    Yeast {
        /// Expected apparent attenuation as a percentage
        attenuation_percent: f64,
    },
    /// Anything else (sugars, spices, finings); sugars may carry a gravity
    /// potential and then contribute to OG like grain
    Other {
        /// Optional gravity potential for fermentable additions
        potential: Option<f64>,
    },
}

/// Malt classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrainType {
    /// Diastatic base malts (pale, pilsner, Maris Otter)
    BaseMalt,
    /// Caramel and crystal malts
    CaramelCrystal,
    /// Roasted malts (chocolate, black patent, roasted barley)
    Roasted,
    /// Unmalted adjuncts (flaked oats, corn, rice)
    Adjunct,
    /// Smoked malts
    Smoked,
    /// Acidulated malt
    Acidulated,
}

/// Where in the process a hop is added
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HopUse {
    /// Mash hopping; negligible isomerization
    Mash,
    /// Boil addition; primary bitterness source
    Boil,
    /// Post-boil whirlpool or hop stand
    Whirlpool,
    /// Dry hop during or after fermentation; aroma only
    DryHop,
}

impl RecipeIngredient {
    /// Create a grain ingredient
    #[must_use]
    pub fn grain(
        name: impl Into<String>,
        amount: f64,
        unit: impl Into<String>,
        grain_type: GrainType,
        potential: f64,
        color_lovibond: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            unit: unit.into(),
            kind: IngredientKind::Grain {
                grain_type,
                potential,
                color_lovibond,
            },
        }
    }

    /// Create a hop ingredient
    #[must_use]
    pub fn hop(
        name: impl Into<String>,
        amount: f64,
        unit: impl Into<String>,
        usage: HopUse,
        time_minutes: Option<f64>,
        alpha_acid_percent: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            unit: unit.into(),
            kind: IngredientKind::Hop {
                usage,
                time_minutes,
                alpha_acid_percent,
            },
        }
    }

    /// Create a yeast ingredient
    #[must_use]
    pub fn yeast(
        name: impl Into<String>,
        amount: f64,
        unit: impl Into<String>,
        attenuation_percent: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            unit: unit.into(),
            kind: IngredientKind::Yeast {
                attenuation_percent,
            },
        }
    }

    /// Create a miscellaneous ingredient
    #[must_use]
    pub fn other(
        name: impl Into<String>,
        amount: f64,
        unit: impl Into<String>,
        potential: Option<f64>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            unit: unit.into(),
            kind: IngredientKind::Other { potential },
        }
    }

    /// Whether this ingredient is a grain
    #[must_use]
    pub const fn is_grain(&self) -> bool {
        matches!(self.kind, IngredientKind::Grain { .. })
    }

    /// Whether this ingredient is a hop
    #[must_use]
    pub const fn is_hop(&self) -> bool {
        matches!(self.kind, IngredientKind::Hop { .. })
    }

    /// Whether this ingredient is a yeast
    #[must_use]
    pub const fn is_yeast(&self) -> bool {
        matches!(self.kind, IngredientKind::Yeast { .. })
    }

    /// Check per-ingredient invariants.
    ///
    /// # Errors
    /// Returns [`AppError::InvalidIngredient`] when the amount is not
    /// positive or when a boil hop is missing its boil time.
    pub fn validate(&self) -> AppResult<()> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(AppError::invalid_ingredient(
                &self.name,
                format!("amount must be positive, got {}", self.amount),
            ));
        }
        if let IngredientKind::Hop {
            usage: HopUse::Boil,
            time_minutes,
            ..
        } = &self.kind
        {
            match time_minutes {
                Some(t) if t.is_finite() && *t >= 0.0 => {}
                Some(t) => {
                    return Err(AppError::invalid_ingredient(
                        &self.name,
                        format!("boil time must be non-negative, got {t}"),
                    ));
                }
                None => {
                    return Err(AppError::invalid_ingredient(
                        &self.name,
                        "boil hop requires a time in minutes",
                    ));
                }
            }
        }
        Ok(())
    }
}
