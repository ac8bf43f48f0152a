// ABOUTME: Recipe model with batch parameters and ordered ingredient references
// ABOUTME: Validates batch size and mash efficiency invariants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wortsmith Brewing Intelligence

//! Recipe model and its invariants.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// A homebrewing recipe as held by the caller's editor state.
///
/// Ingredients live in their own collection; the recipe carries an ordered
/// list of references. Invariants: `batch_size > 0`, `efficiency_percent`
/// in `(0, 100]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe identity
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Target style label, free text (e.g. "American IPA")
    pub style_name: Option<String>,
    /// Batch size in `batch_unit`
    pub batch_size: f64,
    /// Unit for `batch_size` (any known volume unit)
    pub batch_unit: String,
    /// Total boil length in minutes
    pub boil_time_minutes: f64,
    /// Mash efficiency as a percentage
    pub efficiency_percent: f64,
    /// Whether the recipe is publicly visible
    pub is_public: bool,
    /// Free-form brewer notes
    pub notes: Option<String>,
    /// Ordered references into the caller's ingredient collection
    pub ingredient_ids: Vec<Uuid>,
}

impl Recipe {
    /// Create a recipe with sensible editor defaults: 5 gal batch, 60 minute
    /// boil, 75% efficiency, private.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            style_name: None,
            batch_size: 5.0,
            batch_unit: "gal".into(),
            boil_time_minutes: 60.0,
            efficiency_percent: 75.0,
            is_public: false,
            notes: None,
            ingredient_ids: Vec::new(),
        }
    }

    /// Check recipe-level invariants.
    ///
    /// # Errors
    /// Returns [`AppError::InvalidRecipe`] when the batch size is not a
    /// positive finite number or the efficiency falls outside `(0, 100]`.
    pub fn validate(&self) -> AppResult<()> {
        if !self.batch_size.is_finite() || self.batch_size <= 0.0 {
            return Err(AppError::invalid_recipe(format!(
                "batch size must be positive, got {}",
                self.batch_size
            )));
        }
        if !self.efficiency_percent.is_finite()
            || self.efficiency_percent <= 0.0
            || self.efficiency_percent > 100.0
        {
            return Err(AppError::invalid_recipe(format!(
                "efficiency must be in (0, 100], got {}",
                self.efficiency_percent
            )));
        }
        if !self.boil_time_minutes.is_finite() || self.boil_time_minutes < 0.0 {
            return Err(AppError::invalid_recipe(format!(
                "boil time must be non-negative, got {}",
                self.boil_time_minutes
            )));
        }
        Ok(())
    }
}
