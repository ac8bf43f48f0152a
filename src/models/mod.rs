// ABOUTME: Core data models for the recipe analysis domain
// ABOUTME: Re-exports Recipe, RecipeIngredient, BeerStyleGuideline, and RecipeMetrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wortsmith Brewing Intelligence

//! Domain models shared by all analysis engines.
//!
//! Recipes and ingredients are owned by the caller (editor state) and passed
//! into the core on every recalculation. Metrics and style guidelines are
//! value types; nothing in this module touches storage.

mod ingredient;
mod metrics;
mod recipe;
mod style;

pub use ingredient::{GrainType, HopUse, IngredientKind, RecipeIngredient};
pub use metrics::{MetricField, RecipeMetrics};
pub use recipe::Recipe;
pub use style::{BeerStyleGuideline, StyleRange};
