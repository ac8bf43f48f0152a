// ABOUTME: Brewing recipe intelligence library - metrics, style matching, suggestions
// ABOUTME: Pure analysis core invoked in-process by editor UIs and persistence services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wortsmith Brewing Intelligence

#![deny(unsafe_code)]

//! # Wortsmith
//!
//! Analysis core for homebrewing recipes. Given a recipe and its ingredient
//! list, the crate derives brewing metrics (OG, FG, ABV, IBU, SRM), matches
//! them against a catalog of beer style guidelines, and generates corrective
//! suggestions that a caller can apply back onto the recipe.
//!
//! The crate owns no persistence, rendering, or transport. Recipes and
//! ingredients are passed in by value on every recalculation; metrics, style
//! matches, and suggestions are pure outputs. The only asynchronous boundary
//! is the initial style catalog load through the injected [`catalog::StyleSource`].
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and constructor helpers
//! - **constants**: Brewing constants (gravity, Tinseth IBU, Morey SRM, rounding)
//! - **units**: Weight, volume, and temperature conversion
//! - **models**: Recipe, ingredient, style guideline, and metrics types
//! - **config**: Thresholds and weights for matching and suggestion generation
//! - **catalog**: Cached style guideline catalog with fuzzy search
//! - **intelligence**: Metrics calculator, style matcher, and suggestion engine

/// Unified error handling with standard variants and constructor helpers
pub mod errors;

/// Brewing constants organized by domain (gravity, bitterness, color, rounding)
pub mod constants;

/// Canonical unit conversion between measurement systems
pub mod units;

/// Core data models (Recipe, `RecipeIngredient`, `BeerStyleGuideline`, `RecipeMetrics`)
pub mod models;

/// Analysis configuration (matcher tolerances, suggestion thresholds, search limits)
pub mod config;

/// Style guideline catalog with cached loading and fuzzy search
pub mod catalog;

/// Analysis engines: metrics calculation, style matching, suggestion generation
pub mod intelligence;
