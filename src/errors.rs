// ABOUTME: Unified error handling for the recipe analysis core
// ABOUTME: Defines AppError variants, constructor helpers, and the AppResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wortsmith Brewing Intelligence

//! # Unified Error Handling
//!
//! Every fallible operation in the crate returns [`AppResult`]. Errors carry
//! enough context for a caller to surface them directly:
//!
//! - [`AppError::InvalidIngredient`] - an ingredient is missing a field its
//!   kind requires; metrics calculation aborts with no partial output
//! - [`AppError::UnsupportedUnit`] - an unknown unit/dimension pair was passed
//!   to the converter; never silently defaulted
//! - [`AppError::InvalidRecipe`] - a recipe-level invariant was violated
//! - [`AppError::CatalogLoad`] - the style source failed; non-fatal downstream,
//!   matching proceeds with whatever catalog is cached

use thiserror::Error;

/// Result type used throughout the crate
pub type AppResult<T> = Result<T, AppError>;

/// Unified error type for the analysis core
#[derive(Debug, Clone, Error)]
pub enum AppError {
    /// An ingredient is invalid for the calculation being performed
    #[error("invalid ingredient '{ingredient}': {reason}")]
    InvalidIngredient {
        /// Name of the offending ingredient
        ingredient: String,
        /// Why the ingredient was rejected
        reason: String,
    },

    /// An unknown unit was passed for the given dimension
    #[error("unsupported unit '{unit}' for dimension {dimension}")]
    UnsupportedUnit {
        /// The unrecognized unit string
        unit: String,
        /// The dimension the conversion was attempted in
        dimension: String,
    },

    /// A recipe-level invariant was violated
    #[error("invalid recipe: {reason}")]
    InvalidRecipe {
        /// Why the recipe was rejected
        reason: String,
    },

    /// The style catalog source failed to load
    #[error("style catalog load failed: {details}")]
    CatalogLoad {
        /// Details about the load failure
        details: String,
    },

    /// Unexpected internal failure
    #[error("internal error: {message}")]
    Internal {
        /// Description of the failure
        message: String,
    },
}

impl AppError {
    /// Create an "invalid ingredient" error
    #[must_use]
    pub fn invalid_ingredient(ingredient: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidIngredient {
            ingredient: ingredient.into(),
            reason: reason.into(),
        }
    }

    /// Create an "unsupported unit" error
    #[must_use]
    pub fn unsupported_unit(unit: impl Into<String>, dimension: impl Into<String>) -> Self {
        Self::UnsupportedUnit {
            unit: unit.into(),
            dimension: dimension.into(),
        }
    }

    /// Create an "invalid recipe" error
    #[must_use]
    pub fn invalid_recipe(reason: impl Into<String>) -> Self {
        Self::InvalidRecipe {
            reason: reason.into(),
        }
    }

    /// Create a "catalog load" error
    #[must_use]
    pub fn catalog_load(details: impl Into<String>) -> Self {
        Self::CatalogLoad {
            details: details.into(),
        }
    }

    /// Create an internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether downstream analysis may continue after this error.
    ///
    /// Catalog load failures are reported but non-fatal: matching and
    /// suggestion generation proceed with the cached (possibly empty) catalog.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::CatalogLoad { .. })
    }
}
