// ABOUTME: Derived recipe metrics snapshot (OG, FG, ABV, IBU, SRM)
// ABOUTME: Immutable output of the metrics calculator, recomputed on every change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wortsmith Brewing Intelligence

//! Derived metrics snapshot.

use serde::{Deserialize, Serialize};

use crate::constants::gravity::POINTS_PER_GRAVITY_UNIT;

/// Derived brewing metrics for a recipe.
///
/// All values are non-negative and `fg <= og`. Instances are immutable
/// snapshots; callers recompute rather than mutate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecipeMetrics {
    /// Original gravity (specific gravity, e.g. 1.049)
    pub og: f64,
    /// Final gravity (specific gravity)
    pub fg: f64,
    /// Alcohol by volume, percent
    pub abv: f64,
    /// International bitterness units
    pub ibu: f64,
    /// Standard Reference Method color
    pub srm: f64,
}

impl RecipeMetrics {
    /// Baseline metrics for an empty recipe: water
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            og: 1.0,
            fg: 1.0,
            abv: 0.0,
            ibu: 0.0,
            srm: 0.0,
        }
    }

    /// OG expressed in gravity points (1.049 -> 49.0)
    #[must_use]
    pub fn og_points(&self) -> f64 {
        (self.og - 1.0) * POINTS_PER_GRAVITY_UNIT
    }

    /// FG expressed in gravity points
    #[must_use]
    pub fn fg_points(&self) -> f64 {
        (self.fg - 1.0) * POINTS_PER_GRAVITY_UNIT
    }

    /// Read a metric by field, for exhaustive per-metric iteration
    #[must_use]
    pub const fn get(&self, field: MetricField) -> f64 {
        match field {
            MetricField::Og => self.og,
            MetricField::Fg => self.fg,
            MetricField::Abv => self.abv,
            MetricField::Ibu => self.ibu,
            MetricField::Srm => self.srm,
        }
    }
}

impl Default for RecipeMetrics {
    fn default() -> Self {
        Self::empty()
    }
}

/// The five derived metric fields, used for per-metric scoring and reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricField {
    /// Original gravity
    Og,
    /// Final gravity
    Fg,
    /// Alcohol by volume
    Abv,
    /// Bitterness
    Ibu,
    /// Color
    Srm,
}

impl MetricField {
    /// All metric fields in canonical order
    pub const ALL: [Self; 5] = [Self::Og, Self::Fg, Self::Abv, Self::Ibu, Self::Srm];

    /// Short uppercase label for display ("OG", "IBU", ...)
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Og => "OG",
            Self::Fg => "FG",
            Self::Abv => "ABV",
            Self::Ibu => "IBU",
            Self::Srm => "SRM",
        }
    }

    /// Stable lowercase key used in dedup keys and serialized output
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Og => "og",
            Self::Fg => "fg",
            Self::Abv => "abv",
            Self::Ibu => "ibu",
            Self::Srm => "srm",
        }
    }
}
