// ABOUTME: Brewing constants organized by domain for metric derivation and analysis
// ABOUTME: Gravity, Tinseth bitterness, Morey color, rounding steps, and balance bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wortsmith Brewing Intelligence

//! Brewing constants used across the analysis core.
//!
//! Grouped by the metric they feed. Formula constants are the standard
//! published values (Tinseth for bitterness, Morey for color) so computed
//! metrics line up with the common brewing calculators.

/// Gravity and alcohol derivation constants
pub mod gravity {
    /// Default apparent attenuation (%) assumed when a recipe has no yeast
    pub const DEFAULT_ATTENUATION_PERCENT: f64 = 75.0;

    /// Mainstream ABV approximation factor: `abv = (og - fg) * 131.25`
    pub const ABV_FACTOR: f64 = 131.25;

    /// Gravity points per full specific-gravity unit (1.049 -> 49 points)
    pub const POINTS_PER_GRAVITY_UNIT: f64 = 1000.0;
}

/// Tinseth IBU formula constants (imperial units: ounces, gallons)
pub mod ibu {
    /// Bigness factor coefficient: `1.65 * 0.000125^(boil gravity - 1)`
    pub const BIGNESS_COEFFICIENT: f64 = 1.65;

    /// Bigness factor exponent base
    pub const BIGNESS_BASE: f64 = 0.000_125;

    /// Boil time factor decay rate: `(1 - e^(-0.04 t)) / 4.15`
    pub const TIME_DECAY_RATE: f64 = 0.04;

    /// Boil time factor divisor
    pub const TIME_FACTOR_DIVISOR: f64 = 4.15;

    /// Scaling for alpha acid mass to IBU in imperial units
    pub const IMPERIAL_SCALING: f64 = 7490.0;

    /// Boil-minute credit applied to whirlpool additions
    pub const WHIRLPOOL_CREDIT_MINUTES: f64 = 10.0;
}

/// Morey SRM color equation constants
pub mod srm {
    /// Morey linear coefficient: `srm = 1.4922 * mcu^0.6859`
    pub const MOREY_COEFFICIENT: f64 = 1.4922;

    /// Morey exponent
    pub const MOREY_EXPONENT: f64 = 0.6859;

    /// Physically plausible maximum; darker worts read as black
    pub const MAX_SRM: f64 = 50.0;
}

/// Round-amount steps per unit for amount-normalization suggestions
pub mod rounding {
    /// Step for pounds, ounces, liters, gallons, and quarts
    pub const QUARTER_STEP: f64 = 0.25;

    /// Step for kilograms
    pub const HALF_STEP: f64 = 0.5;

    /// Step for grams
    pub const GRAM_STEP: f64 = 10.0;

    /// Step for milliliters
    pub const MILLILITER_STEP: f64 = 5.0;

    /// Deviation beyond which a normalization suggestion is emitted,
    /// measured in the ingredient's own unit
    pub const DEVIATION_TOLERANCE: f64 = 0.01;
}

/// BU:GU bitterness-to-gravity balance heuristic
pub mod balance {
    /// Below this ratio the beer reads malt-dominant
    pub const BALANCED_BAND_LOW: f64 = 0.3;

    /// Above this ratio the beer reads bitter-dominant
    pub const BALANCED_BAND_HIGH: f64 = 1.1;

    /// Minimum gravity points for the ratio to be meaningful
    pub const MIN_GRAVITY_POINTS: f64 = 1.0;
}
