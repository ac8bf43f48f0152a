// ABOUTME: Canonical unit conversion between measurement systems
// ABOUTME: Weight (g/oz/lb/kg), volume (ml/l/qt/gal), and temperature (C/F)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wortsmith Brewing Intelligence

//! Unit conversion for recipe quantities.
//!
//! All conversions go through a canonical base unit per dimension (grams,
//! milliliters, Celsius). Unknown unit/dimension pairs fail with
//! [`AppError::UnsupportedUnit`]; nothing is silently defaulted.

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Grams per ounce
const GRAMS_PER_OUNCE: f64 = 28.3495;
/// Grams per pound
const GRAMS_PER_POUND: f64 = 453.592;
/// Grams per kilogram
const GRAMS_PER_KILOGRAM: f64 = 1000.0;

/// Milliliters per liter
const ML_PER_LITER: f64 = 1000.0;
/// Milliliters per quart (US)
const ML_PER_QUART: f64 = 946.353;
/// Milliliters per gallon (US)
const ML_PER_GALLON: f64 = 3785.41;

/// Measurement dimension for a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Mass units: g, oz, lb, kg
    Weight,
    /// Liquid volume units: ml, l, qt, gal
    Volume,
    /// Temperature units: C, F
    Temperature,
}

impl Dimension {
    /// Stable lowercase name used in error messages
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Volume => "volume",
            Self::Temperature => "temperature",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converter between measurement systems. Pure and stateless.
pub struct UnitConverter;

impl UnitConverter {
    /// Convert `value` from one unit to another within a dimension.
    ///
    /// # Errors
    /// Returns [`AppError::UnsupportedUnit`] when either unit is unknown for
    /// the dimension.
    pub fn convert(value: f64, from: &str, to: &str, dimension: Dimension) -> AppResult<f64> {
        match dimension {
            Dimension::Weight => {
                let from_factor = Self::grams_per_unit(from)
                    .ok_or_else(|| AppError::unsupported_unit(from, dimension.as_str()))?;
                let to_factor = Self::grams_per_unit(to)
                    .ok_or_else(|| AppError::unsupported_unit(to, dimension.as_str()))?;
                Ok(value * from_factor / to_factor)
            }
            Dimension::Volume => {
                let from_factor = Self::ml_per_unit(from)
                    .ok_or_else(|| AppError::unsupported_unit(from, dimension.as_str()))?;
                let to_factor = Self::ml_per_unit(to)
                    .ok_or_else(|| AppError::unsupported_unit(to, dimension.as_str()))?;
                Ok(value * from_factor / to_factor)
            }
            Dimension::Temperature => {
                let celsius = Self::to_celsius(value, from)
                    .ok_or_else(|| AppError::unsupported_unit(from, dimension.as_str()))?;
                Self::from_celsius(celsius, to)
                    .ok_or_else(|| AppError::unsupported_unit(to, dimension.as_str()))
            }
        }
    }

    /// Convert a weight amount to pounds
    ///
    /// # Errors
    /// Returns [`AppError::UnsupportedUnit`] for unknown weight units.
    pub fn to_pounds(amount: f64, unit: &str) -> AppResult<f64> {
        Self::convert(amount, unit, "lb", Dimension::Weight)
    }

    /// Convert a weight amount to ounces
    ///
    /// # Errors
    /// Returns [`AppError::UnsupportedUnit`] for unknown weight units.
    pub fn to_ounces(amount: f64, unit: &str) -> AppResult<f64> {
        Self::convert(amount, unit, "oz", Dimension::Weight)
    }

    /// Convert a volume amount to US gallons
    ///
    /// # Errors
    /// Returns [`AppError::UnsupportedUnit`] for unknown volume units.
    pub fn to_gallons(amount: f64, unit: &str) -> AppResult<f64> {
        Self::convert(amount, unit, "gal", Dimension::Volume)
    }

    /// Whether the unit is a known weight unit
    #[must_use]
    pub fn is_weight_unit(unit: &str) -> bool {
        Self::grams_per_unit(unit).is_some()
    }

    /// Whether the unit is a known volume unit
    #[must_use]
    pub fn is_volume_unit(unit: &str) -> bool {
        Self::ml_per_unit(unit).is_some()
    }

    /// Conversion factor to grams for a weight unit, with common aliases
    fn grams_per_unit(unit: &str) -> Option<f64> {
        match unit.trim().to_lowercase().as_str() {
            "g" | "gram" | "grams" => Some(1.0),
            "kg" | "kilogram" | "kilograms" => Some(GRAMS_PER_KILOGRAM),
            "oz" | "ounce" | "ounces" => Some(GRAMS_PER_OUNCE),
            "lb" | "lbs" | "pound" | "pounds" => Some(GRAMS_PER_POUND),
            _ => None,
        }
    }

    /// Conversion factor to milliliters for a volume unit, with common aliases
    fn ml_per_unit(unit: &str) -> Option<f64> {
        match unit.trim().to_lowercase().as_str() {
            "ml" | "milliliter" | "milliliters" => Some(1.0),
            "l" | "liter" | "liters" | "litre" | "litres" => Some(ML_PER_LITER),
            "qt" | "quart" | "quarts" => Some(ML_PER_QUART),
            "gal" | "gallon" | "gallons" => Some(ML_PER_GALLON),
            _ => None,
        }
    }

    fn to_celsius(value: f64, unit: &str) -> Option<f64> {
        match unit.trim().to_lowercase().as_str() {
            "c" | "celsius" => Some(value),
            "f" | "fahrenheit" => Some((value - 32.0) * 5.0 / 9.0),
            _ => None,
        }
    }

    fn from_celsius(celsius: f64, unit: &str) -> Option<f64> {
        match unit.trim().to_lowercase().as_str() {
            "c" | "celsius" => Some(celsius),
            "f" | "fahrenheit" => Some(celsius.mul_add(9.0 / 5.0, 32.0)),
            _ => None,
        }
    }
}
