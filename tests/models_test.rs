// ABOUTME: Tests for domain model serialization and validation
// ABOUTME: Validates the tagged ingredient wire format and invariant checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wortsmith Brewing Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use wortsmith::models::{
    GrainType, HopUse, IngredientKind, Recipe, RecipeIngredient, RecipeMetrics,
};

#[test]
fn test_grain_serializes_with_kind_tag() {
    let grain =
        RecipeIngredient::grain("Maris Otter", 9.0, "lb", GrainType::BaseMalt, 1.038, 3.0);
    let json = serde_json::to_value(&grain).unwrap();

    assert_eq!(json["type"], "grain");
    assert_eq!(json["grain_type"], "base_malt");
    assert_eq!(json["name"], "Maris Otter");
    assert_eq!(json["unit"], "lb");
}

#[test]
fn test_hop_serializes_use_field() {
    let hop = RecipeIngredient::hop("Cascade", 1.0, "oz", HopUse::Boil, Some(60.0), 6.0);
    let json = serde_json::to_value(&hop).unwrap();

    assert_eq!(json["type"], "hop");
    assert_eq!(json["use"], "boil");
    assert_eq!(json["time_minutes"], 60.0);
}

#[test]
fn test_ingredient_round_trip() {
    let yeast = RecipeIngredient::yeast("WLP001", 1.0, "oz", 78.0);
    let json = serde_json::to_string(&yeast).unwrap();
    let back: RecipeIngredient = serde_json::from_str(&json).unwrap();

    assert_eq!(back.id, yeast.id);
    match back.kind {
        IngredientKind::Yeast {
            attenuation_percent,
        } => assert!((attenuation_percent - 78.0).abs() < 1e-9),
        other => panic!("wrong kind after round trip: {other:?}"),
    }
}

#[test]
fn test_recipe_defaults() {
    let recipe = Recipe::new("House Pale");
    assert_eq!(recipe.batch_unit, "gal");
    assert!((recipe.batch_size - 5.0).abs() < 1e-9);
    assert!((recipe.efficiency_percent - 75.0).abs() < 1e-9);
    assert!(!recipe.is_public);
    assert!(recipe.validate().is_ok());
}

#[test]
fn test_recipe_rejects_bad_efficiency() {
    let mut recipe = Recipe::new("Broken");
    recipe.efficiency_percent = 0.0;
    assert!(recipe.validate().is_err());
    recipe.efficiency_percent = 101.0;
    assert!(recipe.validate().is_err());
}

#[test]
fn test_ingredient_kind_predicates() {
    let grain = RecipeIngredient::grain("Pale", 8.0, "lb", GrainType::BaseMalt, 1.037, 2.0);
    let hop = RecipeIngredient::hop("Citra", 1.0, "oz", HopUse::DryHop, None, 12.0);
    let yeast = RecipeIngredient::yeast("US-05", 10.0, "g", 75.0);

    assert!(grain.is_grain() && !grain.is_hop());
    assert!(hop.is_hop() && !hop.is_yeast());
    assert!(yeast.is_yeast() && !yeast.is_grain());
}

#[test]
fn test_metrics_gravity_points() {
    let metrics = RecipeMetrics {
        og: 1.049,
        fg: 1.012,
        abv: 4.9,
        ibu: 35.0,
        srm: 5.0,
    };
    assert!((metrics.og_points() - 49.0).abs() < 1e-9);
    assert!((metrics.fg_points() - 12.0).abs() < 1e-9);
}

#[test]
fn test_empty_metrics_are_water() {
    let metrics = RecipeMetrics::empty();
    assert!((metrics.og - 1.0).abs() < 1e-12);
    assert!((metrics.fg - 1.0).abs() < 1e-12);
    assert!((metrics.abv).abs() < 1e-12);
    assert_eq!(metrics, RecipeMetrics::default());
}
