// ABOUTME: Tests for the suggestion engine's analyzers and merge behavior
// ABOUTME: Validates normalization, missing classes, style alignment, balance, and dedup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wortsmith Brewing Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use wortsmith::config::SuggestionConfig;
use wortsmith::intelligence::{
    MatchFactors, StyleMatch, SuggestionEngine, SuggestionKind,
};
use wortsmith::models::{
    BeerStyleGuideline, GrainType, HopUse, Recipe, RecipeIngredient, RecipeMetrics, StyleRange,
};

fn recipe() -> Recipe {
    Recipe::new("Test Batch")
}

fn pale_malt(pounds: f64) -> RecipeIngredient {
    RecipeIngredient::grain("Pale Malt", pounds, "lb", GrainType::BaseMalt, 1.037, 2.0)
}

fn boil_hop(ounces: f64) -> RecipeIngredient {
    RecipeIngredient::hop("Cascade", ounces, "oz", HopUse::Boil, Some(60.0), 6.0)
}

fn ale_yeast() -> RecipeIngredient {
    RecipeIngredient::yeast("US-05", 10.0, "g", 75.0)
}

fn sane_metrics() -> RecipeMetrics {
    RecipeMetrics {
        og: 1.050,
        fg: 1.012,
        abv: 5.0,
        ibu: 30.0,
        srm: 6.0,
    }
}

fn ibu_only_style(min: f64, max: f64) -> BeerStyleGuideline {
    BeerStyleGuideline {
        id: "21A".into(),
        name: "American IPA".into(),
        category: "IPA".into(),
        og_range: None,
        fg_range: None,
        abv_range: None,
        ibu_range: Some(StyleRange::new(min, max)),
        srm_range: None,
        tags: vec![],
    }
}

fn strong_match(style: BeerStyleGuideline) -> StyleMatch {
    StyleMatch {
        style,
        score: 0.9,
        factors: MatchFactors::default(),
    }
}

#[test]
fn test_no_metrics_yields_nothing() {
    let engine = SuggestionEngine::new();
    let out = engine.analyze(&recipe(), &[pale_malt(8.0)], None, &[]);
    assert!(out.is_empty());
}

#[test]
fn test_no_ingredients_yields_nothing() {
    let engine = SuggestionEngine::new();
    let out = engine.analyze(&recipe(), &[], Some(&sane_metrics()), &[]);
    assert!(out.is_empty());
}

#[test]
fn test_missing_yeast_flagged_once() {
    let engine = SuggestionEngine::new();
    let ingredients = [pale_malt(8.0), boil_hop(1.0)];
    let out = engine.analyze(&recipe(), &ingredients, Some(&sane_metrics()), &[]);

    let missing: Vec<_> = out
        .iter()
        .filter(|s| s.kind == SuggestionKind::MissingIngredient)
        .collect();
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].dedup_key, "missing_ingredient:yeast");
    assert_eq!(missing[0].priority, 1);
    assert!(!missing[0].is_applicable());
}

#[test]
fn test_missing_hops_flagged() {
    let engine = SuggestionEngine::new();
    let ingredients = [pale_malt(8.0), ale_yeast()];
    let out = engine.analyze(&recipe(), &ingredients, Some(&sane_metrics()), &[]);

    let missing: Vec<_> = out
        .iter()
        .filter(|s| s.kind == SuggestionKind::MissingIngredient)
        .collect();
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].dedup_key, "missing_ingredient:hops");
    assert_eq!(missing[0].priority, 2);
}

#[test]
fn test_unround_amount_gets_normalization_patch() {
    let engine = SuggestionEngine::new();
    let grain = pale_malt(8.73);
    let grain_id = grain.id;
    let ingredients = [grain, boil_hop(1.0), ale_yeast()];
    let out = engine.analyze(&recipe(), &ingredients, Some(&sane_metrics()), &[]);

    let normalize: Vec<_> = out
        .iter()
        .filter(|s| s.kind == SuggestionKind::NormalizeAmount)
        .collect();
    assert_eq!(normalize.len(), 1);
    assert!(normalize[0].is_applicable());
    let patch = normalize[0].patch[0];
    assert_eq!(patch.ingredient_id, grain_id);
    assert!((patch.amount.unwrap() - 8.75).abs() < 1e-9);
}

#[test]
fn test_round_amounts_not_flagged() {
    let engine = SuggestionEngine::new();
    let ingredients = [pale_malt(8.75), boil_hop(1.0), ale_yeast()];
    let out = engine.analyze(&recipe(), &ingredients, Some(&sane_metrics()), &[]);
    assert!(out
        .iter()
        .all(|s| s.kind != SuggestionKind::NormalizeAmount));
}

#[test]
fn test_gram_amounts_round_to_ten() {
    let engine = SuggestionEngine::new();
    let mut yeast = ale_yeast();
    yeast.amount = 11.5;
    let yeast_id = yeast.id;
    let ingredients = [pale_malt(8.0), boil_hop(1.0), yeast];
    let out = engine.analyze(&recipe(), &ingredients, Some(&sane_metrics()), &[]);

    let normalize = out
        .iter()
        .find(|s| s.kind == SuggestionKind::NormalizeAmount)
        .unwrap();
    assert_eq!(normalize.patch[0].ingredient_id, yeast_id);
    assert!((normalize.patch[0].amount.unwrap() - 10.0).abs() < 1e-9);
}

#[test]
fn test_low_ibu_gets_hop_scaling_patch() {
    let engine = SuggestionEngine::new();
    let hop = boil_hop(1.0);
    let hop_id = hop.id;
    let ingredients = [pale_malt(8.0), hop, ale_yeast()];
    let mut metrics = sane_metrics();
    metrics.ibu = 20.0;

    let matches = [strong_match(ibu_only_style(40.0, 70.0))];
    let out = engine.analyze(&recipe(), &ingredients, Some(&metrics), &matches);

    let alignment = out
        .iter()
        .find(|s| s.kind == SuggestionKind::StyleAlignment)
        .unwrap();
    assert_eq!(alignment.priority, 4);
    assert!(alignment.description.contains("below"));
    // Scaling 20 IBU to the 40 IBU lower bound doubles the boil hop
    assert_eq!(alignment.patch.len(), 1);
    assert_eq!(alignment.patch[0].ingredient_id, hop_id);
    assert!((alignment.patch[0].amount.unwrap() - 2.0).abs() < 1e-9);
}

#[test]
fn test_high_ibu_scales_hops_down() {
    let engine = SuggestionEngine::new();
    let hop = boil_hop(2.0);
    let ingredients = [pale_malt(8.0), hop, ale_yeast()];
    let mut metrics = sane_metrics();
    metrics.ibu = 80.0;

    let matches = [strong_match(ibu_only_style(20.0, 40.0))];
    let out = engine.analyze(&recipe(), &ingredients, Some(&metrics), &matches);

    let alignment = out
        .iter()
        .find(|s| s.kind == SuggestionKind::StyleAlignment)
        .unwrap();
    assert!(alignment.description.contains("above"));
    // 80 IBU scaled to the 40 IBU upper bound halves the addition
    assert!((alignment.patch[0].amount.unwrap() - 1.0).abs() < 1e-9);
}

#[test]
fn test_weak_match_gives_no_alignment() {
    let engine = SuggestionEngine::new();
    let ingredients = [pale_malt(8.0), boil_hop(1.0), ale_yeast()];
    let mut metrics = sane_metrics();
    metrics.ibu = 20.0;

    let weak = StyleMatch {
        style: ibu_only_style(40.0, 70.0),
        score: 0.1,
        factors: MatchFactors::default(),
    };
    let out = engine.analyze(&recipe(), &ingredients, Some(&metrics), &[weak]);
    assert!(out
        .iter()
        .all(|s| s.kind != SuggestionKind::StyleAlignment));
}

#[test]
fn test_metrics_in_range_give_no_alignment() {
    let engine = SuggestionEngine::new();
    let ingredients = [pale_malt(8.0), boil_hop(1.0), ale_yeast()];
    let matches = [strong_match(ibu_only_style(20.0, 40.0))];
    let out = engine.analyze(&recipe(), &ingredients, Some(&sane_metrics()), &matches);
    assert!(out
        .iter()
        .all(|s| s.kind != SuggestionKind::StyleAlignment));
}

#[test]
fn test_malty_balance_flagged() {
    let engine = SuggestionEngine::new();
    let ingredients = [pale_malt(8.0), boil_hop(1.0), ale_yeast()];
    let mut metrics = sane_metrics();
    metrics.og = 1.060; // 60 points
    metrics.ibu = 10.0; // ratio 0.17, below the band

    let out = engine.analyze(&recipe(), &ingredients, Some(&metrics), &[]);
    let balance = out
        .iter()
        .find(|s| s.kind == SuggestionKind::BalanceAdjustment)
        .unwrap();
    assert_eq!(balance.priority, 5);
    assert!(!balance.is_applicable());
    assert!(balance.description.contains("malt"));
}

#[test]
fn test_balanced_ratio_not_flagged() {
    let engine = SuggestionEngine::new();
    let ingredients = [pale_malt(8.0), boil_hop(1.0), ale_yeast()];
    // ratio = 30 / 50 = 0.6, inside the band
    let out = engine.analyze(&recipe(), &ingredients, Some(&sane_metrics()), &[]);
    assert!(out
        .iter()
        .all(|s| s.kind != SuggestionKind::BalanceAdjustment));
}

#[test]
fn test_suggestions_sorted_by_priority() {
    let engine = SuggestionEngine::new();
    // Missing yeast (1), unround grain (3), balance (5)
    let ingredients = [pale_malt(8.73), boil_hop(1.0)];
    let mut metrics = sane_metrics();
    metrics.og = 1.060;
    metrics.ibu = 5.0;

    let out = engine.analyze(&recipe(), &ingredients, Some(&metrics), &[]);
    assert!(out.len() >= 3);
    for pair in out.windows(2) {
        assert!(pair[0].priority <= pair[1].priority);
    }
    assert_eq!(out[0].kind, SuggestionKind::MissingIngredient);
}

#[test]
fn test_analysis_is_idempotent() {
    let engine = SuggestionEngine::new();
    let ingredients = [pale_malt(8.73), boil_hop(1.0)];
    let metrics = sane_metrics();

    let first = engine.analyze(&recipe(), &ingredients, Some(&metrics), &[]);
    let second = engine.analyze(&recipe(), &ingredients, Some(&metrics), &[]);

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.dedup_key, b.dedup_key);
        assert_eq!(a.priority, b.priority);
    }
}

#[test]
fn test_duplicate_keys_collapse() {
    let engine = SuggestionEngine::new();
    let ingredients = [pale_malt(8.73), boil_hop(1.0), ale_yeast()];
    let out = engine.analyze(&recipe(), &ingredients, Some(&sane_metrics()), &[]);

    let keys: std::collections::HashSet<&str> =
        out.iter().map(|s| s.dedup_key.as_str()).collect();
    assert_eq!(keys.len(), out.len());
}

#[test]
fn test_suggestion_cap_respected() {
    let config = SuggestionConfig {
        max_suggestions: 2,
        ..SuggestionConfig::default()
    };
    let engine = SuggestionEngine::with_config(config);
    // Three unround grains plus missing yeast and hops would exceed the cap
    let ingredients = [pale_malt(8.73), pale_malt(4.12), pale_malt(2.61)];
    let out = engine.analyze(&recipe(), &ingredients, Some(&sane_metrics()), &[]);
    assert_eq!(out.len(), 2);
    // The cap keeps the most urgent findings
    assert_eq!(out[0].kind, SuggestionKind::MissingIngredient);
    assert_eq!(out[1].kind, SuggestionKind::MissingIngredient);
}
