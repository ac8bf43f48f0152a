// ABOUTME: Cached style guideline catalog with async loading and fuzzy search
// ABOUTME: Load-on-miss, explicit refresh, and graceful degradation on source failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wortsmith Brewing Intelligence

//! Style catalog.
//!
//! Guidelines come from a pluggable async [`StyleSource`] and are cached in
//! memory after the first successful load. A load failure never poisons the
//! cache: the error is reported, any previously cached snapshot stays
//! available through [`StyleCatalog::cached`], and the next call retries.
//!
//! # Thread Safety
//!
//! The catalog uses `RwLock` internally and is safe to share across tasks
//! via `Arc`.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use strsim::jaro_winkler;
use tracing::{debug, warn};

use crate::config::SearchConfig;
use crate::errors::{AppError, AppResult};
use crate::models::BeerStyleGuideline;

/// Async provider of style guidelines
#[async_trait]
pub trait StyleSource: Send + Sync {
    /// Load the full guideline list from the backing store
    async fn load_styles(&self) -> AppResult<Vec<BeerStyleGuideline>>;
}

/// In-memory [`StyleSource`] backed by a fixed guideline list
#[derive(Debug, Clone, Default)]
pub struct StaticStyleSource {
    styles: Vec<BeerStyleGuideline>,
}

impl StaticStyleSource {
    /// Source serving the given guidelines
    #[must_use]
    pub const fn new(styles: Vec<BeerStyleGuideline>) -> Self {
        Self { styles }
    }
}

#[async_trait]
impl StyleSource for StaticStyleSource {
    async fn load_styles(&self) -> AppResult<Vec<BeerStyleGuideline>> {
        Ok(self.styles.clone())
    }
}

/// One ranked result from a catalog search
#[derive(Debug, Clone)]
pub struct StyleSearchHit {
    /// The matched guideline
    pub style: BeerStyleGuideline,
    /// Jaro-Winkler similarity of the best-matching name or tag
    pub similarity: f64,
}

/// A cached guideline snapshot with its load timestamp
#[derive(Debug, Clone)]
struct CatalogEntry {
    styles: Vec<BeerStyleGuideline>,
    loaded_at: DateTime<Utc>,
}

/// Cached catalog of style guidelines
pub struct StyleCatalog {
    source: Arc<dyn StyleSource>,
    cache: RwLock<Option<CatalogEntry>>,
    config: SearchConfig,
}

impl StyleCatalog {
    /// Catalog over the given source with default search limits
    #[must_use]
    pub fn new(source: Arc<dyn StyleSource>) -> Self {
        Self {
            source,
            cache: RwLock::new(None),
            config: SearchConfig::default(),
        }
    }

    /// Catalog with caller-supplied search limits
    #[must_use]
    pub fn with_config(source: Arc<dyn StyleSource>, config: SearchConfig) -> Self {
        Self {
            source,
            cache: RwLock::new(None),
            config,
        }
    }

    /// All guidelines, loading from the source on a cache miss.
    ///
    /// # Errors
    /// Returns [`crate::errors::AppError::CatalogLoad`] when the cache is
    /// cold and the source fails. The failure is not cached; the next call
    /// retries the source.
    pub async fn list(&self) -> AppResult<Vec<BeerStyleGuideline>> {
        if let Ok(guard) = self.cache.read() {
            if let Some(entry) = guard.as_ref() {
                return Ok(entry.styles.clone());
            }
        }
        self.reload().await
    }

    /// The cached snapshot without touching the source, empty when cold.
    ///
    /// Lets callers degrade gracefully while the source is unavailable.
    #[must_use]
    pub fn cached(&self) -> Vec<BeerStyleGuideline> {
        match self.cache.read() {
            Ok(guard) => guard
                .as_ref()
                .map(|e| e.styles.clone())
                .unwrap_or_default(),
            Err(_) => Vec::new(),
        }
    }

    /// When the cached snapshot was loaded, `None` when cold
    #[must_use]
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.cache
            .read()
            .ok()
            .and_then(|guard| guard.as_ref().map(|e| e.loaded_at))
    }

    /// Force a reload from the source.
    ///
    /// On failure the previous snapshot is kept, so a transient source
    /// outage does not blank an already-working catalog.
    ///
    /// # Errors
    /// Returns [`crate::errors::AppError::CatalogLoad`] when the source fails.
    pub async fn refresh(&self) -> AppResult<Vec<BeerStyleGuideline>> {
        self.reload().await
    }

    /// All guidelines in a category, compared case-insensitively.
    ///
    /// # Errors
    /// Returns [`crate::errors::AppError::CatalogLoad`] when the cache is
    /// cold and the source fails.
    pub async fn styles_in_category(
        &self,
        category: &str,
    ) -> AppResult<Vec<BeerStyleGuideline>> {
        let needle = category.trim().to_lowercase();
        let styles = self.list().await?;
        Ok(styles
            .into_iter()
            .filter(|s| s.category.to_lowercase() == needle)
            .collect())
    }

    /// Fuzzy search over style names and tags, ranked by similarity.
    ///
    /// # Errors
    /// Returns [`crate::errors::AppError::CatalogLoad`] when the cache is
    /// cold and the source fails.
    pub async fn search(&self, term: &str) -> AppResult<Vec<StyleSearchHit>> {
        let styles = self.list().await?;
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }

        let mut hits: Vec<StyleSearchHit> = styles
            .into_iter()
            .filter_map(|style| {
                let similarity = Self::best_similarity(&needle, &style);
                (similarity >= self.config.similarity_threshold)
                    .then_some(StyleSearchHit { style, similarity })
            })
            .collect();

        hits.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        hits.truncate(self.config.max_results);

        debug!(term = %term, hits = hits.len(), "catalog search complete");
        Ok(hits)
    }

    /// Highest similarity between the needle and the style's name or tags
    fn best_similarity(needle: &str, style: &BeerStyleGuideline) -> f64 {
        let name_score = jaro_winkler(needle, &style.name.to_lowercase());
        style
            .tags
            .iter()
            .map(|tag| jaro_winkler(needle, &tag.to_lowercase()))
            .fold(name_score, f64::max)
    }

    /// Load from the source and replace the cached snapshot on success.
    ///
    /// Concurrent loads race benignly: each writes a complete snapshot and
    /// the last write wins.
    async fn reload(&self) -> AppResult<Vec<BeerStyleGuideline>> {
        match self.source.load_styles().await {
            Ok(styles) => {
                debug!(count = styles.len(), "style catalog loaded");
                if let Ok(mut guard) = self.cache.write() {
                    *guard = Some(CatalogEntry {
                        styles: styles.clone(),
                        loaded_at: Utc::now(),
                    });
                }
                Ok(styles)
            }
            Err(err) => {
                warn!(error = %err, "style catalog load failed, keeping previous snapshot");
                Err(AppError::catalog_load(err.to_string()))
            }
        }
    }
}
