//! Pattern cache keyed by unit id, validated by content hash.
//!
//! Uses `moka::sync::Cache`. A cached pattern is reused only while the
//! unit's content hash is unchanged; otherwise it is re-extracted and
//! replaced. Tracks hits/misses for engine metrics.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use coalesce_core::models::SemanticPattern;
use coalesce_core::SourceUnit;
use moka::sync::Cache;
use rayon::prelude::*;

use crate::engine::FeatureExtractor;

pub struct PatternCache {
    cache: Cache<String, Arc<SemanticPattern>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl PatternCache {
    pub fn new(max_entries: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(max_entries).build(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Return the cached pattern for `unit`, extracting when absent or stale.
    pub fn get_or_extract(
        &self,
        unit: &SourceUnit,
        extractor: &FeatureExtractor,
    ) -> Arc<SemanticPattern> {
        if let Some(pattern) = self.cache.get(&unit.id) {
            if pattern.content_hash == unit.content_hash {
                self.hits.fetch_add(1, Ordering::Relaxed);
                return pattern;
            }
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        let pattern = Arc::new(extractor.extract(unit));
        self.cache.insert(unit.id.clone(), Arc::clone(&pattern));
        pattern
    }

    /// Cache-aware parallel extraction, preserving input order.
    pub fn get_or_extract_batch(
        &self,
        units: &[SourceUnit],
        extractor: &FeatureExtractor,
    ) -> Vec<Arc<SemanticPattern>> {
        units
            .par_iter()
            .map(|u| self.get_or_extract(u, extractor))
            .collect()
    }

    /// Look up a registered pattern without touching the hit/miss counters.
    pub fn lookup(&self, id: &str) -> Option<Arc<SemanticPattern>> {
        self.cache.get(id)
    }

    pub fn invalidate(&self, id: &str) {
        self.cache.invalidate(id);
    }

    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Approximate entry count after flushing pending maintenance.
    pub fn len(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Cache hit rate (0.0–1.0).
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits();
        let total = hits + self.misses();
        if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        }
    }
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::new(coalesce_core::config::defaults::DEFAULT_PATTERN_CACHE_CAPACITY)
    }
}
