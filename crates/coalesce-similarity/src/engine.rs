//! SimilarityEngine: scores pattern pairs and surfaces consolidation candidates.

use std::borrow::Borrow;

use coalesce_core::config::{defaults, SimilarityConfig};
use coalesce_core::models::{ConsolidationOpportunity, SemanticPattern};
use tracing::debug;

use crate::cosine::sparse_cosine;
use crate::discovery;

#[derive(Debug, Clone, Default)]
pub struct SimilarityEngine {
    config: SimilarityConfig,
}

impl SimilarityEngine {
    pub fn new(config: SimilarityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimilarityConfig {
        &self.config
    }

    /// Similarity in [0, 1]. Symmetric.
    ///
    /// Cosine over the term vectors when both have features; otherwise
    /// 0.8 for matching categories and 0.3 for differing ones.
    pub fn similarity(&self, a: &SemanticPattern, b: &SemanticPattern) -> f64 {
        similarity(a, b)
    }

    /// All unordered pairs scoring above the discovery threshold,
    /// best first. Cost is quadratic in the number of distinct ids.
    pub fn discover_opportunities<P>(&self, patterns: &[P]) -> Vec<ConsolidationOpportunity>
    where
        P: Borrow<SemanticPattern> + Sync,
    {
        let opportunities = discovery::all_pairs(
            patterns,
            self.config.discovery_threshold,
            self.config.high_priority_threshold,
        );
        debug!(
            patterns = patterns.len(),
            opportunities = opportunities.len(),
            threshold = self.config.discovery_threshold,
            "opportunity discovery complete"
        );
        opportunities
    }
}

/// Free-function form of [`SimilarityEngine::similarity`].
pub fn similarity(a: &SemanticPattern, b: &SemanticPattern) -> f64 {
    match sparse_cosine(&a.vector, &b.vector) {
        Some(score) => score,
        None if a.functional_category == b.functional_category => {
            defaults::SAME_CATEGORY_SIMILARITY
        }
        None => defaults::CROSS_CATEGORY_SIMILARITY,
    }
}
