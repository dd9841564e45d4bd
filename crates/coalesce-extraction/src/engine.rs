//! FeatureExtractor: structural parse first, raw-token fallback second.

use coalesce_core::config::{defaults, ExtractionConfig};
use coalesce_core::errors::ParseError;
use coalesce_core::models::{ComplexityTier, ExtractionMode, SemanticPattern, TermVector};
use coalesce_core::SourceUnit;
use rayon::prelude::*;
use tracing::debug;

use crate::categorize::categorize;
use crate::{fallback, structural};

/// Stateless extractor. Safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct FeatureExtractor {
    config: ExtractionConfig,
}

impl FeatureExtractor {
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Extract a pattern. Never fails: parse problems degrade confidence.
    pub fn extract(&self, unit: &SourceUnit) -> SemanticPattern {
        match self.try_structural(unit) {
            Ok(scan) => {
                let category = categorize(&scan.tokens);
                SemanticPattern {
                    id: unit.id.clone(),
                    content_hash: unit.content_hash.clone(),
                    vector: TermVector::from_tokens(scan.tokens),
                    functional_category: category,
                    complexity_tier: ComplexityTier::from_node_count(scan.named_nodes),
                    confidence: defaults::STRUCTURAL_CONFIDENCE,
                    extraction: ExtractionMode::Structural,
                }
            }
            Err(err) => {
                debug!(unit_id = %unit.id, error = %err, "structural parse failed, using token fallback");
                self.fallback(unit)
            }
        }
    }

    /// Extract many units in parallel, preserving input order.
    pub fn extract_batch(&self, units: &[SourceUnit]) -> Vec<SemanticPattern> {
        units.par_iter().map(|u| self.extract(u)).collect()
    }

    fn try_structural(&self, unit: &SourceUnit) -> Result<structural::StructuralScan, ParseError> {
        if unit.byte_len() > self.config.max_source_bytes {
            return Err(ParseError::TooLarge {
                unit_id: unit.id.clone(),
                bytes: unit.byte_len(),
                limit: self.config.max_source_bytes,
            });
        }
        structural::scan(&unit.id, &unit.text, self.config.max_tokens)
    }

    fn fallback(&self, unit: &SourceUnit) -> SemanticPattern {
        let text = fallback::truncate_to_boundary(&unit.text, self.config.max_source_bytes);
        let tokens = fallback::tokenize(text, self.config.max_tokens);
        let category = categorize(&tokens);
        SemanticPattern {
            id: unit.id.clone(),
            content_hash: unit.content_hash.clone(),
            vector: TermVector::from_tokens(tokens),
            functional_category: category,
            complexity_tier: ComplexityTier::Medium,
            confidence: defaults::FALLBACK_CONFIDENCE,
            extraction: ExtractionMode::Fallback,
        }
    }
}
