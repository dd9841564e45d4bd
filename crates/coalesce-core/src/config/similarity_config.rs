use serde::{Deserialize, Serialize};

use super::defaults;

/// Similarity scoring and discovery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Pairs must score strictly above this to be reported.
    pub discovery_threshold: f64,
    /// Pairs strictly above this are `High` priority.
    pub high_priority_threshold: f64,
    /// Largest pattern set a single discovery call accepts.
    pub max_batch_patterns: usize,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            discovery_threshold: defaults::DEFAULT_DISCOVERY_THRESHOLD,
            high_priority_threshold: defaults::DEFAULT_HIGH_PRIORITY_THRESHOLD,
            max_batch_patterns: defaults::DEFAULT_MAX_BATCH_PATTERNS,
        }
    }
}
