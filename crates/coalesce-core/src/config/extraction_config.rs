use serde::{Deserialize, Serialize};

use super::defaults;

/// Feature extraction limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Units larger than this skip the structural parse.
    pub max_source_bytes: usize,
    /// Cap on collected tokens per unit.
    pub max_tokens: usize,
    /// Entries kept by the pattern cache.
    pub cache_capacity: u64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_source_bytes: defaults::DEFAULT_MAX_SOURCE_BYTES,
            max_tokens: defaults::DEFAULT_MAX_TOKENS,
            cache_capacity: defaults::DEFAULT_PATTERN_CACHE_CAPACITY,
        }
    }
}
