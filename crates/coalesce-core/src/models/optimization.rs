use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of one heuristic optimization cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationCycle {
    /// Monotonic for the process lifetime, starting at 1.
    pub cycle_id: u64,
    pub improvement_delta: f64,
    /// Never decreases between cycles.
    pub cumulative_improvement: f64,
    /// Per-catalogue-entry contribution to `improvement_delta`.
    pub breakdown: BTreeMap<String, f64>,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSource {
    Catalogue,
    Health,
}

/// A ranked optimization suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// 1-based position after ranking.
    pub rank: usize,
    pub kind: String,
    /// Estimated gain in percent.
    pub estimated_improvement: f64,
    pub source: RecommendationSource,
}
