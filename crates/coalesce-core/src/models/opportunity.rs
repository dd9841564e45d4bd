use serde::{Deserialize, Serialize};

use super::FunctionalCategory;
use crate::config::defaults;

/// Urgency of a consolidation candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
}

impl Priority {
    /// `High` strictly above the high-priority threshold, `Medium` otherwise.
    pub fn from_score(score: f64, high_threshold: f64) -> Self {
        if score > high_threshold {
            Self::High
        } else {
            Self::Medium
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsolidationType {
    SemanticMerge,
}

/// A pair of patterns similar enough to be merged.
///
/// Always canonical: `id_a < id_b` lexically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsolidationOpportunity {
    pub id_a: String,
    pub id_b: String,
    pub similarity_score: f64,
    pub priority: Priority,
    pub category: FunctionalCategory,
    pub consolidation_type: ConsolidationType,
}

impl ConsolidationOpportunity {
    /// Build a canonical opportunity; ids are swapped when out of order.
    pub fn new(
        id_a: &str,
        id_b: &str,
        similarity_score: f64,
        category: FunctionalCategory,
        high_threshold: f64,
    ) -> Self {
        let (id_a, id_b) = if id_a <= id_b { (id_a, id_b) } else { (id_b, id_a) };
        Self {
            id_a: id_a.to_string(),
            id_b: id_b.to_string(),
            similarity_score,
            priority: Priority::from_score(similarity_score, high_threshold),
            category,
            consolidation_type: ConsolidationType::SemanticMerge,
        }
    }

    /// Same as [`Self::new`] with the default high-priority threshold.
    pub fn with_default_priority(
        id_a: &str,
        id_b: &str,
        similarity_score: f64,
        category: FunctionalCategory,
    ) -> Self {
        Self::new(
            id_a,
            id_b,
            similarity_score,
            category,
            defaults::DEFAULT_HIGH_PRIORITY_THRESHOLD,
        )
    }
}
