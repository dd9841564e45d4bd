use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// Sparse term-frequency vector keyed by lowercased symbol.
///
/// Backed by a `BTreeMap` so iteration order is the sorted key order,
/// which keeps every accumulation over it deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermVector(BTreeMap<String, f64>);

impl TermVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count occurrences of each token.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut terms = BTreeMap::new();
        for token in tokens {
            *terms.entry(token.into()).or_insert(0.0) += 1.0;
        }
        Self(terms)
    }

    pub fn insert(&mut self, term: impl Into<String>, weight: f64) {
        self.0.insert(term.into(), weight);
    }

    pub fn get(&self, term: &str) -> Option<f64> {
        self.0.get(term).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate `(term, weight)` in sorted term order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl FromIterator<(String, f64)> for TermVector {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Functional category assigned by the keyword ruleset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionalCategory {
    DatabaseOperations,
    WebInterface,
    OptimizationEngine,
    DataAnalysis,
    MonitoringSystem,
    GeneralUtility,
}

impl FunctionalCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DatabaseOperations => "database_operations",
            Self::WebInterface => "web_interface",
            Self::OptimizationEngine => "optimization_engine",
            Self::DataAnalysis => "data_analysis",
            Self::MonitoringSystem => "monitoring_system",
            Self::GeneralUtility => "general_utility",
        }
    }
}

impl fmt::Display for FunctionalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural size bucket, ordered `Low < Medium < High < Enterprise`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityTier {
    Low,
    Medium,
    High,
    Enterprise,
}

impl ComplexityTier {
    /// Bucket a parse-tree node count.
    pub fn from_node_count(nodes: usize) -> Self {
        if nodes < defaults::TIER_LOW_MAX_NODES {
            Self::Low
        } else if nodes < defaults::TIER_MEDIUM_MAX_NODES {
            Self::Medium
        } else if nodes < defaults::TIER_HIGH_MAX_NODES {
            Self::High
        } else {
            Self::Enterprise
        }
    }
}

/// Which path produced a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMode {
    Structural,
    Fallback,
}

/// Feature representation of one `SourceUnit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticPattern {
    /// Same id as the originating `SourceUnit`.
    pub id: String,
    pub content_hash: String,
    pub vector: TermVector,
    pub functional_category: FunctionalCategory,
    pub complexity_tier: ComplexityTier,
    /// 0.0–1.0; lowered when the structural parse failed.
    pub confidence: f64,
    pub extraction: ExtractionMode,
}
