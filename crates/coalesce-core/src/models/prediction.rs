use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ClassifierKind;

/// Prediction input: source-unit id to feature vector.
pub type FeatureMap = BTreeMap<String, Vec<f64>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionReasoning {
    MlPrediction,
    Heuristic,
}

/// A forecast that a unit will become a consolidation candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub source_unit_id: String,
    pub probability: f64,
    pub confidence: f64,
    pub reasoning: PredictionReasoning,
}

/// An input entry that could not be scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRejection {
    pub source_unit_id: String,
    pub reason: String,
}

/// Result of one `predict` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionBatch {
    /// Sorted by probability descending.
    pub predictions: Vec<Prediction>,
    pub rejections: Vec<PredictionRejection>,
    pub classifier: ClassifierKind,
    pub model_version: u64,
    /// Confidence of the classifier that produced this batch.
    pub confidence: f64,
}

impl PredictionBatch {
    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }
}
