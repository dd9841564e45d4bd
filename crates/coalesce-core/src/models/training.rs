use serde::{Deserialize, Serialize};

/// Number of engineered features per training sample or prediction input.
pub const FEATURE_DIMENSIONS: usize = 5;

/// One row of the historical outcome store.
///
/// Every measurement is optional: older rows predate some columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalOutcome {
    pub unit_path: String,
    pub category: Option<String>,
    pub importance_score: Option<f64>,
    pub similarity_score: Option<f64>,
    pub size: Option<u64>,
}

/// Labeled, fixed-dimension feature vector derived from a historical outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSample {
    pub unit_path: String,
    pub features: [f64; FEATURE_DIMENSIONS],
    /// True when the recorded similarity exceeded the label threshold.
    pub label: bool,
}
