use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which classifier variant backs the active model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassifierKind {
    Trained,
    Heuristic,
}

/// Why the heuristic classifier is serving instead of a trained one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicReason {
    /// No training run has been published yet.
    Untrained,
    InsufficientData,
    BackendUnavailable,
    TrainingFailed,
}

impl HeuristicReason {
    /// True when the history was too thin to learn from. Heuristic output
    /// is then held below the prediction cutoff.
    pub fn lacks_evidence(self) -> bool {
        matches!(self, Self::Untrained | Self::InsufficientData)
    }
}

/// Summary of the most recent training run.
///
/// Published as a whole; readers never see a half-updated record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intelligence {
    /// Monotonic per-process version, bumped on every publish.
    pub model_version: u64,
    pub run_id: Uuid,
    pub classifier: ClassifierKind,
    /// Set whenever `classifier` is `Heuristic`.
    pub heuristic_reason: Option<HeuristicReason>,
    pub training_accuracy: f64,
    /// Confidence attached to predictions from this model.
    pub prediction_confidence: f64,
    pub sample_count: usize,
    pub trained_at: DateTime<Utc>,
}
