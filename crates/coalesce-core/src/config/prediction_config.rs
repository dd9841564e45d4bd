use serde::{Deserialize, Serialize};

use super::defaults;

/// Learning backend availability, fixed when the model is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningBackend {
    #[default]
    Native,
    Disabled,
}

/// Predictive model configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    pub backend: LearningBackend,
    /// Predictions at or below this probability are dropped.
    pub probability_cutoff: f64,
    /// Recorded similarity above this labels a sample positive.
    pub label_threshold: f64,
    pub min_training_samples: usize,
    /// Share of samples held out for accuracy measurement.
    pub test_fraction: f64,
    pub epochs: usize,
    pub learning_rate: f64,
    pub l2_penalty: f64,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            backend: LearningBackend::default(),
            probability_cutoff: defaults::DEFAULT_PROBABILITY_CUTOFF,
            label_threshold: defaults::DEFAULT_LABEL_THRESHOLD,
            min_training_samples: defaults::DEFAULT_MIN_TRAINING_SAMPLES,
            test_fraction: defaults::DEFAULT_TEST_FRACTION,
            epochs: defaults::DEFAULT_EPOCHS,
            learning_rate: defaults::DEFAULT_LEARNING_RATE,
            l2_penalty: defaults::DEFAULT_L2_PENALTY,
        }
    }
}
