//! PredictiveModel: training data preparation, training, and prediction.

use std::sync::Arc;

use coalesce_core::config::{defaults, LearningBackend, PredictionConfig};
use coalesce_core::errors::TrainingError;
use coalesce_core::models::{
    ClassifierKind, FeatureMap, HeuristicReason, Intelligence, Prediction, PredictionBatch, PredictionReasoning,
    PredictionRejection, TrainingSample,
};
use coalesce_core::traits::{Classifier, HistoricalStore};
use tracing::{debug, info, warn};

use crate::classifier::{ActiveClassifier, FitOptions, TrainedClassifier};
use crate::features;
use crate::registry::{ActiveModel, ModelRegistry};
use crate::split::train_test_split;

/// The predictive model. Shared by reference; training and prediction may
/// run concurrently, predictions always see one complete model.
#[derive(Debug, Default)]
pub struct PredictiveModel {
    config: PredictionConfig,
    registry: ModelRegistry,
}

impl PredictiveModel {
    /// The learning backend is fixed here for the model's lifetime.
    pub fn new(config: PredictionConfig) -> Self {
        Self {
            config,
            registry: ModelRegistry::new(),
        }
    }

    pub fn backend(&self) -> LearningBackend {
        self.config.backend
    }

    /// Load and engineer training samples. A store that cannot be read
    /// yields an empty set.
    pub fn prepare_training_data(&self, store: &dyn HistoricalStore) -> Vec<TrainingSample> {
        match store.load_outcomes() {
            Ok(outcomes) => {
                let samples: Vec<TrainingSample> = outcomes
                    .iter()
                    .map(|o| features::to_sample(o, self.config.label_threshold))
                    .collect();
                debug!(store = %store.describe(), samples = samples.len(), "training data prepared");
                samples
            }
            Err(e) => {
                warn!(store = %store.describe(), error = %e, "historical store unavailable, no training data");
                Vec::new()
            }
        }
    }

    /// Train and publish a new model. Always publishes exactly one record.
    pub fn train(&self, samples: &[TrainingSample]) -> Intelligence {
        let (classifier, accuracy) = match self.fit(samples) {
            Ok((classifier, accuracy)) => (ActiveClassifier::Trained(classifier), accuracy),
            Err(TrainingError::BackendUnavailable) => {
                info!("learning backend disabled, serving heuristic model");
                (
                    ActiveClassifier::heuristic(HeuristicReason::BackendUnavailable),
                    defaults::NO_BACKEND_ACCURACY,
                )
            }
            Err(e @ TrainingError::InsufficientData { .. }) => {
                warn!(error = %e, "training skipped");
                (
                    ActiveClassifier::heuristic(HeuristicReason::InsufficientData),
                    defaults::INSUFFICIENT_DATA_ACCURACY,
                )
            }
            Err(e @ TrainingError::Diverged { .. }) => {
                warn!(error = %e, "training failed, serving heuristic model");
                (
                    ActiveClassifier::heuristic(HeuristicReason::TrainingFailed),
                    defaults::TRAINING_FAILURE_ACCURACY,
                )
            }
        };

        let intelligence = self.registry.publish(classifier, accuracy, samples.len());
        info!(
            model_version = intelligence.model_version,
            classifier = ?intelligence.classifier,
            heuristic_reason = ?intelligence.heuristic_reason,
            accuracy = intelligence.training_accuracy,
            samples = intelligence.sample_count,
            "model published"
        );
        intelligence
    }

    /// `prepare_training_data` followed by `train`.
    pub fn retrain_from(&self, store: &dyn HistoricalStore) -> Intelligence {
        let samples = self.prepare_training_data(store);
        self.train(&samples)
    }

    fn fit(&self, samples: &[TrainingSample]) -> Result<(TrainedClassifier, f64), TrainingError> {
        if self.config.backend == LearningBackend::Disabled {
            return Err(TrainingError::BackendUnavailable);
        }
        if samples.len() < self.config.min_training_samples {
            return Err(TrainingError::InsufficientData {
                samples: samples.len(),
                required: self.config.min_training_samples,
            });
        }

        let (train, test) = train_test_split(samples, self.config.test_fraction);
        let classifier = TrainedClassifier::fit(&train, FitOptions::from(&self.config))?;
        let holdout = if test.is_empty() { &train } else { &test };
        let accuracy = classifier.accuracy(holdout);
        debug!(
            train = train.len(),
            test = test.len(),
            accuracy,
            "logistic model fitted"
        );
        Ok((classifier, accuracy))
    }

    /// Score every entry with the active classifier.
    ///
    /// Malformed entries become rejections; the rest of the batch proceeds.
    /// Only probabilities strictly above the cutoff are returned.
    pub fn predict(&self, feature_map: &FeatureMap) -> PredictionBatch {
        let model = self.registry.current();
        let reasoning = match model.classifier.kind() {
            ClassifierKind::Trained => PredictionReasoning::MlPrediction,
            ClassifierKind::Heuristic => PredictionReasoning::Heuristic,
        };
        let confidence = model.classifier.confidence();

        let mut predictions = Vec::new();
        let mut rejections = Vec::new();
        for (unit_id, values) in feature_map {
            match features::validate(unit_id, values) {
                Ok(vector) => {
                    let probability = model.classifier.probability(&vector);
                    if probability > self.config.probability_cutoff {
                        predictions.push(Prediction {
                            source_unit_id: unit_id.clone(),
                            probability,
                            confidence,
                            reasoning,
                        });
                    }
                }
                Err(e) => {
                    debug!(unit_id = %unit_id, error = %e, "prediction input rejected");
                    rejections.push(PredictionRejection {
                        source_unit_id: unit_id.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }
        predictions.sort_by(|a, b| {
            b.probability
                .total_cmp(&a.probability)
                .then_with(|| a.source_unit_id.cmp(&b.source_unit_id))
        });

        PredictionBatch {
            predictions,
            rejections,
            classifier: model.intelligence.classifier,
            model_version: model.intelligence.model_version,
            confidence,
        }
    }

    /// The intelligence record of the active model.
    pub fn intelligence(&self) -> Intelligence {
        self.registry.current().intelligence.clone()
    }

    pub fn active_model(&self) -> Arc<ActiveModel> {
        self.registry.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryHistoricalStore;
    use coalesce_core::models::HistoricalOutcome;

    fn outcomes(n: usize) -> Vec<HistoricalOutcome> {
        (0..n)
            .map(|i| HistoricalOutcome {
                unit_path: format!("scripts/unit_{i:02}.py"),
                category: Some("general_utility".to_string()),
                importance_score: Some(0.5),
                similarity_score: Some(i as f64 / n as f64),
                size: Some(1000),
            })
            .collect()
    }

    #[test]
    fn untrained_model_predicts_nothing() {
        let model = PredictiveModel::default();
        let mut map = FeatureMap::new();
        map.insert("a.py".to_string(), vec![12.0, 0.9, 0.99, 100.0, 1.0]);
        let batch = model.predict(&map);
        assert!(batch.is_empty());
        assert_eq!(batch.classifier, ClassifierKind::Heuristic);
        assert_eq!(batch.confidence, 0.6);
    }

    #[test]
    fn insufficient_data_publishes_default_record() {
        let model = PredictiveModel::default();
        let store = InMemoryHistoricalStore::new(outcomes(3));
        let intel = model.retrain_from(&store);
        assert_eq!(intel.training_accuracy, 0.75);
        assert_eq!(intel.classifier, ClassifierKind::Heuristic);
        assert_eq!(intel.sample_count, 3);
        assert_eq!(intel.model_version, 1);
        assert_eq!(intel.heuristic_reason, Some(HeuristicReason::InsufficientData));

        let mut map = FeatureMap::new();
        map.insert("a.py".to_string(), vec![12.0, 0.9, 1.0, 100.0, 1.0]);
        assert!(model.predict(&map).is_empty());
    }

    #[test]
    fn disabled_backend_reports_default_accuracy() {
        let model = PredictiveModel::new(PredictionConfig {
            backend: LearningBackend::Disabled,
            ..PredictionConfig::default()
        });
        let intel = model.retrain_from(&InMemoryHistoricalStore::new(outcomes(40)));
        assert_eq!(intel.training_accuracy, 0.85);
        assert_eq!(intel.classifier, ClassifierKind::Heuristic);
        assert_eq!(intel.heuristic_reason, Some(HeuristicReason::BackendUnavailable));
    }

    #[test]
    fn disabled_backend_scores_by_similarity() {
        let model = PredictiveModel::new(PredictionConfig {
            backend: LearningBackend::Disabled,
            ..PredictionConfig::default()
        });
        let mut rows = outcomes(40);
        for row in &mut rows {
            row.similarity_score = Some(0.99);
        }
        model.retrain_from(&InMemoryHistoricalStore::new(rows));

        let mut map = FeatureMap::new();
        for i in 0..50 {
            map.insert(format!("dup_{i:02}.py"), vec![20.0, 0.5, 1.0, 1000.0, 1.0]);
        }
        map.insert("near.py".to_string(), vec![20.0, 0.5, 0.8, 1000.0, 1.0]);
        map.insert("distinct.py".to_string(), vec![20.0, 0.5, 0.6, 1000.0, 1.0]);
        let batch = model.predict(&map);

        assert_eq!(batch.predictions.len(), 51);
        assert_eq!(batch.classifier, ClassifierKind::Heuristic);
        assert_eq!(batch.confidence, 0.6);
        assert!(batch
            .predictions
            .iter()
            .all(|p| p.reasoning == PredictionReasoning::Heuristic && p.confidence == 0.6));
        assert_eq!(batch.predictions[0].probability, 1.0);
        assert_eq!(batch.predictions[50].source_unit_id, "near.py");
        assert!(!batch.predictions.iter().any(|p| p.source_unit_id == "distinct.py"));
    }

    #[test]
    fn divergent_training_degrades() {
        let model = PredictiveModel::new(PredictionConfig {
            learning_rate: f64::MAX,
            ..PredictionConfig::default()
        });
        let intel = model.retrain_from(&InMemoryHistoricalStore::new(outcomes(20)));
        assert_eq!(intel.training_accuracy, 0.70);
        assert_eq!(intel.classifier, ClassifierKind::Heuristic);
        assert_eq!(intel.heuristic_reason, Some(HeuristicReason::TrainingFailed));

        let mut map = FeatureMap::new();
        map.insert("hot.py".to_string(), vec![20.0, 0.5, 0.95, 1000.0, 1.0]);
        let batch = model.predict(&map);
        assert_eq!(batch.predictions.len(), 1);
        assert_eq!(batch.predictions[0].reasoning, PredictionReasoning::Heuristic);
    }

    #[test]
    fn trained_model_predicts_and_rejects_per_entry() {
        let model = PredictiveModel::default();
        let intel = model.retrain_from(&InMemoryHistoricalStore::new(outcomes(40)));
        assert_eq!(intel.classifier, ClassifierKind::Trained);
        assert_eq!(intel.prediction_confidence, 0.85);
        assert_eq!(intel.heuristic_reason, None);

        let mut map = FeatureMap::new();
        map.insert("hot.py".to_string(), vec![20.0, 0.5, 0.95, 1000.0, 1.0]);
        map.insert("cold.py".to_string(), vec![20.0, 0.5, 0.05, 1000.0, 1.0]);
        map.insert("short.py".to_string(), vec![1.0, 2.0]);
        let batch = model.predict(&map);

        assert_eq!(batch.predictions.len(), 1);
        assert_eq!(batch.predictions[0].source_unit_id, "hot.py");
        assert_eq!(batch.predictions[0].reasoning, PredictionReasoning::MlPrediction);
        assert_eq!(batch.rejections.len(), 1);
        assert_eq!(batch.rejections[0].source_unit_id, "short.py");
        assert_eq!(batch.model_version, intel.model_version);
    }
}
