//! Copy-on-write holder of the active model.
//!
//! Readers clone an `Arc` under a read lock; the training path builds a
//! complete `ActiveModel` off to the side and swaps the pointer under a
//! write lock held only for the swap.

use std::sync::{Arc, RwLock};

use chrono::Utc;
use coalesce_core::models::{ClassifierKind, HeuristicReason, Intelligence};
use coalesce_core::traits::Classifier;
use uuid::Uuid;

use crate::classifier::ActiveClassifier;

/// An intelligence record together with the classifier it describes.
#[derive(Debug, Clone)]
pub struct ActiveModel {
    pub intelligence: Intelligence,
    pub classifier: ActiveClassifier,
}

#[derive(Debug)]
pub struct ModelRegistry {
    active: RwLock<Arc<ActiveModel>>,
}

impl ModelRegistry {
    /// Registry serving the heuristic classifier at version 0.
    pub fn new() -> Self {
        let classifier = ActiveClassifier::heuristic(HeuristicReason::Untrained);
        let intelligence = Intelligence {
            model_version: 0,
            run_id: Uuid::new_v4(),
            classifier: ClassifierKind::Heuristic,
            heuristic_reason: Some(HeuristicReason::Untrained),
            training_accuracy: 0.0,
            prediction_confidence: classifier.confidence(),
            sample_count: 0,
            trained_at: Utc::now(),
        };
        Self {
            active: RwLock::new(Arc::new(ActiveModel {
                intelligence,
                classifier,
            })),
        }
    }

    /// Snapshot of the active model. Never blocks on training.
    pub fn current(&self) -> Arc<ActiveModel> {
        let guard = self.active.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    /// Publish a new model, returning its intelligence record.
    ///
    /// Versions are assigned under the write lock, so concurrent publishers
    /// still produce a strictly increasing sequence.
    pub fn publish(
        &self,
        classifier: ActiveClassifier,
        training_accuracy: f64,
        sample_count: usize,
    ) -> Intelligence {
        let mut guard = self.active.write().unwrap_or_else(|e| e.into_inner());
        let intelligence = Intelligence {
            model_version: guard.intelligence.model_version + 1,
            run_id: Uuid::new_v4(),
            classifier: classifier.kind(),
            heuristic_reason: classifier.heuristic_reason(),
            training_accuracy,
            prediction_confidence: classifier.confidence(),
            sample_count,
            trained_at: Utc::now(),
        };
        *guard = Arc::new(ActiveModel {
            intelligence: intelligence.clone(),
            classifier,
        });
        intelligence
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn starts_heuristic_at_version_zero() {
        let registry = ModelRegistry::new();
        let model = registry.current();
        assert_eq!(model.intelligence.model_version, 0);
        assert_eq!(model.intelligence.classifier, ClassifierKind::Heuristic);
        assert_eq!(
            model.intelligence.heuristic_reason,
            Some(HeuristicReason::Untrained)
        );
    }

    #[test]
    fn readers_keep_their_snapshot_across_publish() {
        let registry = ModelRegistry::new();
        let before = registry.current();
        registry.publish(
            ActiveClassifier::heuristic(HeuristicReason::InsufficientData),
            0.75,
            3,
        );
        assert_eq!(before.intelligence.model_version, 0);
        assert_eq!(registry.current().intelligence.model_version, 1);
        assert_eq!(registry.current().intelligence.sample_count, 3);
    }

    #[test]
    fn concurrent_publishes_get_distinct_versions() {
        let registry = Arc::new(ModelRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let r = Arc::clone(&registry);
                thread::spawn(move || {
                    r.publish(
                        ActiveClassifier::heuristic(HeuristicReason::TrainingFailed),
                        0.7,
                        0,
                    )
                    .model_version
                })
            })
            .collect();
        let mut versions: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        versions.sort_unstable();
        assert_eq!(versions, (1..=8).collect::<Vec<_>>());
    }
}
