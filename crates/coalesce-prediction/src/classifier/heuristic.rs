use coalesce_core::config::defaults;
use coalesce_core::models::{ClassifierKind, HeuristicReason, FEATURE_DIMENSIONS};
use coalesce_core::traits::Classifier;

use crate::features::SIMILARITY_FEATURE;

/// Fallback when no trained model is available.
///
/// Scores by the recorded-similarity feature. When the history is too thin
/// to learn from, the score is scaled by the heuristic confidence, so it
/// never exceeds 0.6 and never clears the default cutoff. When the history
/// is there but learning is off or failed, the similarity is used as is.
#[derive(Debug, Clone, Copy)]
pub struct HeuristicClassifier {
    reason: HeuristicReason,
}

impl HeuristicClassifier {
    pub fn new(reason: HeuristicReason) -> Self {
        Self { reason }
    }

    pub fn reason(&self) -> HeuristicReason {
        self.reason
    }
}

impl Classifier for HeuristicClassifier {
    fn kind(&self) -> ClassifierKind {
        ClassifierKind::Heuristic
    }

    fn confidence(&self) -> f64 {
        defaults::HEURISTIC_CONFIDENCE
    }

    fn probability(&self, features: &[f64; FEATURE_DIMENSIONS]) -> f64 {
        let similarity = features[SIMILARITY_FEATURE].clamp(0.0, 1.0);
        if self.reason.lacks_evidence() {
            similarity * defaults::HEURISTIC_CONFIDENCE
        } else {
            similarity
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thin_history_is_capped_at_confidence() {
        for reason in [HeuristicReason::Untrained, HeuristicReason::InsufficientData] {
            let c = HeuristicClassifier::new(reason);
            assert_eq!(c.probability(&[0.0, 0.0, 1.0, 0.0, 0.0]), 0.6);
            assert_eq!(c.probability(&[0.0, 0.0, 7.0, 0.0, 0.0]), 0.6);
            assert_eq!(c.probability(&[0.0, 0.0, -1.0, 0.0, 0.0]), 0.0);
            assert_eq!(c.kind(), ClassifierKind::Heuristic);
        }
    }

    #[test]
    fn unlearned_history_scores_raw_similarity() {
        for reason in [HeuristicReason::BackendUnavailable, HeuristicReason::TrainingFailed] {
            let c = HeuristicClassifier::new(reason);
            assert_eq!(c.probability(&[0.0, 0.0, 0.95, 0.0, 0.0]), 0.95);
            assert_eq!(c.probability(&[0.0, 0.0, 3.0, 0.0, 0.0]), 1.0);
            assert_eq!(c.probability(&[0.0, 0.0, 0.4, 0.0, 0.0]), 0.4);
            assert_eq!(c.confidence(), 0.6);
        }
    }
}
