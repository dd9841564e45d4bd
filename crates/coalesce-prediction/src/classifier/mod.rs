//! Classifier variants behind the `Classifier` capability.

mod heuristic;
mod logistic;

pub use heuristic::HeuristicClassifier;
pub use logistic::{FitOptions, TrainedClassifier};

use coalesce_core::models::{ClassifierKind, HeuristicReason, FEATURE_DIMENSIONS};
use coalesce_core::traits::Classifier;

/// The classifier serving predictions, chosen when a model is published.
#[derive(Debug, Clone)]
pub enum ActiveClassifier {
    Trained(TrainedClassifier),
    Heuristic(HeuristicClassifier),
}

impl ActiveClassifier {
    pub fn heuristic(reason: HeuristicReason) -> Self {
        Self::Heuristic(HeuristicClassifier::new(reason))
    }

    /// `None` for a trained classifier.
    pub fn heuristic_reason(&self) -> Option<HeuristicReason> {
        match self {
            Self::Trained(_) => None,
            Self::Heuristic(c) => Some(c.reason()),
        }
    }
}

impl Classifier for ActiveClassifier {
    fn kind(&self) -> ClassifierKind {
        match self {
            Self::Trained(c) => c.kind(),
            Self::Heuristic(c) => c.kind(),
        }
    }

    fn confidence(&self) -> f64 {
        match self {
            Self::Trained(c) => c.confidence(),
            Self::Heuristic(c) => c.confidence(),
        }
    }

    fn probability(&self, features: &[f64; FEATURE_DIMENSIONS]) -> f64 {
        match self {
            Self::Trained(c) => c.probability(features),
            Self::Heuristic(c) => c.probability(features),
        }
    }
}
