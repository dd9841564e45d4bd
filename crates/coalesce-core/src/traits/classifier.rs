use crate::models::{ClassifierKind, FEATURE_DIMENSIONS};

/// Scores an engineered feature vector as a consolidation probability.
pub trait Classifier: Send + Sync {
    fn kind(&self) -> ClassifierKind;

    /// Confidence attached to every prediction this classifier makes.
    fn confidence(&self) -> f64;

    /// Probability in [0, 1] that the unit becomes a consolidation candidate.
    fn probability(&self, features: &[f64; FEATURE_DIMENSIONS]) -> f64;
}
