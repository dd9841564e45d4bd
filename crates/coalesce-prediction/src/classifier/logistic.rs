//! Logistic regression fitted by batch gradient descent on standardized features.

use coalesce_core::config::{defaults, PredictionConfig};
use coalesce_core::errors::TrainingError;
use coalesce_core::models::{ClassifierKind, TrainingSample, FEATURE_DIMENSIONS};
use coalesce_core::traits::Classifier;

#[derive(Debug, Clone, Copy)]
pub struct FitOptions {
    pub epochs: usize,
    pub learning_rate: f64,
    pub l2_penalty: f64,
}

impl From<&PredictionConfig> for FitOptions {
    fn from(config: &PredictionConfig) -> Self {
        Self {
            epochs: config.epochs,
            learning_rate: config.learning_rate,
            l2_penalty: config.l2_penalty,
        }
    }
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            epochs: defaults::DEFAULT_EPOCHS,
            learning_rate: defaults::DEFAULT_LEARNING_RATE,
            l2_penalty: defaults::DEFAULT_L2_PENALTY,
        }
    }
}

/// Fitted logistic model. Immutable after `fit`.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainedClassifier {
    weights: [f64; FEATURE_DIMENSIONS],
    bias: f64,
    means: [f64; FEATURE_DIMENSIONS],
    scales: [f64; FEATURE_DIMENSIONS],
}

impl TrainedClassifier {
    /// Fit on `samples`. Fails on an empty set or numerical divergence.
    pub fn fit(samples: &[&TrainingSample], options: FitOptions) -> Result<Self, TrainingError> {
        if samples.is_empty() {
            return Err(TrainingError::InsufficientData {
                samples: 0,
                required: 1,
            });
        }
        let n = samples.len() as f64;

        let mut means = [0.0; FEATURE_DIMENSIONS];
        for s in samples {
            for (m, x) in means.iter_mut().zip(s.features.iter()) {
                *m += x / n;
            }
        }
        let mut scales = [0.0; FEATURE_DIMENSIONS];
        for s in samples {
            for d in 0..FEATURE_DIMENSIONS {
                scales[d] += (s.features[d] - means[d]).powi(2) / n;
            }
        }
        for scale in scales.iter_mut() {
            *scale = scale.sqrt();
            // Constant columns stay centered at zero.
            if *scale < f64::EPSILON {
                *scale = 1.0;
            }
        }

        let standardized: Vec<([f64; FEATURE_DIMENSIONS], f64)> = samples
            .iter()
            .map(|s| {
                let mut z = [0.0; FEATURE_DIMENSIONS];
                for d in 0..FEATURE_DIMENSIONS {
                    z[d] = (s.features[d] - means[d]) / scales[d];
                }
                (z, if s.label { 1.0 } else { 0.0 })
            })
            .collect();

        let mut weights = [0.0; FEATURE_DIMENSIONS];
        let mut bias = 0.0;
        for _ in 0..options.epochs {
            let mut grad_w = [0.0; FEATURE_DIMENSIONS];
            let mut grad_b = 0.0;
            for (z, y) in &standardized {
                let err = sigmoid(dot(&weights, z) + bias) - y;
                for d in 0..FEATURE_DIMENSIONS {
                    grad_w[d] += err * z[d] / n;
                }
                grad_b += err / n;
            }
            for d in 0..FEATURE_DIMENSIONS {
                weights[d] -= options.learning_rate * (grad_w[d] + options.l2_penalty * weights[d]);
            }
            bias -= options.learning_rate * grad_b;

            if !bias.is_finite() || weights.iter().any(|w| !w.is_finite()) {
                return Err(TrainingError::Diverged {
                    reason: "non-finite weights during gradient descent".to_string(),
                });
            }
        }

        Ok(Self {
            weights,
            bias,
            means,
            scales,
        })
    }

    /// Fraction of `samples` classified correctly at the 0.5 decision boundary.
    pub fn accuracy(&self, samples: &[&TrainingSample]) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }
        let correct = samples
            .iter()
            .filter(|s| (self.probability(&s.features) > 0.5) == s.label)
            .count();
        correct as f64 / samples.len() as f64
    }

    pub fn weights(&self) -> &[f64; FEATURE_DIMENSIONS] {
        &self.weights
    }
}

impl Classifier for TrainedClassifier {
    fn kind(&self) -> ClassifierKind {
        ClassifierKind::Trained
    }

    fn confidence(&self) -> f64 {
        defaults::TRAINED_CONFIDENCE
    }

    fn probability(&self, features: &[f64; FEATURE_DIMENSIONS]) -> f64 {
        let mut z = [0.0; FEATURE_DIMENSIONS];
        for d in 0..FEATURE_DIMENSIONS {
            z[d] = (features[d] - self.means[d]) / self.scales[d];
        }
        sigmoid(dot(&self.weights, &z) + self.bias)
    }
}

fn dot(a: &[f64; FEATURE_DIMENSIONS], b: &[f64; FEATURE_DIMENSIONS]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

fn sigmoid(x: f64) -> f64 {
    (1.0 / (1.0 + (-x).exp())).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(similarity: f64) -> TrainingSample {
        TrainingSample {
            unit_path: format!("s{similarity}.py"),
            features: [10.0, 0.5, similarity, 1000.0, 1.0],
            label: similarity > 0.7,
        }
    }

    #[test]
    fn learns_a_separable_threshold() {
        let data: Vec<TrainingSample> = (0..20).map(|i| sample(i as f64 / 20.0)).collect();
        let refs: Vec<&TrainingSample> = data.iter().collect();
        let model = TrainedClassifier::fit(&refs, FitOptions::default()).unwrap();
        assert!(model.probability(&sample(0.95).features) > 0.6);
        assert!(model.probability(&sample(0.05).features) < 0.4);
        assert!(model.accuracy(&refs) >= 0.9);
    }

    #[test]
    fn fit_is_deterministic() {
        let data: Vec<TrainingSample> = (0..12).map(|i| sample(i as f64 / 12.0)).collect();
        let refs: Vec<&TrainingSample> = data.iter().collect();
        let a = TrainedClassifier::fit(&refs, FitOptions::default()).unwrap();
        let b = TrainedClassifier::fit(&refs, FitOptions::default()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn exploding_learning_rate_is_reported() {
        let data: Vec<TrainingSample> = (0..12).map(|i| sample(i as f64 / 12.0)).collect();
        let refs: Vec<&TrainingSample> = data.iter().collect();
        let options = FitOptions {
            learning_rate: f64::MAX,
            ..FitOptions::default()
        };
        assert!(matches!(
            TrainedClassifier::fit(&refs, options),
            Err(TrainingError::Diverged { .. })
        ));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(TrainedClassifier::fit(&[], FitOptions::default()).is_err());
    }
}
