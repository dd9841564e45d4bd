//! Feature engineering: historical outcome to fixed 5-dimension vector.
//!
//! Layout: `[path length, importance, similarity, size, has category]`.
//! Missing scores default to 0.5, missing size to 1000.

use coalesce_core::config::defaults;
use coalesce_core::errors::ParseError;
use coalesce_core::models::{HistoricalOutcome, TrainingSample, FEATURE_DIMENSIONS};

/// Index of the recorded-similarity feature.
pub const SIMILARITY_FEATURE: usize = 2;

pub fn engineer(outcome: &HistoricalOutcome) -> [f64; FEATURE_DIMENSIONS] {
    [
        outcome.unit_path.chars().count() as f64,
        outcome
            .importance_score
            .unwrap_or(defaults::MISSING_SCORE_FEATURE),
        outcome
            .similarity_score
            .unwrap_or(defaults::MISSING_SCORE_FEATURE),
        outcome
            .size
            .map(|s| s as f64)
            .unwrap_or(defaults::MISSING_SIZE_FEATURE),
        if outcome.category.as_deref().is_some_and(|c| !c.is_empty()) {
            1.0
        } else {
            0.0
        },
    ]
}

/// Positive when the recorded similarity (missing counts as 0) exceeds `threshold`.
pub fn label(outcome: &HistoricalOutcome, threshold: f64) -> bool {
    outcome.similarity_score.unwrap_or(0.0) > threshold
}

pub fn to_sample(outcome: &HistoricalOutcome, label_threshold: f64) -> TrainingSample {
    TrainingSample {
        unit_path: outcome.unit_path.clone(),
        features: engineer(outcome),
        label: label(outcome, label_threshold),
    }
}

/// Check a caller-supplied vector for shape and finiteness.
pub fn validate(unit_id: &str, values: &[f64]) -> Result<[f64; FEATURE_DIMENSIONS], ParseError> {
    let features: [f64; FEATURE_DIMENSIONS] =
        values.try_into().map_err(|_| ParseError::FeatureDimension {
            unit_id: unit_id.to_string(),
            expected: FEATURE_DIMENSIONS,
            actual: values.len(),
        })?;
    if features.iter().any(|v| !v.is_finite()) {
        return Err(ParseError::NonFiniteFeature {
            unit_id: unit_id.to_string(),
        });
    }
    Ok(features)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(similarity: Option<f64>) -> HistoricalOutcome {
        HistoricalOutcome {
            unit_path: "scripts/a.py".to_string(),
            category: Some("data_analysis".to_string()),
            importance_score: None,
            similarity_score: similarity,
            size: None,
        }
    }

    #[test]
    fn missing_values_take_defaults() {
        let f = engineer(&outcome(None));
        assert_eq!(f, [12.0, 0.5, 0.5, 1000.0, 1.0]);
    }

    #[test]
    fn label_is_strictly_above_threshold() {
        assert!(!label(&outcome(Some(0.7)), 0.7));
        assert!(label(&outcome(Some(0.71)), 0.7));
        assert!(!label(&outcome(None), 0.7));
    }

    #[test]
    fn empty_category_counts_as_absent() {
        let mut o = outcome(Some(0.1));
        o.category = Some(String::new());
        assert_eq!(engineer(&o)[4], 0.0);
    }

    #[test]
    fn validate_rejects_wrong_shape_and_nan() {
        assert!(matches!(
            validate("u", &[1.0, 2.0]),
            Err(ParseError::FeatureDimension { actual: 2, expected: 5, .. })
        ));
        assert!(matches!(
            validate("u", &[1.0, 2.0, f64::NAN, 0.0, 0.0]),
            Err(ParseError::NonFiniteFeature { .. })
        ));
        assert_eq!(validate("u", &[1.0; 5]).unwrap(), [1.0; 5]);
    }
}
