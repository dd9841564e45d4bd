//! Property tests for feature validation, splitting, and prediction output.

use coalesce_core::models::{FeatureMap, HistoricalOutcome, TrainingSample};
use coalesce_prediction::features::{engineer, validate};
use coalesce_prediction::split::train_test_split;
use coalesce_prediction::{InMemoryHistoricalStore, PredictiveModel};
use proptest::prelude::*;

fn arb_outcome() -> impl Strategy<Value = HistoricalOutcome> {
    (
        "[a-z_/]{1,30}\\.py",
        proptest::option::of("[a-z_]{3,20}"),
        proptest::option::of(0.0f64..=1.0),
        proptest::option::of(0.0f64..=1.0),
        proptest::option::of(0u64..100_000),
    )
        .prop_map(|(unit_path, category, importance_score, similarity_score, size)| {
            HistoricalOutcome {
                unit_path,
                category,
                importance_score,
                similarity_score,
                size,
            }
        })
}

fn samples(n: usize) -> Vec<TrainingSample> {
    (0..n)
        .map(|i| TrainingSample {
            unit_path: format!("scripts/unit_{i}.py"),
            features: [i as f64, 0.5, 0.5, 1000.0, 1.0],
            label: i % 3 == 0,
        })
        .collect()
}

proptest! {
    #[test]
    fn engineered_features_are_finite(outcome in arb_outcome()) {
        let features = engineer(&outcome);
        prop_assert!(features.iter().all(|v| v.is_finite()));
        prop_assert!(validate(&outcome.unit_path, &features).is_ok());
    }

    #[test]
    fn wrong_dimensions_are_rejected(values in proptest::collection::vec(-10.0f64..10.0, 0..12)) {
        let result = validate("unit.py", &values);
        prop_assert_eq!(result.is_ok(), values.len() == 5);
    }

    #[test]
    fn split_partitions_every_sample(n in 1usize..200, fraction in 0.0f64..=1.0) {
        let data = samples(n);
        let (train, test) = train_test_split(&data, fraction);
        prop_assert_eq!(train.len() + test.len(), n);
        prop_assert!(!train.is_empty());
        prop_assert_eq!(test.len(), ((n as f64 * fraction).ceil() as usize).min(n - 1));
    }

    #[test]
    fn split_is_deterministic(n in 1usize..100) {
        let data = samples(n);
        let (a_train, a_test) = train_test_split(&data, 0.2);
        let (b_train, b_test) = train_test_split(&data, 0.2);
        prop_assert_eq!(a_train, b_train);
        prop_assert_eq!(a_test, b_test);
    }

    #[test]
    fn predictions_clear_cutoff_and_are_sorted(
        outcomes in proptest::collection::vec(arb_outcome(), 0..30),
        probes in proptest::collection::btree_map(
            "[a-z]{1,8}\\.py",
            proptest::collection::vec(0.0f64..2000.0, 5),
            0..20,
        ),
    ) {
        let model = PredictiveModel::default();
        model.retrain_from(&InMemoryHistoricalStore::new(outcomes));
        let map: FeatureMap = probes;
        let batch = model.predict(&map);

        prop_assert!(batch.rejections.is_empty());
        prop_assert!(batch.predictions.iter().all(|p| p.probability > 0.6 && p.probability <= 1.0));
        prop_assert!(batch
            .predictions
            .windows(2)
            .all(|w| w[0].probability >= w[1].probability));
    }
}
