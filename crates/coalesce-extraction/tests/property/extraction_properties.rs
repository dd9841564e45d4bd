//! Property tests for coalesce-extraction.

use proptest::prelude::*;

use coalesce_core::config::ExtractionConfig;
use coalesce_core::SourceUnit;
use coalesce_extraction::FeatureExtractor;

fn python_like() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-z_]{1,12}".prop_map(|n| format!("def {n}():\n    pass\n")),
            "[A-Z][a-z]{1,10}".prop_map(|n| format!("class {n}:\n    pass\n")),
            "[a-z]{1,8}".prop_map(|n| format!("import {n}\n")),
            "[ -~]{0,40}".prop_map(|s| format!("{s}\n")),
        ],
        0..12,
    )
    .prop_map(|lines| lines.concat())
}

proptest! {
    #[test]
    fn extraction_is_deterministic(text in python_like()) {
        let extractor = FeatureExtractor::default();
        let a = extractor.extract(&SourceUnit::new("a.py", text.clone()));
        let b = extractor.extract(&SourceUnit::new("a.py", text));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn confidence_is_one_of_two_levels(text in python_like()) {
        let pattern = FeatureExtractor::default().extract(&SourceUnit::new("a.py", text));
        prop_assert!(pattern.confidence == 0.95 || pattern.confidence == 0.5);
    }

    #[test]
    fn token_cap_bounds_vector_mass(text in python_like(), cap in 1usize..8) {
        let config = ExtractionConfig { max_tokens: cap, ..ExtractionConfig::default() };
        let pattern = FeatureExtractor::new(config).extract(&SourceUnit::new("a.py", text));
        let mass: f64 = pattern.vector.iter().map(|(_, w)| w).sum();
        prop_assert!(mass <= cap as f64);
    }

    #[test]
    fn arbitrary_bytes_never_panic(text in ".{0,200}") {
        let _ = FeatureExtractor::default().extract(&SourceUnit::new("a.py", text));
    }
}
