//! Property tests for coalesce-similarity.

use std::collections::HashSet;

use proptest::prelude::*;

use coalesce_core::models::{ComplexityTier, ExtractionMode, TermVector};
use coalesce_core::{FunctionalCategory, SemanticPattern};
use coalesce_similarity::SimilarityEngine;

fn category() -> impl Strategy<Value = FunctionalCategory> {
    prop_oneof![
        Just(FunctionalCategory::DatabaseOperations),
        Just(FunctionalCategory::WebInterface),
        Just(FunctionalCategory::GeneralUtility),
    ]
}

fn pattern_with_id(id: String) -> impl Strategy<Value = SemanticPattern> {
    (
        prop::collection::btree_map("[a-f]{1,2}", 1u32..5, 0..6),
        category(),
    )
        .prop_map(move |(terms, category)| SemanticPattern {
            id: id.clone(),
            content_hash: String::new(),
            vector: terms
                .into_iter()
                .map(|(k, v)| (k, f64::from(v)))
                .collect::<TermVector>(),
            functional_category: category,
            complexity_tier: ComplexityTier::Low,
            confidence: 0.95,
            extraction: ExtractionMode::Structural,
        })
}

fn pattern() -> impl Strategy<Value = SemanticPattern> {
    "[a-z]{1,3}".prop_flat_map(pattern_with_id)
}

proptest! {
    #[test]
    fn self_similarity_is_one(p in pattern()) {
        prop_assume!(!p.vector.is_empty());
        prop_assert_eq!(SimilarityEngine::default().similarity(&p, &p), 1.0);
    }

    #[test]
    fn similarity_is_symmetric(a in pattern(), b in pattern()) {
        let engine = SimilarityEngine::default();
        prop_assert_eq!(engine.similarity(&a, &b), engine.similarity(&b, &a));
    }

    #[test]
    fn similarity_is_bounded(a in pattern(), b in pattern()) {
        let s = SimilarityEngine::default().similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&s));
    }

    #[test]
    fn discovered_pairs_are_canonical_unique_and_above_threshold(
        patterns in prop::collection::vec(pattern(), 0..12)
    ) {
        let ops = SimilarityEngine::default().discover_opportunities(&patterns);
        let mut seen = HashSet::new();
        for op in &ops {
            prop_assert!(op.id_a < op.id_b);
            prop_assert!(op.similarity_score > 0.75);
            prop_assert!(seen.insert((op.id_a.clone(), op.id_b.clone())));
            prop_assert!(!seen.contains(&(op.id_b.clone(), op.id_a.clone())));
        }
        prop_assert!(ops.windows(2).all(|w| w[0].similarity_score >= w[1].similarity_score));
    }
}
