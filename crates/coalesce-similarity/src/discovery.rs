//! All-pairs opportunity discovery.

use std::borrow::Borrow;
use std::collections::HashSet;

use coalesce_core::models::{ConsolidationOpportunity, SemanticPattern};
use rayon::prelude::*;

use crate::engine::similarity;

/// Score every unordered pair of distinct ids, keep those strictly above
/// `threshold`, and sort by score descending then `(id_a, id_b)`.
///
/// Repeated ids collapse to their first occurrence, so no pair is ever
/// reported twice or in both orientations.
pub fn all_pairs<P>(
    patterns: &[P],
    threshold: f64,
    high_priority_threshold: f64,
) -> Vec<ConsolidationOpportunity>
where
    P: Borrow<SemanticPattern> + Sync,
{
    let mut seen = HashSet::new();
    let mut unique: Vec<&SemanticPattern> = Vec::with_capacity(patterns.len());
    for p in patterns {
        let p: &SemanticPattern = p.borrow();
        if seen.insert(p.id.as_str()) {
            unique.push(p);
        }
    }

    let n = unique.len();
    let unique = &unique;
    let mut opportunities: Vec<ConsolidationOpportunity> = (0..n)
        .into_par_iter()
        .flat_map_iter(|i| {
            (i + 1..n).filter_map(move |j| {
                let (p, q) = (unique[i], unique[j]);
                let score = similarity(p, q);
                if score <= threshold {
                    return None;
                }
                let first = if p.id <= q.id { p } else { q };
                Some(ConsolidationOpportunity::new(
                    &p.id,
                    &q.id,
                    score,
                    first.functional_category,
                    high_priority_threshold,
                ))
            })
        })
        .collect();

    opportunities.sort_by(|a, b| {
        b.similarity_score
            .total_cmp(&a.similarity_score)
            .then_with(|| a.id_a.cmp(&b.id_a))
            .then_with(|| a.id_b.cmp(&b.id_b))
    });
    opportunities
}
