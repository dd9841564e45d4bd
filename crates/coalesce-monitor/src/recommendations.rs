//! Ranked optimization recommendations.
//!
//! Catalogue entries plus one remediation per health violation, the
//! remediation's estimate being the penalty it would recover.

use coalesce_core::config::MonitorConfig;
use coalesce_core::models::{HealthSnapshot, Recommendation, RecommendationSource, ViolationCategory};

use crate::optimization::Optimizer;

const FULL_HEALTH: f64 = 100.0;

fn remediation(category: ViolationCategory, config: &MonitorConfig) -> (&'static str, f64) {
    match category {
        ViolationCategory::WorkspaceMissing => {
            ("restore_workspace_root", config.workspace_missing_penalty)
        }
        ViolationCategory::StoreMissing => ("restore_historical_store", config.store_missing_penalty),
        ViolationCategory::ForbiddenPath => {
            ("remove_forbidden_directories", config.forbidden_path_penalty)
        }
        ViolationCategory::CheckFailed => (
            "repair_workspace_scan",
            (FULL_HEALTH - config.check_failed_score).max(0.0),
        ),
    }
}

/// Rank by estimated improvement descending, ties by kind.
pub fn recommend(
    optimizer: &Optimizer,
    health: &HealthSnapshot,
    config: &MonitorConfig,
) -> Vec<Recommendation> {
    let mut recs: Vec<Recommendation> = optimizer
        .catalogue()
        .iter()
        .map(|(kind, gain)| Recommendation {
            rank: 0,
            kind: kind.clone(),
            estimated_improvement: *gain,
            source: RecommendationSource::Catalogue,
        })
        .collect();

    for category in &health.violations {
        let (kind, gain) = remediation(*category, config);
        if recs.iter().any(|r| r.kind == kind) {
            continue;
        }
        recs.push(Recommendation {
            rank: 0,
            kind: kind.to_string(),
            estimated_improvement: gain,
            source: RecommendationSource::Health,
        });
    }

    recs.sort_by(|a, b| {
        b.estimated_improvement
            .total_cmp(&a.estimated_improvement)
            .then_with(|| a.kind.cmp(&b.kind))
    });
    for (i, rec) in recs.iter_mut().enumerate() {
        rec.rank = i + 1;
    }
    recs
}
