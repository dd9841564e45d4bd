//! Property tests for health scoring and optimization totals.

use std::collections::BTreeMap;

use coalesce_core::config::{MonitorConfig, WorkspaceConfig};
use coalesce_core::models::HealthSnapshot;
use coalesce_monitor::{recommend, HealthChecker, Optimizer};
use proptest::prelude::*;

proptest! {
    #[test]
    fn health_score_stays_in_range(
        workspace_penalty in 0.0f64..=100.0,
        store_penalty in 0.0f64..=100.0,
        forbidden_penalty in 0.0f64..=100.0,
        make_forbidden in any::<bool>(),
    ) {
        let dir = tempfile::tempdir().unwrap();
        if make_forbidden {
            std::fs::create_dir(dir.path().join("backups")).unwrap();
        }
        let monitor = MonitorConfig {
            workspace_missing_penalty: workspace_penalty,
            store_missing_penalty: store_penalty,
            forbidden_path_penalty: forbidden_penalty,
            ..MonitorConfig::default()
        };
        for root in [dir.path().to_path_buf(), dir.path().join("missing")] {
            let workspace = WorkspaceConfig { root, ..WorkspaceConfig::default() };
            let score = HealthChecker::new(&workspace, &monitor).check().score;
            prop_assert!((0.0..=100.0).contains(&score));
        }
    }

    #[test]
    fn cumulative_improvement_never_decreases(
        gains in prop::collection::btree_map("[a-z_]{3,12}", -10.0f64..10.0, 0..8),
        cycles in 1usize..20,
    ) {
        let catalogue: BTreeMap<String, f64> = gains;
        let optimizer = Optimizer::new(&catalogue);
        let (mut done, mut total) = (0u64, 0.0f64);
        for _ in 0..cycles {
            let cycle = optimizer.next_cycle(done, total);
            prop_assert!(cycle.improvement_delta >= 0.0);
            prop_assert!(cycle.cumulative_improvement >= total);
            prop_assert_eq!(cycle.cycle_id, done + 1);
            done = cycle.cycle_id;
            total = cycle.cumulative_improvement;
        }
    }

    #[test]
    fn recommendations_are_ranked(score in 0.0f64..=100.0) {
        let config = MonitorConfig::default();
        let optimizer = Optimizer::new(&config.optimization_catalogue);
        let health = HealthSnapshot::new(score, vec![], vec![]);
        let recs = recommend(&optimizer, &health, &config);
        prop_assert!(recs.windows(2).all(|w| w[0].estimated_improvement >= w[1].estimated_improvement));
        prop_assert!(recs.iter().enumerate().all(|(i, r)| r.rank == i + 1));
    }
}
