//! Component self-checks behind `validate_integration`.

use coalesce_core::models::{
    ExtractionMode, FeatureMap, IntegrationCheck, SchedulerStatus, SourceUnit,
};

use crate::context::Services;

const PROBE_SOURCE: &str = "import sqlite3\n\n\ndef open_connection(path):\n    return sqlite3.connect(path)\n";

fn check(name: &str, passed: bool) -> IntegrationCheck {
    IntegrationCheck {
        name: name.to_string(),
        passed,
    }
}

/// Probe each component without touching the pattern cache or counters.
pub(crate) fn run_checks(services: &Services) -> Vec<IntegrationCheck> {
    let workspace = &services.config.workspace;
    let probe = services
        .extractor
        .extract(&SourceUnit::new("integration_probe.py", PROBE_SOURCE));
    let self_similarity = services.similarity.similarity(&probe, &probe);
    let batch = services.prediction.predict(&FeatureMap::new());
    let health = services.monitor.health();

    vec![
        check("workspace_root", workspace.root.is_dir()),
        check("historical_store", workspace.store_path().is_file()),
        check(
            "feature_extraction",
            probe.extraction == ExtractionMode::Structural && !probe.vector.is_empty(),
        ),
        check("similarity_engine", (self_similarity - 1.0).abs() < 1e-9),
        check(
            "predictive_model",
            batch.rejections.is_empty() && batch.confidence > 0.0,
        ),
        check(
            "monitoring_scheduler",
            services.monitor.snapshot().status == SchedulerStatus::Running,
        ),
        check(
            "workspace_health",
            health.score >= services.config.monitor.degraded_threshold,
        ),
    ]
}
