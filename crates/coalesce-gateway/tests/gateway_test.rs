//! Service context lifecycle, errors, metrics, and retraining.

use std::fs;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use coalesce_core::config::CoalesceConfig;
use coalesce_core::errors::{ErrorCode, GatewayError};
use coalesce_core::events::{CoalesceEventHandler, EventDispatcher, OptimizationCompletedEvent};
use coalesce_core::models::{ClassifierKind, FeatureMap, HistoricalOutcome, SchedulerStatus};
use coalesce_core::{CoalesceError, SourceUnit};
use coalesce_gateway::ServiceContext;
use coalesce_monitor::StopOutcome;
use coalesce_prediction::InMemoryHistoricalStore;
use rusqlite::{params, Connection};
use serde::Deserialize;

#[derive(Deserialize)]
struct OutcomeFixture {
    rows: Vec<HistoricalOutcome>,
}

fn fixture_rows() -> Vec<HistoricalOutcome> {
    test_fixtures::load_fixture::<OutcomeFixture>("outcomes/historical_outcomes.json").rows
}

fn fixture_units() -> Vec<SourceUnit> {
    test_fixtures::load_all_sources()
        .into_iter()
        .map(|(id, text)| SourceUnit::new(id, text))
        .collect()
}

#[test]
fn missing_root_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let err = ServiceContext::initialize(CoalesceConfig::for_workspace(&dir.path().join("nope")))
        .err()
        .unwrap();
    assert!(matches!(err, CoalesceError::Workspace(_)));
    assert_eq!(err.error_code(), "WORKSPACE_INVALID");
}

#[test]
fn file_root_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("not_a_dir.txt");
    fs::write(&file, b"x").unwrap();
    let err = ServiceContext::initialize(CoalesceConfig::for_workspace(&file))
        .err()
        .unwrap();
    assert!(matches!(err, CoalesceError::Workspace(_)));
}

#[test]
fn invalid_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = CoalesceConfig::for_workspace(dir.path());
    config.similarity.discovery_threshold = 1.5;
    let err = ServiceContext::initialize(config).err().unwrap();
    assert!(matches!(err, CoalesceError::Config(_)));
}

#[test]
fn open_reads_project_config() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("coalesce.toml"),
        "[similarity]\nmax_batch_patterns = 3\n",
    )
    .unwrap();
    let ctx = ServiceContext::open(dir.path()).unwrap();
    assert_eq!(ctx.config().similarity.max_batch_patterns, 3);

    let err = ctx.gateway().analyze_units(&fixture_units()).unwrap_err();
    assert_eq!(err, GatewayError::BatchTooLarge { size: 6, limit: 3 });
}

#[test]
fn fixture_workspace_finds_copied_module() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = ServiceContext::initialize(CoalesceConfig::for_workspace(dir.path())).unwrap();
    let gateway = ctx.gateway();

    let ops = gateway.analyze_units(&fixture_units()).unwrap();
    assert_eq!(ops.len(), 1);
    assert_eq!(ops[0].id_a, "db_manager.py");
    assert_eq!(ops[0].id_b, "db_manager_copy.py");

    gateway.register_units(&fixture_units());
    let metrics = gateway.get_metrics();
    assert_eq!(metrics.analyses_performed, 1);
    assert_eq!(metrics.opportunities_found, 1);
    assert_eq!(metrics.api_requests, 3);
    assert!((metrics.pattern_cache_hit_rate - 0.5).abs() < 1e-9);
}

#[test]
fn unknown_pattern_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = ServiceContext::initialize(CoalesceConfig::for_workspace(dir.path())).unwrap();
    let gateway = ctx.gateway();
    gateway.register_units(&fixture_units());
    assert_eq!(
        gateway.query_similarity("web_api.py", "missing.py"),
        Err(GatewayError::UnknownPattern {
            id: "missing.py".to_string()
        })
    );
}

#[test]
fn background_retrain_publishes_trained_model() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = ServiceContext::initialize(CoalesceConfig::for_workspace(dir.path())).unwrap();
    let before = ctx.gateway().model_intelligence();
    assert_eq!(before.model_version, 0);

    let handle = ctx
        .spawn_retrain(Arc::new(InMemoryHistoricalStore::new(fixture_rows())))
        .unwrap();
    let intel = handle.join().unwrap();
    assert_eq!(intel.classifier, ClassifierKind::Trained);
    assert_eq!(ctx.gateway().model_intelligence(), intel);

    let mut map = FeatureMap::new();
    map.insert("likely.py".to_string(), vec![20.0, 0.5, 0.95, 1000.0, 1.0]);
    let batch = ctx.gateway().get_predictions(&map);
    assert_eq!(batch.predictions.len(), 1);
    assert_eq!(ctx.gateway().get_metrics().predictions_generated, 1);
}

#[test]
fn retrain_from_workspace_store() {
    let dir = tempfile::tempdir().unwrap();
    let conn = Connection::open(dir.path().join("production.db")).unwrap();
    conn.execute_batch(
        "CREATE TABLE enhanced_script_tracking (
            script_path TEXT, functionality_category TEXT,
            importance_score REAL, similarity_score REAL, file_size INTEGER
        );",
    )
    .unwrap();
    for row in fixture_rows() {
        conn.execute(
            "INSERT INTO enhanced_script_tracking VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                row.unit_path,
                row.category,
                row.importance_score,
                row.similarity_score,
                row.size.map(|s| s as i64)
            ],
        )
        .unwrap();
    }
    drop(conn);

    let ctx = ServiceContext::initialize(CoalesceConfig::for_workspace(dir.path())).unwrap();
    let intel = ctx.retrain_from_workspace();
    assert_eq!(intel.classifier, ClassifierKind::Trained);
    assert_eq!(intel.sample_count, 40);
}

#[test]
fn integration_report_reflects_components() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = ServiceContext::initialize(CoalesceConfig::for_workspace(dir.path())).unwrap();
    let report = ctx.gateway().validate_integration();
    // No store and no running scheduler.
    assert!(!report.all_systems_operational);
    assert!(!report.enterprise_ready);
    let failed: Vec<&str> = report
        .checks
        .iter()
        .filter(|c| !c.passed)
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(
        failed,
        vec!["historical_store", "monitoring_scheduler", "workspace_health"]
    );

    fs::write(dir.path().join("production.db"), b"").unwrap();
    let ready = ServiceContext::initialize(CoalesceConfig::for_workspace(dir.path())).unwrap();
    ready.start_monitoring().unwrap();
    let report = ready.gateway().validate_integration();
    assert!(report.all_systems_operational, "{report:?}");
    assert!(report.enterprise_ready);
    assert_eq!(report.compliance_score, 100.0);
}

#[test]
fn stop_monitoring_and_drop() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = ServiceContext::initialize(CoalesceConfig::for_workspace(dir.path())).unwrap();
    let gateway = ctx.gateway();
    assert_eq!(ctx.stop_monitoring(), StopOutcome::NotRunning);
    ctx.start_monitoring().unwrap();
    assert_eq!(gateway.monitor_snapshot().status, SchedulerStatus::Running);
    drop(ctx);
    assert_eq!(gateway.monitor_snapshot().status, SchedulerStatus::Stopped);
}

#[test]
fn records_serialize_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = ServiceContext::initialize(CoalesceConfig::for_workspace(dir.path())).unwrap();
    let gateway = ctx.gateway();
    let health = serde_json::to_value(gateway.get_health()).unwrap();
    assert_eq!(health["violations"][0], "store_missing");
    let recs = serde_json::to_value(gateway.get_optimization_recommendations()).unwrap();
    assert_eq!(recs[0]["kind"], "restore_historical_store");
    assert_eq!(recs[0]["source"], "health");
}

#[derive(Default)]
struct SlowOptimization {
    entered: AtomicBool,
}

impl CoalesceEventHandler for SlowOptimization {
    fn on_optimization_completed(&self, _event: &OptimizationCompletedEvent) {
        self.entered.store(true, Ordering::SeqCst);
        thread::sleep(Duration::from_millis(300));
    }
}

#[test]
fn validate_integration_answers_while_monitor_stops() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = CoalesceConfig::for_workspace(dir.path());
    config.monitor.tick_interval_ms = 5;
    config.monitor.health_check_interval_ms = 10;
    config.monitor.optimization_interval_ms = 10;
    let slow = Arc::new(SlowOptimization::default());
    let mut events = EventDispatcher::new();
    events.register(slow.clone());
    let ctx = Arc::new(ServiceContext::initialize_with_events(config, events).unwrap());
    let gateway = ctx.gateway();
    ctx.start_monitoring().unwrap();

    let deadline = Instant::now() + Duration::from_secs(5);
    while !slow.entered.load(Ordering::SeqCst) {
        assert!(Instant::now() < deadline, "no optimization cycle ran");
        thread::sleep(Duration::from_millis(1));
    }
    let stopper = {
        let ctx = Arc::clone(&ctx);
        thread::spawn(move || ctx.stop_monitoring())
    };
    thread::sleep(Duration::from_millis(20));

    let started = Instant::now();
    let report = gateway.validate_integration();
    let elapsed = started.elapsed();
    assert!(!stopper.is_finished());
    assert!(elapsed < Duration::from_millis(150), "validation took {elapsed:?}");
    let scheduler = report
        .checks
        .iter()
        .find(|c| c.name == "monitoring_scheduler")
        .unwrap();
    assert!(scheduler.passed);

    assert_eq!(stopper.join().unwrap(), StopOutcome::Stopped);
    assert_eq!(gateway.monitor_snapshot().status, SchedulerStatus::Stopped);
}
