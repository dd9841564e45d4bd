//! MonitoringScheduler: lifecycle of the background worker and the
//! published monitor state.

use std::sync::{Arc, Mutex, RwLock};
use std::thread::{self, JoinHandle};

use coalesce_core::config::{MonitorConfig, WorkspaceConfig};
use coalesce_core::events::types::*;
use coalesce_core::events::EventDispatcher;
use coalesce_core::models::{HealthSnapshot, MonitorSnapshot, Recommendation, SchedulerStatus};
use coalesce_core::{CoalesceError, CoalesceResult};
use crossbeam_channel::{bounded, Sender};
use tracing::{info, warn};

use crate::health::HealthChecker;
use crate::optimization::Optimizer;
use crate::recommendations::recommend;
use crate::worker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    AlreadyRunning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopOutcome {
    Stopped,
    NotRunning,
}

/// State shared between the scheduler handle and its worker thread.
pub(crate) struct Shared {
    config: MonitorConfig,
    checker: HealthChecker,
    optimizer: Optimizer,
    events: EventDispatcher,
    snapshot: RwLock<Arc<MonitorSnapshot>>,
}

impl Shared {
    pub(crate) fn config(&self) -> &MonitorConfig {
        &self.config
    }

    fn current(&self) -> Arc<MonitorSnapshot> {
        let guard = self.snapshot.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    /// Copy, modify, swap. The write lock covers only the clone and swap.
    fn publish<F: FnOnce(&mut MonitorSnapshot)>(&self, update: F) -> Arc<MonitorSnapshot> {
        let mut guard = self.snapshot.write().unwrap_or_else(|e| e.into_inner());
        let mut next = MonitorSnapshot::clone(&guard);
        update(&mut next);
        let next = Arc::new(next);
        *guard = Arc::clone(&next);
        next
    }

    pub(crate) fn record_tick(&self) {
        self.publish(|s| s.ticks += 1);
    }

    pub(crate) fn run_health_check(&self) -> HealthSnapshot {
        let health = self.checker.check();
        self.publish(|s| s.health = health.clone());

        self.events.emit_health_checked(&HealthCheckedEvent {
            snapshot: health.clone(),
        });
        if health.score < self.config.degraded_threshold {
            self.events.emit_health_degraded(&HealthDegradedEvent {
                score: health.score,
                threshold: self.config.degraded_threshold,
                violations: health.violations.clone(),
            });
        }
        health
    }

    pub(crate) fn run_optimization_cycle(&self) {
        let mut completed = None;
        self.publish(|s| {
            let cycle = self
                .optimizer
                .next_cycle(s.cycles_completed, s.cumulative_improvement);
            s.cycles_completed = cycle.cycle_id;
            s.cumulative_improvement = cycle.cumulative_improvement;
            s.last_cycle = Some(cycle.clone());
            completed = Some(cycle);
        });
        if let Some(cycle) = completed {
            self.events
                .emit_optimization_completed(&OptimizationCompletedEvent { cycle });
        }
    }
}

struct Worker {
    stop_tx: Sender<()>,
    handle: JoinHandle<()>,
}

/// Owns the monitoring worker thread. At most one worker runs at a time.
///
/// `lifecycle` serializes `start` and `stop`, and is held across the join.
/// `worker` is only ever locked briefly. Readers take neither.
pub struct MonitoringScheduler {
    shared: Arc<Shared>,
    lifecycle: Mutex<()>,
    worker: Mutex<Option<Worker>>,
}

impl MonitoringScheduler {
    /// Build the scheduler and run one health check synchronously so the
    /// published health is meaningful before the worker starts.
    pub fn new(workspace: &WorkspaceConfig, config: MonitorConfig, events: EventDispatcher) -> Self {
        let checker = HealthChecker::new(workspace, &config);
        let optimizer = Optimizer::new(&config.optimization_catalogue);
        let initial = MonitorSnapshot::initial(checker.check());
        let shared = Arc::new(Shared {
            config,
            checker,
            optimizer,
            events,
            snapshot: RwLock::new(Arc::new(initial)),
        });
        Self {
            shared,
            lifecycle: Mutex::new(()),
            worker: Mutex::new(None),
        }
    }

    /// Spawn the worker. Does nothing when already running.
    pub fn start(&self) -> CoalesceResult<StartOutcome> {
        let _lifecycle = self.lifecycle.lock().unwrap_or_else(|e| e.into_inner());
        let mut worker = self.worker.lock().unwrap_or_else(|e| e.into_inner());
        if worker.is_some() {
            return Ok(StartOutcome::AlreadyRunning);
        }

        let (stop_tx, stop_rx) = bounded(1);
        let shared = Arc::clone(&self.shared);
        self.shared.publish(|s| s.status = SchedulerStatus::Running);
        let handle = thread::Builder::new()
            .name("coalesce-monitor".to_string())
            .spawn(move || worker::run(shared, stop_rx))
            .map_err(|e| {
                self.shared.publish(|s| s.status = SchedulerStatus::Stopped);
                let reason = format!("failed to spawn monitor worker: {e}");
                self.shared.events.emit_monitor_error(&MonitorErrorEvent {
                    message: reason.clone(),
                });
                CoalesceError::Scheduler { reason }
            })?;
        *worker = Some(Worker { stop_tx, handle });
        drop(worker);

        let config = &self.shared.config;
        self.shared.events.emit_scheduler_started(&SchedulerStartedEvent {
            tick_interval_ms: config.tick_interval_ms,
            health_check_interval_ms: config.health_check_interval_ms,
            optimization_interval_ms: config.optimization_interval_ms,
        });
        info!(
            tick_interval_ms = config.tick_interval_ms,
            "monitoring scheduler started"
        );
        Ok(StartOutcome::Started)
    }

    /// Signal the worker and wait for it to finish its in-flight tick.
    ///
    /// The published status stays `Running` until the worker has exited.
    pub fn stop(&self) -> StopOutcome {
        let _lifecycle = self.lifecycle.lock().unwrap_or_else(|e| e.into_inner());
        let taken = self
            .worker
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take();
        let Some(Worker { stop_tx, handle }) = taken else {
            return StopOutcome::NotRunning;
        };

        // A full or disconnected channel both mean the worker will exit.
        let _ = stop_tx.try_send(());
        drop(stop_tx);
        if handle.join().is_err() {
            warn!("monitor worker panicked");
            self.shared.events.emit_monitor_error(&MonitorErrorEvent {
                message: "monitor worker panicked".to_string(),
            });
        }

        let snapshot = self.shared.publish(|s| s.status = SchedulerStatus::Stopped);
        self.shared.events.emit_scheduler_stopped(&SchedulerStoppedEvent {
            ticks: snapshot.ticks,
            cycles_completed: snapshot.cycles_completed,
        });
        info!(ticks = snapshot.ticks, "monitoring scheduler stopped");
        StopOutcome::Stopped
    }

    /// Reads the published status, so it never waits on `start` or `stop`.
    pub fn is_running(&self) -> bool {
        self.shared.current().status == SchedulerStatus::Running
    }

    /// Latest published state. Never waits on the worker.
    pub fn snapshot(&self) -> Arc<MonitorSnapshot> {
        self.shared.current()
    }

    pub fn health(&self) -> HealthSnapshot {
        self.shared.current().health.clone()
    }

    /// Run a health check now, outside the tick schedule.
    pub fn refresh_health(&self) -> HealthSnapshot {
        self.shared.run_health_check()
    }

    /// Run an optimization cycle now, outside the tick schedule.
    pub fn run_optimization_cycle(&self) -> Arc<MonitorSnapshot> {
        self.shared.run_optimization_cycle();
        self.shared.current()
    }

    pub fn recommendations(&self) -> Vec<Recommendation> {
        let snapshot = self.shared.current();
        recommend(&self.shared.optimizer, &snapshot.health, &self.shared.config)
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.shared.config
    }
}

impl Drop for MonitoringScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
