//! CoalesceEventHandler trait, every method a no-op by default.

use super::types::*;

/// Trait for handling Coalesce events.
///
/// Handlers override only the events they care about. `Send + Sync`
/// because events are emitted from the scheduler thread and from
/// gateway callers concurrently.
pub trait CoalesceEventHandler: Send + Sync {
    // ---- Scheduler lifecycle ----
    fn on_scheduler_started(&self, _event: &SchedulerStartedEvent) {}
    fn on_scheduler_stopped(&self, _event: &SchedulerStoppedEvent) {}

    // ---- Health ----
    fn on_health_checked(&self, _event: &HealthCheckedEvent) {}
    fn on_health_degraded(&self, _event: &HealthDegradedEvent) {}

    // ---- Optimization ----
    fn on_optimization_completed(&self, _event: &OptimizationCompletedEvent) {}

    // ---- Model ----
    fn on_model_published(&self, _event: &ModelPublishedEvent) {}

    // ---- Extraction ----
    fn on_extraction_degraded(&self, _event: &ExtractionDegradedEvent) {}

    // ---- Errors ----
    fn on_monitor_error(&self, _event: &MonitorErrorEvent) {}
}
