//! EventDispatcher: synchronous fan-out to registered handlers.

use std::sync::Arc;

use super::handler::CoalesceEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
///
/// Registration happens before the dispatcher is shared; emitting
/// with no handlers iterates an empty Vec.
#[derive(Clone, Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn CoalesceEventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, handler: Arc<dyn CoalesceEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit to every handler. A panicking handler is logged and skipped
    /// so later handlers still receive the event.
    fn emit<F: Fn(&dyn CoalesceEventHandler)>(&self, event_name: &'static str, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!(event = event_name, "event handler panicked");
            }
        }
    }

    pub fn emit_scheduler_started(&self, event: &SchedulerStartedEvent) {
        self.emit("scheduler_started", |h| h.on_scheduler_started(event));
    }

    pub fn emit_scheduler_stopped(&self, event: &SchedulerStoppedEvent) {
        self.emit("scheduler_stopped", |h| h.on_scheduler_stopped(event));
    }

    pub fn emit_health_checked(&self, event: &HealthCheckedEvent) {
        self.emit("health_checked", |h| h.on_health_checked(event));
    }

    pub fn emit_health_degraded(&self, event: &HealthDegradedEvent) {
        self.emit("health_degraded", |h| h.on_health_degraded(event));
    }

    pub fn emit_optimization_completed(&self, event: &OptimizationCompletedEvent) {
        self.emit("optimization_completed", |h| h.on_optimization_completed(event));
    }

    pub fn emit_model_published(&self, event: &ModelPublishedEvent) {
        self.emit("model_published", |h| h.on_model_published(event));
    }

    pub fn emit_extraction_degraded(&self, event: &ExtractionDegradedEvent) {
        self.emit("extraction_degraded", |h| h.on_extraction_degraded(event));
    }

    pub fn emit_monitor_error(&self, event: &MonitorErrorEvent) {
        self.emit("monitor_error", |h| h.on_monitor_error(event));
    }
}
