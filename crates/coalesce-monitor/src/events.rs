//! Event handler that renders every event as a structured tracing record.

use coalesce_core::events::types::*;
use coalesce_core::events::CoalesceEventHandler;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventHandler;

impl CoalesceEventHandler for TracingEventHandler {
    fn on_scheduler_started(&self, event: &SchedulerStartedEvent) {
        info!(
            event = "scheduler_started",
            tick_interval_ms = event.tick_interval_ms,
            health_check_interval_ms = event.health_check_interval_ms,
            optimization_interval_ms = event.optimization_interval_ms,
            "monitoring started"
        );
    }

    fn on_scheduler_stopped(&self, event: &SchedulerStoppedEvent) {
        info!(
            event = "scheduler_stopped",
            ticks = event.ticks,
            cycles_completed = event.cycles_completed,
            "monitoring stopped"
        );
    }

    fn on_health_checked(&self, event: &HealthCheckedEvent) {
        debug!(
            event = "health_checked",
            score = event.snapshot.score,
            violations = event.snapshot.violations.len(),
        );
    }

    fn on_health_degraded(&self, event: &HealthDegradedEvent) {
        let violations: Vec<&str> = event.violations.iter().map(|v| v.as_str()).collect();
        warn!(
            event = "health_degraded",
            score = event.score,
            threshold = event.threshold,
            violations = ?violations,
            "workspace health degraded"
        );
    }

    fn on_optimization_completed(&self, event: &OptimizationCompletedEvent) {
        info!(
            event = "optimization_completed",
            cycle_id = event.cycle.cycle_id,
            delta = event.cycle.improvement_delta,
            cumulative = event.cycle.cumulative_improvement,
        );
    }

    fn on_model_published(&self, event: &ModelPublishedEvent) {
        info!(
            event = "model_published",
            model_version = event.intelligence.model_version,
            classifier = ?event.intelligence.classifier,
            accuracy = event.intelligence.training_accuracy,
        );
    }

    fn on_extraction_degraded(&self, event: &ExtractionDegradedEvent) {
        debug!(
            event = "extraction_degraded",
            unit_id = %event.unit_id,
            confidence = event.confidence,
        );
    }

    fn on_monitor_error(&self, event: &MonitorErrorEvent) {
        warn!(event = "monitor_error", message = %event.message);
    }
}
