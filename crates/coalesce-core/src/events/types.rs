//! Event payloads. Each carries owned data so handlers may keep it.

use crate::models::{HealthSnapshot, Intelligence, OptimizationCycle, ViolationCategory};

#[derive(Debug, Clone)]
pub struct SchedulerStartedEvent {
    pub tick_interval_ms: u64,
    pub health_check_interval_ms: u64,
    pub optimization_interval_ms: u64,
}

#[derive(Debug, Clone)]
pub struct SchedulerStoppedEvent {
    pub ticks: u64,
    pub cycles_completed: u64,
}

#[derive(Debug, Clone)]
pub struct HealthCheckedEvent {
    pub snapshot: HealthSnapshot,
}

#[derive(Debug, Clone)]
pub struct HealthDegradedEvent {
    pub score: f64,
    pub threshold: f64,
    pub violations: Vec<ViolationCategory>,
}

#[derive(Debug, Clone)]
pub struct OptimizationCompletedEvent {
    pub cycle: OptimizationCycle,
}

#[derive(Debug, Clone)]
pub struct ModelPublishedEvent {
    pub intelligence: Intelligence,
}

#[derive(Debug, Clone)]
pub struct ExtractionDegradedEvent {
    pub unit_id: String,
    pub confidence: f64,
}

#[derive(Debug, Clone)]
pub struct MonitorErrorEvent {
    pub message: String,
}
