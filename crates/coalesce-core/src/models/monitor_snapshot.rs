use serde::{Deserialize, Serialize};

use super::{HealthSnapshot, OptimizationCycle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchedulerStatus {
    Stopped,
    Running,
}

/// Everything the monitoring scheduler publishes, swapped as one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorSnapshot {
    pub status: SchedulerStatus,
    pub health: HealthSnapshot,
    pub last_cycle: Option<OptimizationCycle>,
    pub cumulative_improvement: f64,
    pub cycles_completed: u64,
    pub ticks: u64,
}

impl MonitorSnapshot {
    pub fn initial(health: HealthSnapshot) -> Self {
        Self {
            status: SchedulerStatus::Stopped,
            health,
            last_cycle: None,
            cumulative_improvement: 0.0,
            cycles_completed: 0,
            ticks: 0,
        }
    }
}
