use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Background monitoring configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    pub tick_interval_ms: u64,
    pub health_check_interval_ms: u64,
    pub optimization_interval_ms: u64,
    pub workspace_missing_penalty: f64,
    pub store_missing_penalty: f64,
    pub forbidden_path_penalty: f64,
    /// Score published when the health scan itself fails.
    pub check_failed_score: f64,
    /// Scores below this raise a degraded-health event.
    pub degraded_threshold: f64,
    /// Optimization kind to estimated percent gain per cycle.
    pub optimization_catalogue: BTreeMap<String, f64>,
}

impl MonitorConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn health_check_interval(&self) -> Duration {
        Duration::from_millis(self.health_check_interval_ms)
    }

    pub fn optimization_interval(&self) -> Duration {
        Duration::from_millis(self.optimization_interval_ms)
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: defaults::DEFAULT_TICK_INTERVAL_MS,
            health_check_interval_ms: defaults::DEFAULT_HEALTH_CHECK_INTERVAL_MS,
            optimization_interval_ms: defaults::DEFAULT_OPTIMIZATION_INTERVAL_MS,
            workspace_missing_penalty: defaults::DEFAULT_WORKSPACE_MISSING_PENALTY,
            store_missing_penalty: defaults::DEFAULT_STORE_MISSING_PENALTY,
            forbidden_path_penalty: defaults::DEFAULT_FORBIDDEN_PATH_PENALTY,
            check_failed_score: defaults::DEFAULT_CHECK_FAILED_SCORE,
            degraded_threshold: defaults::DEFAULT_DEGRADED_HEALTH_THRESHOLD,
            optimization_catalogue: defaults::DEFAULT_OPTIMIZATION_CATALOGUE
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
        }
    }
}
