//! Heuristic optimization cycles over a fixed catalogue of estimated gains.

use std::collections::BTreeMap;

use chrono::Utc;
use coalesce_core::models::OptimizationCycle;

/// Computes optimization cycles. Holds no running state; the cumulative
/// total is carried forward from the previous cycle by the caller.
#[derive(Debug, Clone)]
pub struct Optimizer {
    catalogue: BTreeMap<String, f64>,
}

impl Optimizer {
    /// Negative or non-finite entries contribute nothing.
    pub fn new(catalogue: &BTreeMap<String, f64>) -> Self {
        let catalogue = catalogue
            .iter()
            .map(|(kind, gain)| (kind.clone(), sanitize(*gain)))
            .collect();
        Self { catalogue }
    }

    pub fn catalogue(&self) -> &BTreeMap<String, f64> {
        &self.catalogue
    }

    /// Sum of every catalogue entry.
    pub fn delta(&self) -> f64 {
        self.catalogue.values().sum()
    }

    /// Run the cycle following `cycles_completed` prior cycles whose
    /// gains totalled `cumulative`.
    pub fn next_cycle(&self, cycles_completed: u64, cumulative: f64) -> OptimizationCycle {
        let improvement_delta = self.delta();
        OptimizationCycle {
            cycle_id: cycles_completed + 1,
            improvement_delta,
            cumulative_improvement: cumulative + improvement_delta,
            breakdown: self.catalogue.clone(),
            completed_at: Utc::now(),
        }
    }
}

fn sanitize(gain: f64) -> f64 {
    if gain.is_finite() {
        gain.max(0.0)
    } else {
        0.0
    }
}
