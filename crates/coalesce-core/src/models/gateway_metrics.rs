use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Engine-wide counters reported by the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayMetrics {
    pub uptime_secs: u64,
    pub api_requests: u64,
    pub analyses_performed: u64,
    pub opportunities_found: u64,
    pub predictions_generated: u64,
    pub monitoring_ticks: u64,
    pub optimization_cycles: u64,
    pub cumulative_improvement: f64,
    pub health_score: f64,
    pub pattern_cache_hit_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationCheck {
    pub name: String,
    pub passed: bool,
}

/// Self-check across every component of a running service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationReport {
    pub checks: Vec<IntegrationCheck>,
    /// Percent of checks that passed.
    pub compliance_score: f64,
    pub enterprise_ready: bool,
    pub all_systems_operational: bool,
    pub generated_at: DateTime<Utc>,
}

impl IntegrationReport {
    pub fn from_checks(checks: Vec<IntegrationCheck>, ready_threshold: f64) -> Self {
        let passed = checks.iter().filter(|c| c.passed).count();
        let compliance_score = if checks.is_empty() {
            0.0
        } else {
            passed as f64 / checks.len() as f64 * 100.0
        };
        Self {
            all_systems_operational: !checks.is_empty() && passed == checks.len(),
            enterprise_ready: compliance_score >= ready_threshold,
            compliance_score,
            checks,
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(name: &str, passed: bool) -> IntegrationCheck {
        IntegrationCheck {
            name: name.to_string(),
            passed,
        }
    }

    #[test]
    fn compliance_is_percent_passed() {
        let report = IntegrationReport::from_checks(
            vec![check("a", true), check("b", true), check("c", true), check("d", false)],
            95.0,
        );
        assert_eq!(report.compliance_score, 75.0);
        assert!(!report.enterprise_ready);
        assert!(!report.all_systems_operational);
    }

    #[test]
    fn all_passing_is_ready() {
        let report = IntegrationReport::from_checks(vec![check("a", true)], 95.0);
        assert!(report.enterprise_ready);
        assert!(report.all_systems_operational);
    }

    #[test]
    fn empty_checks_are_not_ready() {
        let report = IntegrationReport::from_checks(vec![], 95.0);
        assert_eq!(report.compliance_score, 0.0);
        assert!(!report.enterprise_ready);
    }
}
