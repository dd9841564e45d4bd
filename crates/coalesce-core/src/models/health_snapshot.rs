use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category of a detected health violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCategory {
    WorkspaceMissing,
    StoreMissing,
    ForbiddenPath,
    CheckFailed,
}

impl ViolationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WorkspaceMissing => "workspace_missing",
            Self::StoreMissing => "store_missing",
            Self::ForbiddenPath => "forbidden_path",
            Self::CheckFailed => "check_failed",
        }
    }
}

/// Point-in-time workspace health.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthSnapshot {
    /// Always within [0, 100].
    pub score: f64,
    pub violations: Vec<ViolationCategory>,
    /// Offending directories behind a `ForbiddenPath` violation.
    pub forbidden_paths: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

impl HealthSnapshot {
    /// Build a snapshot, clamping the score into [0, 100].
    pub fn new(score: f64, violations: Vec<ViolationCategory>, forbidden_paths: Vec<String>) -> Self {
        let score = if score.is_nan() { 0.0 } else { score.clamp(0.0, 100.0) };
        Self {
            score,
            violations,
            forbidden_paths,
            timestamp: Utc::now(),
        }
    }

    pub fn has_violation(&self, category: ViolationCategory) -> bool {
        self.violations.contains(&category)
    }
}
