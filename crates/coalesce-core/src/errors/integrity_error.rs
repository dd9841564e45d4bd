//! Workspace integrity violations found by health checks.

use super::error_code::{self, ErrorCode};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntegrityViolation {
    #[error("forbidden path {path} matches {pattern}")]
    ForbiddenPath { path: String, pattern: String },

    #[error("workspace scan failed: {reason}")]
    ScanFailed { reason: String },
}

impl ErrorCode for IntegrityViolation {
    fn error_code(&self) -> &'static str {
        error_code::INTEGRITY_VIOLATION
    }
}
