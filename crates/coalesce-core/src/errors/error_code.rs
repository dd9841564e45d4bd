//! Stable error codes for collaborators that cannot match on Rust types.

/// Every error enum provides a structured code string.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "PARSE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const FEATURE_DIMENSION: &str = "FEATURE_DIMENSION";
pub const INSUFFICIENT_DATA: &str = "INSUFFICIENT_DATA";
pub const TRAINING_ERROR: &str = "TRAINING_ERROR";
pub const STORE_UNAVAILABLE: &str = "STORE_UNAVAILABLE";
pub const STORE_ERROR: &str = "STORE_ERROR";
pub const INTEGRITY_VIOLATION: &str = "INTEGRITY_VIOLATION";
pub const WORKSPACE_INVALID: &str = "WORKSPACE_INVALID";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const UNKNOWN_PATTERN: &str = "UNKNOWN_PATTERN";
pub const BATCH_TOO_LARGE: &str = "BATCH_TOO_LARGE";
pub const SCHEDULER_ERROR: &str = "SCHEDULER_ERROR";
