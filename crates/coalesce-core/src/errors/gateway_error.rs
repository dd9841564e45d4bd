//! Request-level errors returned by the API gateway.

use super::error_code::{self, ErrorCode};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GatewayError {
    #[error("unknown pattern: {id}")]
    UnknownPattern { id: String },

    #[error("pattern batch of {size} exceeds limit of {limit}")]
    BatchTooLarge { size: usize, limit: usize },
}

impl ErrorCode for GatewayError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownPattern { .. } => error_code::UNKNOWN_PATTERN,
            Self::BatchTooLarge { .. } => error_code::BATCH_TOO_LARGE,
        }
    }
}
