//! Historical store errors.

use super::error_code::{self, ErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("historical store unavailable at {path}: {reason}")]
    Unavailable { path: String, reason: String },

    #[error("historical store query failed: {message}")]
    Query { message: String },
}

impl ErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable { .. } => error_code::STORE_UNAVAILABLE,
            Self::Query { .. } => error_code::STORE_ERROR,
        }
    }
}
