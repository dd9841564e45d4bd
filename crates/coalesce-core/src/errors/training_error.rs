//! Model training errors.

use super::error_code::{self, ErrorCode};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrainingError {
    #[error("insufficient training data: {samples} sample(s), need {required}")]
    InsufficientData { samples: usize, required: usize },

    #[error("learning backend unavailable")]
    BackendUnavailable,

    #[error("training diverged: {reason}")]
    Diverged { reason: String },
}

impl ErrorCode for TrainingError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientData { .. } => error_code::INSUFFICIENT_DATA,
            _ => error_code::TRAINING_ERROR,
        }
    }
}
