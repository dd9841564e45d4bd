//! Source-unit and feature-vector parse errors.

use super::error_code::{self, ErrorCode};

/// Raised when input cannot be read structurally.
///
/// Never escapes a component: extraction converts it into a fallback
/// pattern and prediction into a per-entry rejection.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("malformed source unit {unit_id}: {error_nodes} error node(s)")]
    Malformed { unit_id: String, error_nodes: usize },

    #[error("source unit {unit_id} is {bytes} bytes, limit is {limit}")]
    TooLarge {
        unit_id: String,
        bytes: usize,
        limit: usize,
    },

    #[error("parser unavailable: {reason}")]
    ParserUnavailable { reason: String },

    #[error("feature vector for {unit_id} has {actual} dimensions, expected {expected}")]
    FeatureDimension {
        unit_id: String,
        expected: usize,
        actual: usize,
    },

    #[error("feature vector for {unit_id} contains a non-finite value")]
    NonFiniteFeature { unit_id: String },
}

impl ErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::FeatureDimension { .. } | Self::NonFiniteFeature { .. } => {
                error_code::FEATURE_DIMENSION
            }
            _ => error_code::PARSE_ERROR,
        }
    }
}
