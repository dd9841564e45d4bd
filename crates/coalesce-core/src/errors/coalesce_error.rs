use super::error_code::{self, ErrorCode};
use super::{
    ConfigError, GatewayError, IntegrityViolation, ParseError, StoreError, TrainingError,
    WorkspaceError,
};

/// Umbrella error for every Coalesce subsystem.
#[derive(Debug, thiserror::Error)]
pub enum CoalesceError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("training error: {0}")]
    Training(#[from] TrainingError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("integrity violation: {0}")]
    Integrity(#[from] IntegrityViolation),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("workspace error: {0}")]
    Workspace(#[from] WorkspaceError),

    #[error("gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("scheduler error: {reason}")]
    Scheduler { reason: String },
}

pub type CoalesceResult<T> = Result<T, CoalesceError>;

impl ErrorCode for CoalesceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(e) => e.error_code(),
            Self::Training(e) => e.error_code(),
            Self::Store(e) => e.error_code(),
            Self::Integrity(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Workspace(e) => e.error_code(),
            Self::Gateway(e) => e.error_code(),
            Self::Scheduler { .. } => error_code::SCHEDULER_ERROR,
        }
    }
}
