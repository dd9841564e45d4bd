//! Startup workspace validation errors. The only fatal class.

use super::error_code::{self, ErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    #[error("workspace root does not exist: {path}")]
    RootMissing { path: String },

    #[error("workspace root is not a directory: {path}")]
    NotADirectory { path: String },
}

impl ErrorCode for WorkspaceError {
    fn error_code(&self) -> &'static str {
        error_code::WORKSPACE_INVALID
    }
}
