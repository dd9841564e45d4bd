//! Error handling for Coalesce.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod coalesce_error;
pub mod config_error;
pub mod error_code;
pub mod gateway_error;
pub mod integrity_error;
pub mod parse_error;
pub mod store_error;
pub mod training_error;
pub mod workspace_error;

pub use coalesce_error::{CoalesceError, CoalesceResult};
pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use gateway_error::GatewayError;
pub use integrity_error::IntegrityViolation;
pub use parse_error::ParseError;
pub use store_error::StoreError;
pub use training_error::TrainingError;
pub use workspace_error::WorkspaceError;
