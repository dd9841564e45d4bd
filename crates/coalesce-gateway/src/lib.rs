//! # coalesce-gateway
//!
//! The service object and request surface of the engine.
//! `ServiceContext` validates the workspace, builds every component once
//! and owns the monitoring worker; `ApiGateway` handles are cheap clones
//! that answer requests from published snapshots.

pub mod context;
pub mod gateway;
mod integration;
mod metrics;

pub use context::ServiceContext;
pub use gateway::ApiGateway;
