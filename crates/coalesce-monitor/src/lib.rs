//! # coalesce-monitor
//!
//! Periodic workspace health checks and heuristic optimization cycles,
//! run on one dedicated worker thread driven by a cancellable ticker.
//! State is published as an immutable `MonitorSnapshot`; readers never
//! wait on the worker.

pub mod engine;
pub mod events;
pub mod health;
pub mod optimization;
pub mod recommendations;
mod worker;

pub use engine::{MonitoringScheduler, StartOutcome, StopOutcome};
pub use events::TracingEventHandler;
pub use health::HealthChecker;
pub use optimization::Optimizer;
pub use recommendations::recommend;
