//! Typed event sink for engine lifecycle and monitoring signals.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::CoalesceEventHandler;
pub use types::*;
