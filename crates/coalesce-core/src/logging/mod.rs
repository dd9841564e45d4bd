//! Tracing initialization.

mod setup;

pub use setup::{init_tracing, init_tracing_json};
