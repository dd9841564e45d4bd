//! # coalesce-core
//!
//! Foundation crate for the Coalesce consolidation engine.
//! Defines the shared entity records, subsystem errors, configuration,
//! capability traits, the typed event sink, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CoalesceConfig;
pub use errors::{CoalesceError, CoalesceResult};
pub use models::{
    ComplexityTier, ConsolidationOpportunity, FunctionalCategory, HealthSnapshot, Intelligence,
    OptimizationCycle, Prediction, PredictionBatch, Recommendation, SemanticPattern, SourceUnit,
    TrainingSample,
};
