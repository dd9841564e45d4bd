//! # coalesce-prediction
//!
//! Learns, from historical consolidation outcomes, which units are likely
//! to become consolidation candidates. Reads outcomes from a read-only
//! store, engineers five fixed features, fits a logistic classifier on a
//! deterministic 80/20 split, and serves predictions from an immutable
//! model snapshot swapped in after each training run.

pub mod classifier;
pub mod engine;
pub mod features;
pub mod registry;
pub mod split;
pub mod store;

pub use classifier::{ActiveClassifier, HeuristicClassifier, TrainedClassifier};
pub use engine::PredictiveModel;
pub use registry::{ActiveModel, ModelRegistry};
pub use store::{InMemoryHistoricalStore, SqliteHistoricalStore};
