mod gateway_metrics;
mod health_snapshot;
mod intelligence;
mod monitor_snapshot;
mod opportunity;
mod optimization;
mod prediction;
mod semantic_pattern;
mod source_unit;
mod training;

pub use gateway_metrics::{GatewayMetrics, IntegrationCheck, IntegrationReport};
pub use health_snapshot::{HealthSnapshot, ViolationCategory};
pub use intelligence::{ClassifierKind, HeuristicReason, Intelligence};
pub use monitor_snapshot::{MonitorSnapshot, SchedulerStatus};
pub use opportunity::{ConsolidationOpportunity, ConsolidationType, Priority};
pub use optimization::{OptimizationCycle, Recommendation, RecommendationSource};
pub use prediction::{FeatureMap, Prediction, PredictionBatch, PredictionReasoning, PredictionRejection};
pub use semantic_pattern::{
    ComplexityTier, ExtractionMode, FunctionalCategory, SemanticPattern, TermVector,
};
pub use source_unit::SourceUnit;
pub use training::{HistoricalOutcome, TrainingSample, FEATURE_DIMENSIONS};
