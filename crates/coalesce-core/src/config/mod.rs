pub mod coalesce_config;
pub mod defaults;
pub mod extraction_config;
pub mod monitor_config;
pub mod prediction_config;
pub mod similarity_config;
pub mod workspace_config;

pub use coalesce_config::CoalesceConfig;
pub use extraction_config::ExtractionConfig;
pub use monitor_config::MonitorConfig;
pub use prediction_config::{LearningBackend, PredictionConfig};
pub use similarity_config::SimilarityConfig;
pub use workspace_config::WorkspaceConfig;
