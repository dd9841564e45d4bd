//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    defaults, ExtractionConfig, LearningBackend, MonitorConfig, PredictionConfig,
    SimilarityConfig, WorkspaceConfig,
};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`COALESCE_*`)
/// 2. Project config (`coalesce.toml` in the workspace root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CoalesceConfig {
    pub workspace: WorkspaceConfig,
    pub extraction: ExtractionConfig,
    pub similarity: SimilarityConfig,
    pub prediction: PredictionConfig,
    pub monitor: MonitorConfig,
}

impl CoalesceConfig {
    /// Load configuration for a workspace root.
    ///
    /// The `root` argument always wins over any `workspace.root` in the file.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let project_config_path = root.join(defaults::DEFAULT_PROJECT_CONFIG_FILENAME);
        let mut config = if project_config_path.exists() {
            Self::from_toml_file(&project_config_path)?
        } else {
            Self::default()
        };
        config.workspace.root = root.to_path_buf();

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Defaults bound to `root`, without reading any file or environment.
    pub fn for_workspace(root: &Path) -> Self {
        let mut config = Self::default();
        config.workspace.root = root.to_path_buf();
        config
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `COALESCE_*` environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup.
    /// Unparseable values are ignored and the previous value kept.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("COALESCE_WORKSPACE_STORE_FILE") {
            self.workspace.store_file = v.into();
        }
        if let Some(v) = parsed(&lookup, "COALESCE_EXTRACTION_MAX_SOURCE_BYTES") {
            self.extraction.max_source_bytes = v;
        }
        if let Some(v) = parsed(&lookup, "COALESCE_EXTRACTION_MAX_TOKENS") {
            self.extraction.max_tokens = v;
        }
        if let Some(v) = parsed(&lookup, "COALESCE_SIMILARITY_DISCOVERY_THRESHOLD") {
            self.similarity.discovery_threshold = v;
        }
        if let Some(v) = parsed(&lookup, "COALESCE_SIMILARITY_MAX_BATCH_PATTERNS") {
            self.similarity.max_batch_patterns = v;
        }
        if let Some(v) = parsed(&lookup, "COALESCE_PREDICTION_PROBABILITY_CUTOFF") {
            self.prediction.probability_cutoff = v;
        }
        if let Some(v) = lookup("COALESCE_PREDICTION_BACKEND") {
            match v.to_ascii_lowercase().as_str() {
                "native" => self.prediction.backend = LearningBackend::Native,
                "disabled" => self.prediction.backend = LearningBackend::Disabled,
                _ => {}
            }
        }
        if let Some(v) = parsed(&lookup, "COALESCE_MONITOR_TICK_INTERVAL_MS") {
            self.monitor.tick_interval_ms = v;
        }
        if let Some(v) = parsed(&lookup, "COALESCE_MONITOR_HEALTH_CHECK_INTERVAL_MS") {
            self.monitor.health_check_interval_ms = v;
        }
        if let Some(v) = parsed(&lookup, "COALESCE_MONITOR_OPTIMIZATION_INTERVAL_MS") {
            self.monitor.optimization_interval_ms = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        unit_interval("similarity.discovery_threshold", self.similarity.discovery_threshold)?;
        unit_interval(
            "similarity.high_priority_threshold",
            self.similarity.high_priority_threshold,
        )?;
        unit_interval("prediction.probability_cutoff", self.prediction.probability_cutoff)?;
        unit_interval("prediction.label_threshold", self.prediction.label_threshold)?;
        if !(0.0..1.0).contains(&self.prediction.test_fraction) {
            return Err(validation(
                "prediction.test_fraction",
                "must be in [0.0, 1.0)",
            ));
        }
        if !(self.prediction.learning_rate > 0.0 && self.prediction.learning_rate.is_finite()) {
            return Err(validation("prediction.learning_rate", "must be positive"));
        }
        if self.prediction.l2_penalty < 0.0 || !self.prediction.l2_penalty.is_finite() {
            return Err(validation("prediction.l2_penalty", "must be non-negative"));
        }
        if self.extraction.max_source_bytes == 0 {
            return Err(validation("extraction.max_source_bytes", "must be greater than 0"));
        }
        if self.extraction.max_tokens == 0 {
            return Err(validation("extraction.max_tokens", "must be greater than 0"));
        }
        if self.similarity.max_batch_patterns == 0 {
            return Err(validation("similarity.max_batch_patterns", "must be greater than 0"));
        }
        for (field, value) in [
            ("monitor.tick_interval_ms", self.monitor.tick_interval_ms),
            ("monitor.health_check_interval_ms", self.monitor.health_check_interval_ms),
            ("monitor.optimization_interval_ms", self.monitor.optimization_interval_ms),
        ] {
            if value == 0 {
                return Err(validation(field, "must be greater than 0"));
            }
        }
        for (field, value) in [
            ("monitor.workspace_missing_penalty", self.monitor.workspace_missing_penalty),
            ("monitor.store_missing_penalty", self.monitor.store_missing_penalty),
            ("monitor.forbidden_path_penalty", self.monitor.forbidden_path_penalty),
            ("monitor.check_failed_score", self.monitor.check_failed_score),
            ("monitor.degraded_threshold", self.monitor.degraded_threshold),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(validation(field, "must be between 0 and 100"));
            }
        }
        for (kind, delta) in &self.monitor.optimization_catalogue {
            if !(*delta >= 0.0 && delta.is_finite()) {
                return Err(ConfigError::InvalidValue {
                    field: format!("monitor.optimization_catalogue.{kind}"),
                    message: "estimated improvement must be a non-negative number".to_string(),
                });
            }
        }
        Ok(())
    }
}

fn parsed<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key).and_then(|v| v.trim().parse::<T>().ok())
}

fn unit_interval(field: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(validation(field, "must be between 0.0 and 1.0"))
    }
}

fn validation(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
