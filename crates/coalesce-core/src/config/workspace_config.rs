use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Workspace layout and integrity rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Root directory the engine is bound to. Must exist at startup.
    pub root: PathBuf,
    /// Historical store file, relative to `root` unless absolute.
    pub store_file: PathBuf,
    /// Glob patterns for directory names that must not exist in the workspace.
    pub forbidden_patterns: Vec<String>,
    /// Maximum directory depth of the integrity scan.
    pub scan_max_depth: usize,
}

impl WorkspaceConfig {
    /// Absolute location of the historical store.
    pub fn store_path(&self) -> PathBuf {
        if self.store_file.is_absolute() {
            self.store_file.clone()
        } else {
            self.root.join(&self.store_file)
        }
    }
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            store_file: PathBuf::from(defaults::DEFAULT_STORE_FILENAME),
            forbidden_patterns: defaults::DEFAULT_FORBIDDEN_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
            scan_max_depth: defaults::DEFAULT_SCAN_MAX_DEPTH,
        }
    }
}
