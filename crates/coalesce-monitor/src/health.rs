//! Workspace integrity and health scoring.
//!
//! Score starts at 100. Missing workspace root: -30. Missing historical
//! store: -20. Any forbidden directory: -25 (once, however many match).
//! A scan that fails on I/O publishes the fallback score instead.

use std::path::{Path, PathBuf};

use coalesce_core::config::{defaults, MonitorConfig, WorkspaceConfig};
use coalesce_core::errors::IntegrityViolation;
use coalesce_core::models::{HealthSnapshot, ViolationCategory};
use globset::{Glob, GlobSet, GlobSetBuilder};
use walkdir::WalkDir;

#[derive(Debug)]
pub struct HealthChecker {
    root: PathBuf,
    store_path: PathBuf,
    patterns: Vec<String>,
    forbidden: GlobSet,
    max_depth: usize,
    workspace_missing_penalty: f64,
    store_missing_penalty: f64,
    forbidden_path_penalty: f64,
    check_failed_score: f64,
}

impl HealthChecker {
    pub fn new(workspace: &WorkspaceConfig, monitor: &MonitorConfig) -> Self {
        let mut builder = GlobSetBuilder::new();
        let mut patterns = Vec::with_capacity(workspace.forbidden_patterns.len());
        for pattern in &workspace.forbidden_patterns {
            match Glob::new(pattern) {
                Ok(glob) => {
                    builder.add(glob);
                    patterns.push(pattern.clone());
                }
                Err(e) => tracing::warn!(pattern = %pattern, error = %e, "ignoring invalid forbidden pattern"),
            }
        }
        let forbidden = builder.build().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "forbidden pattern set failed to build, scan disabled");
            patterns.clear();
            GlobSet::empty()
        });

        Self {
            root: workspace.root.clone(),
            store_path: workspace.store_path(),
            patterns,
            forbidden,
            max_depth: workspace.scan_max_depth,
            workspace_missing_penalty: monitor.workspace_missing_penalty,
            store_missing_penalty: monitor.store_missing_penalty,
            forbidden_path_penalty: monitor.forbidden_path_penalty,
            check_failed_score: monitor.check_failed_score,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Run every check and score the result.
    pub fn check(&self) -> HealthSnapshot {
        let mut score = defaults::HEALTH_BASELINE;
        let mut violations = Vec::new();
        let mut forbidden_paths = Vec::new();

        if !self.root.is_dir() {
            score -= self.workspace_missing_penalty;
            violations.push(ViolationCategory::WorkspaceMissing);
        }
        if !self.store_path.is_file() {
            score -= self.store_missing_penalty;
            violations.push(ViolationCategory::StoreMissing);
        }

        if self.root.is_dir() {
            match self.scan_forbidden() {
                Ok(found) => {
                    if !found.is_empty() {
                        score -= self.forbidden_path_penalty;
                        violations.push(ViolationCategory::ForbiddenPath);
                        for violation in &found {
                            tracing::warn!(error = %violation, "workspace integrity violation");
                            if let IntegrityViolation::ForbiddenPath { path, .. } = violation {
                                forbidden_paths.push(path.clone());
                            }
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "health scan failed, publishing fallback score");
                    return HealthSnapshot::new(
                        self.check_failed_score,
                        vec![ViolationCategory::CheckFailed],
                        Vec::new(),
                    );
                }
            }
        }

        HealthSnapshot::new(score, violations, forbidden_paths)
    }

    /// Directories under the root whose name matches a forbidden pattern.
    /// Matching directories are not descended into.
    fn scan_forbidden(&self) -> Result<Vec<IntegrityViolation>, IntegrityViolation> {
        let mut found = Vec::new();
        if self.patterns.is_empty() {
            return Ok(found);
        }

        let mut walker = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(self.max_depth)
            .sort_by_file_name()
            .into_iter();
        while let Some(entry) = walker.next() {
            let entry = entry.map_err(|e| IntegrityViolation::ScanFailed {
                reason: e.to_string(),
            })?;
            if !entry.file_type().is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy();
            let Some(&index) = self.forbidden.matches(&*name).first() else {
                continue;
            };
            let relative = entry
                .path()
                .strip_prefix(&self.root)
                .unwrap_or(entry.path())
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/");
            found.push(IntegrityViolation::ForbiddenPath {
                path: relative,
                pattern: self.patterns[index].clone(),
            });
            walker.skip_current_dir();
        }
        Ok(found)
    }
}
