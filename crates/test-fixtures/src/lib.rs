//! Test fixture loader for Coalesce source samples and historical outcomes.
//!
//! Fixtures live in the workspace-level `test-fixtures/` directory:
//! `sources/` holds Python sample units, `outcomes/` holds JSON rows
//! for the historical store.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Root directory of the test-fixtures data folder.
fn fixtures_root() -> PathBuf {
    // Walk up from whichever crate is running until the data folder appears.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("sources").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Load a source sample as `(id, text)`, the id being its file name.
///
/// # Panics
/// Panics if the sample doesn't exist.
pub fn load_source(name: &str) -> (String, String) {
    let path = fixtures_root().join("sources").join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read source {}: {}", path.display(), e));
    (name.to_string(), text)
}

/// Every source sample as `(id, text)`, sorted by id.
pub fn load_all_sources() -> Vec<(String, String)> {
    let dir = fixtures_root().join("sources");
    let mut names: Vec<String> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension().is_some_and(|ext| ext == "py") {
                path.file_name().map(|n| n.to_string_lossy().into_owned())
            } else {
                None
            }
        })
        .collect();
    names.sort();
    names.iter().map(|n| load_source(n)).collect()
}
