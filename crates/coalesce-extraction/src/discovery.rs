//! Workspace discovery of Python source units.

use std::path::Path;

use coalesce_core::errors::WorkspaceError;
use coalesce_core::SourceUnit;
use tracing::warn;
use walkdir::WalkDir;

/// Collect `*.py` files under `root` as source units, sorted by id.
///
/// Ids are paths relative to `root` with `/` separators. With
/// `recursive = false` only the top-level directory is read. Files over
/// `max_bytes` or that are not valid UTF-8 are skipped with a warning.
pub fn discover_source_units(
    root: &Path,
    recursive: bool,
    max_bytes: usize,
) -> Result<Vec<SourceUnit>, WorkspaceError> {
    if !root.exists() {
        return Err(WorkspaceError::RootMissing {
            path: root.display().to_string(),
        });
    }
    if !root.is_dir() {
        return Err(WorkspaceError::NotADirectory {
            path: root.display().to_string(),
        });
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut units = Vec::new();
    for entry in WalkDir::new(root)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "py"))
    {
        let path = entry.path();
        let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
        if size > max_bytes as u64 {
            warn!(path = %path.display(), size, limit = max_bytes, "skipping oversized source file");
            continue;
        }
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unreadable source file");
                continue;
            }
        };
        let id = path
            .strip_prefix(root)
            .unwrap_or(path)
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        units.push(SourceUnit::new(id, text));
    }
    units.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(units)
}
