//! Historical outcome stores.

use std::path::{Path, PathBuf};

use coalesce_core::errors::StoreError;
use coalesce_core::models::HistoricalOutcome;
use coalesce_core::traits::HistoricalStore;
use rusqlite::{Connection, OpenFlags};

/// Rows with a recorded similarity, in stable path order.
const OUTCOME_QUERY: &str = "SELECT script_path, functionality_category, importance_score, \
     similarity_score, file_size \
     FROM enhanced_script_tracking \
     WHERE similarity_score IS NOT NULL \
     ORDER BY script_path";

/// SQLite-backed store, opened read-only on every load.
#[derive(Debug, Clone)]
pub struct SqliteHistoricalStore {
    path: PathBuf,
}

impl SqliteHistoricalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, reason: impl Into<String>) -> StoreError {
        StoreError::Unavailable {
            path: self.path.display().to_string(),
            reason: reason.into(),
        }
    }
}

impl HistoricalStore for SqliteHistoricalStore {
    fn load_outcomes(&self) -> Result<Vec<HistoricalOutcome>, StoreError> {
        if !self.path.is_file() {
            return Err(self.unavailable("file not found"));
        }
        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| self.unavailable(e.to_string()))?;

        let mut stmt = conn.prepare(OUTCOME_QUERY).map_err(|e| StoreError::Query {
            message: e.to_string(),
        })?;
        let rows = stmt
            .query_map([], |row| {
                Ok(HistoricalOutcome {
                    unit_path: row.get(0)?,
                    category: row.get(1)?,
                    importance_score: row.get(2)?,
                    similarity_score: row.get(3)?,
                    size: row.get::<_, Option<i64>>(4)?.map(|s| s.max(0) as u64),
                })
            })
            .map_err(|e| StoreError::Query {
                message: e.to_string(),
            })?;
        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| StoreError::Query {
                message: e.to_string(),
            })
    }

    fn describe(&self) -> String {
        format!("sqlite:{}", self.path.display())
    }
}

/// Store over rows already in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistoricalStore {
    outcomes: Vec<HistoricalOutcome>,
}

impl InMemoryHistoricalStore {
    pub fn new(outcomes: Vec<HistoricalOutcome>) -> Self {
        Self { outcomes }
    }
}

impl HistoricalStore for InMemoryHistoricalStore {
    fn load_outcomes(&self) -> Result<Vec<HistoricalOutcome>, StoreError> {
        Ok(self
            .outcomes
            .iter()
            .filter(|o| o.similarity_score.is_some())
            .cloned()
            .collect())
    }

    fn describe(&self) -> String {
        format!("memory:{} rows", self.outcomes.len())
    }
}
