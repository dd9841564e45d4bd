use crate::errors::StoreError;
use crate::models::HistoricalOutcome;

/// Source of labeled historical consolidation outcomes.
///
/// Read-only from the engine's point of view; the store is owned
/// and written by collaborators.
pub trait HistoricalStore: Send + Sync {
    /// Load every outcome row with a recorded similarity.
    fn load_outcomes(&self) -> Result<Vec<HistoricalOutcome>, StoreError>;

    /// Human-readable location, used in logs.
    fn describe(&self) -> String;
}
