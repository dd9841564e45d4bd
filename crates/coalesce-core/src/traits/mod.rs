mod classifier;
mod historical_store;

pub use classifier::Classifier;
pub use historical_store::HistoricalStore;
