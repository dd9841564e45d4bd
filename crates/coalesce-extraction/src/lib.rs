//! # coalesce-extraction
//!
//! Turns `SourceUnit`s into `SemanticPattern`s: a tree-sitter structural
//! parse collects declared routines, types, and imported modules; a raw
//! token split takes over when the parse fails. Categories come from an
//! ordered keyword ruleset, complexity tiers from the parse-tree size.

pub mod cache;
pub mod categorize;
pub mod discovery;
pub mod engine;
pub mod fallback;
pub mod structural;

pub use cache::PatternCache;
pub use categorize::categorize;
pub use discovery::discover_source_units;
pub use engine::FeatureExtractor;
