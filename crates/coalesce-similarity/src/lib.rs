//! # coalesce-similarity
//!
//! Sparse cosine similarity between semantic patterns, a category
//! heuristic when either side has no features, and all-pairs discovery
//! of consolidation opportunities above a threshold.

pub mod cosine;
pub mod discovery;
pub mod engine;

pub use engine::SimilarityEngine;
