use serde::{Deserialize, Serialize};

/// A unit of source text submitted by a collaborator.
///
/// Immutable once constructed: the core reads it, never rewrites it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceUnit {
    /// Path or name identifying the unit.
    pub id: String,
    pub text: String,
    /// blake3 hex digest of `text`.
    pub content_hash: String,
}

impl SourceUnit {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let content_hash = Self::compute_content_hash(&text);
        Self {
            id: id.into(),
            text,
            content_hash,
        }
    }

    /// blake3 digest used to detect content changes.
    pub fn compute_content_hash(text: &str) -> String {
        blake3::hash(text.as_bytes()).to_hex().to_string()
    }

    pub fn byte_len(&self) -> usize {
        self.text.len()
    }
}
