//! Embedding provider contract
//!
//! The engine never owns an embedding model. Every entry point takes a
//! provider explicitly so small synthetic vocabularies can stand in for a
//! full word2vec/GloVe model in tests.

pub mod table;

pub use table::EmbeddingTable;

use crate::error::{MedianError, Result};
use crate::vector::cosine_similarity;

/// Read-only access to a word embedding space
///
/// Implementations must tolerate concurrent reads from every scan worker.
pub trait EmbeddingProvider: Sync {
    /// Ordered vocabulary. Order only matters as a ranking tie-break.
    fn vocabulary(&self) -> &[String];

    /// Whether `word` is a vocabulary key
    fn contains(&self, word: &str) -> bool {
        self.vocabulary().iter().any(|w| w == word)
    }

    /// Vector for `word`, `UnknownWord` if absent
    fn vector(&self, word: &str) -> Result<&[f32]>;

    /// Cosine similarity between two vocabulary words
    fn similarity(&self, a: &str, b: &str) -> Result<f32> {
        let va = self.vector(a)?;
        let vb = self.vector(b)?;
        if va.len() != vb.len() {
            return Err(MedianError::DimensionMismatch {
                expected: va.len(),
                actual: vb.len(),
            });
        }
        Ok(cosine_similarity(va, vb))
    }
}

impl<P: EmbeddingProvider + ?Sized> EmbeddingProvider for &P {
    fn vocabulary(&self) -> &[String] {
        (**self).vocabulary()
    }

    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }

    fn vector(&self, word: &str) -> Result<&[f32]> {
        (**self).vector(word)
    }

    fn similarity(&self, a: &str, b: &str) -> Result<f32> {
        (**self).similarity(a, b)
    }
}
