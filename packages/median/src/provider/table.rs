use std::collections::HashMap;

use super::EmbeddingProvider;
use crate::error::{MedianError, Result};
use crate::vector::{cosine_with_norms, norm};

/// In-memory embedding table
///
/// Vectors are stored row-major in one flat buffer (`row i` occupies
/// `data[i * dimension..(i + 1) * dimension]`), with norms computed once at
/// insertion so similarity is a single dot product.
#[derive(Clone, Debug)]
pub struct EmbeddingTable {
    dimension: usize,
    words: Vec<String>,
    key_to_index: HashMap<String, usize>,
    data: Vec<f32>,
    norms: Vec<f32>,
}

impl EmbeddingTable {
    pub fn new(dimension: usize) -> Self {
        Self::with_capacity(dimension, 0)
    }

    pub fn with_capacity(dimension: usize, capacity: usize) -> Self {
        Self {
            dimension,
            words: Vec::with_capacity(capacity),
            key_to_index: HashMap::with_capacity(capacity),
            data: Vec::with_capacity(capacity * dimension),
            norms: Vec::with_capacity(capacity),
        }
    }

    /// Build a table from `(word, vector)` pairs, preserving their order
    pub fn from_entries<I, W>(dimension: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (W, Vec<f32>)>,
        W: Into<String>,
    {
        let mut table = Self::new(dimension);
        for (word, vector) in entries {
            table.push(word, &vector)?;
        }
        Ok(table)
    }

    /// Append a word at the end of the vocabulary
    pub fn push(&mut self, word: impl Into<String>, vector: &[f32]) -> Result<()> {
        let word = word.into();
        if vector.len() != self.dimension {
            return Err(MedianError::DimensionMismatch {
                expected: self.dimension,
                actual: vector.len(),
            });
        }
        if self.key_to_index.contains_key(&word) {
            return Err(MedianError::DuplicateWord(word));
        }

        self.key_to_index.insert(word.clone(), self.words.len());
        self.words.push(word);
        self.data.extend_from_slice(vector);
        self.norms.push(norm(vector));
        Ok(())
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.key_to_index.get(word).copied()
    }

    fn row(&self, index: usize) -> &[f32] {
        let start = index * self.dimension;
        &self.data[start..start + self.dimension]
    }

    fn lookup(&self, word: &str) -> Result<usize> {
        self.index_of(word)
            .ok_or_else(|| MedianError::UnknownWord(word.to_string()))
    }
}

impl EmbeddingProvider for EmbeddingTable {
    fn vocabulary(&self) -> &[String] {
        &self.words
    }

    fn contains(&self, word: &str) -> bool {
        self.key_to_index.contains_key(word)
    }

    fn vector(&self, word: &str) -> Result<&[f32]> {
        let index = self.lookup(word)?;
        Ok(self.row(index))
    }

    fn similarity(&self, a: &str, b: &str) -> Result<f32> {
        let ia = self.lookup(a)?;
        let ib = self.lookup(b)?;
        Ok(cosine_with_norms(
            self.row(ia),
            self.norms[ia],
            self.row(ib),
            self.norms[ib],
        ))
    }
}
