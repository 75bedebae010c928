#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use rand::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use semantic_median::{CancellationToken, EmbeddingProvider, EmbeddingTable, MedianError, Result};

/// Provider defined by an explicit similarity table
///
/// Self-similarity is 1.0. Unlisted pairs of known words are 0.0.
pub struct SimilarityTable {
    words: Vec<String>,
    pairs: HashMap<(String, String), f32>,
}

impl SimilarityTable {
    pub fn new(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_string()).collect(),
            pairs: HashMap::new(),
        }
    }

    pub fn with(mut self, a: &str, b: &str, sim: f32) -> Self {
        self.pairs.insert((a.to_string(), b.to_string()), sim);
        self.pairs.insert((b.to_string(), a.to_string()), sim);
        self
    }
}

impl EmbeddingProvider for SimilarityTable {
    fn vocabulary(&self) -> &[String] {
        &self.words
    }

    fn vector(&self, word: &str) -> Result<&[f32]> {
        if self.contains(word) {
            Ok(&[])
        } else {
            Err(MedianError::UnknownWord(word.to_string()))
        }
    }

    fn similarity(&self, a: &str, b: &str) -> Result<f32> {
        for word in [a, b] {
            if !self.contains(word) {
                return Err(MedianError::UnknownWord(word.to_string()));
            }
        }
        if a == b {
            return Ok(1.0);
        }
        Ok(self
            .pairs
            .get(&(a.to_string(), b.to_string()))
            .copied()
            .unwrap_or(0.0))
    }
}

/// The tropical/canoe scenario
pub fn tropical_canoe() -> SimilarityTable {
    SimilarityTable::new(&["tropical", "canoe", "beach", "paddle", "tropically_adj"])
        .with("tropical", "canoe", 0.1)
        .with("beach", "tropical", 0.8)
        .with("beach", "canoe", 0.6)
        .with("paddle", "tropical", 0.3)
        .with("paddle", "canoe", 0.9)
        .with("tropically_adj", "tropical", 0.99)
        .with("tropically_adj", "canoe", 0.98)
}

/// Counts every similarity lookup of the wrapped provider
pub struct CountingProvider<P> {
    inner: P,
    calls: AtomicUsize,
    cancel_after: Option<(usize, CancellationToken)>,
}

impl<P: EmbeddingProvider> CountingProvider<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
            cancel_after: None,
        }
    }

    /// Cancel `token` once `calls` lookups have happened
    pub fn cancelling(inner: P, calls: usize, token: CancellationToken) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
            cancel_after: Some((calls, token)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<P: EmbeddingProvider> EmbeddingProvider for CountingProvider<P> {
    fn vocabulary(&self) -> &[String] {
        self.inner.vocabulary()
    }

    fn contains(&self, word: &str) -> bool {
        self.inner.contains(word)
    }

    fn vector(&self, word: &str) -> Result<&[f32]> {
        self.inner.vector(word)
    }

    fn similarity(&self, a: &str, b: &str) -> Result<f32> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some((limit, token)) = &self.cancel_after {
            if n >= *limit {
                token.cancel();
            }
        }
        self.inner.similarity(a, b)
    }
}

/// Lists words it cannot resolve
pub struct BrokenProvider {
    inner: EmbeddingTable,
    words: Vec<String>,
}

impl BrokenProvider {
    pub fn new(inner: EmbeddingTable, broken: &str, position: usize) -> Self {
        Self::with_broken(inner, &[(broken, position)])
    }

    /// Insert each `(word, position)` in order
    pub fn with_broken(inner: EmbeddingTable, broken: &[(&str, usize)]) -> Self {
        let mut words = inner.vocabulary().to_vec();
        for (word, position) in broken {
            words.insert((*position).min(words.len()), word.to_string());
        }
        Self { inner, words }
    }
}

impl EmbeddingProvider for BrokenProvider {
    fn vocabulary(&self) -> &[String] {
        &self.words
    }

    fn contains(&self, word: &str) -> bool {
        self.inner.contains(word)
    }

    fn vector(&self, word: &str) -> Result<&[f32]> {
        self.inner.vector(word)
    }
}

/// Seeded random table; words are `w0000`, `w0001`, ...
pub fn random_table(words: usize, dimension: usize, seed: u64) -> EmbeddingTable {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut table = EmbeddingTable::with_capacity(dimension, words);
    for i in 0..words {
        let vector: Vec<f32> = (0..dimension).map(|_| rng.gen_range(-1.0..1.0)).collect();
        table
            .push(format!("w{i:04}"), &vector)
            .expect("generated words are unique");
    }
    table
}

/// Random table with quantised components so exact score ties occur
pub fn coarse_table(words: usize, seed: u64) -> EmbeddingTable {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut table = EmbeddingTable::with_capacity(2, words);
    for i in 0..words {
        let vector = [rng.gen_range(0..4) as f32, rng.gen_range(0..4) as f32 + 1.0];
        table
            .push(format!("c{i:04}"), &vector)
            .expect("generated words are unique");
    }
    table
}
