//! Balanced similarity scoring
//!
//! Ranking candidates by plain closeness to both anchors favours words that
//! cluster tightly around one of them. The balance penalty subtracts the
//! asymmetry of the two similarities so the winners sit between the anchors:
//!
//! - `balance_penalty = |sim1 - sim2|`
//! - `avg_similarity = (sim1 + sim2) / 2 - balance_penalty`

use crate::error::Result;
use crate::provider::EmbeddingProvider;
use crate::types::ScoreRecord;

/// Combine two anchor similarities into a record
pub fn balanced_score(word: &str, vocab_index: usize, sim1: f32, sim2: f32) -> ScoreRecord {
    let balance_penalty = (sim1 - sim2).abs();
    let avg_similarity = (sim1 + sim2) / 2.0 - balance_penalty;

    ScoreRecord {
        word: word.to_string(),
        vocab_index,
        avg_similarity,
        sim1,
        sim2,
        balance_penalty,
    }
}

/// Score `word` against both anchors using any similarity function
///
/// Similarity failures propagate unchanged; no default score is substituted.
pub fn score_with<F>(
    word: &str,
    vocab_index: usize,
    word1: &str,
    word2: &str,
    mut similarity: F,
) -> Result<ScoreRecord>
where
    F: FnMut(&str, &str) -> Result<f32>,
{
    let sim1 = similarity(word, word1)?;
    let sim2 = similarity(word, word2)?;
    Ok(balanced_score(word, vocab_index, sim1, sim2))
}

/// Score `word` using the provider's cosine similarity
pub fn score_candidate<P: EmbeddingProvider + ?Sized>(
    word: &str,
    vocab_index: usize,
    word1: &str,
    word2: &str,
    provider: &P,
) -> Result<ScoreRecord> {
    score_with(word, vocab_index, word1, word2, |a, b| {
        provider.similarity(a, b)
    })
}
