//! Guess position estimation
//!
//! Places a single guess between the two anchors by relative affinity:
//! `position = sim2 / (sim1 + sim2)`. 0 leans towards `word1`, 1 towards
//! `word2`.
//!
//! The value is not clamped. Mixed-sign similarities push it outside
//! `[0, 1]`, and a guess orthogonal to both anchors makes the denominator
//! zero so the result is non-finite. Callers receive it as is.

use crate::error::{MedianError, Result};
use crate::provider::EmbeddingProvider;
use crate::types::PositionEstimate;

/// Relative position of `guess` between `word1` and `word2`
pub fn estimate<P>(guess: &str, word1: &str, word2: &str, provider: &P) -> Result<f32>
where
    P: EmbeddingProvider + ?Sized,
{
    estimate_detailed(guess, word1, word2, provider).map(|e| e.position)
}

/// Same as [`estimate`], keeping both similarities
pub fn estimate_detailed<P>(
    guess: &str,
    word1: &str,
    word2: &str,
    provider: &P,
) -> Result<PositionEstimate>
where
    P: EmbeddingProvider + ?Sized,
{
    for word in [guess, word1, word2] {
        if !provider.contains(word) {
            return Err(MedianError::UnknownWord(word.to_string()));
        }
    }

    let sim1 = provider.similarity(guess, word1)?;
    let sim2 = provider.similarity(guess, word2)?;

    Ok(PositionEstimate {
        guess: guess.to_string(),
        sim1,
        sim2,
        position: relative_position(sim1, sim2),
    })
}

/// `sim2 / (sim1 + sim2)` without guarding the denominator
pub fn relative_position(sim1: f32, sim2: f32) -> f32 {
    sim2 / (sim1 + sim2)
}
