//! Common Types and Constants
//!
//! Shared data structures used across the scoring, ranking, estimation and
//! projection modules.

use serde::{Deserialize, Serialize};

// ==================== Constants ====================

/// Default number of scan workers
pub const DEFAULT_CONCURRENCY: usize = 10;

/// Upper bound on scan threads actually spawned, whatever `concurrency` asks for
pub const MAX_SCAN_WORKERS: usize = 256;

/// Default length of the `top_n` slice
pub const DEFAULT_TOP_N: usize = 10;

/// Character the embedding vocabulary uses to join multi-token phrases
/// into a single key (e.g. `New_York`)
pub const PHRASE_JOINER: char = '_';

// ==================== Data Model ====================

/// A key into the embedding vocabulary. Case and punctuation are significant.
pub type Word = String;

/// Scoring result for one candidate word
///
/// `avg_similarity = (sim1 + sim2) / 2 - balance_penalty`
/// `balance_penalty = |sim1 - sim2|`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    /// Candidate word
    pub word: Word,
    /// Position of the candidate in the provider's vocabulary (tie-break key)
    pub vocab_index: usize,
    /// Balanced score, higher is better
    pub avg_similarity: f32,
    /// Cosine similarity to the first anchor
    pub sim1: f32,
    /// Cosine similarity to the second anchor
    pub sim2: f32,
    /// Absolute difference between `sim1` and `sim2`
    pub balance_penalty: f32,
}

/// Outcome of a full vocabulary scan
///
/// Both sequences are sorted descending by `avg_similarity`. An empty `all`
/// is a valid outcome: every candidate was excluded or the vocabulary was
/// empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingResult {
    /// First `top_n` records of `all`
    pub top_n: Vec<ScoreRecord>,
    /// Every eligible candidate
    pub all: Vec<ScoreRecord>,
    /// Number of candidates scored
    pub scanned: usize,
    /// Number of scored candidates removed by the exclusion filter
    pub excluded: usize,
}

impl RankingResult {
    /// Best balanced candidate, `None` when nothing was eligible
    pub fn best(&self) -> Option<&ScoreRecord> {
        self.all.first()
    }

    /// True when no candidate survived exclusion
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

/// Detailed guess position
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionEstimate {
    /// The guessed word
    pub guess: Word,
    /// Similarity of the guess to the first anchor
    pub sim1: f32,
    /// Similarity of the guess to the second anchor
    pub sim2: f32,
    /// `sim2 / (sim1 + sim2)`, 0 leans to the first anchor, 1 to the second.
    /// Not clamped: may be out of range or non-finite.
    pub position: f32,
}

/// 2D position relative to an anchor axis
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisPosition {
    /// Signed distance along the unit axis, measured from the axis start
    pub along: f32,
    /// Length of the off-axis residual
    pub across: f32,
}
