//! Balanced Similarity Ranking Engine
//!
//! Scans the whole vocabulary, scores every candidate against both anchors,
//! drops ineligible candidates and returns the ranking.
//!
//! Pipeline:
//! 1. Validate that both anchors exist (no worker starts otherwise)
//! 2. Score every vocabulary entry on a bounded rayon pool
//! 3. Join: the full vocabulary is scored before any ranking decision
//! 4. Apply [`ExclusionFilter`]
//! 5. Sort descending by `avg_similarity`, ties by vocabulary position
//! 6. Slice the first `top_n` records
//!
//! Each record depends only on its own word and the anchors, and the final
//! sort has a total order, so the result is identical for every
//! `concurrency >= 1`. When several candidates fail, the one with the lowest
//! vocabulary index is reported.
//!
//! `concurrency` is an upper bound: the pool never has more threads than
//! there are candidates, nor more than [`MAX_SCAN_WORKERS`].

use std::cmp::Ordering;
use std::sync::atomic::{self, AtomicUsize};

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use crate::cancel::CancellationToken;
use crate::error::{MedianError, Result};
use crate::exclusion::ExclusionFilter;
use crate::provider::EmbeddingProvider;
use crate::scorer::score_candidate;
use crate::types::{
    RankingResult, ScoreRecord, DEFAULT_CONCURRENCY, DEFAULT_TOP_N, MAX_SCAN_WORKERS, PHRASE_JOINER,
};

// ==================== Configuration ====================

/// Ranking engine options
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankingConfig {
    /// Number of scan workers (clamped to at least 1)
    pub concurrency: usize,
    /// Length of the `top_n` slice
    pub top_n: usize,
    /// Phrase joiner used by the exclusion filter
    pub phrase_joiner: char,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            top_n: DEFAULT_TOP_N,
            phrase_joiner: PHRASE_JOINER,
        }
    }
}

// ==================== Engine ====================

/// Stateless ranking engine; holds only its configuration
#[derive(Clone, Debug, Default)]
pub struct RankingEngine {
    config: RankingConfig,
}

impl RankingEngine {
    pub fn new(config: RankingConfig) -> Self {
        Self {
            config: RankingConfig {
                concurrency: config.concurrency.max(1),
                ..config
            },
        }
    }

    pub fn with_concurrency(concurrency: usize, top_n: usize) -> Self {
        Self::new(RankingConfig {
            concurrency,
            top_n,
            ..RankingConfig::default()
        })
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Threads spawned for a vocabulary of `candidates` words
    pub fn worker_count(&self, candidates: usize) -> usize {
        self.config
            .concurrency
            .min(candidates)
            .min(MAX_SCAN_WORKERS)
            .max(1)
    }

    /// Rank the vocabulary between `word1` and `word2`
    pub fn rank<P>(&self, word1: &str, word2: &str, provider: &P) -> Result<RankingResult>
    where
        P: EmbeddingProvider + ?Sized,
    {
        self.rank_with_cancel(word1, word2, provider, &CancellationToken::new())
    }

    /// Rank with an abort flag
    ///
    /// Workers stop picking up candidates once `token` is set and the call
    /// returns [`MedianError::Cancelled`].
    pub fn rank_with_cancel<P>(
        &self,
        word1: &str,
        word2: &str,
        provider: &P,
        token: &CancellationToken,
    ) -> Result<RankingResult>
    where
        P: EmbeddingProvider + ?Sized,
    {
        for anchor in [word1, word2] {
            if !provider.contains(anchor) {
                return Err(MedianError::MissingAnchor(anchor.to_string()));
            }
        }
        if token.is_cancelled() {
            return Err(MedianError::Cancelled);
        }

        let records = self.scan(word1, word2, provider, token)?;
        Ok(self.finish(records, word1, word2))
    }

    /// Score every vocabulary entry; blocks until all workers are done
    fn scan<P>(
        &self,
        word1: &str,
        word2: &str,
        provider: &P,
        token: &CancellationToken,
    ) -> Result<Vec<ScoreRecord>>
    where
        P: EmbeddingProvider + ?Sized,
    {
        let vocabulary = provider.vocabulary();
        let pool = ThreadPoolBuilder::new()
            .num_threads(self.worker_count(vocabulary.len()))
            .thread_name(|i| format!("median-scan-{i}"))
            .build()?;

        // 已失败的最小下标；更靠后的候选不再评分
        let first_failure = AtomicUsize::new(usize::MAX);
        let outcomes: Vec<Option<Result<ScoreRecord>>> = pool.install(|| {
            vocabulary
                .par_iter()
                .enumerate()
                .map(|(index, word)| {
                    if index > first_failure.load(atomic::Ordering::Relaxed) {
                        return None;
                    }
                    let outcome = if token.is_cancelled() {
                        Err(MedianError::Cancelled)
                    } else {
                        score_candidate(word, index, word1, word2, provider).map_err(|source| {
                            MedianError::CandidateScoring {
                                word: word.clone(),
                                source: Box::new(source),
                            }
                        })
                    };
                    if outcome.is_err() {
                        first_failure.fetch_min(index, atomic::Ordering::Relaxed);
                    }
                    Some(outcome)
                })
                .collect()
        });

        // A skipped slot always follows a failed one, so the first error found
        // in index order is the lowest failing candidate.
        outcomes.into_iter().flatten().collect()
    }

    fn finish(&self, records: Vec<ScoreRecord>, word1: &str, word2: &str) -> RankingResult {
        let filter = ExclusionFilter::with_joiner(word1, word2, self.config.phrase_joiner);
        let scanned = records.len();

        let mut all: Vec<ScoreRecord> = records
            .into_iter()
            .filter(|record| filter.is_eligible(&record.word))
            .collect();
        let excluded = scanned - all.len();

        sort_records(&mut all);
        let top_n = all.iter().take(self.config.top_n).cloned().collect();

        RankingResult {
            top_n,
            all,
            scanned,
            excluded,
        }
    }
}

/// `rank(word1, word2, concurrency, top_n)` entry point
pub fn rank<P>(
    word1: &str,
    word2: &str,
    provider: &P,
    concurrency: usize,
    top_n: usize,
) -> Result<RankingResult>
where
    P: EmbeddingProvider + ?Sized,
{
    RankingEngine::with_concurrency(concurrency, top_n).rank(word1, word2, provider)
}

// ==================== Ordering ====================

/// Descending by score, NaN last, bitwise-equal scores by vocabulary index
pub fn compare_records(a: &ScoreRecord, b: &ScoreRecord) -> Ordering {
    let by_score = match (a.avg_similarity.is_nan(), b.avg_similarity.is_nan()) {
        (false, false) => b.avg_similarity.total_cmp(&a.avg_similarity),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (true, true) => Ordering::Equal,
    };
    by_score.then_with(|| a.vocab_index.cmp(&b.vocab_index))
}

pub fn sort_records(records: &mut [ScoreRecord]) {
    records.sort_by(compare_records);
}
