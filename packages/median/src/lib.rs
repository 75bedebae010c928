//! # semantic-median - balanced similarity ranking
//!
//! Finds the "semantic median" between two anchor words in a word embedding
//! space: every vocabulary word is scored by how evenly and how strongly it
//! relates to both anchors, and the best balanced candidate tops the ranking.
//!
//! ## Modules
//!
//! - [`scorer`] - balanced score of one candidate
//! - [`exclusion`] - drops anchor variants and phrase keys
//! - [`ranking`] - concurrent full-vocabulary scan with deterministic order
//! - [`estimator`] - relative position of a single guess
//! - [`projection`] - 1D/2D projection onto the anchor axis
//! - [`provider`] - embedding provider contract and in-memory table
//! - [`vector`] - dense vector math
//!
//! No module performs I/O or logging; the caller owns both.
//!
//! ## Example
//!
//! ```rust
//! use semantic_median::{EmbeddingTable, RankingEngine};
//!
//! let table = EmbeddingTable::from_entries(
//!     2,
//!     vec![
//!         ("tropical", vec![1.0, 0.0]),
//!         ("canoe", vec![0.0, 1.0]),
//!         ("lagoon", vec![1.0, 1.0]),
//!         ("reef", vec![1.0, 0.2]),
//!     ],
//! )
//! .unwrap();
//!
//! let result = RankingEngine::default().rank("tropical", "canoe", &table).unwrap();
//! assert_eq!(result.best().unwrap().word, "lagoon");
//! ```

// ============================================================================
// 模块声明
// ============================================================================

pub mod cancel;
pub mod error;
pub mod estimator;
pub mod exclusion;
pub mod projection;
pub mod provider;
pub mod ranking;
pub mod scorer;
pub mod types;
pub mod vector;

// ============================================================================
// 重新导出
// ============================================================================

pub use cancel::CancellationToken;
pub use error::{MedianError, Result};
pub use estimator::{estimate, estimate_detailed};
pub use exclusion::ExclusionFilter;
pub use projection::{project_1d, project_2d, project_words};
pub use provider::{EmbeddingProvider, EmbeddingTable};
pub use ranking::{rank, RankingConfig, RankingEngine};
pub use scorer::{balanced_score, score_candidate};
pub use types::*;
