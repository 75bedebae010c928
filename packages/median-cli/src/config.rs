use std::path::PathBuf;

use clap::Parser;
use semantic_median::{RankingConfig, DEFAULT_CONCURRENCY, DEFAULT_TOP_N, PHRASE_JOINER};

/// Find the word that sits semantically between two anchor words
#[derive(Debug, Clone, Parser)]
#[command(name = "semantic-median", version)]
pub struct Config {
    /// First anchor word
    #[arg(default_value = "tropical")]
    pub word1: String,

    /// Second anchor word
    #[arg(default_value = "canoe")]
    pub word2: String,

    /// Embedding model in word2vec/GloVe text format
    #[arg(long, short = 'm', env = "MODEL_PATH")]
    pub model: PathBuf,

    /// Number of scan workers
    #[arg(long, env = "MEDIAN_WORKERS", default_value_t = DEFAULT_CONCURRENCY)]
    pub workers: usize,

    /// Number of ranked words to print
    #[arg(long, env = "MEDIAN_TOP_N", default_value_t = DEFAULT_TOP_N)]
    pub top_n: usize,

    /// Guess to place between the anchors
    #[arg(long, short = 'g')]
    pub guess: Option<String>,

    /// Prompt for a guess on stdin after ranking
    #[arg(long, short = 'i', conflicts_with = "guess")]
    pub interactive: bool,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,

    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

impl Config {
    /// `.env` first, then flags and environment
    pub fn load() -> Self {
        let _ = dotenvy::dotenv();
        Self::parse()
    }

    pub fn ranking_config(&self) -> RankingConfig {
        RankingConfig {
            concurrency: self.workers,
            top_n: self.top_n,
            phrase_joiner: PHRASE_JOINER,
        }
    }
}
