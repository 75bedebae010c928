use thiserror::Error;

#[derive(Debug, Error)]
pub enum MedianError {
    #[error("anchor word not in vocabulary: {0}")]
    MissingAnchor(String),
    #[error("word not in vocabulary: {0}")]
    UnknownWord(String),
    #[error("degenerate axis: start and end vectors coincide")]
    DegenerateAxis,
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("duplicate vocabulary entry: {0}")]
    DuplicateWord(String),
    #[error("ranking cancelled")]
    Cancelled,
    #[error("failed to score candidate '{word}': {source}")]
    CandidateScoring {
        word: String,
        #[source]
        source: Box<MedianError>,
    },
    #[error("failed to build worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, MedianError>;
