use thiserror::Error;

use crate::model::ModelError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Median(#[from] semantic_median::MedianError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON encode failed: {0}")]
    Json(#[from] serde_json::Error),
}
