//! Embedding model loading
//!
//! Reads the word2vec/GloVe text format:
//!
//! ```text
//! 3 4                      <- optional "<count> <dimension>" header
//! tropical 0.1 0.2 0.3 0.4
//! canoe 0.5 0.1 -0.2 0.0
//! beach 0.3 0.3 0.1 0.2
//! ```
//!
//! Without a header the dimension comes from the first row. A first line of
//! exactly two unsigned integers is always read as a header.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use semantic_median::{EmbeddingTable, MedianError};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read model: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
    #[error("line {line}: dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        line: usize,
        expected: usize,
        actual: usize,
    },
    #[error("model contains no vectors")]
    Empty,
    #[error("embedding table rejected entry: {0}")]
    Table(#[from] MedianError),
}

pub fn load_text(path: &Path) -> Result<EmbeddingTable, ModelError> {
    info!(path = %path.display(), "loading embedding model");
    let started = Instant::now();

    let file = File::open(path)?;
    let table = read_text(BufReader::new(file))?;

    info!(
        words = table.len(),
        dimension = table.dimension(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "embedding model loaded"
    );
    Ok(table)
}

struct Header {
    count: usize,
    dimension: usize,
}

fn parse_header(line: &str) -> Option<Header> {
    let mut fields = line.split_whitespace();
    let count = fields.next()?.parse::<usize>().ok()?;
    let dimension = fields.next()?.parse::<usize>().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(Header { count, dimension })
}

pub fn read_text<R: BufRead>(reader: R) -> Result<EmbeddingTable, ModelError> {
    let mut table: Option<EmbeddingTable> = None;
    let mut declared_count = None;
    let mut first_row = true;
    let mut duplicates = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        if first_row {
            first_row = false;
            if let Some(header) = parse_header(&line) {
                declared_count = Some(header.count);
                table = Some(EmbeddingTable::with_capacity(header.dimension, header.count));
                continue;
            }
        }

        let mut fields = line.split_whitespace();
        let word = fields.next().ok_or_else(|| ModelError::Parse {
            line: line_no,
            reason: "missing word".to_string(),
        })?;
        let values = fields
            .map(|field| {
                field.parse::<f32>().map_err(|_| ModelError::Parse {
                    line: line_no,
                    reason: format!("invalid component '{field}'"),
                })
            })
            .collect::<Result<Vec<f32>, _>>()?;
        if values.is_empty() {
            return Err(ModelError::Parse {
                line: line_no,
                reason: format!("no vector for '{word}'"),
            });
        }

        let table = table.get_or_insert_with(|| EmbeddingTable::new(values.len()));
        if values.len() != table.dimension() {
            return Err(ModelError::DimensionMismatch {
                line: line_no,
                expected: table.dimension(),
                actual: values.len(),
            });
        }

        match table.push(word, &values) {
            Ok(()) => {}
            Err(MedianError::DuplicateWord(word)) => {
                warn!(line = line_no, %word, "duplicate word, keeping first vector");
                duplicates += 1;
            }
            Err(err) => return Err(err.into()),
        }
    }

    let table = table.filter(|t| !t.is_empty()).ok_or(ModelError::Empty)?;
    if let Some(count) = declared_count {
        if count != table.len() + duplicates {
            warn!(declared = count, actual = table.len(), "header word count does not match rows");
        }
    }
    Ok(table)
}
