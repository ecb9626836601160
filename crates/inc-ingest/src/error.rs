use std::path::PathBuf;

use thiserror::Error;

/// Fatal ingestion failures. Any of these aborts the run.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to read record {record} of {path}: {source}")]
    Read {
        path: PathBuf,
        record: usize,
        #[source]
        source: csv::Error,
    },

    #[error("{path} contains no header row")]
    Empty { path: PathBuf },

    #[error("{path} is missing required columns: {}", .columns.join(", "))]
    MissingColumns { path: PathBuf, columns: Vec<String> },

    #[error("failed to write clean table: {0}")]
    Write(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, IngestError>;
