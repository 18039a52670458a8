//! Error types shared by the loader, processor and statistics modules.

use std::io;
use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("cannot read {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed input in {} at line {line}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: u64,
        message: String,
    },
    #[error("column not found: {column}")]
    Schema { column: String },
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

impl TableError {
    pub(crate) fn schema(column: &str) -> Self {
        TableError::Schema {
            column: column.to_string(),
        }
    }
}

pub type Result<T, E = TableError> = std::result::Result<T, E>;
