//! Data Processor Module
//! Handles in-place cleaning of loaded columns.

use polars::prelude::*;
use tracing::{debug, warn};

use crate::error::{Result, TableError};

/// Handles data cleaning operations.
pub struct DataProcessor;

impl DataProcessor {
    /// Strip leading and trailing whitespace from every value of `column`.
    ///
    /// Nulls stay null and non-string columns are left untouched. Returns the
    /// number of values that changed.
    pub fn strip_whitespace(df: &mut DataFrame, column: &str) -> Result<usize> {
        let series = df.column(column).map_err(|_| TableError::schema(column))?;
        if series.dtype() != &DataType::String {
            warn!(column, dtype = %series.dtype(), "skipping strip on non-string column");
            return Ok(0);
        }

        let values = series.str()?;
        let changed = values
            .into_iter()
            .flatten()
            .filter(|v| v.trim() != *v)
            .count();
        let trimmed: StringChunked = values
            .into_iter()
            .map(|v| v.map(str::trim))
            .collect();
        let trimmed = trimmed.with_name(column.into());

        df.with_column(trimmed.into_series())?;
        debug!(column, changed, "stripped whitespace");
        Ok(changed)
    }
}

/// Normalize `column` of `df` in place.
pub fn normalize(df: &mut DataFrame, column: &str) -> Result<()> {
    DataProcessor::strip_whitespace(df, column).map(|_| ())
}
