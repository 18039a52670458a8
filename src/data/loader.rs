//! CSV Data Loader Module
//! Reads a headerless, single-column delimited file into a Polars DataFrame.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ErrorKind, ReaderBuilder, StringRecord};
use polars::prelude::{Column, DataFrame};
use tracing::debug;

use crate::config::DEFAULT_DELIMITER;
use crate::error::{Result, TableError};

/// Raw field values that load as missing.
pub const NA_MARKERS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Loads one named string column from headerless delimited text.
#[derive(Debug, Clone)]
pub struct DataLoader {
    column: String,
    delimiter: u8,
}

impl DataLoader {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            delimiter: DEFAULT_DELIMITER,
        }
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    /// Load a CSV file. The file is closed before this returns, on success or error.
    pub fn load_csv(&self, path: impl AsRef<Path>) -> Result<DataFrame> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| TableError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        self.read_csv(file, path)
    }

    /// Parse delimited text from any reader. `origin` is only used in error messages.
    ///
    /// Lines holding only unquoted spaces or tabs are skipped like empty lines.
    pub fn read_csv<R: Read>(&self, mut reader: R, origin: &Path) -> Result<DataFrame> {
        let mut raw = Vec::new();
        reader
            .read_to_end(&mut raw)
            .map_err(|source| TableError::FileAccess {
                path: origin.to_path_buf(),
                source,
            })?;

        let mut records = ReaderBuilder::new()
            .has_headers(false)
            .delimiter(self.delimiter)
            .flexible(true)
            .from_reader(raw.as_slice());

        let mut values: Vec<Option<String>> = Vec::new();
        let mut skipped = 0usize;
        for record in records.records() {
            let record = record.map_err(|err| csv_error(err, origin))?;
            let field = single_field(&record, origin)?;
            let field = if values.is_empty() {
                field.trim_start_matches('\u{feff}')
            } else {
                field
            };
            if is_blank_line(field, &record, &raw) {
                skipped += 1;
                continue;
            }
            values.push(parse_value(field));
        }

        let nulls = values.iter().filter(|v| v.is_none()).count();
        debug!(
            path = %origin.display(),
            rows = values.len(),
            nulls,
            skipped,
            "loaded input"
        );

        let df = DataFrame::new(vec![Column::new(self.column.as_str().into(), values)])?;
        Ok(df)
    }
}

/// Load `path` into a table with a single column named `column`.
pub fn load(path: impl AsRef<Path>, column: &str) -> Result<DataFrame> {
    DataLoader::new(column).load_csv(path)
}

fn single_field<'r>(record: &'r StringRecord, origin: &Path) -> Result<&'r str> {
    match record.len() {
        1 => Ok(&record[0]),
        found => Err(TableError::Parse {
            path: origin.to_path_buf(),
            line: record.position().map_or(0, |pos| pos.line()),
            message: format!("expected 1 field, found {found}"),
        }),
    }
}

fn is_blank_line(field: &str, record: &StringRecord, raw: &[u8]) -> bool {
    let quoted = record
        .position()
        .and_then(|pos| usize::try_from(pos.byte()).ok())
        .and_then(|start| raw.get(start))
        .is_some_and(|&first| first == b'"');
    !quoted && field.chars().all(|c| c == ' ' || c == '\t')
}

fn parse_value(field: &str) -> Option<String> {
    if NA_MARKERS.contains(&field) {
        None
    } else {
        Some(field.to_string())
    }
}

fn csv_error(err: csv::Error, origin: &Path) -> TableError {
    let line = err.position().map_or(0, |pos| pos.line());
    let message = err.to_string();
    match err.into_kind() {
        ErrorKind::Io(source) => TableError::FileAccess {
            path: origin.to_path_buf(),
            source,
        },
        _ => TableError::Parse {
            path: origin.to_path_buf(),
            line,
            message,
        },
    }
}
