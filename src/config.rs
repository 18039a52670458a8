//! Run configuration. The binary always runs with [`ReportConfig::default`].

use std::path::{Path, PathBuf};

/// Input file read from the working directory.
pub const DEFAULT_INPUT_PATH: &str = "data.csv";
/// Name assigned to the sole column of the headerless input.
pub const DEFAULT_COLUMN: &str = "Name";
pub const DEFAULT_DELIMITER: u8 = b',';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub input_path: PathBuf,
    pub column: String,
    pub delimiter: u8,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            column: DEFAULT_COLUMN.to_string(),
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl ReportConfig {
    #[must_use]
    pub fn with_input_path(mut self, path: impl AsRef<Path>) -> Self {
        self.input_path = path.as_ref().to_path_buf();
        self
    }

    #[must_use]
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = column.into();
        self
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_data_csv_name_column() {
        let config = ReportConfig::default();
        assert_eq!(config.input_path, PathBuf::from("data.csv"));
        assert_eq!(config.column, "Name");
        assert_eq!(config.delimiter, b',');
    }

    #[test]
    fn builders_override_fields() {
        let config = ReportConfig::default()
            .with_input_path("other.tsv")
            .with_column("Label")
            .with_delimiter(b'\t');
        assert_eq!(config.input_path, PathBuf::from("other.tsv"));
        assert_eq!(config.column, "Label");
        assert_eq!(config.delimiter, b'\t');
    }
}
