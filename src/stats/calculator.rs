//! Statistics Calculator Module
//! Descriptive statistics per column and distinct-value counts.

use std::collections::{HashMap, HashSet};

use polars::prelude::*;
use statrs::statistics::Statistics;
use tracing::debug;

use crate::error::{Result, TableError};

/// Quantiles reported for numeric columns, as percentages.
pub const QUANTILES: [f64; 3] = [25.0, 50.0, 75.0];

/// Aggregates for a numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericStats {
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl Default for NumericStats {
    fn default() -> Self {
        Self {
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            q25: f64::NAN,
            median: f64::NAN,
            q75: f64::NAN,
            max: f64::NAN,
        }
    }
}

/// Statistics for a single column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub name: String,
    /// Number of rows, missing values included.
    pub total: usize,
    /// Number of non-missing values.
    pub count: usize,
    pub unique: Option<usize>,
    pub top: Option<String>,
    pub freq: Option<usize>,
    pub numeric: Option<NumericStats>,
}

impl ColumnSummary {
    pub fn is_numeric(&self) -> bool {
        self.numeric.is_some()
    }
}

/// Statistics for every column of a table, in column order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Summary {
    pub columns: Vec<ColumnSummary>,
}

impl Summary {
    pub fn column(&self, name: &str) -> Option<&ColumnSummary> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// Handles statistical calculations over loaded tables.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Describe every column of `df`.
    pub fn describe(df: &DataFrame) -> Result<Summary> {
        let columns = df
            .get_columns()
            .iter()
            .map(Self::describe_column)
            .collect::<Result<Vec<_>>>()?;
        Ok(Summary { columns })
    }

    /// Describe a single column. Numeric dtypes get aggregates, everything
    /// else is treated as categorical.
    pub fn describe_column(column: &Column) -> Result<ColumnSummary> {
        let name = column.name().to_string();
        let total = column.len();

        if is_numeric(column.dtype()) {
            let values = numeric_values(column)?;
            return Ok(ColumnSummary {
                name,
                total,
                count: values.len(),
                unique: None,
                top: None,
                freq: None,
                numeric: Some(Self::compute_numeric_stats(&values)),
            });
        }

        let values = string_values(column)?;
        let tally = Tally::from_values(values.into_iter().flatten());
        let (top, freq) = match tally.most_frequent() {
            Some((value, freq)) => (Some(value.to_string()), freq),
            None => (None, 0),
        };
        debug!(column = %name, total, count = tally.count, unique = tally.unique(), "described column");

        Ok(ColumnSummary {
            name,
            total,
            count: tally.count,
            unique: Some(tally.unique()),
            top,
            freq: Some(freq),
            numeric: None,
        })
    }

    /// Count distinct non-null values in `column`.
    pub fn count_distinct(df: &DataFrame, column: &str) -> Result<usize> {
        let series = df.column(column).map_err(|_| TableError::schema(column))?;
        let distinct = if is_numeric(series.dtype()) {
            let mut seen: Vec<f64> = numeric_values(series)?;
            seen.sort_by(f64::total_cmp);
            seen.dedup();
            seen.len()
        } else {
            let values = string_values(series)?;
            values.into_iter().flatten().collect::<HashSet<_>>().len()
        };
        debug!(column, distinct, "counted distinct values");
        Ok(distinct)
    }

    /// Compute aggregates for a set of numeric values.
    pub fn compute_numeric_stats(values: &[f64]) -> NumericStats {
        if values.is_empty() {
            return NumericStats::default();
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        NumericStats {
            mean: values.iter().mean(),
            std: values.iter().std_dev(),
            min: sorted[0],
            q25: Self::percentile(&sorted, QUANTILES[0]),
            median: Self::percentile(&sorted, QUANTILES[1]),
            q75: Self::percentile(&sorted, QUANTILES[2]),
            max: sorted[sorted.len() - 1],
        }
    }

    /// Calculate percentile using linear interpolation (NumPy compatible).
    fn percentile(sorted_values: &[f64], p: f64) -> f64 {
        let n = sorted_values.len();
        if n == 0 {
            return f64::NAN;
        }
        if n == 1 {
            return sorted_values[0];
        }

        let rank = (p / 100.0) * (n - 1) as f64;
        let lower = rank.floor() as usize;
        let upper = (rank.ceil() as usize).min(n - 1);
        let frac = rank - lower as f64;

        if lower == upper {
            sorted_values[lower]
        } else {
            sorted_values[lower] * (1.0 - frac) + sorted_values[upper] * frac
        }
    }
}

/// Describe every column of `df`.
pub fn describe(df: &DataFrame) -> Result<Summary> {
    StatsCalculator::describe(df)
}

/// Count distinct non-null values in `column`.
pub fn count_distinct(df: &DataFrame, column: &str) -> Result<usize> {
    StatsCalculator::count_distinct(df, column)
}

/// Value frequencies, remembering where each value first appeared.
struct Tally<'a> {
    count: usize,
    seen: HashMap<&'a str, (usize, usize)>,
}

impl<'a> Tally<'a> {
    fn from_values(values: impl IntoIterator<Item = &'a str>) -> Self {
        let mut count = 0;
        let mut seen: HashMap<&'a str, (usize, usize)> = HashMap::new();
        for value in values {
            seen.entry(value).or_insert((0, count)).0 += 1;
            count += 1;
        }
        Self { count, seen }
    }

    fn unique(&self) -> usize {
        self.seen.len()
    }

    /// Highest frequency wins; ties go to the value seen first.
    fn most_frequent(&self) -> Option<(&'a str, usize)> {
        self.seen
            .iter()
            .min_by(|(_, (freq_a, first_a)), (_, (freq_b, first_b))| {
                freq_b.cmp(freq_a).then(first_a.cmp(first_b))
            })
            .map(|(value, (freq, _))| (*value, *freq))
    }
}

fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float32
            | DataType::Float64
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}

fn numeric_values(column: &Column) -> Result<Vec<f64>> {
    let values = column.cast(&DataType::Float64)?;
    let values = values
        .f64()?
        .into_iter()
        .flatten()
        .filter(|v| !v.is_nan())
        .collect();
    Ok(values)
}

fn string_values(column: &Column) -> Result<StringChunked> {
    let values = column.cast(&DataType::String)?;
    Ok(values.str()?.clone())
}
