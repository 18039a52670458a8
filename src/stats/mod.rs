//! Stats module - descriptive statistics and distinct counts

mod calculator;

pub use calculator::{
    count_distinct, describe, ColumnSummary, NumericStats, StatsCalculator, Summary, QUANTILES,
};
