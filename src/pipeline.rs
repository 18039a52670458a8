//! Load → normalize → describe → count pipeline.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::ReportConfig;
use crate::data::{DataLoader, DataProcessor};
use crate::report::{write_distinct_count, write_summary};
use crate::stats::{StatsCalculator, Summary};

/// What a run computed, returned after it has been written out.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub rows: usize,
    pub summary: Summary,
    pub distinct: usize,
}

/// Run every stage and write the report to `out`.
///
/// Nothing is written unless all stages succeed.
pub fn run<W: Write>(config: &ReportConfig, out: &mut W) -> Result<RunOutcome> {
    let loader = DataLoader::new(config.column.as_str()).with_delimiter(config.delimiter);
    let mut df = loader
        .load_csv(&config.input_path)
        .with_context(|| format!("load {}", config.input_path.display()))?;
    info!(
        path = %config.input_path.display(),
        column = loader.column(),
        rows = df.height(),
        "loaded table"
    );

    DataProcessor::strip_whitespace(&mut df, &config.column)
        .with_context(|| format!("normalize column {}", config.column))?;

    let summary = StatsCalculator::describe(&df).context("describe table")?;
    let distinct = StatsCalculator::count_distinct(&df, &config.column)
        .with_context(|| format!("count distinct values of {}", config.column))?;
    info!(distinct, "computed summary");

    write_summary(out, &summary).context("write summary")?;
    write_distinct_count(out, distinct).context("write distinct count")?;

    Ok(RunOutcome {
        rows: df.height(),
        summary,
        distinct,
    })
}
