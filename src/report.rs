//! Console rendering of summaries and distinct counts.

use std::io::{self, Write};

use comfy_table::presets::NOTHING;
use comfy_table::{Cell, CellAlignment, Table};

use crate::stats::{ColumnSummary, NumericStats, Summary};

/// Label printed before the distinct-value count.
pub const UNIQUE_LABEL: &str = "Unique values count:";

const MISSING: &str = "NaN";

/// Rows of the statistics table, in print order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stat {
    Count,
    Unique,
    Top,
    Freq,
    Mean,
    Std,
    Min,
    Q25,
    Median,
    Q75,
    Max,
}

impl Stat {
    const ALL: [Stat; 11] = [
        Stat::Count,
        Stat::Unique,
        Stat::Top,
        Stat::Freq,
        Stat::Mean,
        Stat::Std,
        Stat::Min,
        Stat::Q25,
        Stat::Median,
        Stat::Q75,
        Stat::Max,
    ];

    fn label(self) -> &'static str {
        match self {
            Stat::Count => "count",
            Stat::Unique => "unique",
            Stat::Top => "top",
            Stat::Freq => "freq",
            Stat::Mean => "mean",
            Stat::Std => "std",
            Stat::Min => "min",
            Stat::Q25 => "25%",
            Stat::Median => "50%",
            Stat::Q75 => "75%",
            Stat::Max => "max",
        }
    }

    fn render(self, column: &ColumnSummary) -> String {
        match self {
            Stat::Count => column.count.to_string(),
            Stat::Unique => optional(column.unique),
            Stat::Top => column.top.clone().unwrap_or_else(|| MISSING.to_string()),
            Stat::Freq => optional(column.freq),
            Stat::Mean => numeric(column, |n| n.mean),
            Stat::Std => numeric(column, |n| n.std),
            Stat::Min => numeric(column, |n| n.min),
            Stat::Q25 => numeric(column, |n| n.q25),
            Stat::Median => numeric(column, |n| n.median),
            Stat::Q75 => numeric(column, |n| n.q75),
            Stat::Max => numeric(column, |n| n.max),
        }
    }
}

/// Build the statistics table: one row per statistic, one column per table column.
pub fn summary_table(summary: &Summary) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);

    let mut header = vec![Cell::new("")];
    header.extend(summary.columns.iter().map(|c| Cell::new(&c.name)));
    table.set_header(header);

    for stat in Stat::ALL {
        let mut row = vec![Cell::new(stat.label())];
        row.extend(summary.columns.iter().map(|c| Cell::new(stat.render(c))));
        table.add_row(row);
    }

    for index in 1..=summary.columns.len() {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table
}

pub fn write_summary<W: Write>(out: &mut W, summary: &Summary) -> io::Result<()> {
    writeln!(out, "{}", summary_table(summary))
}

/// Write a blank line, the label, then the count on its own line.
pub fn write_distinct_count<W: Write>(out: &mut W, count: usize) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{UNIQUE_LABEL}")?;
    writeln!(out, "{count}")
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn optional(value: Option<usize>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| v.to_string())
}

fn numeric(column: &ColumnSummary, pick: fn(&NumericStats) -> f64) -> String {
    column
        .numeric
        .as_ref()
        .map_or_else(|| MISSING.to_string(), |n| format_float(pick(n)))
}

fn format_float(value: f64) -> String {
    if value.is_nan() {
        MISSING.to_string()
    } else if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.1}")
    } else {
        let text = format!("{value:.6}");
        let text = text.trim_end_matches('0');
        if text.ends_with('.') {
            format!("{text}0")
        } else {
            text.to_string()
        }
    }
}
