//! Column Summary - prints statistics for `data.csv` in the working directory.

use std::io::{self, Write};

use anyhow::{Context, Result};
use column_summary::logging::{init_logging, LogConfig};
use column_summary::{run, ReportConfig};

fn main() -> Result<()> {
    init_logging(&LogConfig::default()).context("initialize logging")?;

    let config = ReportConfig::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&config, &mut out)?;
    out.flush().context("flush stdout")?;
    Ok(())
}
