//! Month command implementation.
//!
//! Downloads a single county and month rather than the whole register.

use crate::args::{ClientArgs, FilterArgs, OutputArgs};
use crate::display::{spinner, write_table};
use anyhow::{Context, Result};
use tracing::info;

/// Download, filter and write one county's sales for one month.
pub(crate) fn month(
    county: &str,
    year: i32,
    month: u32,
    filter_args: &FilterArgs,
    output: &OutputArgs,
    client_args: &ClientArgs,
    quiet: bool,
) -> Result<()> {
    let filter = filter_args.to_filter()?;
    let parser = filter_args.parser();
    let client = client_args.build()?;
    info!(county, year, month, %filter, "fetching monthly register");

    let progress = spinner(quiet, format!("Downloading {county} {year}-{month:02}"));
    let result = ppr_lib::get_month(&client, &parser, county, year, month, &filter);
    progress.finish_and_clear();
    let table =
        result.with_context(|| format!("Failed to get register for {county} {year}-{month:02}"))?;

    write_table(&table, output.output.as_deref(), output.format)?;

    if !quiet && let Some(path) = &output.output {
        println!("{} records written to: {}", table.len(), path.display());
    }

    Ok(())
}
