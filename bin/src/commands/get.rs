//! Get command implementation.
//!
//! Downloads the whole register, filters it and writes the result.

use crate::args::{ClientArgs, FilterArgs, OutputArgs};
use crate::display::{spinner, write_table};
use anyhow::{Context, Result};
use tracing::info;

/// Download, filter and write the whole register.
pub(crate) fn get(
    filter_args: &FilterArgs,
    output: &OutputArgs,
    client_args: &ClientArgs,
    quiet: bool,
) -> Result<()> {
    let filter = filter_args.to_filter()?;
    let parser = filter_args.parser();
    let client = client_args.build()?;
    info!(%filter, "fetching full register");

    let progress = spinner(quiet, "Downloading Property Price Register".to_string());
    let result = ppr_lib::get_with(&client, &parser, &filter);
    progress.finish_and_clear();
    let table = result.context("Failed to get Property Price Register")?;

    write_table(&table, output.output.as_deref(), output.format)?;

    if !quiet && let Some(path) = &output.output {
        println!("{} records written to: {}", table.len(), path.display());
    }

    Ok(())
}
