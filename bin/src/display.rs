//! Display utilities and output formatting for the ppr CLI.

use anyhow::{Context, Result};
use clap::ValueEnum;
use indicatif::{ProgressBar, ProgressStyle};
use ppr_lib::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

/// Output format for downloaded data.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Tsv,
    Json,
    Ndjson,
}

impl Format {
    /// Returns the file extension for this format.
    pub(crate) const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Tsv => "tsv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
        }
    }

    fn write<W: Write>(self, table: &Table, writer: W) -> Result<()> {
        OutputFormat::from(self).write_table(table, writer)?;
        Ok(())
    }
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Csv => Self::Csv,
            Format::Tsv => Self::Tsv,
            Format::Json => Self::Json,
            Format::Ndjson => Self::Ndjson,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Write a table to `output`, or stdout when no path is given.
pub(crate) fn write_table(table: &Table, output: Option<&Path>, format: Format) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            format.write(table, BufWriter::new(file))
        }
        None => format.write(table, std::io::stdout().lock()),
    }
}

/// Spinner shown on stderr while a download runs.
pub(crate) fn spinner(quiet: bool, message: String) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .expect("Invalid progress template"),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Parse a province string into a Province enum.
pub(crate) fn parse_province(s: &str) -> Result<Province> {
    match s.to_lowercase().as_str() {
        "connacht" | "connaught" => Ok(Province::Connacht),
        "leinster" => Ok(Province::Leinster),
        "munster" => Ok(Province::Munster),
        "ulster" => Ok(Province::Ulster),
        _ => anyhow::bail!(
            "Unknown province: {}. Valid options: connacht, leinster, munster, ulster",
            s
        ),
    }
}
