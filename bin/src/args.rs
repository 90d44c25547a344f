//! Argument groups shared by the download commands.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::Args;
use ppr_lib::prelude::*;
use std::path::PathBuf;
use std::time::Duration;

use crate::display::Format;

/// Row selection flags.
#[derive(Args, Debug)]
pub(crate) struct FilterArgs {
    /// Earliest sale date, inclusive (YYYY-MM-DD or DD/MM/YYYY)
    #[arg(long, value_parser = parse_date)]
    min_date: Option<NaiveDate>,

    /// Latest sale date, inclusive (YYYY-MM-DD or DD/MM/YYYY)
    #[arg(long, value_parser = parse_date)]
    max_date: Option<NaiveDate>,

    /// Lowest price in euro, inclusive
    #[arg(long)]
    min_price: Option<f64>,

    /// Highest price in euro, inclusive
    #[arg(long)]
    max_price: Option<f64>,

    /// Only keep sales in this county (repeatable, case-insensitive)
    #[arg(short, long = "county")]
    counties: Vec<String>,

    /// Reject rows whose Yes/No columns hold anything else
    #[arg(long)]
    strict: bool,
}

impl FilterArgs {
    /// Builds and validates the filter.
    pub(crate) fn to_filter(&self) -> Result<Filter> {
        let mut filter = Filter::new();
        if let Some(date) = self.min_date {
            filter = filter.with_min_date(date);
        }
        if let Some(date) = self.max_date {
            filter = filter.with_max_date(date);
        }
        if let Some(price) = self.min_price {
            filter = filter.with_min_price(price);
        }
        if let Some(price) = self.max_price {
            filter = filter.with_max_price(price);
        }
        if !self.counties.is_empty() {
            let counties = self
                .counties
                .iter()
                .map(|c| c.parse::<County>())
                .collect::<std::result::Result<Vec<_>, _>>()?;
            filter = filter.with_counties(counties.iter().map(County::name));
        }
        filter.validate()?;
        Ok(filter)
    }

    /// Returns the CSV parser matching `--strict`.
    pub(crate) const fn parser(&self) -> Parser {
        if self.strict {
            Parser::strict()
        } else {
            Parser::new()
        }
    }
}

/// Output destination flags.
#[derive(Args, Debug)]
pub(crate) struct OutputArgs {
    /// Output file path. Defaults to stdout
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub(crate) format: Format,
}

/// HTTP client flags.
#[derive(Args, Debug)]
pub(crate) struct ClientArgs {
    /// Skip TLS certificate verification
    #[arg(long)]
    insecure: bool,

    /// Request timeout in seconds (0 disables the timeout)
    #[arg(long, default_value = "300")]
    timeout: u64,
}

impl ClientArgs {
    /// Builds the register client.
    pub(crate) fn build(&self) -> Result<PprClient> {
        let config = ClientConfig {
            accept_invalid_certs: self.insecure,
            timeout: (self.timeout > 0).then(|| Duration::from_secs(self.timeout)),
            ..Default::default()
        };
        PprClient::new(config).context("Failed to create HTTP client")
    }
}

/// Parses `YYYY-MM-DD` or `DD/MM/YYYY`.
pub(crate) fn parse_date(s: &str) -> Result<NaiveDate> {
    for format in ["%Y-%m-%d", "%d/%m/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Ok(date);
        }
    }
    bail!("Invalid date: {s} (expected YYYY-MM-DD or DD/MM/YYYY)")
}
