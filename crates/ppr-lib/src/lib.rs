//! Download, parse and filter Ireland's Property Price Register.
//!
//! This is a facade crate that re-exports functionality from the ppr
//! workspace crates and composes them into a single call.
//!
//! # Quick Start
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use ppr_lib::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let filter = Filter::new()
//!         .with_min_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
//!         .with_max_price(400_000.0)
//!         .with_counties(["Galway", "Mayo"]);
//!
//!     let table = ppr_lib::get(&filter)?;
//!     for (index, sale) in table.iter_indexed() {
//!         println!("{index}: {} {} €{:.2}", sale.sale_date, sale.address, sale.price);
//!     }
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(all(feature = "fetch", feature = "format"))]
mod pipeline;

// Re-export core types
pub use ppr_types::*;

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use ppr_fetch::{
    ArchiveError, ClientConfig, DecodeError, FetchError, PprClient, decode_cp1252,
    extract_first_entry, fetch_all, fetch_one, url,
};

// Re-export parsing, filtering and formatters
#[cfg(feature = "format")]
pub use ppr_format::{
    CsvFormatter, FlagMode, FormatError, Formatter, JsonFormatter, OutputFormat,
    Parser, columns, filter, parse,
};

#[cfg(all(feature = "fetch", feature = "format"))]
pub use pipeline::{get, get_month, get_with, process};

/// Prelude module for convenient imports.
///
/// ```
/// use ppr_lib::prelude::*;
/// ```
pub mod prelude {
    pub use ppr_types::{County, Filter, PprError, Province, Record, Result, Table};

    #[cfg(feature = "fetch")]
    pub use ppr_fetch::{ClientConfig, PprClient};

    #[cfg(feature = "format")]
    pub use ppr_format::{
        CsvFormatter, FlagMode, Formatter, JsonFormatter, OutputFormat, Parser,
    };
}
