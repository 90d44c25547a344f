//! CSV parsing, filtering and output formats for the Irish Property Price
//! Register.
//!
//! - [`parse()`] / [`Parser`] - Register CSV text into a typed [`Table`]
//! - [`filter()`] - Date, price and county selection
//! - [`CsvFormatter`] - CSV output
//! - [`JsonFormatter`] - JSON array or NDJSON output
//!
//! [`Table`]: ppr_types::Table

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod columns;
mod csv;
mod formatter;
mod json;
mod parser;
mod selection;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::JsonFormatter;
pub use parser::{FlagMode, Parser, parse};
pub use selection::filter;
