//! Core types for the Irish Property Price Register downloader.
//!
//! This crate provides the fundamental data structures used throughout ppr:
//!
//! - [`Record`] - A single property sale with typed fields
//! - [`Table`] - Ordered collection of records, indexed by position
//! - [`Filter`] - Optional date, price and county criteria
//! - [`County`] - The counties a sale can be registered under

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod county;
mod error;
mod filter;
mod record;
mod table;

pub use county::{County, CountyParseError, Province};
pub use error::{FilterError, ParseError, PprError, Result};
pub use filter::Filter;
pub use record::Record;
pub use table::Table;
