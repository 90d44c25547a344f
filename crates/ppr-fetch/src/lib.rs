//! HTTP client and decoding for the Irish Property Price Register downloader.
//!
//! This crate provides the download pipeline:
//!
//! - [`url::month_url`] - Builds per county and month CSV URLs
//! - [`PprClient`] - Blocking HTTP client for the register endpoints
//! - [`extract_first_entry`] - Opens the bulk zip archive
//! - [`decode_cp1252`] - Strict Windows-1252 decoding
//! - [`fetch_all`] / [`fetch_one`] - One-shot downloads with default settings

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod archive;
mod client;
mod decode;
pub mod url;

pub use archive::{ArchiveError, extract_first_entry};
pub use client::{ClientConfig, FetchError, PprClient, fetch_all, fetch_one};
pub use decode::{DecodeError, decode_cp1252};
