//! Blocking HTTP client for register downloads.

use ppr_types::PprError;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::url::{ALL_URL, MONTH_URL_TEMPLATE, expand_template};
use crate::{ArchiveError, DecodeError, decode_cp1252, extract_first_entry};

/// Configuration for the register client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Whole-request timeout. `None` disables it.
    pub timeout: Option<Duration>,
    /// User agent string.
    pub user_agent: String,
    /// Skip TLS certificate verification.
    ///
    /// Off by default. Only enable when the register's certificate chain
    /// cannot be validated locally.
    pub accept_invalid_certs: bool,
    /// URL of the bulk zip archive.
    pub all_url: String,
    /// URL template for county and month downloads, see
    /// [`MONTH_URL_TEMPLATE`].
    pub month_url_template: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(300)), // The bulk archive is tens of MB
            user_agent: format!("ppr/{}", env!("CARGO_PKG_VERSION")),
            accept_invalid_certs: false,
            all_url: ALL_URL.to_string(),
            month_url_template: MONTH_URL_TEMPLATE.to_string(),
        }
    }
}

/// Errors that can occur during downloads.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned something other than 200 OK.
    #[error("Failed to download file: status code {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// Month outside 1..=12.
    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    /// Bulk archive could not be opened.
    #[error(transparent)]
    Archive(#[from] ArchiveError),

    /// Body is not valid Windows-1252.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl From<FetchError> for PprError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Http(e) => Self::Http(e.to_string()),
            FetchError::Status { status } => Self::Fetch { status },
            FetchError::InvalidMonth(month) => Self::InvalidMonth(month),
            FetchError::Archive(e) => Self::Archive(e.to_string()),
            FetchError::Decode(DecodeError { offset, byte }) => Self::Decode { offset, byte },
        }
    }
}

/// Blocking HTTP client for the register endpoints.
#[derive(Debug, Clone)]
pub struct PprClient {
    client: Client,
    config: ClientConfig,
}

impl PprClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        if config.accept_invalid_certs {
            warn!("TLS certificate verification is disabled");
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, FetchError> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Downloads the whole register as CSV text.
    ///
    /// # Errors
    ///
    /// Returns an error on a non-200 response, an unreadable archive or
    /// bytes that are not Windows-1252.
    pub fn fetch_all(&self) -> Result<String, FetchError> {
        let body = self.download(&self.config.all_url)?;
        let csv = extract_first_entry(&body)?;
        Ok(decode_cp1252(&csv)?)
    }

    /// Downloads one county's sales for one month as CSV text.
    ///
    /// # Errors
    ///
    /// Returns an error if `month` is not in 1..=12, on a non-200 response
    /// or on bytes that are not Windows-1252.
    pub fn fetch_one(&self, county: &str, year: i32, month: u32) -> Result<String, FetchError> {
        let url = expand_template(&self.config.month_url_template, county, year, month)?;
        let body = self.download(&url)?;
        Ok(decode_cp1252(&body)?)
    }

    /// Issues a single GET and returns the body of a 200 response.
    fn download(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        info!(url, "downloading");
        let response = self.client.get(url).send()?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes()?;
        debug!(bytes = body.len(), "download complete");
        Ok(body.to_vec())
    }
}

/// Downloads the whole register with a default client.
///
/// # Errors
///
/// See [`PprClient::fetch_all`].
pub fn fetch_all() -> Result<String, FetchError> {
    PprClient::with_defaults()?.fetch_all()
}

/// Downloads one county and month with a default client.
///
/// # Errors
///
/// See [`PprClient::fetch_one`].
pub fn fetch_one(county: &str, year: i32, month: u32) -> Result<String, FetchError> {
    PprClient::with_defaults()?.fetch_one(county, year, month)
}
