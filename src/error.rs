//! Error type shared by every library operation.
//!
//! Binaries wrap these in `anyhow` at the top of `main`, so each variant's `Display`
//! is the diagnostic a user sees on stderr.

use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure (DNS, connect, TLS, body read).
    #[error("HTTP error fetching {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx response that did not carry an API envelope.
    #[error("HTTP error: {status} for url ({url})")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The API answered with a status other than `OK`.
    #[error("API error: {comment}")]
    Api { comment: String },

    /// The response body was not the JSON shape we expect.
    #[error("unexpected API response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("error reading users file {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error reading users file {}: {source}", path.display())]
    MalformedFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("error writing {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No user in the users file matched the requested country.
    #[error("No users found in country '{0}'")]
    NoCountryUsers(String),

    /// A standings row has fewer problem results than the contest has problems.
    #[error("standings row ranked {rank} has {found} problem results, expected {expected}")]
    MisalignedRow {
        rank: u32,
        expected: usize,
        found: usize,
    },

    #[error("chart rendering failed: {0}")]
    Render(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl Error {
    pub(crate) fn render<E: std::fmt::Debug>(e: E) -> Self {
        Error::Render(format!("{:?}", e))
    }
}
