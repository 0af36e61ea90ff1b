// src/error.rs

use thiserror::Error;

/// Errors surfaced by the report pipeline.
///
/// Malformed rows and unparseable dates are tolerated by the parser and
/// aggregator and never show up here.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("GET {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("GET {url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("invalid sheet URL {0:?}: {1}")]
    InvalidUrl(String, #[source] url::ParseError),
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("unknown output format {0:?}")]
    UnknownFormat(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
