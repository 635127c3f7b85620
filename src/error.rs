// src/error.rs
use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by the fetch and extraction functions.
///
/// Field-level absence is never an error: extractors substitute a
/// placeholder string and keep going. Only transport failures, bad HTTP
/// statuses and structural lookup failures reach the caller.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Connection, DNS or timeout failure while fetching a page.
    #[error("network error fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a client or server error status.
    #[error("HTTP {status} fetching {url}")]
    Http { url: String, status: StatusCode },

    /// A structural lookup inside the document could not be performed.
    #[error("malformed document: {0}")]
    MalformedDocument(String),
}

/// Result type alias for fetch and extraction operations.
pub type Result<T> = std::result::Result<T, ScrapeError>;
