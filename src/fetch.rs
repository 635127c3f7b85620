// src/fetch.rs
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use tracing::debug;

use crate::error::{Result, ScrapeError};

// hh.ru rejects requests carrying the default reqwest User-Agent, so we
// present ourselves as a common desktop Chrome build.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const BROWSER_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const BROWSER_ACCEPT_LANGUAGE: &str = "ru-RU,ru;q=0.9,en-US;q=0.8,en;q=0.7";

/// Request timeout. Covers the whole request, from connect to body read.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers.insert(ACCEPT, HeaderValue::from_static(BROWSER_ACCEPT));
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static(BROWSER_ACCEPT_LANGUAGE),
    );
    headers
}

/// Fetches one page and returns its body as text.
///
/// Performs a single synchronous GET with browser-like headers and a fixed
/// timeout. No retries, no caching; redirects follow reqwest's default
/// policy. A fresh client is built per call, so there is no shared state
/// between invocations.
///
/// Returns `ScrapeError::Network` when the connection cannot be
/// established or times out, and `ScrapeError::Http` when the server
/// answers with a 4xx/5xx status.
pub fn get_html(url: &str) -> Result<String> {
    debug!("fetching {url}");

    let network_err = |source: reqwest::Error| ScrapeError::Network {
        url: url.to_string(),
        source,
    };

    let client = Client::builder()
        .default_headers(browser_headers())
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(network_err)?;

    let response = client.get(url).send().map_err(network_err)?;

    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        return Err(ScrapeError::Http {
            url: url.to_string(),
            status,
        });
    }

    response.text().map_err(network_err)
}
