//! Scraping library for hh.ru vacancy and resume pages.
//!
//! The crate is a thin extraction layer: [`get_html`] fetches one page with
//! browser-like headers, and the two extractors turn the raw HTML into a
//! Markdown summary of the key fields. Callers pick the extractor matching
//! the page type; there is no auto-detection.
//!
//! Extraction is best-effort by design: a missing field becomes a
//! placeholder string and a malformed work-experience or education record
//! is dropped, so a partially recognized page still yields a complete
//! document. Only the fetch step returns errors in normal operation.

pub mod error;
pub mod fetch;
pub mod resume;
mod select;
pub mod vacancy;

pub use error::{Result, ScrapeError};
pub use fetch::get_html;
pub use resume::extract_resume_data;
pub use vacancy::extract_vacancy_data;
