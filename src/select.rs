// src/select.rs
//
// Marker-based lookup helpers shared by the vacancy and resume extractors.
// hh.ru tags semantically meaningful elements with data-qa attributes, so
// every field lookup is a CSS selector over the parsed tree.

use scraper::{ElementRef, Selector};

use crate::error::{Result, ScrapeError};

/// Parses a CSS locator string into a `Selector`.
///
/// The locators are compile-time constants, so a parse failure here is the
/// structural-failure channel: it propagates instead of degrading to a
/// placeholder.
pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| ScrapeError::MalformedDocument(format!("invalid locator `{css}`: {e}")))
}

/// Text of the first element matching `sel` under `scope`, trimmed.
/// `None` when no element matches.
pub(crate) fn first_text(scope: ElementRef, sel: &Selector) -> Option<String> {
    scope
        .select(sel)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
}

/// All text under `el` with a line break between sub-elements, so block
/// content keeps its shape when flattened to plain text.
pub(crate) fn text_lines(el: ElementRef) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// All text nodes under `el` joined with single spaces, trimmed only at
/// the ends. Each node keeps its own internal spacing.
pub(crate) fn flat_text(el: ElementRef) -> String {
    el.text().collect::<Vec<_>>().join(" ").trim().to_string()
}

/// Collects the tag texts inside the first element matching `section`, in
/// document order. Empty when the section is absent.
pub(crate) fn tag_texts(scope: ElementRef, section: &Selector, tag: &Selector) -> Vec<String> {
    scope
        .select(section)
        .next()
        .map(|sec| {
            sec.select(tag)
                .map(|el| el.text().collect::<String>().trim().to_string())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_first_text_trims_and_concatenates() {
        let doc = Html::parse_document("<div id='x'>  a<b>b</b>c  </div>");
        let sel = selector("#x").unwrap();
        assert_eq!(
            first_text(doc.root_element(), &sel),
            Some("abc".to_string())
        );
    }

    #[test]
    fn test_first_text_absent_is_none() {
        let doc = Html::parse_document("<div>text</div>");
        let sel = selector("#missing").unwrap();
        assert_eq!(first_text(doc.root_element(), &sel), None);
    }

    #[test]
    fn test_text_lines_separates_block_children() {
        let doc = Html::parse_document("<div id='d'><p>one</p><p>two</p></div>");
        let sel = selector("#d").unwrap();
        let el = doc.select(&sel).next().unwrap();
        assert_eq!(text_lines(el), "one\ntwo");
    }

    #[test]
    fn test_flat_text_joins_nodes_and_trims_ends() {
        let doc = Html::parse_document("<div id='d'>МГУ <span>2017</span> Математика</div>");
        let sel = selector("#d").unwrap();
        let el = doc.select(&sel).next().unwrap();
        // Node-internal spacing survives; only the ends are trimmed.
        assert_eq!(flat_text(el), "МГУ  2017  Математика");
    }

    #[test]
    fn test_flat_text_whitespace_only_is_empty() {
        let doc = Html::parse_document("<div id='d'>  \n <span> </span> </div>");
        let sel = selector("#d").unwrap();
        let el = doc.select(&sel).next().unwrap();
        assert_eq!(flat_text(el), "");
    }

    #[test]
    fn test_invalid_locator_is_malformed_document() {
        let err = selector("[[").unwrap_err();
        assert!(matches!(err, ScrapeError::MalformedDocument(_)));
    }
}
