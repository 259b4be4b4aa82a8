//! External resource extraction.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use super::types::AssetReport;
use crate::utils::parse_selector_with_fallback;

static LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback("link", "stylesheet extraction"));
static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback("img", "image extraction"));
static IFRAME_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback("iframe", "iframe extraction"));
static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback("a[href]", "anchor extraction"));

/// Collects externally referenced asset URLs from a page, by category.
///
/// - `stylesheets`: `href` of every `<link>` whose `rel` attribute
///   case-insensitively contains the substring "stylesheet"
/// - `images`: `src` of every `<img>`
/// - `iframes`: `src` of every `<iframe>`
/// - `anchors`: `href` of every `<a>`
///
/// Elements missing the relevant attribute are silently skipped. Each list
/// preserves document order and keeps raw attribute values, so entries may be
/// relative paths and may repeat.
pub fn extract_external_resources(html: &str) -> AssetReport {
    let document = Html::parse_document(html);
    let mut report = AssetReport::default();

    for link in document.select(&LINK_SELECTOR) {
        let is_stylesheet = link
            .value()
            .attr("rel")
            .is_some_and(|rel| rel.to_ascii_lowercase().contains("stylesheet"));
        if !is_stylesheet {
            continue;
        }
        if let Some(href) = link.value().attr("href") {
            report.stylesheets.push(href.to_string());
        }
    }

    for img in document.select(&IMG_SELECTOR) {
        if let Some(src) = img.value().attr("src") {
            report.images.push(src.to_string());
        }
    }

    for iframe in document.select(&IFRAME_SELECTOR) {
        if let Some(src) = iframe.value().attr("src") {
            report.iframes.push(src.to_string());
        }
    }

    for anchor in document.select(&ANCHOR_SELECTOR) {
        if let Some(href) = anchor.value().attr("href") {
            report.anchors.push(href.to_string());
        }
    }

    report
}
