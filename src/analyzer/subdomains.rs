//! Linked hostname extraction.

use std::collections::HashSet;
use std::sync::LazyLock;

use scraper::{Html, Selector};
use url::Url;

use crate::utils::parse_selector_with_fallback;

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback("a[href]", "subdomain extraction"));

/// Extracts the set of hostnames referenced by a page's anchors.
///
/// Iterates every `<a>` element carrying an `href` attribute and keeps the
/// hostname portion of that href. Entries without a parseable hostname
/// (relative paths, `mailto:` links, fragment-only links) contribute nothing.
///
/// # Arguments
///
/// * `html` - Raw HTML text of the fetched page
///
/// # Returns
///
/// Deduplicated hostnames, in no particular order.
pub fn extract_subdomains(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut hostnames = HashSet::new();

    for anchor in document.select(&ANCHOR_SELECTOR) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        // Relative hrefs fail to parse and mailto:/fragment hrefs carry no
        // host; both are skipped
        if let Ok(parsed) = Url::parse(href) {
            if let Some(host) = parsed.host_str() {
                hostnames.insert(host.to_string());
            }
        }
    }

    hostnames.into_iter().collect()
}
