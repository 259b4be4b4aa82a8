//! Analysis result data structures.
//!
//! Everything here is constructed fresh per request and serialized straight
//! into the response; nothing is persisted.

use serde::Serialize;

/// Network identity of the target domain.
///
/// Fields are `None` whenever the corresponding lookup failed; the struct
/// itself is always produced. `isp` and `organization` always carry the same
/// value because the geolocation service reports a single `org` field.
///
/// All fields serialize even when absent -- the wire contract emits explicit
/// nulls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DomainInfo {
    /// Resolved IP address of the host
    pub ip: Option<String>,
    /// Internet service provider
    pub isp: Option<String>,
    /// Operating organization (same source field as `isp`)
    pub organization: Option<String>,
    /// Autonomous system number
    pub asn: Option<String>,
    /// Country code of the IP
    pub location: Option<String>,
}

/// Externally referenced asset URLs, grouped by category.
///
/// Entries are raw `href`/`src` attribute values in document order, not
/// deduplicated and not resolved against the page's base URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssetReport {
    /// `href` of every `<link>` whose `rel` contains "stylesheet"
    pub stylesheets: Vec<String>,
    /// `src` of every `<img>`
    pub images: Vec<String>,
    /// `src` of every `<iframe>`
    pub iframes: Vec<String>,
    /// `href` of every `<a>`
    pub anchors: Vec<String>,
}

/// Combined result of the three analyzers for one target URL.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Network identity of the target domain
    pub info: DomainInfo,
    /// Deduplicated hostnames linked from the page (unordered)
    pub subdomains: Vec<String>,
    /// Referenced asset URLs by category
    pub asset_domains: AssetReport,
}
