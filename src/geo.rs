//! IP geolocation lookup.
//!
//! Queries an external ipinfo.io-style service: `GET <base>/<ip>/json`
//! answering with a JSON body carrying `org`, `asn`, and `country` keys.
//! The service conflates ISP and organization into the single `org` field.

use serde::Deserialize;

/// One record returned by the geolocation service.
///
/// Every field is optional; the service omits keys it has no data for.
#[derive(Debug, Clone, Deserialize)]
pub struct GeoRecord {
    /// Network operator, e.g. `"AS15169 Google LLC"`
    pub org: Option<String>,
    /// Autonomous system number
    pub asn: Option<String>,
    /// ISO country code
    pub country: Option<String>,
}

/// Looks up geolocation data for an IP address.
///
/// # Arguments
///
/// * `client` - The shared HTTP client (carries timeout and user agent)
/// * `base_url` - Base URL of the lookup service, without trailing slash
/// * `ip` - The IP address to look up
///
/// # Errors
///
/// Returns a `reqwest::Error` on transport failure, non-success status, or
/// an unparseable response body.
pub async fn lookup_ip(
    client: &reqwest::Client,
    base_url: &str,
    ip: &str,
) -> Result<GeoRecord, reqwest::Error> {
    let response = client
        .get(format!("{base_url}/{ip}/json"))
        .send()
        .await?
        .error_for_status()?;
    response.json::<GeoRecord>().await
}
