//! Domain network identity resolution.

use hickory_resolver::TokioAsyncResolver;
use url::Url;

use super::types::DomainInfo;
use crate::dns::resolve_host_to_ip;
use crate::geo::{self, GeoRecord};

impl DomainInfo {
    /// Fills the enrichment fields from a geolocation record.
    ///
    /// The service reports a single `org` field, which populates both `isp`
    /// and `organization`.
    fn apply_geo(&mut self, record: GeoRecord) {
        self.isp = record.org.clone();
        self.organization = record.org;
        self.asn = record.asn;
        self.location = record.country;
    }
}

/// Resolves a URL's network identity: IP address plus geolocation enrichment.
///
/// Steps:
/// 1. Extract the host from the URL. A scheme-less input has no extractable
///    host (the URL parser treats it as a path) and yields an all-`None` result.
/// 2. Resolve the host to an IP address via DNS.
/// 3. If an IP was obtained, query the geolocation service for ISP,
///    organization, ASN, and country.
///
/// This function never fails: every lookup failure is logged and degrades the
/// affected fields to `None`.
///
/// # Arguments
///
/// * `http` - The shared HTTP client, used for the geolocation lookup
/// * `resolver` - The DNS resolver instance
/// * `geo_api_base` - Base URL of the geolocation service
/// * `url` - Absolute URL whose host is inspected
pub async fn resolve_domain_info(
    http: &reqwest::Client,
    resolver: &TokioAsyncResolver,
    geo_api_base: &str,
    url: &str,
) -> DomainInfo {
    let mut info = DomainInfo::default();

    let host = match Url::parse(url).ok().and_then(|parsed| {
        parsed.host_str().map(|host| host.to_string())
    }) {
        Some(host) => host,
        None => {
            log::warn!("No extractable host in '{url}', skipping domain info");
            return info;
        }
    };

    match resolve_host_to_ip(&host, resolver).await {
        Ok(ip) => info.ip = Some(ip),
        Err(e) => {
            log::warn!("DNS resolution failed for {host}: {e}");
            return info;
        }
    }

    // ip is always present here; resolution failures returned above
    if let Some(ip) = info.ip.clone() {
        match geo::lookup_ip(http, geo_api_base, &ip).await {
            Ok(record) => info.apply_geo(record),
            Err(e) => log::warn!("Geolocation lookup failed for {ip}: {e}"),
        }
    }

    info
}

#[cfg(test)]
mod tests {
    use super::*;
    use hickory_resolver::config::{ResolverConfig, ResolverOpts};

    fn unreachable_resolver() -> TokioAsyncResolver {
        TokioAsyncResolver::tokio(ResolverConfig::new(), ResolverOpts::default())
    }

    #[test]
    fn test_isp_and_organization_share_the_org_field() {
        let mut info = DomainInfo::default();
        info.apply_geo(GeoRecord {
            org: Some("AS15169 Google LLC".to_string()),
            asn: Some("AS15169".to_string()),
            country: Some("US".to_string()),
        });
        assert_eq!(info.isp, info.organization);
        assert_eq!(info.asn.as_deref(), Some("AS15169"));
        assert_eq!(info.location.as_deref(), Some("US"));
    }

    #[tokio::test]
    async fn test_dns_failure_degrades_to_all_none() {
        let client = reqwest::Client::new();
        let resolver = unreachable_resolver();
        let info = resolve_domain_info(
            &client,
            &resolver,
            "http://geo.invalid",
            "http://unresolvable.example.com/",
        )
        .await;
        assert_eq!(info, DomainInfo::default());
    }

    #[tokio::test]
    async fn test_scheme_less_url_yields_all_none() {
        let client = reqwest::Client::new();
        let resolver = unreachable_resolver();
        let info =
            resolve_domain_info(&client, &resolver, "http://geo.invalid", "example.com").await;
        assert_eq!(info, DomainInfo::default());
    }
}
