//! Integration tests for event channel dispatch.
//!
//! Dispatch returns a tagged reply instead of writing to a socket, so these
//! tests exercise the full channel contract without a WebSocket connection.
//! Upstream pages are stood in for with wiremock; the DNS resolver is built
//! with no nameservers so hostname lookups fail fast without network I/O.

use std::sync::Arc;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use site_inspector::server::channel::{dispatch, ChannelMessage, ChannelReply};
use site_inspector::AppState;

fn test_state(geo_api_base: &str) -> AppState {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .expect("client should build");
    let resolver = TokioAsyncResolver::tokio(ResolverConfig::new(), ResolverOpts::default());
    AppState::new(Arc::new(client), Arc::new(resolver), geo_api_base)
}

fn message(url: Option<&str>, operation: Option<&str>) -> ChannelMessage {
    serde_json::from_value(json!({
        "url": url,
        "operation": operation,
    }))
    .expect("message should deserialize")
}

#[tokio::test]
async fn test_bogus_operation_emits_one_error_without_outbound_calls() {
    let upstream = MockServer::start().await;
    let state = test_state(&upstream.uri());

    let reply = dispatch(&state, message(Some("x"), Some("bogus"))).await;

    assert_eq!(
        reply,
        Some(ChannelReply::Error("Invalid operation".to_string()))
    );
    let requests = upstream.received_requests().await.unwrap();
    assert!(requests.is_empty(), "no outbound call should be made");
}

#[tokio::test]
async fn test_bare_url_message_echoes_session_string() {
    let upstream = MockServer::start().await;
    let state = test_state(&upstream.uri());

    let reply = dispatch(&state, message(Some("example.com"), None)).await;

    assert_eq!(
        reply,
        Some(ChannelReply::Output(json!("session created for example.com")))
    );
}

#[tokio::test]
async fn test_message_with_neither_key_is_silently_ignored() {
    let upstream = MockServer::start().await;
    let state = test_state(&upstream.uri());

    let reply = dispatch(&state, message(None, None)).await;
    assert_eq!(reply, None);
}

#[tokio::test]
async fn test_operation_without_url_emits_error() {
    let upstream = MockServer::start().await;
    let state = test_state(&upstream.uri());

    let reply = dispatch(&state, message(None, Some("get_info"))).await;
    assert_eq!(reply, Some(ChannelReply::Error("url is missing".to_string())));
}

#[tokio::test]
async fn test_get_info_on_unresolvable_host_degrades_to_all_none() {
    let upstream = MockServer::start().await;
    let state = test_state(&upstream.uri());

    let reply = dispatch(&state, message(Some("unresolvable.example.com"), Some("get_info"))).await;

    let Some(ChannelReply::Output(data)) = reply else {
        panic!("expected an output reply");
    };
    for key in ["ip", "isp", "organization", "asn", "location"] {
        assert!(data[key].is_null(), "{key} should be null");
    }
}

#[tokio::test]
async fn test_get_subdomains_fetches_page_and_extracts_hostnames() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<a href="http://sub.example.com/x">..</a><a href="/local">..</a>"#,
        ))
        .mount(&upstream)
        .await;
    let state = test_state(&upstream.uri());

    // The channel takes bare hosts; the http:// prefix is added by dispatch
    let host = upstream.address().to_string();
    let reply = dispatch(&state, message(Some(&host), Some("get_subdomains"))).await;

    assert_eq!(
        reply,
        Some(ChannelReply::Output(json!(["sub.example.com"])))
    );
}

#[tokio::test]
async fn test_get_asset_domains_fetches_page_and_classifies_assets() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r##"<link rel="stylesheet" href="/a.css"><img src="/i.png"><a href="#top">t</a>"##,
        ))
        .mount(&upstream)
        .await;
    let state = test_state(&upstream.uri());

    let host = upstream.address().to_string();
    let reply = dispatch(&state, message(Some(&host), Some("get_asset_domains"))).await;

    assert_eq!(
        reply,
        Some(ChannelReply::Output(json!({
            "stylesheets": ["/a.css"],
            "images": ["/i.png"],
            "iframes": [],
            "anchors": ["#top"],
        })))
    );
}

#[tokio::test]
async fn test_secondary_fetch_failure_emits_error_event() {
    let upstream = MockServer::start().await;
    // No mounted routes: wiremock answers 404, which the fetch treats as failure
    let state = test_state(&upstream.uri());

    let host = upstream.address().to_string();
    let reply = dispatch(&state, message(Some(&host), Some("get_subdomains"))).await;

    let Some(ChannelReply::Error(text)) = reply else {
        panic!("expected an error reply");
    };
    assert!(text.contains("404"), "error should carry the status: {text}");
}
