//! Event channel message dispatch.
//!
//! The duplex channel speaks JSON frames. Incoming frames carry either a bare
//! `url` (session echo) or an `operation` naming one of the analyzers.
//! Dispatch is transport-agnostic: it returns a tagged [`ChannelReply`] that
//! the socket loop serializes, so the logic is unit-testable without a live
//! socket.

use serde::Deserialize;
use serde_json::{json, Value};
use strum_macros::EnumString;

use crate::analyzer::{extract_external_resources, extract_subdomains, resolve_domain_info};
use crate::config::DEFAULT_SCHEME;
use crate::fetch::fetch_page;

use super::state::AppState;

/// One incoming channel frame.
///
/// Unknown fields are ignored. A frame carrying neither key produces no reply.
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelMessage {
    /// Bare host (for operations) or arbitrary URL (for the session echo)
    pub url: Option<String>,
    /// Requested analyzer, as a raw string; parsed into [`Operation`]
    pub operation: Option<String>,
}

/// The closed set of channel operations.
///
/// Parsed from the wire string with `EnumString`; anything else is the
/// unrecognized-operation case handled in [`dispatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Operation {
    /// Resolve the host's network identity
    GetInfo,
    /// Fetch the page and extract linked hostnames
    GetSubdomains,
    /// Fetch the page and extract referenced assets
    GetAssetDomains,
}

/// A tagged reply the transport layer writes out.
#[derive(Debug, Clone, PartialEq)]
pub enum ChannelReply {
    /// Successful payload, emitted as an `output` event
    Output(Value),
    /// Failure text, emitted as an `error` event
    Error(String),
}

impl ChannelReply {
    /// Renders the reply as the JSON frame sent to the client.
    pub fn to_frame(&self) -> Value {
        match self {
            ChannelReply::Output(data) => json!({"event": "output", "data": data}),
            ChannelReply::Error(message) => json!({"event": "error", "error": message}),
        }
    }
}

fn output(payload: impl serde::Serialize) -> ChannelReply {
    match serde_json::to_value(payload) {
        Ok(value) => ChannelReply::Output(value),
        Err(e) => ChannelReply::Error(format!("failed to serialize payload: {e}")),
    }
}

/// Dispatches one channel message to the requested analyzer.
///
/// Operation frames take a bare host in `url`; the default scheme is
/// prefixed unconditionally before any lookup. An unrecognized operation
/// yields an `error` reply without performing any outbound call, and a fetch
/// failure during `get_subdomains`/`get_asset_domains` yields an `error`
/// reply carrying the underlying text (the session stays open).
///
/// Returns `None` for frames carrying neither `url` nor `operation`, which
/// are silently ignored.
pub async fn dispatch(state: &AppState, message: ChannelMessage) -> Option<ChannelReply> {
    if let Some(raw_operation) = message.operation {
        let operation = match raw_operation.parse::<Operation>() {
            Ok(operation) => operation,
            Err(_) => {
                log::debug!("Unrecognized channel operation '{raw_operation}'");
                return Some(ChannelReply::Error("Invalid operation".to_string()));
            }
        };

        let Some(host) = message.url else {
            return Some(ChannelReply::Error("url is missing".to_string()));
        };
        let target = format!("{DEFAULT_SCHEME}{host}");

        let reply = match operation {
            Operation::GetInfo => {
                let info =
                    resolve_domain_info(&state.http, &state.resolver, &state.geo_api_base, &target)
                        .await;
                output(info)
            }
            Operation::GetSubdomains => match fetch_page(&state.http, &target).await {
                Ok(body) => output(extract_subdomains(&body)),
                Err(e) => {
                    log::warn!("Channel fetch failed for {target}: {e}");
                    ChannelReply::Error(e.to_string())
                }
            },
            Operation::GetAssetDomains => match fetch_page(&state.http, &target).await {
                Ok(body) => output(extract_external_resources(&body)),
                Err(e) => {
                    log::warn!("Channel fetch failed for {target}: {e}");
                    ChannelReply::Error(e.to_string())
                }
            },
        };
        Some(reply)
    } else if let Some(url) = message.url {
        Some(output(format!("session created for {url}")))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_operation_parses_wire_names() {
        assert_eq!(Operation::from_str("get_info"), Ok(Operation::GetInfo));
        assert_eq!(
            Operation::from_str("get_subdomains"),
            Ok(Operation::GetSubdomains)
        );
        assert_eq!(
            Operation::from_str("get_asset_domains"),
            Ok(Operation::GetAssetDomains)
        );
        assert!(Operation::from_str("bogus").is_err());
    }

    #[test]
    fn test_output_frame_shape() {
        let frame = ChannelReply::Output(json!(["a"])).to_frame();
        assert_eq!(frame, json!({"event": "output", "data": ["a"]}));
    }

    #[test]
    fn test_error_frame_shape() {
        let frame = ChannelReply::Error("Invalid operation".to_string()).to_frame();
        assert_eq!(frame, json!({"event": "error", "error": "Invalid operation"}));
    }

    #[test]
    fn test_channel_message_ignores_unknown_fields() {
        let message: ChannelMessage =
            serde_json::from_str(r#"{"url": "example.com", "extra": 1}"#).unwrap();
        assert_eq!(message.url.as_deref(), Some("example.com"));
        assert!(message.operation.is_none());
    }
}
