//! Shared server state.

use std::sync::Arc;

use hickory_resolver::TokioAsyncResolver;

/// Shared state handed to every handler.
///
/// Constructed once at startup and cloned per request; there is no mutable
/// state and nothing is shared across requests beyond these clients.
#[derive(Clone)]
pub struct AppState {
    /// Outbound HTTP client (page fetches and geolocation lookups)
    pub http: Arc<reqwest::Client>,
    /// DNS resolver
    pub resolver: Arc<TokioAsyncResolver>,
    /// Base URL of the geolocation service
    pub geo_api_base: Arc<str>,
}

impl AppState {
    /// Bundles the shared clients into a handler state.
    pub fn new(
        http: Arc<reqwest::Client>,
        resolver: Arc<TokioAsyncResolver>,
        geo_api_base: impl Into<Arc<str>>,
    ) -> Self {
        AppState {
            http,
            resolver,
            geo_api_base: geo_api_base.into(),
        }
    }
}
