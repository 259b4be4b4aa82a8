//! Synchronous analysis endpoint.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::analyzer::{
    extract_external_resources, extract_subdomains, resolve_domain_info, AnalysisReport,
};
use crate::error_handling::ApiError;
use crate::fetch::fetch_page;
use crate::server::state::AppState;

/// Query parameters of `GET /`.
#[derive(Debug, Deserialize)]
pub struct AnalyzeParams {
    /// Absolute URL of the page to analyze
    pub url: Option<String>,
}

/// Handles `GET /?url=<absolute-url>`.
///
/// Fetches the target page, then runs all three analyzers. The page-derived
/// extractors run concurrently with the domain info resolution, which does
/// its own DNS and geolocation I/O and does not need the body.
///
/// # Errors
///
/// - [`ApiError::MissingParameter`] when `url` is absent (400)
/// - [`ApiError::UpstreamFetchFailed`] when the target fetch fails or
///   returns a non-success status (400)
pub async fn analyze_handler(
    State(state): State<AppState>,
    Query(params): Query<AnalyzeParams>,
) -> Result<Json<AnalysisReport>, ApiError> {
    let url = params.url.ok_or(ApiError::MissingParameter)?;
    log::info!("Analyzing {url}");

    let body = fetch_page(&state.http, &url)
        .await
        .map_err(|e| ApiError::UpstreamFetchFailed(e.to_string()))?;

    let (info, (subdomains, asset_domains)) = tokio::join!(
        resolve_domain_info(&state.http, &state.resolver, &state.geo_api_base, &url),
        async { (extract_subdomains(&body), extract_external_resources(&body)) }
    );

    Ok(Json(AnalysisReport {
        info,
        subdomains,
        asset_domains,
    }))
}
