//! HTTP and WebSocket server surface.
//!
//! Two routes share one [`AppState`]:
//! - `GET /` - synchronous analysis of a target URL
//! - `GET /ws` - duplex event channel for incremental queries

pub mod channel;
mod handlers;
mod state;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

use crate::config::Config;
use crate::error_handling::{ApiError, InitializationError};
use crate::initialization::{init_client, init_resolver};

pub use state::AppState;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::MissingParameter | ApiError::UpstreamFetchFailed(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Internal(ref e) => {
                log::error!("Unhandled analysis error: {e:#}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = Json(serde_json::json!({"error": self.to_string()}));
        (status, body).into_response()
    }
}

/// Builds the application router over the given state.
///
/// Split out from [`run_server`] so tests can drive the router directly.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::analyze_handler))
        .route("/ws", get(handlers::ws_handler))
        .with_state(state)
}

/// Creates the shared resources and serves until shutdown.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built, the listen address
/// cannot be bound, or the server fails while running.
pub async fn run_server(config: Config) -> Result<(), anyhow::Error> {
    let client = init_client(&config).map_err(InitializationError::from)?;
    let resolver = init_resolver();
    let state = AppState::new(client, resolver, config.geo_api_base.as_str());

    let app = build_router(state);

    let addr = format!("{}:{}", config.bind, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", addr, e))?;

    log::info!("Listening on http://{addr}/");
    log::info!("  - Analysis: http://{addr}/?url=<target>");
    log::info!("  - Event channel: ws://{addr}/ws");

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
