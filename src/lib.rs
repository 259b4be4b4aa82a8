//! site_inspector library: website analysis over HTTP and WebSocket
//!
//! This library analyzes a target website: it resolves the domain's network
//! identity (IP, ISP, ASN, location), extracts hostnames linked from the
//! fetched page, and classifies externally referenced asset URLs
//! (stylesheets, images, iframes, anchors). Results are served through a
//! synchronous HTTP endpoint and a duplex WebSocket channel.
//!
//! # Example
//!
//! ```no_run
//! use site_inspector::{run_server, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     port: 3000,
//!     ..Default::default()
//! };
//! run_server(config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod analyzer;
pub mod config;
mod dns;
mod error_handling;
mod fetch;
mod geo;
pub mod initialization;
pub mod server;
mod utils;

// Re-export public API
pub use analyzer::{AnalysisReport, AssetReport, DomainInfo};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{ApiError, InitializationError};
pub use server::{build_router, run_server, AppState};
