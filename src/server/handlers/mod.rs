//! HTTP and WebSocket request handlers.

mod analyze;
mod ws;

pub use analyze::analyze_handler;
pub use ws::ws_handler;
