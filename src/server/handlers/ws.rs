//! WebSocket event channel.

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use futures::{sink::SinkExt, stream::StreamExt};

use crate::server::channel::{dispatch, ChannelMessage};
use crate::server::state::AppState;

/// WebSocket upgrade handler for `GET /ws`.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

/// Handles one channel session.
///
/// Messages are handled sequentially: each frame is dispatched to completion
/// before the next is read. Malformed (non-JSON) text frames are logged and
/// ignored, as are frames that dispatch to no reply.
async fn handle_socket(socket: WebSocket, state: AppState) {
    log::info!("Channel client connected");
    let (mut sender, mut receiver) = socket.split();

    while let Some(Ok(message)) = receiver.next().await {
        match message {
            Message::Text(text) => {
                let parsed: ChannelMessage = match serde_json::from_str(&text) {
                    Ok(parsed) => parsed,
                    Err(e) => {
                        log::warn!("Ignoring malformed channel frame: {e}");
                        continue;
                    }
                };

                if let Some(reply) = dispatch(&state, parsed).await {
                    let frame = reply.to_frame().to_string();
                    if sender.send(Message::Text(frame.into())).await.is_err() {
                        log::debug!("Channel send failed, client gone");
                        break;
                    }
                }
            }
            Message::Close(_) => {
                log::debug!("Channel client sent close frame");
                break;
            }
            _ => {}
        }
    }

    log::info!("Channel client disconnected");
}
