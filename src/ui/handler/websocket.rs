//! WebSocket connection handler.
//!
//! One task per connection reads inbound events in receipt order and
//! dispatches them to the use cases; a second task drains the connection's
//! outbound channel into the WebSocket sink. Invalid frames are logged and
//! dropped (fire-and-forget event semantics: no protocol-level error frame
//! goes back to the client).

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::domain::{ConnectionId, MessageBody, RoomName, Username};
use crate::infrastructure::dto::websocket::ClientEvent;

use super::super::state::AppState;

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

/// Spawns a task that drains the outbound channel into the WebSocket sink.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (sender, mut receiver) = socket.split();

    // Create a channel for this connection to receive messages
    let (tx, rx) = mpsc::unbounded_channel();
    let connection_id = state.connect_session.execute(tx).await;
    let mut send_task = pusher_loop(rx, sender);

    // Username this connection announced; drives presence teardown
    let mut claimed: Option<Username> = None;

    loop {
        tokio::select! {
            _ = &mut send_task => break,
            msg = receiver.next() => {
                let msg = match msg {
                    Some(Ok(msg)) => msg,
                    Some(Err(e)) => {
                        tracing::error!("WebSocket error on '{}': {}", connection_id, e);
                        break;
                    }
                    None => break,
                };

                match msg {
                    Message::Text(text) => {
                        handle_event(&state, connection_id, &mut claimed, &text).await;
                    }
                    Message::Ping(_) => {
                        // Ping/pong is handled automatically by the WebSocket protocol
                        tracing::debug!("Received ping");
                    }
                    Message::Close(_) => {
                        tracing::info!("Connection '{}' requested close", connection_id);
                        break;
                    }
                    _ => {}
                }
            }
        }
    }

    send_task.abort();
    state.disconnect_session.execute(connection_id, claimed).await;
}

/// Parse and dispatch one inbound event.
async fn handle_event(
    state: &Arc<AppState>,
    connection_id: ConnectionId,
    claimed: &mut Option<Username>,
    text: &str,
) {
    let event = match serde_json::from_str::<ClientEvent>(text) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!("Failed to parse event from '{}': {}", connection_id, e);
            return;
        }
    };

    match event {
        ClientEvent::AnnounceIdentity { username } => match Username::try_from(username) {
            Ok(username) => {
                state
                    .announce_identity
                    .execute(connection_id, username.clone(), claimed.as_ref())
                    .await;
                *claimed = Some(username);
            }
            Err(e) => tracing::warn!("Rejected announce-identity from '{}': {}", connection_id, e),
        },
        ClientEvent::JoinRoom { room } => match RoomName::try_from(room) {
            Ok(room) => state.join_room.execute(connection_id, room).await,
            Err(e) => tracing::warn!("Rejected join-room from '{}': {}", connection_id, e),
        },
        ClientEvent::LeaveRoom { room } => match RoomName::try_from(room) {
            Ok(room) => state.leave_room.execute(connection_id, room).await,
            Err(e) => tracing::warn!("Rejected leave-room from '{}': {}", connection_id, e),
        },
        ClientEvent::ChatMessage {
            from_user,
            room,
            message,
        } => {
            let parsed = (
                Username::try_from(from_user),
                RoomName::try_from(room),
                MessageBody::try_from(message),
            );
            match parsed {
                (Ok(from_user), Ok(room), Ok(message)) => {
                    if let Err(e) = state
                        .send_group_message
                        .execute(from_user, room, message)
                        .await
                    {
                        // Silent from the client's perspective
                        tracing::error!("Failed to route chat message: {}", e);
                    }
                }
                (from_user, room, message) => {
                    log_invalid_fields(connection_id, "chat-message", &[
                        from_user.err(),
                        room.err(),
                        message.err(),
                    ]);
                }
            }
        }
        ClientEvent::Typing { username, room } => {
            let parsed = (Username::try_from(username), RoomName::try_from(room));
            match parsed {
                (Ok(username), Ok(room)) => {
                    if let Err(e) = state
                        .notify_typing
                        .execute(connection_id, username, room)
                        .await
                    {
                        tracing::warn!("Failed to relay typing notification: {}", e);
                    }
                }
                (username, room) => {
                    log_invalid_fields(connection_id, "typing", &[username.err(), room.err()]);
                }
            }
        }
        ClientEvent::PrivateMessage {
            from_user,
            to_user,
            message,
        } => {
            let parsed = (
                Username::try_from(from_user),
                Username::try_from(to_user),
                MessageBody::try_from(message),
            );
            match parsed {
                (Ok(from_user), Ok(to_user), Ok(message)) => {
                    if let Err(e) = state
                        .send_private_message
                        .execute(connection_id, from_user, to_user, message)
                        .await
                    {
                        tracing::error!("Failed to route private message: {}", e);
                    }
                }
                (from_user, to_user, message) => {
                    log_invalid_fields(connection_id, "private-message", &[
                        from_user.err(),
                        to_user.err(),
                        message.err(),
                    ]);
                }
            }
        }
    }
}

fn log_invalid_fields(
    connection_id: ConnectionId,
    event: &str,
    errors: &[Option<crate::domain::ValidationError>],
) {
    for error in errors.iter().flatten() {
        tracing::warn!("Rejected {} from '{}': {}", event, connection_id, error);
    }
}
