//! WebSocket event DTOs.
//!
//! Events are JSON objects tagged by a `type` field with kebab-case event
//! names, e.g. `{"type":"chat-message","from_user":"alice",...}`.

use serde::{Deserialize, Serialize};

/// Inbound events (client → server).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ClientEvent {
    /// Tie this connection to a claimed username.
    AnnounceIdentity { username: String },
    /// Add this connection to a room.
    JoinRoom { room: String },
    /// Remove this connection from a room.
    LeaveRoom { room: String },
    /// Send a group message to a room.
    ChatMessage {
        from_user: String,
        room: String,
        message: String,
    },
    /// Transient typing notification for a room.
    Typing { username: String, room: String },
    /// Send a direct message to a specific user.
    PrivateMessage {
        from_user: String,
        to_user: String,
        message: String,
    },
}

/// Outbound events (server → client).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ServerEvent {
    /// Stamped group chat message, broadcast to the whole room.
    Message {
        from_user: String,
        room: String,
        message: String,
        date_sent: String,
    },
    /// Typing notification, relayed to the room excluding the typist.
    Typing { username: String },
    /// Stamped direct message, delivered point-to-point.
    PrivateMessage {
        from_user: String,
        to_user: String,
        message: String,
        date_sent: String,
    },
    /// Status notice to the sender (e.g. recipient offline).
    MessageStatus { success: bool, message: String },
}

impl ServerEvent {
    /// Serialize to the wire representation.
    ///
    /// Serialization of these enums cannot fail; the unwrap is safe.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap()
    }
}
