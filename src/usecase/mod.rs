//! UseCase layer: one use case per inbound operation.
//!
//! Use cases own the routing and lifecycle business logic. They depend on the
//! domain interfaces (`ChatStore`, `MessagePusher`), the in-memory
//! presence/room core, and the wire DTOs for outbound payloads.

mod announce_identity;
mod connect_session;
mod disconnect_session;
mod error;
mod join_room;
mod leave_room;
mod notify_typing;
mod send_group_message;
mod send_private_message;

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{PresenceRegistry, RoomDirectory};

/// Presence registry shared across use cases and connection tasks.
pub type SharedPresence = Arc<Mutex<PresenceRegistry>>;
/// Room directory shared across use cases and connection tasks.
pub type SharedRooms = Arc<Mutex<RoomDirectory>>;

pub use announce_identity::AnnounceIdentityUseCase;
pub use connect_session::ConnectSessionUseCase;
pub use disconnect_session::DisconnectSessionUseCase;
pub use error::SendMessageError;
pub use join_room::JoinRoomUseCase;
pub use leave_room::LeaveRoomUseCase;
pub use notify_typing::NotifyTypingUseCase;
pub use send_group_message::SendGroupMessageUseCase;
pub use send_private_message::{PrivateDelivery, SendPrivateMessageUseCase};
