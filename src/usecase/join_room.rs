//! UseCase: ルーム参加処理

use crate::domain::{ConnectionId, RoomName};

use super::SharedRooms;

/// ルーム参加のユースケース
pub struct JoinRoomUseCase {
    rooms: SharedRooms,
}

impl JoinRoomUseCase {
    pub fn new(rooms: SharedRooms) -> Self {
        Self { rooms }
    }

    /// Add the connection to `room`. Idempotent; rooms are created on demand.
    pub async fn execute(&self, connection_id: ConnectionId, room: RoomName) {
        let mut rooms = self.rooms.lock().await;
        rooms.join(connection_id, room.clone());
        tracing::info!("Connection '{}' joined room '{}'", connection_id, room);
    }
}
