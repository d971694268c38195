//! UseCase: ルーム退出処理

use crate::domain::{ConnectionId, RoomName};

use super::SharedRooms;

/// ルーム退出のユースケース
pub struct LeaveRoomUseCase {
    rooms: SharedRooms,
}

impl LeaveRoomUseCase {
    pub fn new(rooms: SharedRooms) -> Self {
        Self { rooms }
    }

    /// Remove the connection from `room`. Idempotent.
    pub async fn execute(&self, connection_id: ConnectionId, room: RoomName) {
        let mut rooms = self.rooms.lock().await;
        rooms.leave(connection_id, &room);
        tracing::info!("Connection '{}' left room '{}'", connection_id, room);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RoomDirectory;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    fn room(name: &str) -> RoomName {
        RoomName::new(name.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_leave_room_removes_membership() {
        // テスト項目: leave でルームのメンバーから外れる
        // given (前提条件):
        let rooms: SharedRooms = Arc::new(Mutex::new(RoomDirectory::new()));
        let usecase = LeaveRoomUseCase::new(rooms.clone());
        let conn = ConnectionId::generate();
        rooms.lock().await.join(conn, room("lobby"));

        // when (操作):
        usecase.execute(conn, room("lobby")).await;

        // then (期待する結果):
        assert!(rooms.lock().await.members(&room("lobby")).is_empty());
    }

    #[tokio::test]
    async fn test_leave_room_never_joined_is_noop() {
        // テスト項目: 参加していないルームからの leave は何も起きない
        // given (前提条件):
        let rooms: SharedRooms = Arc::new(Mutex::new(RoomDirectory::new()));
        let usecase = LeaveRoomUseCase::new(rooms.clone());
        let conn = ConnectionId::generate();

        // when (操作):
        usecase.execute(conn, room("lobby")).await;

        // then (期待する結果):
        assert_eq!(rooms.lock().await.room_count(), 0);
    }
}
