//! UseCase: タイピング通知処理
//!
//! 永続化なしの純粋なリレー。ルームの他のメンバーにのみ配信し、入力中の
//! 本人には決してエコーしない。バッファリングも再送も行わない。

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePushError, MessagePusher, RoomName, Username};
use crate::infrastructure::dto::websocket::ServerEvent;

use super::SharedRooms;

/// タイピング通知のユースケース
pub struct NotifyTypingUseCase {
    pusher: Arc<dyn MessagePusher>,
    rooms: SharedRooms,
}

impl NotifyTypingUseCase {
    pub fn new(pusher: Arc<dyn MessagePusher>, rooms: SharedRooms) -> Self {
        Self { pusher, rooms }
    }

    /// Relay a typing notification to every other member of `room`.
    pub async fn execute(
        &self,
        sender: ConnectionId,
        username: Username,
        room: RoomName,
    ) -> Result<(), MessagePushError> {
        let targets = {
            let rooms = self.rooms.lock().await;
            rooms.members_except(&room, sender)
        };

        let payload = ServerEvent::Typing {
            username: username.into_string(),
        }
        .to_json();
        self.pusher.broadcast(targets, &payload).await
    }
}
