//! UseCase: 切断処理
//!
//! presence のエントリは「まだ自分の接続を指している場合のみ」削除する。
//! 同じユーザー名で新しいセッションが先に identity を宣言していた場合、
//! 遅れて届いた古い接続の切断がそのエントリを消すことはない。
//! ルームメンバーシップと送信チャンネルは常に解放する。

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, Username};

use super::{SharedPresence, SharedRooms};

/// 切断のユースケース
pub struct DisconnectSessionUseCase {
    presence: SharedPresence,
    rooms: SharedRooms,
    pusher: Arc<dyn MessagePusher>,
}

impl DisconnectSessionUseCase {
    pub fn new(presence: SharedPresence, rooms: SharedRooms, pusher: Arc<dyn MessagePusher>) -> Self {
        Self {
            presence,
            rooms,
            pusher,
        }
    }

    /// Tear down a connection.
    ///
    /// `claimed` is the username this connection announced, if any; a
    /// connection that never announced leaves no presence trace.
    pub async fn execute(&self, connection_id: ConnectionId, claimed: Option<Username>) {
        if let Some(username) = claimed {
            let removed = {
                let mut presence = self.presence.lock().await;
                presence.remove_if_matching(&username, connection_id)
            };
            if removed {
                tracing::info!(
                    "User '{}' went offline (connection '{}')",
                    username,
                    connection_id
                );
            } else {
                tracing::debug!(
                    "Stale disconnect for user '{}': presence already points at a newer session",
                    username
                );
            }
        }

        {
            let mut rooms = self.rooms.lock().await;
            rooms.drop_connection(connection_id);
        }
        self.pusher.unregister_client(connection_id).await;
        tracing::info!("Connection '{}' torn down", connection_id);
    }
}
