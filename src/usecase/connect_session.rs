//! UseCase: 接続確立処理
//!
//! 新しい接続に ConnectionId を割り当て、送信チャンネルを MessagePusher に
//! 登録する。永続化の副作用はなく、presence にも登録しない（identity 宣言は
//! 別のユースケース）。

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, PusherChannel};

/// 接続確立のユースケース
pub struct ConnectSessionUseCase {
    /// MessagePusher（メッセージ通知の抽象化）
    pusher: Arc<dyn MessagePusher>,
}

impl ConnectSessionUseCase {
    pub fn new(pusher: Arc<dyn MessagePusher>) -> Self {
        Self { pusher }
    }

    /// Allocate a fresh `ConnectionId` and register the outbound channel.
    pub async fn execute(&self, sender: PusherChannel) -> ConnectionId {
        let connection_id = ConnectionId::generate();
        self.pusher.register_client(connection_id, sender).await;
        tracing::info!("Connection '{}' established", connection_id);
        connection_id
    }
}
