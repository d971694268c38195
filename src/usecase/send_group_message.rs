//! UseCase: グループメッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendGroupMessageUseCase::execute() メソッド
//! - スタンプ付与 → 永続化 → ルーム全員への配信、の順序
//!
//! ### なぜこのテストが必要か
//! - durability-before-delivery の保証：永続化に失敗したメッセージは
//!   一切配信されない
//! - 送信者自身にもサーバーがスタンプした正本が配信されることを確認
//! - ルーム外の接続に漏れないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：ルーム全員（送信者含む）への配信
//! - 異常系：永続化失敗時に配信が抑止される
//! - エッジケース：送信者がルームに参加していない場合

use std::sync::Arc;

use crate::common::time::{Clock, format_date_sent};
use crate::domain::{ChatStore, GroupMessage, MessageBody, MessagePusher, RoomName, Username};
use crate::infrastructure::dto::websocket::ServerEvent;

use super::{SendMessageError, SharedRooms};

/// グループメッセージ送信のユースケース
pub struct SendGroupMessageUseCase {
    /// ChatStore（永続化層の抽象化）
    store: Arc<dyn ChatStore>,
    /// MessagePusher（メッセージ通知の抽象化）
    pusher: Arc<dyn MessagePusher>,
    /// RoomDirectory（ルームメンバーシップ）
    rooms: SharedRooms,
    /// Clock（スタンプ付与用）
    clock: Arc<dyn Clock>,
}

impl SendGroupMessageUseCase {
    pub fn new(
        store: Arc<dyn ChatStore>,
        pusher: Arc<dyn MessagePusher>,
        rooms: SharedRooms,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            pusher,
            rooms,
            clock,
        }
    }

    /// Stamp, persist and broadcast a group message.
    ///
    /// Delivery is conditional on successful durability: if the store write
    /// fails nothing is broadcast. On success the stamped message goes to
    /// every connection joined to `room`, sender included, so the sender's
    /// UI reflects the canonical server stamp.
    pub async fn execute(
        &self,
        from_user: Username,
        room: RoomName,
        message: MessageBody,
    ) -> Result<GroupMessage, SendMessageError> {
        // 1. サーバー側でスタンプを付与
        let stamped = GroupMessage {
            from_user,
            room: room.clone(),
            message,
            date_sent: format_date_sent(self.clock.now_millis()),
        };

        // 2. 永続化（失敗したら配信しない）
        self.store.create_group_message(stamped.clone()).await?;

        // 3. ルームの全メンバー（送信者含む）に配信
        let targets = {
            let rooms = self.rooms.lock().await;
            rooms.members(&room)
        };
        let payload = ServerEvent::from(stamped.clone()).to_json();
        self.pusher.broadcast(targets, &payload).await?;

        Ok(stamped)
    }
}
