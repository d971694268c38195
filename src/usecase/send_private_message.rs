//! UseCase: プライベートメッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendPrivateMessageUseCase::execute() メソッド
//! - スタンプ付与 → 永続化 → 宛先解決（オンライン配信 / オフライン通知）
//!
//! ### なぜこのテストが必要か
//! - 宛先がオンラインなら point-to-point で正確に一度だけ届くこと
//! - 宛先がオフラインでも永続化され、送信者に status が返ること
//! - グループメッセージと同じ persist-then-deliver ポリシーであること
//!
//! ### どのような状況を想定しているか
//! - 正常系：オンラインの宛先への配信
//! - 正常系：オフラインの宛先（offline fallback）
//! - 異常系：永続化失敗時に配信が抑止される

use std::sync::Arc;

use crate::common::time::{Clock, format_date_sent};
use crate::domain::{ChatStore, ConnectionId, MessageBody, MessagePusher, PrivateMessage, Username};
use crate::infrastructure::dto::websocket::ServerEvent;

use super::{SendMessageError, SharedPresence};

/// Outcome of a private message route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrivateDelivery {
    /// Recipient was online; the stamped message went to its connection.
    Delivered(ConnectionId),
    /// Recipient had no live connection; the sender got a status notice and
    /// the record is durable regardless.
    RecipientOffline,
}

/// プライベートメッセージ送信のユースケース
pub struct SendPrivateMessageUseCase {
    /// ChatStore（永続化層の抽象化）
    store: Arc<dyn ChatStore>,
    /// MessagePusher（メッセージ通知の抽象化）
    pusher: Arc<dyn MessagePusher>,
    /// PresenceRegistry（宛先解決）
    presence: SharedPresence,
    /// Clock（スタンプ付与用）
    clock: Arc<dyn Clock>,
}

impl SendPrivateMessageUseCase {
    pub fn new(
        store: Arc<dyn ChatStore>,
        pusher: Arc<dyn MessagePusher>,
        presence: SharedPresence,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            pusher,
            presence,
            clock,
        }
    }

    /// Stamp, persist and route a private message.
    ///
    /// Both message paths share one policy: persist-then-deliver. A failed
    /// store write suppresses delivery here exactly as it does for group
    /// messages. On success the recipient is resolved via the presence
    /// registry; an offline recipient yields exactly one `message-status`
    /// notice to the sender and zero deliveries.
    pub async fn execute(
        &self,
        sender: ConnectionId,
        from_user: Username,
        to_user: Username,
        message: MessageBody,
    ) -> Result<PrivateDelivery, SendMessageError> {
        // 1. サーバー側でスタンプを付与
        let stamped = PrivateMessage {
            from_user,
            to_user: to_user.clone(),
            message,
            date_sent: format_date_sent(self.clock.now_millis()),
        };

        // 2. 永続化（オフラインでもメッセージは失われない）
        self.store.create_private_message(stamped.clone()).await?;

        // 3. 宛先を presence で解決
        let recipient = {
            let presence = self.presence.lock().await;
            presence.get(&to_user)
        };

        match recipient {
            Some(connection_id) => {
                // point-to-point 配信（ルームブロードキャストではない）
                let payload = ServerEvent::from(stamped).to_json();
                self.pusher.push_to(connection_id, &payload).await?;
                Ok(PrivateDelivery::Delivered(connection_id))
            }
            None => {
                // offline fallback: 送信者にのみ status を通知
                let status = ServerEvent::MessageStatus {
                    success: false,
                    message: format!("{} is currently offline. Message saved.", to_user),
                };
                self.pusher.push_to(sender, &status.to_json()).await?;
                Ok(PrivateDelivery::RecipientOffline)
            }
        }
    }
}
