//! Message delivery collaborator trait.
//!
//! ## 責務
//!
//! - 接続ごとの送信チャンネルの管理（register / unregister）
//! - 接続へのメッセージ送信（push_to, broadcast）
//!
//! WebSocket の生成は UI 層で行われ、この trait は生成済みの
//! `UnboundedSender` を受け取ってメッセージ送信に使用する。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::error::MessagePushError;
use super::value_object::ConnectionId;

/// Channel used to hand outbound payloads to a connection's writer task.
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// Outbound delivery to live connections.
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// Register a connection's outbound channel.
    async fn register_client(&self, connection_id: ConnectionId, sender: PusherChannel);

    /// Unregister a connection's outbound channel.
    async fn unregister_client(&self, connection_id: ConnectionId);

    /// Deliver `content` to exactly one connection. Unknown targets are an
    /// error (the caller decides whether that matters).
    async fn push_to(
        &self,
        connection_id: ConnectionId,
        content: &str,
    ) -> Result<(), MessagePushError>;

    /// Deliver `content` to every target. Partial failure is tolerated:
    /// targets that vanished mid-broadcast are logged and skipped.
    async fn broadcast(
        &self,
        targets: Vec<ConnectionId>,
        content: &str,
    ) -> Result<(), MessagePushError>;
}
