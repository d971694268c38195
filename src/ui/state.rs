//! Server state shared across handlers.

use std::sync::Arc;

use crate::domain::AuthService;
use crate::usecase::{
    AnnounceIdentityUseCase, ConnectSessionUseCase, DisconnectSessionUseCase, JoinRoomUseCase,
    LeaveRoomUseCase, NotifyTypingUseCase, SendGroupMessageUseCase, SendPrivateMessageUseCase,
};

/// Shared application state
pub struct AppState {
    pub connect_session: Arc<ConnectSessionUseCase>,
    pub announce_identity: Arc<AnnounceIdentityUseCase>,
    pub disconnect_session: Arc<DisconnectSessionUseCase>,
    pub join_room: Arc<JoinRoomUseCase>,
    pub leave_room: Arc<LeaveRoomUseCase>,
    pub send_group_message: Arc<SendGroupMessageUseCase>,
    pub notify_typing: Arc<NotifyTypingUseCase>,
    pub send_private_message: Arc<SendPrivateMessageUseCase>,
    /// Auth collaborator; consumed by the HTTP pathway only.
    pub auth: Arc<dyn AuthService>,
}
