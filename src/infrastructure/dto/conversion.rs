//! Conversion logic between DTOs and domain entities.

use crate::domain::entity::{GroupMessage, PrivateMessage, User};
use crate::infrastructure::dto::http::UserDto;
use crate::infrastructure::dto::websocket::ServerEvent;

// ========================================
// Domain Entity → DTO
// ========================================

impl From<GroupMessage> for ServerEvent {
    fn from(message: GroupMessage) -> Self {
        Self::Message {
            from_user: message.from_user.into_string(),
            room: message.room.into_string(),
            message: message.message.into_string(),
            date_sent: message.date_sent,
        }
    }
}

impl From<PrivateMessage> for ServerEvent {
    fn from(message: PrivateMessage) -> Self {
        Self::PrivateMessage {
            from_user: message.from_user.into_string(),
            to_user: message.to_user.into_string(),
            message: message.message.into_string(),
            date_sent: message.date_sent,
        }
    }
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.as_str().to_string(),
            firstname: user.firstname.clone(),
            lastname: user.lastname.clone(),
            createdon: Some(user.createdon.clone()),
        }
    }
}
