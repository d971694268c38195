//! Value objects with constructor validation.
//!
//! Malformed input is rejected at the boundary: an empty username, room name
//! or message body never reaches the routing core.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::ValidationError;

/// Maximum length of a username in characters
const USERNAME_MAX_LEN: usize = 32;
/// Maximum length of a room name in characters
const ROOM_NAME_MAX_LEN: usize = 64;
/// Maximum length of a message body in characters
const MESSAGE_BODY_MAX_LEN: usize = 2000;

/// A claimed user identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    pub fn new(value: String) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty("username"));
        }
        if trimmed.chars().count() > USERNAME_MAX_LEN {
            return Err(ValidationError::TooLong {
                field: "username",
                max: USERNAME_MAX_LEN,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Username {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named multicast room. Rooms are created on demand and exist only while
/// at least one connection is joined.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomName(String);

impl RoomName {
    pub fn new(value: String) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty("room"));
        }
        if trimmed.chars().count() > ROOM_NAME_MAX_LEN {
            return Err(ValidationError::TooLong {
                field: "room",
                max: ROOM_NAME_MAX_LEN,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for RoomName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for RoomName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The text of a chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageBody(String);

impl MessageBody {
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::Empty("message"));
        }
        if value.chars().count() > MESSAGE_BODY_MAX_LEN {
            return Err(ValidationError::TooLong {
                field: "message",
                max: MESSAGE_BODY_MAX_LEN,
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for MessageBody {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Server-assigned opaque identifier for one live connection.
///
/// A reconnecting client always gets a fresh `ConnectionId`; identifiers are
/// never reused across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    /// Allocate a fresh connection identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_valid() {
        // テスト項目: 有効なユーザー名で Username が生成できる
        // given (前提条件):
        let value = "alice".to_string();

        // when (操作):
        let result = Username::new(value);

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(result.unwrap().as_str(), "alice");
    }

    #[test]
    fn test_username_trimmed() {
        // テスト項目: 前後の空白が取り除かれる
        // given (前提条件):
        let value = "  alice  ".to_string();

        // when (操作):
        let result = Username::new(value).unwrap();

        // then (期待する結果):
        assert_eq!(result.as_str(), "alice");
    }

    #[test]
    fn test_username_empty_rejected() {
        // テスト項目: 空のユーザー名は拒否される
        // given (前提条件):
        let value = "   ".to_string();

        // when (操作):
        let result = Username::new(value);

        // then (期待する結果):
        assert_eq!(result, Err(ValidationError::Empty("username")));
    }

    #[test]
    fn test_username_too_long_rejected() {
        // テスト項目: 最大長を超えるユーザー名は拒否される
        // given (前提条件):
        let value = "a".repeat(33);

        // when (操作):
        let result = Username::new(value);

        // then (期待する結果):
        assert_eq!(
            result,
            Err(ValidationError::TooLong {
                field: "username",
                max: 32
            })
        );
    }

    #[test]
    fn test_room_name_empty_rejected() {
        // テスト項目: 空のルーム名は拒否される
        // given (前提条件):
        let value = "".to_string();

        // when (操作):
        let result = RoomName::new(value);

        // then (期待する結果):
        assert_eq!(result, Err(ValidationError::Empty("room")));
    }

    #[test]
    fn test_message_body_empty_rejected() {
        // テスト項目: 空のメッセージ本文は拒否される
        // given (前提条件):
        let value = "".to_string();

        // when (操作):
        let result = MessageBody::new(value);

        // then (期待する結果):
        assert_eq!(result, Err(ValidationError::Empty("message")));
    }

    #[test]
    fn test_message_body_preserves_whitespace() {
        // テスト項目: メッセージ本文の空白は保持される
        // given (前提条件):
        let value = "  hi  ".to_string();

        // when (操作):
        let result = MessageBody::new(value).unwrap();

        // then (期待する結果):
        assert_eq!(result.as_str(), "  hi  ");
    }

    #[test]
    fn test_connection_id_unique() {
        // テスト項目: 生成された ConnectionId は一意である
        // given (前提条件):

        // when (操作):
        let id1 = ConnectionId::generate();
        let id2 = ConnectionId::generate();

        // then (期待する結果):
        assert_ne!(id1, id2);
    }
}
