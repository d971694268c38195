//! Domain entities backing the durable log.
//!
//! `GroupMessage` and `PrivateMessage` are append-only log entries; they are
//! never updated or deleted once written. `User` is immutable after creation.

use super::value_object::{MessageBody, RoomName, Username};

/// A registered user account (owned by the persistence collaborator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: Username,
    pub firstname: String,
    pub lastname: String,
    /// Salted credential hash; the hashing policy lives in the auth service.
    pub password_hash: String,
    pub salt: String,
    /// Creation stamp, `MM/DD/YYYY, HH:MM AM|PM`
    pub createdon: String,
}

/// A message sent to a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupMessage {
    pub from_user: Username,
    pub room: RoomName,
    pub message: MessageBody,
    /// Server-assigned send stamp, `MM/DD/YYYY, HH:MM AM|PM`
    pub date_sent: String,
}

/// A direct message between two users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateMessage {
    pub from_user: Username,
    pub to_user: Username,
    pub message: MessageBody,
    /// Server-assigned send stamp, `MM/DD/YYYY, HH:MM AM|PM`
    pub date_sent: String,
}
