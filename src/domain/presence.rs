//! Presence registry: authoritative mapping of username to the currently
//! reachable connection.
//!
//! ## 設計ノート
//!
//! 同じユーザー名で二重に identity を宣言した場合は last-writer-wins:
//! 古い接続は切断されず、ユーザー名での到達性だけを失う。エントリの削除は
//! `remove_if_matching` に一本化されていて、遅れて届いた古い接続の切断が
//! 新しいセッションのエントリを消してしまうことはない。

use std::collections::HashMap;

use super::value_object::{ConnectionId, Username};

/// In-memory mapping `username -> connection identifier`.
///
/// At most one live connection per username at any instant.
#[derive(Debug, Default)]
pub struct PresenceRegistry {
    entries: HashMap<Username, ConnectionId>,
}

impl PresenceRegistry {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register `username` as reachable via `connection_id`, overwriting any
    /// existing mapping. Returns the displaced connection identifier, if any.
    pub fn set(&mut self, username: Username, connection_id: ConnectionId) -> Option<ConnectionId> {
        self.entries.insert(username, connection_id)
    }

    /// Look up the connection currently reachable for `username`.
    pub fn get(&self, username: &Username) -> Option<ConnectionId> {
        self.entries.get(username).copied()
    }

    /// Remove the entry for `username` only if it still points at
    /// `connection_id`. Returns `true` if an entry was removed.
    pub fn remove_if_matching(&mut self, username: &Username, connection_id: ConnectionId) -> bool {
        match self.entries.get(username) {
            Some(current) if *current == connection_id => {
                self.entries.remove(username);
                true
            }
            _ => false,
        }
    }

    /// Number of users currently registered as present.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
