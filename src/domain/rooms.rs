//! Room membership: ephemeral named multicast groups.
//!
//! A room is a server-created-on-demand label with no persisted membership
//! list. Membership exists only as the union of currently joined connections;
//! a room whose member set becomes empty is dropped from the map.

use std::collections::{HashMap, HashSet};

use super::value_object::{ConnectionId, RoomName};

/// Mapping from room name to the set of joined connections, with a reverse
/// index so a closing connection can leave all of its rooms at once.
#[derive(Debug, Default)]
pub struct RoomDirectory {
    members: HashMap<RoomName, HashSet<ConnectionId>>,
    joined: HashMap<ConnectionId, HashSet<RoomName>>,
}

impl RoomDirectory {
    pub fn new() -> Self {
        Self {
            members: HashMap::new(),
            joined: HashMap::new(),
        }
    }

    /// Add `connection_id` to `room`. Idempotent: joining twice is the same
    /// as joining once (membership is a set, not a multiset).
    pub fn join(&mut self, connection_id: ConnectionId, room: RoomName) {
        self.members
            .entry(room.clone())
            .or_default()
            .insert(connection_id);
        self.joined.entry(connection_id).or_default().insert(room);
    }

    /// Remove `connection_id` from `room`. Idempotent.
    pub fn leave(&mut self, connection_id: ConnectionId, room: &RoomName) {
        if let Some(members) = self.members.get_mut(room) {
            members.remove(&connection_id);
            if members.is_empty() {
                self.members.remove(room);
            }
        }
        if let Some(rooms) = self.joined.get_mut(&connection_id) {
            rooms.remove(room);
            if rooms.is_empty() {
                self.joined.remove(&connection_id);
            }
        }
    }

    /// Remove `connection_id` from every room it joined.
    pub fn drop_connection(&mut self, connection_id: ConnectionId) {
        let Some(rooms) = self.joined.remove(&connection_id) else {
            return;
        };
        for room in rooms {
            if let Some(members) = self.members.get_mut(&room) {
                members.remove(&connection_id);
                if members.is_empty() {
                    self.members.remove(&room);
                }
            }
        }
    }

    /// All connections currently joined to `room`, sender included.
    pub fn members(&self, room: &RoomName) -> Vec<ConnectionId> {
        self.members
            .get(room)
            .map(|members| members.iter().copied().collect())
            .unwrap_or_default()
    }

    /// All connections currently joined to `room` except `exclude`.
    pub fn members_except(&self, room: &RoomName, exclude: ConnectionId) -> Vec<ConnectionId> {
        self.members
            .get(room)
            .map(|members| {
                members
                    .iter()
                    .copied()
                    .filter(|id| *id != exclude)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether `connection_id` is currently joined to `room`.
    pub fn is_member(&self, connection_id: ConnectionId, room: &RoomName) -> bool {
        self.members
            .get(room)
            .is_some_and(|members| members.contains(&connection_id))
    }

    /// Number of rooms that currently have at least one member.
    pub fn room_count(&self) -> usize {
        self.members.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(name: &str) -> RoomName {
        RoomName::new(name.to_string()).unwrap()
    }

    #[test]
    fn test_join_and_members() {
        // テスト項目: join した接続が members に含まれる
        // given (前提条件):
        let mut directory = RoomDirectory::new();
        let conn = ConnectionId::generate();

        // when (操作):
        directory.join(conn, room("lobby"));

        // then (期待する結果):
        assert_eq!(directory.members(&room("lobby")), vec![conn]);
        assert!(directory.is_member(conn, &room("lobby")));
    }

    #[test]
    fn test_join_is_idempotent() {
        // テスト項目: 二重 join は一回の join と等価（set であって multiset ではない）
        // given (前提条件):
        let mut directory = RoomDirectory::new();
        let conn = ConnectionId::generate();

        // when (操作):
        directory.join(conn, room("lobby"));
        directory.join(conn, room("lobby"));

        // then (期待する結果):
        assert_eq!(directory.members(&room("lobby")).len(), 1);
    }

    #[test]
    fn test_leave_is_idempotent() {
        // テスト項目: join していないルームからの leave は何も起きない
        // given (前提条件):
        let mut directory = RoomDirectory::new();
        let conn = ConnectionId::generate();

        // when (操作):
        directory.leave(conn, &room("lobby"));
        directory.leave(conn, &room("lobby"));

        // then (期待する結果):
        assert_eq!(directory.members(&room("lobby")).len(), 0);
    }

    #[test]
    fn test_empty_room_is_garbage_collected() {
        // テスト項目: 最後のメンバーが leave したルームはマップから消える
        // given (前提条件):
        let mut directory = RoomDirectory::new();
        let conn = ConnectionId::generate();
        directory.join(conn, room("lobby"));

        // when (操作):
        directory.leave(conn, &room("lobby"));

        // then (期待する結果):
        assert_eq!(directory.room_count(), 0);
    }

    #[test]
    fn test_members_except_excludes_sender() {
        // テスト項目: members_except が指定した接続を除外する
        // given (前提条件):
        let mut directory = RoomDirectory::new();
        let alice = ConnectionId::generate();
        let bob = ConnectionId::generate();
        directory.join(alice, room("lobby"));
        directory.join(bob, room("lobby"));

        // when (操作):
        let result = directory.members_except(&room("lobby"), alice);

        // then (期待する結果):
        assert_eq!(result, vec![bob]);
    }

    #[test]
    fn test_drop_connection_leaves_all_rooms() {
        // テスト項目: drop_connection で全てのルームから退出する
        // given (前提条件):
        let mut directory = RoomDirectory::new();
        let alice = ConnectionId::generate();
        let bob = ConnectionId::generate();
        directory.join(alice, room("lobby"));
        directory.join(alice, room("games"));
        directory.join(bob, room("lobby"));

        // when (操作):
        directory.drop_connection(alice);

        // then (期待する結果): alice はどのルームにもいない、bob は残る
        assert!(!directory.is_member(alice, &room("lobby")));
        assert!(!directory.is_member(alice, &room("games")));
        assert_eq!(directory.members(&room("lobby")), vec![bob]);
        // games は空になったので消えている
        assert_eq!(directory.room_count(), 1);
    }

    #[test]
    fn test_members_of_unknown_room_is_empty() {
        // テスト項目: 存在しないルームの members は空
        // given (前提条件):
        let directory = RoomDirectory::new();

        // when (操作):
        let result = directory.members(&room("nowhere"));

        // then (期待する結果):
        assert!(result.is_empty());
    }
}
