//! UseCase: identity 宣言処理
//!
//! 接続をユーザー名に紐づける。同じユーザー名の再宣言は last-writer-wins:
//! 古い接続は強制切断されず、ユーザー名での到達性だけを失う。
//!
//! 一つの接続が別のユーザー名で再宣言した場合は、先に宣言したユーザー名の
//! エントリを（まだ自分を指していれば）削除してから新しいエントリを登録する。
//! 切断時の掃除は最後に宣言したユーザー名しか見ないため、ここで掃除しないと
//! 死んだ接続を指すエントリが残り続ける。

use crate::domain::{ConnectionId, Username};

use super::SharedPresence;

/// identity 宣言のユースケース
pub struct AnnounceIdentityUseCase {
    /// PresenceRegistry（ユーザー名 → 接続 ID のマッピング）
    presence: SharedPresence,
}

impl AnnounceIdentityUseCase {
    pub fn new(presence: SharedPresence) -> Self {
        Self { presence }
    }

    /// Register `username` as reachable via `connection_id`.
    ///
    /// `previous` is the username this connection announced earlier, if any;
    /// re-announcing under a different name releases the old entry first so
    /// it cannot outlive the connection.
    ///
    /// Returns the displaced connection identifier if a previous session had
    /// announced the same username.
    pub async fn execute(
        &self,
        connection_id: ConnectionId,
        username: Username,
        previous: Option<&Username>,
    ) -> Option<ConnectionId> {
        let displaced = {
            let mut presence = self.presence.lock().await;
            if let Some(old) = previous {
                if *old != username && presence.remove_if_matching(old, connection_id) {
                    tracing::info!(
                        "Connection '{}' released username '{}' before re-announcing",
                        connection_id,
                        old
                    );
                }
            }
            presence.set(username.clone(), connection_id)
        };

        match displaced {
            Some(old) => {
                tracing::info!(
                    "User '{}' re-announced on connection '{}', displacing '{}'",
                    username,
                    connection_id,
                    old
                );
            }
            None => {
                tracing::info!(
                    "User '{}' announced identity on connection '{}'",
                    username,
                    connection_id
                );
            }
        }

        displaced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PresenceRegistry;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    fn username(name: &str) -> Username {
        Username::new(name.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_announce_registers_presence() {
        // テスト項目: identity 宣言後、ユーザー名でその接続が引ける
        // given (前提条件):
        let presence: SharedPresence = Arc::new(Mutex::new(PresenceRegistry::new()));
        let usecase = AnnounceIdentityUseCase::new(presence.clone());
        let conn = ConnectionId::generate();

        // when (操作):
        let displaced = usecase.execute(conn, username("alice"), None).await;

        // then (期待する結果):
        assert_eq!(displaced, None);
        assert_eq!(presence.lock().await.get(&username("alice")), Some(conn));
    }

    #[tokio::test]
    async fn test_second_announce_displaces_first() {
        // テスト項目: 二つ目の接続による再宣言が先の接続を置き換える
        // given (前提条件):
        let presence: SharedPresence = Arc::new(Mutex::new(PresenceRegistry::new()));
        let usecase = AnnounceIdentityUseCase::new(presence.clone());
        let old_conn = ConnectionId::generate();
        let new_conn = ConnectionId::generate();
        usecase.execute(old_conn, username("alice"), None).await;

        // when (操作):
        let displaced = usecase.execute(new_conn, username("alice"), None).await;

        // then (期待する結果):
        assert_eq!(displaced, Some(old_conn));
        assert_eq!(presence.lock().await.get(&username("alice")), Some(new_conn));
    }

    #[tokio::test]
    async fn test_reannounce_different_username_releases_old_entry() {
        // テスト項目: 同じ接続が別のユーザー名で再宣言すると古いエントリが消える
        // given (前提条件): conn が alice として宣言済み
        let presence: SharedPresence = Arc::new(Mutex::new(PresenceRegistry::new()));
        let usecase = AnnounceIdentityUseCase::new(presence.clone());
        let conn = ConnectionId::generate();
        usecase.execute(conn, username("alice"), None).await;

        // when (操作): 同じ接続が bob として再宣言
        usecase
            .execute(conn, username("bob"), Some(&username("alice")))
            .await;

        // then (期待する結果): alice のエントリは残らない
        assert_eq!(presence.lock().await.get(&username("alice")), None);
        assert_eq!(presence.lock().await.get(&username("bob")), Some(conn));
    }

    #[tokio::test]
    async fn test_reannounce_does_not_release_entry_owned_by_other_connection() {
        // テスト項目: 別の接続が所有するエントリは再宣言時の掃除で消えない
        // given (前提条件): alice は別の接続に置き換えられている
        let presence: SharedPresence = Arc::new(Mutex::new(PresenceRegistry::new()));
        let usecase = AnnounceIdentityUseCase::new(presence.clone());
        let conn = ConnectionId::generate();
        let other = ConnectionId::generate();
        usecase.execute(conn, username("alice"), None).await;
        usecase.execute(other, username("alice"), None).await;

        // when (操作): conn が bob として再宣言
        usecase
            .execute(conn, username("bob"), Some(&username("alice")))
            .await;

        // then (期待する結果): alice は other を指したまま
        assert_eq!(presence.lock().await.get(&username("alice")), Some(other));
        assert_eq!(presence.lock().await.get(&username("bob")), Some(conn));
    }
}
