//! InMemory ChatStore 実装
//!
//! ドメイン層が定義する ChatStore trait の具体的な実装。
//! Vec / HashMap をインメモリ DB として使用します。
//!
//! ## 技術的負債
//!
//! 現在、ドメインエンティティを直接ストレージとして保持しています。
//! InMemory 実装では許容される妥協ですが、将来ドキュメントストアを
//! 実装する際は DB Row/JSON → エンティティの変換層が必要になります。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    ChatStore, GroupMessage, PrivateMessage, StoreError, User, value_object::Username,
};

/// インメモリ ChatStore 実装
///
/// 追記専用のメッセージログと、ユーザー名をキーにしたユーザーテーブルを
/// 保持する。
#[derive(Default)]
pub struct InMemoryChatStore {
    group_messages: Mutex<Vec<GroupMessage>>,
    private_messages: Mutex<Vec<PrivateMessage>>,
    users: Mutex<HashMap<Username, User>>,
}

impl InMemoryChatStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the group message log (test/debug support).
    pub async fn group_messages(&self) -> Vec<GroupMessage> {
        self.group_messages.lock().await.clone()
    }

    /// Snapshot of the private message log (test/debug support).
    pub async fn private_messages(&self) -> Vec<PrivateMessage> {
        self.private_messages.lock().await.clone()
    }
}

#[async_trait]
impl ChatStore for InMemoryChatStore {
    async fn create_group_message(&self, message: GroupMessage) -> Result<(), StoreError> {
        let mut log = self.group_messages.lock().await;
        log.push(message);
        Ok(())
    }

    async fn create_private_message(&self, message: PrivateMessage) -> Result<(), StoreError> {
        let mut log = self.private_messages.lock().await;
        log.push(message);
        Ok(())
    }

    async fn find_user(&self, username: &Username) -> Option<User> {
        let users = self.users.lock().await;
        users.get(username).cloned()
    }

    async fn create_user(&self, user: User) -> Result<(), StoreError> {
        let mut users = self.users.lock().await;
        if users.contains_key(&user.username) {
            return Err(StoreError::DuplicateUser(user.username.as_str().to_string()));
        }
        users.insert(user.username.clone(), user);
        Ok(())
    }
}
