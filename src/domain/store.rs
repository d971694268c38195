//! Persistence collaborator trait.
//!
//! The routing core depends on this interface only; the concrete backend
//! (in-memory today, a document store later) lives in the infrastructure
//! layer (dependency inversion).

use async_trait::async_trait;

use super::entity::{GroupMessage, PrivateMessage, User};
use super::error::StoreError;
use super::value_object::Username;

/// Durable storage for users and the append-only message logs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatStore: Send + Sync {
    /// Append a group message to the durable log.
    async fn create_group_message(&self, message: GroupMessage) -> Result<(), StoreError>;

    /// Append a private message to the durable log.
    async fn create_private_message(&self, message: PrivateMessage) -> Result<(), StoreError>;

    /// Point lookup of a user by username.
    async fn find_user(&self, username: &Username) -> Option<User>;

    /// Create a user record; fails if the username is taken.
    async fn create_user(&self, user: User) -> Result<(), StoreError>;
}
