//! Authentication collaborator trait.
//!
//! Consumed only by the HTTP auth pathway; the WebSocket routing core never
//! calls into this interface.

use async_trait::async_trait;

use super::entity::User;
use super::error::AuthError;
use super::value_object::Username;

/// Fields required to register a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub firstname: String,
    pub lastname: String,
    pub password: String,
}

/// Credential verification and account creation.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Verify a username/password pair.
    ///
    /// Unknown usernames and wrong passwords both surface as
    /// `AuthError::InvalidCredentials` so callers cannot distinguish them.
    async fn verify_credentials(&self, username: &Username, password: &str)
    -> Result<User, AuthError>;

    /// Register a new user; fails with `AuthError::UsernameTaken` on conflict.
    async fn create_user(&self, new_user: NewUser) -> Result<User, AuthError>;

    /// Fetch a user profile by username.
    async fn find_user(&self, username: &Username) -> Result<User, AuthError>;
}
