//! Store-backed `AuthService` implementation.
//!
//! Credentials are stored as a salted SHA-256 digest. The hashing policy is
//! deliberately simple; the relay core never touches this module.

use std::sync::Arc;

use async_trait::async_trait;
use sha2::{Digest as _, Sha256};
use uuid::Uuid;

use crate::common::time::{Clock, format_date_sent};
use crate::domain::{
    AuthError, AuthService, ChatStore, StoreError, User,
    auth::NewUser,
    value_object::Username,
};

/// `AuthService` over a `ChatStore` user table.
pub struct StoreBackedAuthService {
    store: Arc<dyn ChatStore>,
    clock: Arc<dyn Clock>,
}

impl StoreBackedAuthService {
    pub fn new(store: Arc<dyn ChatStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }
}

/// Hex-encoded SHA-256 over `salt || password`.
fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}

#[async_trait]
impl AuthService for StoreBackedAuthService {
    async fn verify_credentials(
        &self,
        username: &Username,
        password: &str,
    ) -> Result<User, AuthError> {
        // Unknown user and wrong password collapse into the same error
        let user = self
            .store
            .find_user(username)
            .await
            .ok_or(AuthError::InvalidCredentials)?;

        if hash_password(&user.salt, password) == user.password_hash {
            Ok(user)
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User, AuthError> {
        let salt = Uuid::new_v4().to_string();
        let user = User {
            username: new_user.username,
            firstname: new_user.firstname,
            lastname: new_user.lastname,
            password_hash: hash_password(&salt, &new_user.password),
            salt,
            createdon: format_date_sent(self.clock.now_millis()),
        };

        match self.store.create_user(user.clone()).await {
            Ok(()) => Ok(user),
            Err(StoreError::DuplicateUser(name)) => Err(AuthError::UsernameTaken(name)),
            Err(e) => Err(AuthError::Store(e)),
        }
    }

    async fn find_user(&self, username: &Username) -> Result<User, AuthError> {
        self.store
            .find_user(username)
            .await
            .ok_or_else(|| AuthError::UserNotFound(username.as_str().to_string()))
    }
}
