//! HTTP API request/response DTOs for the auth pathway.

use serde::{Deserialize, Serialize};

/// `POST /api/signup` request body.
#[derive(Debug, Clone, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub password: String,
}

/// `POST /api/login` request body.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Public view of a user; never carries credential material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub createdon: Option<String>,
}

/// Envelope for all auth pathway responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserDto>,
}

impl AuthResponse {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            user: None,
        }
    }

    /// Successful response without a user payload.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            user: None,
        }
    }

    pub fn success(message: impl Into<String>, user: UserDto) -> Self {
        Self {
            success: true,
            message: message.into(),
            user: Some(user),
        }
    }
}
