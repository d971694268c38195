//! HTTP API endpoint handlers (auth pathway + health).

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::domain::{AuthError, Username, auth::NewUser};
use crate::infrastructure::dto::http::{AuthResponse, LoginRequest, SignupRequest, UserDto};

use super::super::state::AppState;

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// `POST /api/signup`
pub async fn signup(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SignupRequest>,
) -> (StatusCode, Json<AuthResponse>) {
    if request.username.trim().is_empty()
        || request.firstname.trim().is_empty()
        || request.lastname.trim().is_empty()
        || request.password.is_empty()
    {
        return (
            StatusCode::BAD_REQUEST,
            Json(AuthResponse::failure("All fields are required")),
        );
    }

    let username = match Username::try_from(request.username) {
        Ok(username) => username,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(AuthResponse::failure(e.to_string())),
            );
        }
    };

    let new_user = NewUser {
        username,
        firstname: request.firstname,
        lastname: request.lastname,
        password: request.password,
    };

    match state.auth.create_user(new_user).await {
        Ok(user) => (
            StatusCode::CREATED,
            Json(AuthResponse::success(
                "User registered successfully",
                UserDto::from(&user),
            )),
        ),
        Err(AuthError::UsernameTaken(_)) => (
            StatusCode::BAD_REQUEST,
            Json(AuthResponse::failure("Username already exists")),
        ),
        Err(e) => {
            tracing::error!("Signup error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(AuthResponse::failure("Server error during registration")),
            )
        }
    }
}

/// `POST /api/logout`
///
/// Stateless acknowledgement; sessions live entirely on the client side.
pub async fn logout() -> (StatusCode, Json<AuthResponse>) {
    (StatusCode::OK, Json(AuthResponse::ok("Logout successful")))
}

/// `POST /api/login`
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> (StatusCode, Json<AuthResponse>) {
    if request.username.trim().is_empty() || request.password.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(AuthResponse::failure("Username and password are required")),
        );
    }

    let Ok(username) = Username::try_from(request.username) else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(AuthResponse::failure("Invalid username or password")),
        );
    };

    match state.auth.verify_credentials(&username, &request.password).await {
        Ok(user) => (
            StatusCode::OK,
            Json(AuthResponse::success("Login successful", UserDto::from(&user))),
        ),
        // Unknown user and wrong password produce the same response
        Err(AuthError::InvalidCredentials) => (
            StatusCode::UNAUTHORIZED,
            Json(AuthResponse::failure("Invalid username or password")),
        ),
        Err(e) => {
            tracing::error!("Login error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(AuthResponse::failure("Server error during login")),
            )
        }
    }
}

/// `GET /api/users/{username}` — profile lookup for session validation
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> (StatusCode, Json<AuthResponse>) {
    let Ok(username) = Username::try_from(username) else {
        return (
            StatusCode::NOT_FOUND,
            Json(AuthResponse::failure("User not found")),
        );
    };

    match state.auth.find_user(&username).await {
        Ok(user) => (
            StatusCode::OK,
            Json(AuthResponse::success("OK", UserDto::from(&user))),
        ),
        Err(AuthError::UserNotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(AuthResponse::failure("User not found")),
        ),
        Err(e) => {
            tracing::error!("Get user error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(AuthResponse::failure("Server error")),
            )
        }
    }
}
