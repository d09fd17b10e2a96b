//! Authentication Handlers
//!
//! Registration, login and session introspection.

use std::time::Duration;

use axum::{Extension, Json, extract::State};
use serde::Serialize;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{User, UserLogin, UserRegister};
use crate::db::repository::UserRepository;
use crate::utils::{ApiResponse, AppError, AppResult};

/// Fixed delay during login to blunt timing attacks.
const AUTH_FIXED_DELAY_MS: u64 = 500;

#[derive(Debug, Serialize)]
pub struct LoginData {
    pub token: String,
    pub user: User,
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<UserRegister>,
) -> AppResult<ApiResponse<User>> {
    payload.validate()?;
    let repo = UserRepository::new(state.db.clone());
    let user = repo.create(payload).await?;

    tracing::info!(username = %user.username, "User registered");

    Ok(ApiResponse::created("User registered successfully", user))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<UserLogin>,
) -> AppResult<ApiResponse<LoginData>> {
    let repo = UserRepository::new(state.db.clone());
    let user = repo.find_by_email(&payload.email).await?;

    // Fixed delay before inspecting the result, so hit and miss take the
    // same time; the error message is unified for the same reason.
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let user = match user {
        Some(user) => {
            let password_valid = user
                .verify_password(&payload.password)
                .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;

            if !password_valid {
                tracing::warn!(email = %payload.email, "Login failed - invalid credentials");
                return Err(AppError::invalid_credentials());
            }

            user
        }
        None => {
            tracing::warn!(email = %payload.email, "Login failed - user not found");
            return Err(AppError::invalid_credentials());
        }
    };

    let user_id = user
        .id
        .as_ref()
        .map(|id| id.to_string())
        .unwrap_or_default();

    let token = state
        .get_jwt_service()
        .generate_token(&user_id, &user.username, &user.email)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

    tracing::info!(user_id = %user_id, username = %user.username, "User logged in");

    Ok(ApiResponse::ok("Login successful", LoginData { token, user }))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<ApiResponse<User>> {
    let repo = UserRepository::new(state.db.clone());
    let account = repo
        .find_by_id(&user.id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;
    Ok(ApiResponse::ok("User retrieved successfully", account))
}

/// POST /api/auth/logout
pub async fn logout(Extension(user): Extension<CurrentUser>) -> AppResult<ApiResponse<()>> {
    tracing::info!(user_id = %user.id, username = %user.username, "User logged out");
    Ok(ApiResponse::ok("User logged out successfully", ()))
}
