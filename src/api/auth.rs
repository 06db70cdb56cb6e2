use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use tracing::info;

use crate::api::{response, AppState};
use crate::auth::{hash_password, verify_password};
use crate::engine::Identity;
use crate::error::AppError;
use crate::models::{LoginUser, PublicUser, RegisterUser, User};

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUser>,
) -> Result<impl IntoResponse, AppError> {
    let errors = payload.validate();
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let username = payload.username.trim().to_string();
    let email = payload.email.trim().to_string();

    if state.users.find_by_username(&username).await?.is_some() {
        return Err(AppError::validation("username", "Username is already taken"));
    }
    if state.users.find_by_email(&email).await?.is_some() {
        return Err(AppError::validation("email", "Email is already registered"));
    }

    let user = User::new(username, email, hash_password(&payload.password));
    state.users.create(&user).await?;

    let token = state.tokens.issue(&user)?;
    info!("Registered user {} ({})", user.username, user.id);

    Ok(response::created(
        json!({ "token": token, "user": PublicUser::from(&user) }),
        "Registration successful",
    ))
}

/// A wrong username and a wrong password get the same answer, so the
/// endpoint cannot be used to enumerate accounts.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginUser>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.users.find_by_username(payload.username.trim()).await?;

    let user = match user {
        Some(user) if verify_password(&payload.password, &user.password_hash) => user,
        _ => {
            return Err(AppError::Unauthorized(
                "Invalid username or password".to_string(),
            ))
        }
    };

    let token = state.tokens.issue(&user)?;
    info!("User {} logged in", user.username);

    Ok(response::success(
        json!({ "token": token, "user": PublicUser::from(&user) }),
        "Login successful",
    ))
}

pub async fn me(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<impl IntoResponse, AppError> {
    let user = state
        .users
        .find_by_id(identity.user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid or expired session".to_string()))?;

    Ok(response::success(
        PublicUser::from(&user),
        "Session is valid",
    ))
}
