//! Handlers for user endpoints.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::user::{CreateUserRequest, UserResponse};
use crate::api::extract::ValidJson;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every user with the blogs they created.
///
/// # Endpoint
///
/// `GET /api/users`
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.user_service.list_users().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Registers a new user.
///
/// # Endpoint
///
/// `POST /api/users`
///
/// # Request Body
///
/// ```json
/// { "username": "iamcj", "name": "Carl Johnson", "password": "ImSmart" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if a field is missing, the username is shorter
/// than 3 characters or already taken, or the password is shorter than 3
/// characters.
pub async fn create_user_handler(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let user = state
        .user_service
        .register(
            payload.username.unwrap_or_default(),
            payload.name.unwrap_or_default(),
            payload.password.unwrap_or_default(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}
