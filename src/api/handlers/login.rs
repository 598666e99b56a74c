//! Handler for the login endpoint.

use axum::{Json, extract::State};

use crate::api::dto::login::{LoginRequest, LoginResponse};
use crate::api::extract::ValidJson;
use crate::error::AppError;
use crate::state::AppState;

/// Exchanges credentials for a bearer token.
///
/// # Endpoint
///
/// `POST /api/login`
///
/// # Response
///
/// ```json
/// { "token": "eyJhbGciOi...", "username": "root", "name": "Superuser" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if username or password is missing.
/// Returns 401 Unauthorized on invalid credentials.
pub async fn login_handler(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let username = payload.username.unwrap_or_default();
    let session = state
        .auth_service
        .login(&username, payload.password.unwrap_or_default())
        .await?;

    Ok(Json(LoginResponse {
        token: session.token,
        username: session.user.username,
        name: session.user.name,
    }))
}
