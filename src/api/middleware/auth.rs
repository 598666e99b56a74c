//! Bearer token authentication.

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_auth::AuthBearer;

use crate::{domain::entities::User, error::AppError, state::AppState};

/// The user behind a request's bearer token.
///
/// Handlers that take an `AuthUser` argument require authentication; the
/// others stay public.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// # Authentication Flow
///
/// 1. Extract token from `Authorization` header
/// 2. Verify signature and expiry
/// 3. Load the user named by the token
///
/// # Errors
///
/// Rejects with `401 Unauthorized` (and `WWW-Authenticate: Bearer`) if:
/// - Authorization header is missing or not a bearer token
/// - Token signature is invalid or the token has expired
/// - The user no longer exists
///
/// # Example
///
/// ```rust,ignore
/// async fn create_blog_handler(
///     State(state): State<AppState>,
///     AuthUser(user): AuthUser,
///     Json(payload): Json<BlogRequest>,
/// ) -> Result<(StatusCode, Json<BlogResponse>), AppError> { ... }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let AuthBearer(token) = AuthBearer::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                AppError::unauthorized(
                    "Unauthorized",
                    serde_json::json!({"reason": "Authorization header is missing or invalid"}),
                )
            })?;

        let user = state.auth_service.authenticate(&token).await?;

        Ok(AuthUser(user))
    }
}
