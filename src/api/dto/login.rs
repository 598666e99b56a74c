//! DTOs for the login endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /api/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(required(message = "Username is required"))]
    pub username: Option<String>,

    #[validate(required(message = "Password is required"))]
    pub password: Option<String>,
}

/// Successful login: the bearer token and who it belongs to.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub name: String,
}
