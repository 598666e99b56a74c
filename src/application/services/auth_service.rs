//! Login and bearer-token authentication service.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::verify_password;
use serde_json::json;

/// Claims carried by an issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID.
    pub sub: String,
    pub username: String,
    /// Issued at (Unix timestamp).
    pub iat: u64,
    /// Expiration time (Unix timestamp).
    pub exp: u64,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Service for logging users in and authenticating API requests.
///
/// Tokens are HS256 JWTs signed with the server `SECRET`. A token stays valid
/// until it expires or the user it names no longer exists.
pub struct AuthService {
    repository: Arc<dyn UserRepository>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl_seconds: u64,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `repository` - user repository for credential lookups
    /// - `secret` - token signing key; must be identical across instances
    /// - `token_ttl_seconds` - lifetime of issued tokens
    pub fn new(repository: Arc<dyn UserRepository>, secret: &str, token_ttl_seconds: u64) -> Self {
        Self {
            repository,
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_ttl_seconds,
        }
    }

    /// Verifies credentials and issues a token.
    ///
    /// Unknown usernames and wrong passwords produce the same error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] on invalid credentials.
    /// Returns [`AppError::Internal`] on database or signing errors.
    pub async fn login(&self, username: &str, password: String) -> Result<Session, AppError> {
        let Some(user) = self.repository.find_by_username(username).await? else {
            tracing::info!(username, "Login failed: unknown user");
            return Err(invalid_credentials());
        };

        if !verify_password(password, user.password_hash.clone()).await? {
            tracing::info!(username, "Login failed: wrong password");
            return Err(invalid_credentials());
        }

        let token = self.issue_token(&user)?;
        tracing::info!(user_id = user.id, "User logged in");

        Ok(Session { token, user })
    }

    /// Signs a token for `user`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the expiry overflows or signing fails.
    pub fn issue_token(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now().timestamp().max(0) as u64;
        let exp = now.checked_add(self.token_ttl_seconds).ok_or_else(|| {
            AppError::internal(
                "Failed to sign token",
                json!({ "reason": "token lifetime overflows expiry" }),
            )
        })?;
        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            iat: now,
            exp,
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            AppError::internal("Failed to sign token", json!({ "reason": e.to_string() }))
        })
    }

    /// Validates a raw token and returns its claims.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the signature is invalid, the
    /// token is malformed or it has expired.
    pub fn verify_token(&self, token: &str) -> Result<Claims, AppError> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default())?;
        Ok(data.claims)
    }

    /// Authenticates a raw bearer token and loads the user it names.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is invalid or its user
    /// no longer exists.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn authenticate(&self, token: &str) -> Result<User, AppError> {
        let claims = self.verify_token(token)?;

        let user_id: i64 = claims.sub.parse().map_err(|_| {
            AppError::unauthorized("Invalid token", json!({ "reason": "malformed subject" }))
        })?;

        self.repository.find_by_id(user_id).await?.ok_or_else(|| {
            AppError::unauthorized("Invalid token", json!({ "reason": "unknown user" }))
        })
    }
}

fn invalid_credentials() -> AppError {
    AppError::unauthorized(
        "Invalid username or password",
        json!({ "reason": "invalid credentials" }),
    )
}
