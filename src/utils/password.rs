//! Password hashing with bcrypt.
//!
//! bcrypt is deliberately slow, so both operations run on tokio's blocking
//! pool instead of stalling a runtime worker.

use serde_json::json;
use tokio::task;

use crate::error::AppError;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 3;

/// Hashes a raw password with the given bcrypt cost.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if hashing fails or the blocking task panics.
pub async fn hash_password(password: String, cost: u32) -> Result<String, AppError> {
    task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AppError::internal("Password hashing task failed", json!({ "reason": e.to_string() })))?
        .map_err(|e| AppError::internal("Password hashing failed", json!({ "reason": e.to_string() })))
}

/// Checks a raw password against a stored bcrypt hash.
///
/// A malformed stored hash counts as a mismatch.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the blocking task panics.
pub async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    let verified = task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| {
            AppError::internal("Password verification task failed", json!({ "reason": e.to_string() }))
        })?;

    match verified {
        Ok(matches) => Ok(matches),
        Err(e) => {
            tracing::warn!(error = %e, "Stored password hash could not be parsed");
            Ok(false)
        }
    }
}
