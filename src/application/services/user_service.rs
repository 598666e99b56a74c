//! User registration and listing service.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{Blog, NewUser, User};
use crate::domain::repositories::{BlogRepository, UserRepository};
use crate::error::AppError;
use crate::utils::password::{MIN_PASSWORD_LENGTH, hash_password};
use serde_json::json;

/// A user together with the blogs they created.
#[derive(Debug, Clone)]
pub struct UserWithBlogs {
    pub user: User,
    pub blogs: Vec<Blog>,
}

/// Service for registering and listing users.
pub struct UserService {
    user_repository: Arc<dyn UserRepository>,
    blog_repository: Arc<dyn BlogRepository>,
    bcrypt_cost: u32,
}

impl UserService {
    /// Creates a new user service.
    ///
    /// # Arguments
    ///
    /// - `bcrypt_cost` - work factor for new password hashes
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        blog_repository: Arc<dyn BlogRepository>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            user_repository,
            blog_repository,
            bcrypt_cost,
        }
    }

    /// Registers a new user.
    ///
    /// Field shape (presence, username length and characters) is checked by the
    /// request DTO; this method enforces password length and username
    /// uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the password is too short or the
    /// username is taken.
    /// Returns [`AppError::Internal`] on hashing or database errors.
    pub async fn register(
        &self,
        username: String,
        name: String,
        password: String,
    ) -> Result<User, AppError> {
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::bad_request(
                "Password must be at least 3 characters long",
                json!({ "field": "password", "min_length": MIN_PASSWORD_LENGTH }),
            ));
        }

        if self
            .user_repository
            .find_by_username(&username)
            .await?
            .is_some()
        {
            return Err(username_taken(&username));
        }

        let password_hash = hash_password(password, self.bcrypt_cost).await?;

        let user = self
            .user_repository
            .create(NewUser {
                username: username.clone(),
                name,
                password_hash,
            })
            .await
            .map_err(|e| match e {
                AppError::Conflict { .. } => username_taken(&username),
                other => other,
            })?;

        tracing::info!(user_id = user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Lists every user with the blogs they own.
    ///
    /// Blogs are fetched in one query and grouped in memory.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_users(&self) -> Result<Vec<UserWithBlogs>, AppError> {
        let users = self.user_repository.list().await?;
        let blogs = self.blog_repository.list().await?;

        let mut by_owner: HashMap<i64, Vec<Blog>> = HashMap::new();
        for blog in blogs {
            if let Some(owner_id) = blog.owner.as_ref().map(|o| o.id) {
                by_owner.entry(owner_id).or_default().push(blog);
            }
        }

        Ok(users
            .into_iter()
            .map(|user| {
                let blogs = by_owner.remove(&user.id).unwrap_or_default();
                UserWithBlogs { user, blogs }
            })
            .collect())
    }
}

fn username_taken(username: &str) -> AppError {
    AppError::bad_request(
        "Username must be unique",
        json!({ "field": "username", "username": username }),
    )
}
