//! DTOs for user endpoints.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::application::services::UserWithBlogs;
use crate::domain::entities::{Blog, User};

/// Characters allowed in a username.
static USERNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.-]+$").expect("username pattern is valid"));

/// Body of `POST /api/users`.
///
/// Password length is checked by the service so that the raw password never
/// ends up in validation error details.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(
        required(message = "Username is required"),
        length(min = 3, max = 64, message = "Username must be 3-64 characters long"),
        regex(
            path = *USERNAME_REGEX,
            message = "Username may only contain letters, digits, '_', '.' and '-'"
        )
    )]
    pub username: Option<String>,

    #[validate(
        required(message = "Name is required"),
        length(min = 1, message = "Name must not be empty")
    )]
    pub name: Option<String>,

    #[validate(required(message = "Password is required"))]
    pub password: Option<String>,
}

/// A blog listed under its owner.
#[derive(Debug, Serialize)]
pub struct UserBlogInfo {
    pub id: i64,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: u64,
}

impl From<Blog> for UserBlogInfo {
    fn from(blog: Blog) -> Self {
        Self {
            id: blog.id,
            title: blog.title,
            author: blog.author,
            url: blog.url,
            likes: blog.likes,
        }
    }
}

/// A user as returned by the API. The password hash is never included.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub blogs: Vec<UserBlogInfo>,
}

impl From<UserWithBlogs> for UserResponse {
    fn from(entry: UserWithBlogs) -> Self {
        Self {
            id: entry.user.id,
            username: entry.user.username,
            name: entry.user.name,
            blogs: entry.blogs.into_iter().map(UserBlogInfo::from).collect(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserWithBlogs {
            user,
            blogs: Vec::new(),
        }
        .into()
    }
}
