//! DTOs for blog endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Blog, BlogOwner, BlogUpdate, NewBlog};

/// Body of `POST /api/blogs` and `PUT /api/blogs/{id}`.
///
/// `title` and `url` are required and must be non-empty. Missing or `null`
/// likes are stored as 0.
#[derive(Debug, Deserialize, Validate)]
pub struct BlogRequest {
    #[validate(
        required(message = "Title is required"),
        length(min = 1, message = "Title must not be empty")
    )]
    pub title: Option<String>,

    pub author: Option<String>,

    #[validate(
        required(message = "URL is required"),
        length(min = 1, message = "URL must not be empty")
    )]
    pub url: Option<String>,

    #[validate(range(min = 0, message = "Likes must not be negative"))]
    pub likes: Option<i64>,
}

impl BlogRequest {
    fn likes(&self) -> u64 {
        self.likes.unwrap_or(0).max(0) as u64
    }

    /// Converts a validated request into creation input.
    pub fn into_new_blog(self) -> NewBlog {
        let likes = self.likes();
        NewBlog {
            title: self.title.unwrap_or_default(),
            author: self.author,
            url: self.url.unwrap_or_default(),
            likes,
            user_id: None,
        }
    }

    /// Converts a validated request into replacement values.
    pub fn into_update(self) -> BlogUpdate {
        let likes = self.likes();
        BlogUpdate {
            title: self.title.unwrap_or_default(),
            author: self.author,
            url: self.url.unwrap_or_default(),
            likes,
        }
    }
}

/// Public identity of the user that created a blog.
#[derive(Debug, Serialize)]
pub struct OwnerInfo {
    pub id: i64,
    pub username: String,
    pub name: String,
}

impl From<BlogOwner> for OwnerInfo {
    fn from(owner: BlogOwner) -> Self {
        Self {
            id: owner.id,
            username: owner.username,
            name: owner.name,
        }
    }
}

/// A blog as returned by the API.
#[derive(Debug, Serialize)]
pub struct BlogResponse {
    pub id: i64,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: u64,
    pub user: Option<OwnerInfo>,
}

impl From<Blog> for BlogResponse {
    fn from(blog: Blog) -> Self {
        Self {
            id: blog.id,
            title: blog.title,
            author: blog.author,
            url: blog.url,
            likes: blog.likes,
            user: blog.owner.map(OwnerInfo::from),
        }
    }
}
