//! Blog entity and the record shape used for statistics.

use chrono::{DateTime, Utc};

/// A stored blog post.
///
/// `owner` is the user that created the blog. It is `None` for blogs created
/// before ownership was tracked or whose owner has been removed.
#[derive(Debug, Clone)]
pub struct Blog {
    pub id: i64,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: u64,
    pub owner: Option<BlogOwner>,
    pub created_at: DateTime<Utc>,
}

impl Blog {
    /// Returns true if the blog was created by the given user.
    ///
    /// Blogs without an owner belong to nobody.
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.owner.as_ref().is_some_and(|o| o.id == user_id)
    }

    /// Projects the blog onto the fields statistics are computed from.
    pub fn to_record(&self) -> BlogRecord {
        BlogRecord {
            title: self.title.clone(),
            author: self.author.clone(),
            url: self.url.clone(),
            likes: self.likes,
        }
    }
}

/// Public identity of the user owning a blog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogOwner {
    pub id: i64,
    pub username: String,
    pub name: String,
}

/// Input to [`crate::domain::aggregator`].
///
/// `likes` is already normalized: a blog stored without likes carries 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogRecord {
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: u64,
}

/// Input data for creating a new blog.
#[derive(Debug, Clone)]
pub struct NewBlog {
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: u64,
    pub user_id: Option<i64>,
}

/// Replacement values for an existing blog.
///
/// Every editable field is overwritten; ownership is never changed.
#[derive(Debug, Clone)]
pub struct BlogUpdate {
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: u64,
}
