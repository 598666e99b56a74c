//! Repository trait for blog data access.

use crate::domain::entities::{Blog, BlogRecord, BlogUpdate, NewBlog};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing blogs.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBlogRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_blog.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Creates a new blog and returns it with its owner resolved.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_blog: NewBlog) -> Result<Blog, AppError>;

    /// Lists every blog, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Blog>, AppError>;

    /// Finds a blog by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Blog>, AppError>;

    /// Replaces the editable fields of a blog.
    ///
    /// Returns `Ok(None)` if no blog has the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, update: BlogUpdate) -> Result<Option<Blog>, AppError>;

    /// Deletes a blog.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if not found.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Reads every blog as a [`BlogRecord`] in a single query.
    ///
    /// Used as the snapshot statistics are computed from.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_records(&self) -> Result<Vec<BlogRecord>, AppError>;

    /// Counts all blogs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
