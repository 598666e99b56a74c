//! Blog CRUD service.

use std::sync::Arc;

use crate::domain::entities::{Blog, BlogUpdate, NewBlog, User};
use crate::domain::repositories::BlogRepository;
use crate::error::AppError;
use serde_json::json;

/// Service for creating, reading, replacing and deleting blogs.
///
/// Ownership is enforced here: a blog that has an owner can only be deleted
/// by that owner.
pub struct BlogService {
    repository: Arc<dyn BlogRepository>,
}

impl BlogService {
    /// Creates a new blog service.
    pub fn new(repository: Arc<dyn BlogRepository>) -> Self {
        Self { repository }
    }

    /// Lists every blog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_blogs(&self) -> Result<Vec<Blog>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a blog by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no blog has this ID.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_blog(&self, id: i64) -> Result<Blog, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| blog_not_found(id))
    }

    /// Creates a blog owned by `creator`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_blog(&self, mut new_blog: NewBlog, creator: &User) -> Result<Blog, AppError> {
        new_blog.user_id = Some(creator.id);

        let blog = self.repository.create(new_blog).await?;
        tracing::info!(blog_id = blog.id, user_id = creator.id, "Blog created");

        Ok(blog)
    }

    /// Replaces the editable fields of a blog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no blog has this ID.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_blog(&self, id: i64, update: BlogUpdate) -> Result<Blog, AppError> {
        self.repository
            .update(id, update)
            .await?
            .ok_or_else(|| blog_not_found(id))
    }

    /// Deletes a blog on behalf of `requester`.
    ///
    /// Blogs without an owner may be deleted by any authenticated user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no blog has this ID.
    /// Returns [`AppError::Forbidden`] if the blog belongs to another user.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_blog(&self, id: i64, requester: &User) -> Result<(), AppError> {
        let blog = self.get_blog(id).await?;

        if blog.owner.is_some() && !blog.is_owned_by(requester.id) {
            return Err(AppError::forbidden(
                "Only the creator can delete a blog",
                json!({ "id": id }),
            ));
        }

        if !self.repository.delete(id).await? {
            return Err(blog_not_found(id));
        }

        tracing::info!(blog_id = id, user_id = requester.id, "Blog deleted");
        Ok(())
    }

    /// Counts stored blogs. Used by the health check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_blogs(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

fn blog_not_found(id: i64) -> AppError {
    AppError::not_found("Blog not found", json!({ "id": id }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::BlogOwner;
    use crate::domain::repositories::MockBlogRepository;
    use chrono::Utc;

    fn user(id: i64) -> User {
        User {
            id,
            username: format!("user{id}"),
            name: format!("User {id}"),
            password_hash: "hash".to_string(),
            created_at: Utc::now(),
        }
    }

    fn blog(id: i64, owner_id: Option<i64>) -> Blog {
        Blog {
            id,
            title: "Go To Statement Considered Harmful".to_string(),
            author: Some("Edsger W. Dijkstra".to_string()),
            url: "https://homepages.cwi.nl/~storm/teaching/reader/Dijkstra68.pdf".to_string(),
            likes: 5,
            owner: owner_id.map(|id| BlogOwner {
                id,
                username: format!("user{id}"),
                name: format!("User {id}"),
            }),
            created_at: Utc::now(),
        }
    }

    fn new_blog() -> NewBlog {
        NewBlog {
            title: "Canonical string reduction".to_string(),
            author: Some("Edsger W. Dijkstra".to_string()),
            url: "http://www.cs.utexas.edu/~EWD/transcriptions/EWD08xx/EWD808.html".to_string(),
            likes: 12,
            user_id: None,
        }
    }

    #[tokio::test]
    async fn test_create_blog_sets_owner() {
        let mut mock_repo = MockBlogRepository::new();

        mock_repo
            .expect_create()
            .withf(|b| b.user_id == Some(3) && b.likes == 12)
            .times(1)
            .returning(|_| Ok(blog(10, Some(3))));

        let service = BlogService::new(Arc::new(mock_repo));

        let created = service.create_blog(new_blog(), &user(3)).await.unwrap();
        assert_eq!(created.id, 10);
        assert!(created.is_owned_by(3));
    }

    #[tokio::test]
    async fn test_get_blog_not_found() {
        let mut mock_repo = MockBlogRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = BlogService::new(Arc::new(mock_repo));

        let result = service.get_blog(99).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_blog_not_found() {
        let mut mock_repo = MockBlogRepository::new();

        mock_repo.expect_update().times(1).returning(|_, _| Ok(None));

        let service = BlogService::new(Arc::new(mock_repo));

        let update = BlogUpdate {
            title: "t".to_string(),
            author: None,
            url: "u".to_string(),
            likes: 0,
        };
        let result = service.update_blog(99, update).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_blog_by_owner() {
        let mut mock_repo = MockBlogRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(blog(id, Some(3)))));
        mock_repo
            .expect_delete()
            .withf(|id| *id == 7)
            .times(1)
            .returning(|_| Ok(true));

        let service = BlogService::new(Arc::new(mock_repo));

        assert!(service.delete_blog(7, &user(3)).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_blog_by_other_user_is_forbidden() {
        let mut mock_repo = MockBlogRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(blog(id, Some(3)))));
        mock_repo.expect_delete().times(0);

        let service = BlogService::new(Arc::new(mock_repo));

        let result = service.delete_blog(7, &user(4)).await;
        assert!(matches!(result.unwrap_err(), AppError::Forbidden { .. }));
    }

    #[tokio::test]
    async fn test_delete_unowned_blog() {
        let mut mock_repo = MockBlogRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(blog(id, None))));
        mock_repo.expect_delete().times(1).returning(|_| Ok(true));

        let service = BlogService::new(Arc::new(mock_repo));

        assert!(service.delete_blog(7, &user(4)).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_missing_blog() {
        let mut mock_repo = MockBlogRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        mock_repo.expect_delete().times(0);

        let service = BlogService::new(Arc::new(mock_repo));

        let result = service.delete_blog(7, &user(3)).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
