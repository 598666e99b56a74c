//! PostgreSQL implementation of blog repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Blog, BlogOwner, BlogRecord, BlogUpdate, NewBlog};
use crate::domain::repositories::BlogRepository;
use crate::error::AppError;

/// Columns selected for a blog joined with its owner.
///
/// Every query below selects from a relation aliased `b`.
const BLOG_COLUMNS: &str = r#"
    b.id, b.title, b.author, b.url, b.likes, b.created_at,
    u.id AS owner_id, u.username AS owner_username, u.name AS owner_name
"#;

#[derive(sqlx::FromRow)]
struct BlogRow {
    id: i64,
    title: String,
    author: Option<String>,
    url: String,
    likes: i64,
    created_at: DateTime<Utc>,
    owner_id: Option<i64>,
    owner_username: Option<String>,
    owner_name: Option<String>,
}

impl BlogRow {
    fn into_blog(self) -> Result<Blog, AppError> {
        let owner = match (self.owner_id, self.owner_username, self.owner_name) {
            (Some(id), Some(username), Some(name)) => Some(BlogOwner { id, username, name }),
            _ => None,
        };

        Ok(Blog {
            id: self.id,
            title: self.title,
            author: self.author,
            url: self.url,
            likes: likes_from_db(self.likes)?,
            owner,
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct RecordRow {
    title: String,
    author: Option<String>,
    url: String,
    likes: i64,
}

fn likes_from_db(likes: i64) -> Result<u64, AppError> {
    u64::try_from(likes)
        .map_err(|_| AppError::internal("Stored like count is negative", json!({ "likes": likes })))
}

fn likes_to_db(likes: u64) -> Result<i64, AppError> {
    i64::try_from(likes)
        .map_err(|_| AppError::bad_request("Like count is too large", json!({ "likes": likes })))
}

/// PostgreSQL repository for blog storage and retrieval.
///
/// Owners are resolved with a `LEFT JOIN` on `users`, so blogs whose owner was
/// removed come back with `owner: None`.
pub struct PgBlogRepository {
    pool: Arc<PgPool>,
}

impl PgBlogRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlogRepository for PgBlogRepository {
    async fn create(&self, new_blog: NewBlog) -> Result<Blog, AppError> {
        let sql = format!(
            r#"
            WITH b AS (
                INSERT INTO blogs (title, author, url, likes, user_id)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, title, author, url, likes, user_id, created_at
            )
            SELECT {BLOG_COLUMNS}
            FROM b
            LEFT JOIN users u ON u.id = b.user_id
            "#
        );

        let row = sqlx::query_as::<_, BlogRow>(&sql)
            .bind(new_blog.title)
            .bind(new_blog.author)
            .bind(new_blog.url)
            .bind(likes_to_db(new_blog.likes)?)
            .bind(new_blog.user_id)
            .fetch_one(self.pool.as_ref())
            .await?;

        row.into_blog()
    }

    async fn list(&self) -> Result<Vec<Blog>, AppError> {
        let sql = format!(
            r#"
            SELECT {BLOG_COLUMNS}
            FROM blogs b
            LEFT JOIN users u ON u.id = b.user_id
            ORDER BY b.id
            "#
        );

        sqlx::query_as::<_, BlogRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?
            .into_iter()
            .map(BlogRow::into_blog)
            .collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Blog>, AppError> {
        let sql = format!(
            r#"
            SELECT {BLOG_COLUMNS}
            FROM blogs b
            LEFT JOIN users u ON u.id = b.user_id
            WHERE b.id = $1
            "#
        );

        sqlx::query_as::<_, BlogRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?
            .map(BlogRow::into_blog)
            .transpose()
    }

    async fn update(&self, id: i64, update: BlogUpdate) -> Result<Option<Blog>, AppError> {
        let sql = format!(
            r#"
            WITH b AS (
                UPDATE blogs
                SET title = $2, author = $3, url = $4, likes = $5
                WHERE id = $1
                RETURNING id, title, author, url, likes, user_id, created_at
            )
            SELECT {BLOG_COLUMNS}
            FROM b
            LEFT JOIN users u ON u.id = b.user_id
            "#
        );

        sqlx::query_as::<_, BlogRow>(&sql)
            .bind(id)
            .bind(update.title)
            .bind(update.author)
            .bind(update.url)
            .bind(likes_to_db(update.likes)?)
            .fetch_optional(self.pool.as_ref())
            .await?
            .map(BlogRow::into_blog)
            .transpose()
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_records(&self) -> Result<Vec<BlogRecord>, AppError> {
        let rows = sqlx::query_as::<_, RecordRow>(
            r#"
            SELECT title, author, url, likes
            FROM blogs
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter()
            .map(|row| -> Result<BlogRecord, AppError> {
                Ok(BlogRecord {
                    title: row.title,
                    author: row.author,
                    url: row.url,
                    likes: likes_from_db(row.likes)?,
                })
            })
            .collect()
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blogs")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
