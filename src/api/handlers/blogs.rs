//! Handlers for blog CRUD endpoints.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::blog::{BlogRequest, BlogResponse};
use crate::api::extract::{ApiPath, ValidJson};
use crate::api::middleware::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every blog with its owner.
///
/// # Endpoint
///
/// `GET /api/blogs`
///
/// # Response
///
/// ```json
/// [
///   {
///     "id": 1,
///     "title": "React patterns",
///     "author": "Michael Chan",
///     "url": "https://reactpatterns.com/",
///     "likes": 7,
///     "user": { "id": 1, "username": "root", "name": "Superuser" }
///   }
/// ]
/// ```
pub async fn list_blogs_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<BlogResponse>>, AppError> {
    let blogs = state.blog_service.list_blogs().await?;

    Ok(Json(blogs.into_iter().map(BlogResponse::from).collect()))
}

/// Retrieves a single blog.
///
/// # Endpoint
///
/// `GET /api/blogs/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the blog doesn't exist.
pub async fn get_blog_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<BlogResponse>, AppError> {
    let blog = state.blog_service.get_blog(id).await?;

    Ok(Json(blog.into()))
}

/// Creates a blog owned by the authenticated user.
///
/// # Endpoint
///
/// `POST /api/blogs` (Bearer token required)
///
/// # Request Body
///
/// ```json
/// { "title": "Type wars", "author": "Robert C. Martin", "url": "http://blog.cleancoder.com/", "likes": 2 }
/// ```
///
/// `likes` may be omitted and defaults to 0.
///
/// # Errors
///
/// Returns 400 Bad Request if `title` or `url` is missing or empty.
/// Returns 401 Unauthorized without a valid token.
pub async fn create_blog_handler(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ValidJson(payload): ValidJson<BlogRequest>,
) -> Result<(StatusCode, Json<BlogResponse>), AppError> {
    let blog = state
        .blog_service
        .create_blog(payload.into_new_blog(), &user)
        .await?;

    Ok((StatusCode::CREATED, Json(blog.into())))
}

/// Replaces a blog's title, author, url and likes.
///
/// # Endpoint
///
/// `PUT /api/blogs/{id}`
///
/// Missing `likes` resets the count to 0. Ownership is unchanged.
///
/// # Errors
///
/// Returns 400 Bad Request if `title` or `url` is missing or empty.
/// Returns 404 Not Found if the blog doesn't exist.
pub async fn update_blog_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ValidJson(payload): ValidJson<BlogRequest>,
) -> Result<Json<BlogResponse>, AppError> {
    let blog = state
        .blog_service
        .update_blog(id, payload.into_update())
        .await?;

    Ok(Json(blog.into()))
}

/// Deletes a blog.
///
/// # Endpoint
///
/// `DELETE /api/blogs/{id}` (Bearer token required)
///
/// # Errors
///
/// Returns 401 Unauthorized without a valid token.
/// Returns 403 Forbidden if the blog belongs to another user.
/// Returns 404 Not Found if the blog doesn't exist.
pub async fn delete_blog_handler(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, AppError> {
    state.blog_service.delete_blog(id, &user).await?;

    Ok(StatusCode::NO_CONTENT)
}
