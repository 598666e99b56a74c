//! API route configuration.
//!
//! Write operations on blogs authenticate through the
//! [`crate::api::middleware::auth::AuthUser`] extractor; every other route is
//! public.

use crate::api::handlers::{
    create_blog_handler, create_user_handler, delete_blog_handler, get_blog_handler,
    list_blogs_handler, list_users_handler, login_handler, statistic_handler,
    stats_summary_handler, update_blog_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET    /blogs`              - List blogs with owners
/// - `POST   /blogs`              - Create a blog (Bearer token required)
/// - `GET    /blogs/{id}`         - Fetch a blog
/// - `PUT    /blogs/{id}`         - Replace a blog's fields
/// - `DELETE /blogs/{id}`         - Delete a blog (Bearer token required, owner only)
/// - `GET    /users`              - List users with their blogs
/// - `POST   /users`              - Register a user
/// - `POST   /login`              - Exchange credentials for a token
/// - `GET    /stats`              - All blog statistics
/// - `GET    /stats/{statistic}`  - A single statistic
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/blogs", get(list_blogs_handler).post(create_blog_handler))
        .route(
            "/blogs/{id}",
            get(get_blog_handler)
                .put(update_blog_handler)
                .delete(delete_blog_handler),
        )
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route("/login", post(login_handler))
        .route("/stats", get(stats_summary_handler))
        .route("/stats/{statistic}", get(statistic_handler))
}
