//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AuthService, BlogService, StatsService, UserService};
use crate::config::SecuritySettings;
use crate::domain::repositories::{BlogRepository, UserRepository};

/// Services available to request handlers.
///
/// Services hold repository trait objects, so the same state can be built over
/// PostgreSQL in production and over test doubles in tests.
#[derive(Clone)]
pub struct AppState {
    pub blog_service: Arc<BlogService>,
    pub user_service: Arc<UserService>,
    pub auth_service: Arc<AuthService>,
    pub stats_service: Arc<StatsService>,
}

impl AppState {
    /// Wires all services over the given repositories.
    pub fn new(
        blog_repository: Arc<dyn BlogRepository>,
        user_repository: Arc<dyn UserRepository>,
        security: &SecuritySettings,
    ) -> Self {
        Self {
            blog_service: Arc::new(BlogService::new(blog_repository.clone())),
            user_service: Arc::new(UserService::new(
                user_repository.clone(),
                blog_repository.clone(),
                security.bcrypt_cost,
            )),
            auth_service: Arc::new(AuthService::new(
                user_repository,
                &security.token_secret,
                security.token_ttl_seconds,
            )),
            stats_service: Arc::new(StatsService::new(blog_repository)),
        }
    }
}
