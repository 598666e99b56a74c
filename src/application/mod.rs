//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::blog_service::BlogService`] - Blog CRUD with ownership checks
//! - [`services::user_service::UserService`] - Registration and user listing
//! - [`services::auth_service::AuthService`] - Login and bearer-token authentication
//! - [`services::stats_service::StatsService`] - Aggregate blog statistics

pub mod services;
