//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with bound
//! parameters.
//!
//! # Repositories
//!
//! - [`PgBlogRepository`] - Blog storage, owner joins and the statistics snapshot
//! - [`PgUserRepository`] - User accounts

pub mod pg_blog_repository;
pub mod pg_user_repository;

pub use pg_blog_repository::PgBlogRepository;
pub use pg_user_repository::PgUserRepository;
