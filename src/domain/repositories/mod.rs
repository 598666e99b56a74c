//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`BlogRepository`] - Blog CRUD and the statistics snapshot
//! - [`UserRepository`] - User accounts

pub mod blog_repository;
pub mod user_repository;

pub use blog_repository::BlogRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use blog_repository::MockBlogRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
