//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`Blog`] - A stored blog post with its owner
//! - [`BlogRecord`] - The four fields statistics are computed from
//! - [`User`] - A registered account
//!
//! # Design Pattern
//!
//! Separate structs are used for creation and replacement:
//! - `NewBlog`, `NewUser` - For creating new records
//! - `BlogUpdate` - For full replacement of a blog's editable fields

pub mod blog;
pub mod user;

pub use blog::{Blog, BlogOwner, BlogRecord, BlogUpdate, NewBlog};
pub use user::{NewUser, User};
