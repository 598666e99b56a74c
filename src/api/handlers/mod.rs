//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod blogs;
pub mod fallback;
pub mod health;
pub mod login;
pub mod stats;
pub mod users;

pub use blogs::{
    create_blog_handler, delete_blog_handler, get_blog_handler, list_blogs_handler,
    update_blog_handler,
};
pub use fallback::unknown_endpoint_handler;
pub use health::health_handler;
pub use login::login_handler;
pub use stats::{statistic_handler, stats_summary_handler};
pub use users::{create_user_handler, list_users_handler};
