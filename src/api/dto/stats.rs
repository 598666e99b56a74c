//! DTOs for blog statistics.

use serde::Serialize;

use crate::application::services::StatsSummary;
use crate::domain::aggregator::{AuthorBlogCount, AuthorLikes, FavoriteBlog};

/// All statistics at once.
///
/// `favorite_blog`, `most_blogs` and `most_likes` are `null` when there are no
/// blogs.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub blog_count: usize,
    pub total_likes: u64,
    pub favorite_blog: Option<FavoriteBlog>,
    pub most_blogs: Option<AuthorBlogCount>,
    pub most_likes: Option<AuthorLikes>,
}

impl From<StatsSummary> for StatsResponse {
    fn from(summary: StatsSummary) -> Self {
        Self {
            blog_count: summary.blog_count,
            total_likes: summary.total_likes,
            favorite_blog: summary.favorite_blog,
            most_blogs: summary.most_blogs,
            most_likes: summary.most_likes,
        }
    }
}
