//! Blog statistics service.

use std::sync::Arc;

use crate::domain::aggregator::{
    self, AuthorBlogCount, AuthorLikes, FavoriteBlog, StatResult, Statistic,
};
use crate::domain::repositories::BlogRepository;
use crate::error::AppError;

/// All statistics computed from one snapshot.
///
/// The optional fields are `None` when there are no blogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsSummary {
    pub blog_count: usize,
    pub total_likes: u64,
    pub favorite_blog: Option<FavoriteBlog>,
    pub most_blogs: Option<AuthorBlogCount>,
    pub most_likes: Option<AuthorLikes>,
}

/// Service computing aggregate statistics over the blog collection.
///
/// Each call reads the collection once through
/// [`BlogRepository::list_records`] and hands that snapshot to
/// [`crate::domain::aggregator`].
pub struct StatsService {
    repository: Arc<dyn BlogRepository>,
}

impl StatsService {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<dyn BlogRepository>) -> Self {
        Self { repository }
    }

    /// Computes every statistic.
    ///
    /// An empty collection is not an error here: the per-author and favorite
    /// statistics come back as `None`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn summary(&self) -> Result<StatsSummary, AppError> {
        let records = self.repository.list_records().await?;

        Ok(StatsSummary {
            blog_count: records.len(),
            total_likes: aggregator::total_likes(&records),
            favorite_blog: aggregator::favorite_blog(&records).ok(),
            most_blogs: aggregator::most_blogs(&records).ok(),
            most_likes: aggregator::most_likes(&records).ok(),
        })
    }

    /// Computes a single statistic.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the statistic needs at least one blog
    /// and there are none.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn statistic(&self, statistic: Statistic) -> Result<StatResult, AppError> {
        let records = self.repository.list_records().await?;

        Ok(aggregator::compute(statistic, &records)?)
    }
}
