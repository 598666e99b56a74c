//! Handlers for blog statistics.

use axum::{Json, extract::State};
use serde_json::json;

use crate::api::dto::stats::StatsResponse;
use crate::api::extract::ApiPath;
use crate::domain::aggregator::{StatResult, Statistic, UnknownStatistic};
use crate::error::AppError;
use crate::state::AppState;

/// Returns every statistic computed from one snapshot of the blogs.
///
/// # Endpoint
///
/// `GET /api/stats`
///
/// # Response
///
/// ```json
/// {
///   "blog_count": 3,
///   "total_likes": 24,
///   "favorite_blog": { "title": "Canonical string reduction", "author": "Edsger W. Dijkstra", "likes": 12 },
///   "most_blogs": { "author": "Edsger W. Dijkstra", "count": 2 },
///   "most_likes": { "author": "Edsger W. Dijkstra", "total_likes": 17 }
/// }
/// ```
///
/// With no blogs, `total_likes` is 0 and the other statistics are `null`.
pub async fn stats_summary_handler(
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    let summary = state.stats_service.summary().await?;

    Ok(Json(summary.into()))
}

/// Returns a single statistic.
///
/// # Endpoint
///
/// `GET /api/stats/{statistic}` where `statistic` is one of `total-likes`,
/// `favorite-blog`, `most-blogs`, `most-likes`.
///
/// # Response
///
/// ```json
/// { "statistic": "most-blogs", "result": { "author": "Robert C. Martin", "count": 3 } }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for an unknown statistic.
/// Returns 404 Not Found when there are no blogs (except for `total-likes`).
pub async fn statistic_handler(
    State(state): State<AppState>,
    ApiPath(statistic): ApiPath<String>,
) -> Result<Json<StatResult>, AppError> {
    let statistic: Statistic = statistic.parse().map_err(|e: UnknownStatistic| {
        AppError::bad_request(
            e.to_string(),
            json!({
                "statistic": e.0,
                "supported": Statistic::ALL.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
            }),
        )
    })?;

    let result = state.stats_service.statistic(statistic).await?;

    Ok(Json(result))
}
