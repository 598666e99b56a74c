//! Aggregate statistics over a collection of blog records.
//!
//! Every function here is a pure computation over a borrowed slice: no I/O,
//! no logging, no state kept between calls. The caller is expected to hand in
//! a consistent snapshot (see [`crate::application::services::StatsService`]).
//!
//! # Tie-breaking
//!
//! - [`favorite_blog`]: the first record with the maximum likes wins.
//! - [`most_blogs`] / [`most_likes`]: authors are ranked in order of first
//!   appearance; a later author only takes the lead with a strictly greater value.
//!
//! Authors are grouped exactly as supplied. `None` and `Some("")` are distinct
//! groups, and no case or whitespace folding is applied.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::entities::BlogRecord;

/// Returned when a statistic that needs at least one record is asked of an
/// empty collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot compute {0} over an empty blog collection")]
pub struct EmptyInputError(pub Statistic);

/// Selector for one of the supported statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic {
    TotalLikes,
    FavoriteBlog,
    MostBlogs,
    MostLikes,
}

impl Statistic {
    /// All statistics, in the order they are reported.
    pub const ALL: [Statistic; 4] = [
        Statistic::TotalLikes,
        Statistic::FavoriteBlog,
        Statistic::MostBlogs,
        Statistic::MostLikes,
    ];

    /// Stable kebab-case name used in URLs.
    pub fn as_str(self) -> &'static str {
        match self {
            Statistic::TotalLikes => "total-likes",
            Statistic::FavoriteBlog => "favorite-blog",
            Statistic::MostBlogs => "most-blogs",
            Statistic::MostLikes => "most-likes",
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognised statistic name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown statistic '{0}'")]
pub struct UnknownStatistic(pub String);

impl FromStr for Statistic {
    type Err = UnknownStatistic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Statistic::ALL
            .into_iter()
            .find(|stat| stat.as_str() == s)
            .ok_or_else(|| UnknownStatistic(s.to_string()))
    }
}

/// The blog with the most likes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoriteBlog {
    pub title: String,
    pub author: Option<String>,
    pub likes: u64,
}

/// The author with the most blog records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorBlogCount {
    pub author: Option<String>,
    pub count: usize,
}

/// The author whose blogs add up to the most likes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorLikes {
    pub author: Option<String>,
    pub total_likes: u64,
}

/// Output of [`compute`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "statistic", content = "result", rename_all = "kebab-case")]
pub enum StatResult {
    TotalLikes(u64),
    FavoriteBlog(FavoriteBlog),
    MostBlogs(AuthorBlogCount),
    MostLikes(AuthorLikes),
}

/// Sum of likes over all records. An empty collection sums to 0.
pub fn total_likes(blogs: &[BlogRecord]) -> u64 {
    blogs
        .iter()
        .fold(0u64, |sum, blog| sum.saturating_add(blog.likes))
}

/// Blog with the highest like count; the earliest one on ties.
///
/// # Errors
///
/// Returns [`EmptyInputError`] if `blogs` is empty.
pub fn favorite_blog(blogs: &[BlogRecord]) -> Result<FavoriteBlog, EmptyInputError> {
    let (first, rest) = blogs
        .split_first()
        .ok_or(EmptyInputError(Statistic::FavoriteBlog))?;

    let best = rest.iter().fold(first, |best, current| {
        if current.likes > best.likes {
            current
        } else {
            best
        }
    });

    Ok(FavoriteBlog {
        title: best.title.clone(),
        author: best.author.clone(),
        likes: best.likes,
    })
}

/// Author with the largest number of records.
///
/// # Errors
///
/// Returns [`EmptyInputError`] if `blogs` is empty.
pub fn most_blogs(blogs: &[BlogRecord]) -> Result<AuthorBlogCount, EmptyInputError> {
    let (author, count) = max_by_author(blogs, |_| 1usize, |count, one| count + one)
        .ok_or(EmptyInputError(Statistic::MostBlogs))?;

    Ok(AuthorBlogCount {
        author: author.map(str::to_string),
        count,
    })
}

/// Author with the highest summed like count.
///
/// # Errors
///
/// Returns [`EmptyInputError`] if `blogs` is empty.
pub fn most_likes(blogs: &[BlogRecord]) -> Result<AuthorLikes, EmptyInputError> {
    let (author, total_likes) = max_by_author(
        blogs,
        |blog| blog.likes,
        |sum, likes| sum.saturating_add(likes),
    )
    .ok_or(EmptyInputError(Statistic::MostLikes))?;

    Ok(AuthorLikes {
        author: author.map(str::to_string),
        total_likes,
    })
}

/// Computes a single statistic selected at runtime.
///
/// # Errors
///
/// Returns [`EmptyInputError`] for every statistic except
/// [`Statistic::TotalLikes`] when `blogs` is empty.
pub fn compute(statistic: Statistic, blogs: &[BlogRecord]) -> Result<StatResult, EmptyInputError> {
    Ok(match statistic {
        Statistic::TotalLikes => StatResult::TotalLikes(total_likes(blogs)),
        Statistic::FavoriteBlog => StatResult::FavoriteBlog(favorite_blog(blogs)?),
        Statistic::MostBlogs => StatResult::MostBlogs(most_blogs(blogs)?),
        Statistic::MostLikes => StatResult::MostLikes(most_likes(blogs)?),
    })
}

/// Groups records by author, folds each group with `add`, then returns the
/// group with the largest accumulator.
///
/// Groups are kept in first-appearance order and the scan only replaces the
/// leader on a strictly greater value, so ties go to the earliest author.
/// Returns `None` for an empty slice.
fn max_by_author<'a, T, V, A>(blogs: &'a [BlogRecord], value: V, add: A) -> Option<(Option<&'a str>, T)>
where
    T: Copy + Ord,
    V: Fn(&BlogRecord) -> T,
    A: Fn(T, T) -> T,
{
    let mut index: HashMap<Option<&str>, usize> = HashMap::new();
    let mut groups: Vec<(Option<&str>, T)> = Vec::new();

    for blog in blogs {
        let author = blog.author.as_deref();
        match index.get(&author) {
            Some(&slot) => {
                let acc = &mut groups[slot].1;
                *acc = add(*acc, value(blog));
            }
            None => {
                index.insert(author, groups.len());
                groups.push((author, value(blog)));
            }
        }
    }

    let (first, rest) = groups.split_first()?;
    let best = rest.iter().fold(*first, |best, &candidate| {
        if candidate.1 > best.1 { candidate } else { best }
    });

    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blog(title: &str, author: Option<&str>, likes: u64) -> BlogRecord {
        BlogRecord {
            title: title.to_string(),
            author: author.map(str::to_string),
            url: format!("https://blogs.example.com/{title}"),
            likes,
        }
    }

    fn by(author: &str, likes: u64) -> BlogRecord {
        blog("post", Some(author), likes)
    }

    #[test]
    fn test_total_likes_sums_all_records() {
        let blogs = vec![by("X", 5), by("Y", 3), by("Z", 2)];
        assert_eq!(total_likes(&blogs), 10);
    }

    #[test]
    fn test_total_likes_empty_is_zero() {
        assert_eq!(total_likes(&[]), 0);
    }

    #[test]
    fn test_total_likes_single_record() {
        assert_eq!(total_likes(&[by("X", 7)]), 7);
    }

    #[test]
    fn test_total_likes_saturates() {
        let blogs = vec![by("X", u64::MAX), by("Y", 1)];
        assert_eq!(total_likes(&blogs), u64::MAX);
    }

    #[test]
    fn test_favorite_blog_picks_maximum() {
        let blogs = vec![
            blog("A", Some("X"), 5),
            blog("B", Some("Y"), 9),
            blog("C", Some("Z"), 7),
        ];

        let favorite = favorite_blog(&blogs).unwrap();
        assert_eq!(
            favorite,
            FavoriteBlog {
                title: "B".to_string(),
                author: Some("Y".to_string()),
                likes: 9,
            }
        );
    }

    #[test]
    fn test_favorite_blog_tie_keeps_first() {
        let blogs = vec![
            blog("first", Some("X"), 4),
            blog("second", Some("Y"), 4),
            blog("low", Some("Z"), 1),
        ];

        assert_eq!(favorite_blog(&blogs).unwrap().title, "first");
    }

    #[test]
    fn test_favorite_blog_empty_is_error() {
        assert_eq!(
            favorite_blog(&[]),
            Err(EmptyInputError(Statistic::FavoriteBlog))
        );
    }

    #[test]
    fn test_most_blogs() {
        let blogs = vec![by("X", 0), by("X", 0), by("Y", 0)];

        let result = most_blogs(&blogs).unwrap();
        assert_eq!(result.author.as_deref(), Some("X"));
        assert_eq!(result.count, 2);
    }

    #[test]
    fn test_most_blogs_tie_goes_to_first_seen_author() {
        let blogs = vec![by("Y", 0), by("X", 0), by("X", 0), by("Y", 0)];

        let result = most_blogs(&blogs).unwrap();
        assert_eq!(result.author.as_deref(), Some("Y"));
        assert_eq!(result.count, 2);
    }

    #[test]
    fn test_most_blogs_empty_is_error() {
        assert_eq!(most_blogs(&[]), Err(EmptyInputError(Statistic::MostBlogs)));
    }

    #[test]
    fn test_most_likes() {
        let blogs = vec![by("X", 3), by("X", 4), by("Y", 5)];

        let result = most_likes(&blogs).unwrap();
        assert_eq!(result.author.as_deref(), Some("X"));
        assert_eq!(result.total_likes, 7);
    }

    #[test]
    fn test_most_likes_all_zero_selects_first_author() {
        let blogs = vec![by("A", 0), by("B", 0)];

        let result = most_likes(&blogs).unwrap();
        assert_eq!(result.author.as_deref(), Some("A"));
        assert_eq!(result.total_likes, 0);
    }

    #[test]
    fn test_most_likes_empty_is_error() {
        assert_eq!(most_likes(&[]), Err(EmptyInputError(Statistic::MostLikes)));
    }

    #[test]
    fn test_grouping_is_exact() {
        let blogs = vec![
            blog("a", Some("Ada"), 1),
            blog("b", Some("ada"), 1),
            blog("c", Some("Ada "), 1),
            blog("d", Some(""), 1),
            blog("e", None, 1),
            blog("f", Some("ada"), 1),
        ];

        let result = most_blogs(&blogs).unwrap();
        assert_eq!(result.author.as_deref(), Some("ada"));
        assert_eq!(result.count, 2);
    }

    #[test]
    fn test_absent_author_is_its_own_group() {
        let blogs = vec![blog("a", None, 2), blog("b", None, 2), by("X", 3)];

        let result = most_likes(&blogs).unwrap();
        assert_eq!(result.author, None);
        assert_eq!(result.total_likes, 4);
    }

    #[test]
    fn test_compute_dispatch() {
        let blogs = vec![by("X", 3), by("Y", 1)];

        assert_eq!(
            compute(Statistic::TotalLikes, &blogs).unwrap(),
            StatResult::TotalLikes(4)
        );
        assert!(matches!(
            compute(Statistic::MostLikes, &blogs).unwrap(),
            StatResult::MostLikes(AuthorLikes { total_likes: 3, .. })
        ));
        assert_eq!(
            compute(Statistic::TotalLikes, &[]).unwrap(),
            StatResult::TotalLikes(0)
        );
        assert!(compute(Statistic::FavoriteBlog, &[]).is_err());
    }

    #[test]
    fn test_statistic_parse_roundtrip() {
        for stat in Statistic::ALL {
            assert_eq!(stat.as_str().parse::<Statistic>().unwrap(), stat);
        }
        assert!("most-liked".parse::<Statistic>().is_err());
    }

    #[test]
    fn test_stat_result_serialization() {
        let value = serde_json::to_value(StatResult::MostBlogs(AuthorBlogCount {
            author: Some("X".to_string()),
            count: 2,
        }))
        .unwrap();

        assert_eq!(value["statistic"], "most-blogs");
        assert_eq!(value["result"]["author"], "X");
        assert_eq!(value["result"]["count"], 2);
    }

    #[test]
    fn test_input_is_untouched_and_results_repeat() {
        let blogs = vec![by("X", 3), by("Y", 8)];
        let snapshot = blogs.clone();

        assert_eq!(favorite_blog(&blogs), favorite_blog(&blogs));
        assert_eq!(most_likes(&blogs), most_likes(&blogs));
        assert_eq!(blogs, snapshot);
    }
}
