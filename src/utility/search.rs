use std::cmp::Ordering;

use crate::model::movie::Movie;

/// Case-insensitive substring match on the title.
pub fn search_movies(movies: &[Movie], query: &str) -> Vec<Movie> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return vec![];
    }

    movies
        .iter()
        .filter(|m| m.title.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

/// Highest rating first; unrated movies go last. Ties are ordered by title.
pub fn sort_by_rating(movies: &[Movie]) -> Vec<Movie> {
    let mut sorted = movies.to_vec();
    sorted.sort_by(|a, b| match (a.rating, b.rating) {
        (Some(ra), Some(rb)) => rb.total_cmp(&ra).then_with(|| a.title.cmp(&b.title)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.title.cmp(&b.title),
    });
    sorted
}

pub fn sort_by_year(movies: &[Movie], newest_first: bool) -> Vec<Movie> {
    let mut sorted = movies.to_vec();
    sorted.sort_by(|a, b| {
        let by_year = if newest_first {
            b.year.cmp(&a.year)
        } else {
            a.year.cmp(&b.year)
        };
        by_year.then_with(|| a.title.cmp(&b.title))
    });
    sorted
}
