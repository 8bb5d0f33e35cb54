use crate::model::movie::Movie;

#[derive(Debug, Clone, PartialEq)]
pub struct MovieStats {
    pub total: usize,
    pub rated: usize,
    pub average: f64,
    pub median: f64,
    pub best: Vec<Movie>,
    pub worst: Vec<Movie>,
}

/// Statistics over the rated movies only. `None` when nothing is rated.
pub fn compute_stats(movies: &[Movie]) -> Option<MovieStats> {
    let rated: Vec<(&Movie, f64)> = movies
        .iter()
        .filter_map(|m| m.rating.map(|r| (m, r)))
        .collect();

    if rated.is_empty() {
        return None;
    }

    let mut ratings: Vec<f64> = rated.iter().map(|(_, r)| *r).collect();
    ratings.sort_by(|a, b| a.total_cmp(b));

    let average = ratings.iter().sum::<f64>() / ratings.len() as f64;
    let mid = ratings.len() / 2;
    let median = if ratings.len() % 2 == 0 {
        (ratings[mid - 1] + ratings[mid]) / 2.0
    } else {
        ratings[mid]
    };

    let max = ratings[ratings.len() - 1];
    let min = ratings[0];

    Some(MovieStats {
        total: movies.len(),
        rated: rated.len(),
        average,
        median,
        best: with_rating(&rated, max),
        worst: with_rating(&rated, min),
    })
}

fn with_rating(rated: &[(&Movie, f64)], rating: f64) -> Vec<Movie> {
    rated
        .iter()
        .filter(|(_, r)| *r == rating)
        .map(|(m, _)| (*m).clone())
        .collect()
}
