use std::{fs, path::Path};

use crate::{
    error::{MovieDbError, Result},
    model::movie::Movie,
};

const MAX_RATING: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    pub low: f64,
    pub high: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub bins: Vec<Bin>,
}

/// Equal-width bins over [0, 10]. A perfect 10 lands in the last bin.
pub fn rating_histogram(movies: &[Movie], bins: usize) -> Result<Histogram> {
    if bins == 0 {
        return Err(MovieDbError::InvalidInput(
            "histogram needs at least one bin".to_string(),
        ));
    }

    let width = MAX_RATING / bins as f64;
    let mut result: Vec<Bin> = (0..bins)
        .map(|i| Bin {
            low: i as f64 * width,
            high: (i + 1) as f64 * width,
            count: 0,
        })
        .collect();

    for rating in movies.iter().filter_map(|m| m.rating) {
        let clamped = rating.clamp(0.0, MAX_RATING);
        let index = ((clamped / width) as usize).min(bins - 1);
        result[index].count += 1;
    }

    Ok(Histogram { bins: result })
}

impl Histogram {
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    /// One line per bin; the fullest bin gets `width` hashes.
    pub fn render(&self, width: usize) -> String {
        let max = self.bins.iter().map(|b| b.count).max().unwrap_or(0);
        let last = self.bins.len().saturating_sub(1);

        self.bins
            .iter()
            .enumerate()
            .map(|(i, bin)| {
                let bar_len = if max == 0 {
                    0
                } else {
                    (bin.count * width + max - 1) / max
                };
                let close = if i == last { ']' } else { ')' };
                format!(
                    "[{:>4.1}, {:>4.1}{} | {:<width$} {}\n",
                    bin.low,
                    bin.high,
                    close,
                    "#".repeat(bar_len),
                    bin.count,
                    width = width
                )
            })
            .collect()
    }

    pub fn save(&self, path: impl AsRef<Path>, width: usize) -> Result<()> {
        fs::write(path.as_ref(), self.render(width))?;
        log::info!("Saved rating histogram to {}", path.as_ref().display());
        Ok(())
    }
}
