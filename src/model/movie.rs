use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Movies keyed by title.
pub type MovieMap = BTreeMap<String, Movie>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub year: u32,
    pub rating: Option<f64>,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    pub genre: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Movie {
    pub fn imdb_link(&self) -> String {
        format!("https://www.imdb.com/title/{}", self.imdb_id)
    }

    pub fn display_rating(&self) -> String {
        self.rating
            .map(|r| format!("{:.1}", r))
            .unwrap_or_else(|| "N/A".to_string())
    }
}
