use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::{
    clients::MovieSource,
    error::{MovieDbError, Result},
    model::movie::Movie,
};

pub const DEFAULT_BASE_URL: &str = "http://www.omdbapi.com";

/// Subset of the OMDb `?t=` payload that we keep.
#[derive(Debug, Default, Deserialize)]
pub struct OmdbMovie {
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
    #[serde(rename = "imdbID")]
    pub imdb_id: Option<String>,
    #[serde(rename = "Genre")]
    pub genre: Option<String>,
    #[serde(rename = "Response")]
    pub response: Option<String>,
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    async fn request_movie_data(&self, title: &str) -> Result<OmdbMovie> {
        let url = format!("{}/", self.base_url);
        log::info!("Requesting OMDb data for {}", title);

        let resp = self
            .client
            .get(url.as_str())
            .query(&[("t", title), ("apikey", self.api_key.as_str())])
            .send()
            .await?;

        if resp.status() != StatusCode::OK {
            log::warn!("OMDb answered {} for {}", resp.status(), title);
            return Err(MovieDbError::ApiUnavailable(resp.status().as_u16()));
        }

        let movie_data: OmdbMovie = resp.json().await?;
        if movie_data.response.as_deref() == Some("False") {
            log::info!(
                "OMDb has no match for {}: {}",
                title,
                movie_data.error.as_deref().unwrap_or("no reason given")
            );
            return Err(MovieDbError::MovieNotFound(title.to_string()));
        }

        Ok(movie_data)
    }

    pub fn extract_movie(movie_data: OmdbMovie) -> Result<Movie> {
        let title = movie_data
            .title
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| MovieDbError::InvalidApiData("missing Title".to_string()))?;

        let year = movie_data
            .year
            .as_deref()
            .and_then(parse_year)
            .ok_or_else(|| {
                MovieDbError::InvalidApiData(format!(
                    "unparsable Year {:?} for {}",
                    movie_data.year, title
                ))
            })?;

        let rating = not_available_to_none(movie_data.imdb_rating).and_then(|r| r.parse::<f64>().ok());

        Ok(Movie {
            title,
            year,
            rating,
            poster_url: not_available_to_none(movie_data.poster),
            imdb_id: movie_data.imdb_id.unwrap_or_default(),
            genre: not_available_to_none(movie_data.genre).unwrap_or_default(),
            notes: None,
        })
    }
}

impl MovieSource for OmdbClient {
    async fn fetch_movie(&self, title: &str) -> Result<Movie> {
        let movie_data = self.request_movie_data(title).await?;
        Self::extract_movie(movie_data)
    }
}

fn not_available_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| {
        let v = v.trim();
        !v.is_empty() && v != "N/A"
    })
}

/// OMDb reports series as "2010–2013" and some entries as "2019–".
fn parse_year(raw: &str) -> Option<u32> {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse::<u32>().ok()
}
