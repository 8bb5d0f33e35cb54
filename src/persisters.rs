use std::path::Path;

use crate::{
    error::{MovieDbError, Result},
    model::movie::{Movie, MovieMap},
};

pub mod csv_storage;
pub mod json_storage;

use csv_storage::CsvStorage;
use json_storage::JsonStorage;

/// Flat-file movie storage. Implementors only read and write the whole
/// mapping; every other operation is a load, mutate, save cycle on top.
pub trait Storage {
    fn load_movies(&self) -> Result<MovieMap>;

    fn save_movies(&self, movies: &MovieMap) -> Result<()>;

    fn list_movies(&self) -> Result<Vec<Movie>> {
        Ok(self.load_movies()?.into_values().collect())
    }

    fn contains(&self, title: &str) -> Result<bool> {
        Ok(find_key(&self.load_movies()?, title).is_some())
    }

    fn add_movie(&self, movie: Movie) -> Result<()> {
        let mut movies = self.load_movies()?;
        if find_key(&movies, &movie.title).is_some() {
            return Err(MovieDbError::AlreadyExists(movie.title));
        }

        log::debug!("Adding movie {}", movie.title);
        movies.insert(movie.title.clone(), movie);
        self.save_movies(&movies)
    }

    fn delete_movie(&self, title: &str) -> Result<Movie> {
        let mut movies = self.load_movies()?;
        let key = find_key(&movies, title).ok_or_else(|| MovieDbError::NotFound(title.to_string()))?;

        let removed = movies
            .remove(&key)
            .ok_or_else(|| MovieDbError::NotFound(title.to_string()))?;
        log::debug!("Deleting movie {}", key);
        self.save_movies(&movies)?;
        Ok(removed)
    }

    fn update_movie(&self, title: &str, notes: &str) -> Result<Movie> {
        let mut movies = self.load_movies()?;
        let key = find_key(&movies, title).ok_or_else(|| MovieDbError::NotFound(title.to_string()))?;

        let updated = match movies.get_mut(&key) {
            Some(movie) => {
                let notes = notes.trim();
                movie.notes = if notes.is_empty() {
                    None
                } else {
                    Some(notes.to_string())
                };
                movie.clone()
            }
            None => return Err(MovieDbError::NotFound(title.to_string())),
        };
        log::debug!("Updating notes for movie {}", key);
        self.save_movies(&movies)?;
        Ok(updated)
    }
}

/// Titles are matched case-insensitively, but stored with their original casing.
fn find_key(movies: &MovieMap, title: &str) -> Option<String> {
    let wanted = title.trim().to_lowercase();
    movies
        .keys()
        .find(|key| key.to_lowercase() == wanted)
        .cloned()
}

pub fn open_storage(path: impl AsRef<Path>) -> Result<Box<dyn Storage>> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("json") => Ok(Box::new(JsonStorage::new(path))),
        Some("csv") => Ok(Box::new(CsvStorage::new(path))),
        _ => Err(MovieDbError::UnsupportedFileType(
            path.display().to_string(),
        )),
    }
}
