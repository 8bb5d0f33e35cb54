use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{error::Result, model::movie::MovieMap, persisters::Storage};

#[derive(Debug, Clone)]
pub struct JsonStorage {
    file_path: PathBuf,
}

impl JsonStorage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        JsonStorage {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }
}

impl Storage for JsonStorage {
    fn load_movies(&self) -> Result<MovieMap> {
        let content = match fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!(
                    "Movie file {} not found, starting empty",
                    self.file_path.display()
                );
                return Ok(MovieMap::new());
            }
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(MovieMap::new());
        }

        // Older files are keyed by whatever title was typed when adding.
        let movies: MovieMap = serde_json::from_str::<MovieMap>(&content)?
            .into_values()
            .map(|movie| (movie.title.clone(), movie))
            .collect();
        log::debug!(
            "Loaded {} movies from {}",
            movies.len(),
            self.file_path.display()
        );
        Ok(movies)
    }

    fn save_movies(&self, movies: &MovieMap) -> Result<()> {
        let json = serde_json::to_string_pretty(movies)?;
        fs::write(&self.file_path, json)?;
        log::debug!(
            "Saved {} movies to {}",
            movies.len(),
            self.file_path.display()
        );
        Ok(())
    }
}
