use csv::{Reader, WriterBuilder};
use std::{
    fs::File,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{
    error::Result,
    model::movie::{Movie, MovieMap},
    persisters::Storage,
};

#[derive(Debug, Clone)]
pub struct CsvStorage {
    file_path: PathBuf,
}

impl CsvStorage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        CsvStorage {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn csv_titles() -> Vec<&'static str> {
        vec![
            "title",
            "year",
            "rating",
            "poster_url",
            "imdbID",
            "genre",
            "notes",
        ]
    }
}

impl Storage for CsvStorage {
    fn load_movies(&self) -> Result<MovieMap> {
        let file = match File::open(&self.file_path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!(
                    "Movie file {} not found, starting empty",
                    self.file_path.display()
                );
                return Ok(MovieMap::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut rdr = Reader::from_reader(file);
        let mut movies = MovieMap::new();
        for record in rdr.deserialize() {
            let movie: Movie = record?;
            movies.insert(movie.title.clone(), movie);
        }

        log::debug!(
            "Loaded {} movies from {}",
            movies.len(),
            self.file_path.display()
        );
        Ok(movies)
    }

    fn save_movies(&self, movies: &MovieMap) -> Result<()> {
        // Header is written by hand so an empty database still gets one.
        let mut wrt = WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.file_path)?;
        wrt.write_record(Self::csv_titles())?;
        for movie in movies.values() {
            wrt.serialize(movie)?;
        }
        wrt.flush()?;

        log::debug!(
            "Saved {} movies to {}",
            movies.len(),
            self.file_path.display()
        );
        Ok(())
    }
}
