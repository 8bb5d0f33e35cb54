use colored::Colorize;
use std::{
    io::{BufRead, Write},
    path::Path,
};

use crate::{
    clients::MovieSource,
    config::{Command, DEFAULT_HISTOGRAM_BINS, DEFAULT_TEMPLATE_PATH, DEFAULT_WEBSITE_PATH},
    error::{MovieDbError, Result},
    model::movie::Movie,
    persisters::Storage,
    utility::{histogram, random, search, stats, website},
};

const HISTOGRAM_WIDTH: usize = 40;

const MENU: &str = "Movie Menu:
    0. Exit
    1. List movies
    2. Add movie
    3. Delete movies
    4. Update movie notes
    5. Stats
    6. Random movie
    7. Search movie
    8. Movies sorted by rating
    9. Rating histogram
    10. Generate website";

pub struct MovieApp<S> {
    storage: Box<dyn Storage>,
    source: Option<S>,
}

impl<S: MovieSource> MovieApp<S> {
    /// `source` may be absent (no API key); only adding movies needs it.
    pub fn new(storage: Box<dyn Storage>, source: Option<S>) -> Self {
        MovieApp { storage, source }
    }

    pub async fn execute<W: Write>(&self, command: Command, out: &mut W) -> Result<()> {
        match command {
            Command::List => self.list_movies(out),
            Command::Add { title } => self.add_movie(&title, out).await,
            Command::Delete { titles } => self.delete_movies(&titles, out),
            Command::Update { title, notes } => self.update_movie(&title, &notes, out),
            Command::Stats => self.print_stats(out),
            Command::Random => self.random_movie(out),
            Command::Search { query } => self.search_movies(&query, out),
            Command::Sorted { by_year } => self.sorted_movies(by_year, out),
            Command::Histogram { bins, output } => {
                self.rating_histogram(bins, output.as_deref(), out)
            }
            Command::Website {
                template,
                output,
                title,
            } => self.generate_website(&template, &output, &title, out),
        }
    }

    pub fn list_movies<W: Write>(&self, out: &mut W) -> Result<()> {
        let movies = self.storage.list_movies()?;
        if movies.is_empty() {
            writeln!(out, "No movies found in the database.")?;
            return Ok(());
        }

        writeln!(out, "{} movies in total", movies.len())?;
        for movie in movies.iter() {
            write_movie(out, movie)?;
        }
        Ok(())
    }

    pub async fn add_movie<W: Write>(&self, title: &str, out: &mut W) -> Result<()> {
        let title = title.trim();
        if title.is_empty() {
            return Err(MovieDbError::InvalidInput("title must not be empty".to_string()));
        }

        if self.storage.contains(title)? {
            return Err(MovieDbError::AlreadyExists(title.to_string()));
        }

        let source = self.source.as_ref().ok_or(MovieDbError::MissingApiKey)?;
        let movie = source.fetch_movie(title).await?;
        let stored_title = movie.title.clone();

        // The canonical title may differ from what was typed.
        self.storage.add_movie(movie)?;
        log::info!("Stored {} (searched as {})", stored_title, title);
        writeln!(out, "Movie {} successfully added", stored_title)?;
        Ok(())
    }

    /// Deletes every title it can; unknown titles are reported, not fatal.
    pub fn delete_movies<W: Write>(&self, titles: &[String], out: &mut W) -> Result<()> {
        for title in titles.iter().map(|t| t.trim()).filter(|t| !t.is_empty()) {
            match self.storage.delete_movie(title) {
                Ok(movie) => writeln!(out, "Movie {} deleted successfully!", movie.title)?,
                Err(MovieDbError::NotFound(missing)) => {
                    writeln!(out, "{}", MovieDbError::NotFound(missing).to_string().yellow())?
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    pub fn update_movie<W: Write>(&self, title: &str, notes: &str, out: &mut W) -> Result<()> {
        let movie = self.storage.update_movie(title, notes.trim())?;
        writeln!(out, "Movie {} updated successfully!", movie.title)?;
        Ok(())
    }

    pub fn print_stats<W: Write>(&self, out: &mut W) -> Result<()> {
        let movies = self.storage.list_movies()?;
        let stats = match stats::compute_stats(&movies) {
            Some(stats) => stats,
            None => {
                writeln!(out, "No rated movies in the database.")?;
                return Ok(());
            }
        };

        writeln!(out, "Rated movies: {} of {}", stats.rated, stats.total)?;
        writeln!(out, "Average rating: {:.2}", stats.average)?;
        writeln!(out, "Median rating: {:.2}", stats.median)?;
        for movie in stats.best.iter() {
            writeln!(out, "Best movie: {}, {}", movie.title, movie.display_rating())?;
        }
        for movie in stats.worst.iter() {
            writeln!(out, "Worst movie: {}, {}", movie.title, movie.display_rating())?;
        }
        Ok(())
    }

    pub fn random_movie<W: Write>(&self, out: &mut W) -> Result<()> {
        let movies = self.storage.list_movies()?;
        match random::pick_random(&movies, &mut rand::rng()) {
            Some(movie) => writeln!(
                out,
                "Your movie for tonight: {}, it's rated {}",
                movie.title,
                movie.display_rating()
            )?,
            None => writeln!(out, "No movies found in the database.")?,
        }
        Ok(())
    }

    pub fn search_movies<W: Write>(&self, query: &str, out: &mut W) -> Result<()> {
        let movies = self.storage.list_movies()?;
        let found = search::search_movies(&movies, query);
        if found.is_empty() {
            writeln!(out, "No movie matches \"{}\".", query.trim())?;
            return Ok(());
        }

        for movie in found.iter() {
            writeln!(out, "{}, {}", movie.title, movie.display_rating())?;
        }
        Ok(())
    }

    pub fn sorted_movies<W: Write>(&self, by_year: bool, out: &mut W) -> Result<()> {
        let movies = self.storage.list_movies()?;
        let sorted = if by_year {
            search::sort_by_year(&movies, true)
        } else {
            search::sort_by_rating(&movies)
        };
        for movie in sorted.iter() {
            writeln!(out, "{} ({}): {}", movie.title, movie.year, movie.display_rating())?;
        }
        Ok(())
    }

    pub fn rating_histogram<W: Write>(
        &self,
        bins: usize,
        output: Option<&Path>,
        out: &mut W,
    ) -> Result<()> {
        let movies = self.storage.list_movies()?;
        let chart = histogram::rating_histogram(&movies, bins)?;

        writeln!(out, "Ratings of {} movies", chart.total())?;
        write!(out, "{}", chart.render(HISTOGRAM_WIDTH))?;
        if let Some(path) = output {
            chart.save(path, HISTOGRAM_WIDTH)?;
            writeln!(out, "Histogram saved to {}", path.display())?;
        }
        Ok(())
    }

    pub fn generate_website<W: Write>(
        &self,
        template: &Path,
        output: &Path,
        site_title: &str,
        out: &mut W,
    ) -> Result<()> {
        let movies = self.storage.list_movies()?;
        website::generate_website(template, output, &movies, site_title)?;
        writeln!(out, "Website was generated successfully: {}", output.display())?;
        Ok(())
    }

    /// Menu loop. Returns when the user picks 0 or input runs out.
    pub async fn run_interactive<R: BufRead, W: Write>(&self, mut input: R, out: &mut W) -> Result<()> {
        loop {
            writeln!(out, "{}", "********** My Movies Database **********".green())?;
            writeln!(out, "{}", MENU.blue())?;
            let choice = match prompt(&mut input, out, "Enter choice (0-10):")? {
                Some(choice) => choice,
                None => break,
            };

            let command = match choice.as_str() {
                "0" => {
                    writeln!(out, "Goodbye!")?;
                    break;
                }
                "1" => Command::List,
                "2" => match prompt(&mut input, out, "Enter movie name:")? {
                    Some(title) => Command::Add { title },
                    None => break,
                },
                "3" => match prompt(&mut input, out, "Enter titles to delete (separated by commas):")? {
                    Some(line) => Command::Delete {
                        titles: line.split(',').map(|t| t.trim().to_string()).collect(),
                    },
                    None => break,
                },
                "4" => {
                    let title = match prompt(&mut input, out, "Enter movie name:")? {
                        Some(title) => title,
                        None => break,
                    };
                    match prompt(&mut input, out, "Enter movie notes:")? {
                        Some(notes) => Command::Update { title, notes },
                        None => break,
                    }
                }
                "5" => Command::Stats,
                "6" => Command::Random,
                "7" => match prompt(&mut input, out, "Enter part of the movie name:")? {
                    Some(query) => Command::Search { query },
                    None => break,
                },
                "8" => Command::Sorted { by_year: false },
                "9" => Command::Histogram {
                    bins: DEFAULT_HISTOGRAM_BINS,
                    output: None,
                },
                "10" => Command::Website {
                    template: DEFAULT_TEMPLATE_PATH.into(),
                    output: DEFAULT_WEBSITE_PATH.into(),
                    title: website::DEFAULT_SITE_TITLE.to_string(),
                },
                other => {
                    writeln!(
                        out,
                        "{}",
                        format!("Invalid choice {:?}, enter a number from 0 to 10", other).yellow()
                    )?;
                    continue;
                }
            };

            if let Err(e) = self.execute(command, out).await {
                log::debug!("Menu command failed: {:?}", e);
                writeln!(out, "{}", e.to_string().red())?;
            }

            if prompt(&mut input, out, "Press enter to continue")?.is_none() {
                break;
            }
        }
        Ok(())
    }
}

fn write_movie<W: Write>(out: &mut W, movie: &Movie) -> Result<()> {
    writeln!(out, "{} ({})", movie.title.bold(), movie.year)?;
    writeln!(out, "Genre: {}", movie.genre)?;
    writeln!(out, "Rating: {}/10", movie.display_rating())?;
    if let Some(notes) = movie.notes.as_deref() {
        writeln!(out, "Notes: {}", notes)?;
    }
    writeln!(out)?;
    Ok(())
}

/// `None` on end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, message: &str) -> Result<Option<String>> {
    write!(out, "{} ", message.magenta())?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
