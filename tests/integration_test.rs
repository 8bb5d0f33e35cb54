#[cfg(test)]
mod tests {

    use std::{
        collections::HashMap,
        fs::File,
        io::{Cursor, Read},
        path::Path,
    };

    use moviedb::{
        app::MovieApp,
        clients::MovieSource,
        config::Command,
        error::{MovieDbError, Result},
        model::movie::Movie,
        persisters::open_storage,
    };
    use tempfile::TempDir;

    struct StubSource {
        movies: HashMap<String, Movie>,
    }

    impl MovieSource for StubSource {
        async fn fetch_movie(&self, title: &str) -> Result<Movie> {
            self.movies
                .get(&title.to_lowercase())
                .cloned()
                .ok_or_else(|| MovieDbError::MovieNotFound(title.to_string()))
        }
    }

    fn movie(title: &str, year: u32, rating: Option<f64>, imdb_id: &str) -> Movie {
        Movie {
            title: title.to_string(),
            year,
            rating,
            poster_url: None,
            imdb_id: imdb_id.to_string(),
            genre: "Drama".to_string(),
            notes: None,
        }
    }

    fn stub_source() -> StubSource {
        let catalog = vec![
            movie("Inception", 2010, Some(8.8), "tt1375666"),
            movie("The Matrix", 1999, Some(8.7), "tt0133093"),
            movie("Titanic", 1997, Some(7.9), "tt0120338"),
            movie("Unrated Indie", 2021, None, "tt9999999"),
        ];
        StubSource {
            movies: catalog
                .into_iter()
                .map(|m| (m.title.to_lowercase(), m))
                .collect(),
        }
    }

    fn app_for(path: &Path) -> MovieApp<StubSource> {
        MovieApp::new(open_storage(path).unwrap(), Some(stub_source()))
    }

    async fn run(app: &MovieApp<StubSource>, command: Command) -> Result<String> {
        let mut out = Vec::new();
        app.execute(command, &mut out).await?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn add(title: &str) -> Command {
        Command::Add {
            title: title.to_string(),
        }
    }

    #[tokio::test]
    async fn manages_a_json_database_end_to_end() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("movies.json");
        let app = app_for(&path);

        for title in ["inception", "The Matrix", "Titanic"] {
            let output = run(&app, add(title)).await.unwrap();
            assert!(output.contains("successfully added"), "{}", output);
        }

        assert!(matches!(
            run(&app, add("THE MATRIX")).await,
            Err(MovieDbError::AlreadyExists(_))
        ));
        assert!(matches!(
            run(&app, add("Nonexistent Film")).await,
            Err(MovieDbError::MovieNotFound(_))
        ));

        run(
            &app,
            Command::Update {
                title: "titanic".to_string(),
                notes: "door had room".to_string(),
            },
        )
        .await
        .unwrap();

        let output = run(
            &app,
            Command::Delete {
                titles: vec!["Inception".to_string(), "Avatar".to_string()],
            },
        )
        .await
        .unwrap();
        assert!(output.contains("Movie Inception deleted successfully!"));
        assert!(output.contains("Avatar doesn't exist"));

        let stored: serde_json::Value =
            serde_json::from_str(&get_file_content(&path)).unwrap();
        let titles: Vec<&String> = stored.as_object().unwrap().keys().collect();
        assert_eq!(titles, vec!["The Matrix", "Titanic"]);
        assert_eq!(stored["Titanic"]["notes"], "door had room");
        assert_eq!(stored["The Matrix"]["imdbID"], "tt0133093");
    }

    #[tokio::test]
    async fn csv_database_supports_reporting_commands() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("movies.csv");
        let app = app_for(&path);

        for title in ["Inception", "The Matrix", "Titanic", "Unrated Indie"] {
            run(&app, add(title)).await.unwrap();
        }

        let stats = run(&app, Command::Stats).await.unwrap();
        assert!(stats.contains("Rated movies: 3 of 4"));
        assert!(stats.contains("Median rating: 8.70"));
        assert!(stats.contains("Best movie: Inception, 8.8"));
        assert!(stats.contains("Worst movie: Titanic, 7.9"));

        let sorted = run(&app, Command::Sorted { by_year: false }).await.unwrap();
        let order: Vec<&str> = sorted.lines().collect();
        assert_eq!(
            order,
            vec![
                "Inception (2010): 8.8",
                "The Matrix (1999): 8.7",
                "Titanic (1997): 7.9",
                "Unrated Indie (2021): N/A",
            ]
        );

        let by_year = run(&app, Command::Sorted { by_year: true }).await.unwrap();
        assert_eq!(by_year.lines().next(), Some("Unrated Indie (2021): N/A"));

        let found = run(
            &app,
            Command::Search {
                query: "MATRIX".to_string(),
            },
        )
        .await
        .unwrap();
        assert_eq!(found.trim(), "The Matrix, 8.7");

        let random = run(&app, Command::Random).await.unwrap();
        assert!(random.starts_with("Your movie for tonight:"));

        let chart_path = dir.path().join("histogram.txt");
        let chart = run(
            &app,
            Command::Histogram {
                bins: 5,
                output: Some(chart_path.clone()),
            },
        )
        .await
        .unwrap();
        assert!(chart.contains("Ratings of 3 movies"));
        assert!(chart.contains("Histogram saved to"));
        assert_eq!(get_file_content(&chart_path).lines().count(), 5);

        let csv = get_file_content(&path);
        assert!(csv.starts_with("title,year,rating,poster_url,imdbID,genre,notes"));
        assert_eq!(csv.lines().count(), 5);
    }

    #[tokio::test]
    async fn generates_website_from_stored_movies() {
        let dir = TempDir::new().unwrap();
        let app = app_for(&dir.path().join("movies.json"));
        run(&app, add("Inception")).await.unwrap();

        let output = dir.path().join("site").join("index.html");
        run(
            &app,
            Command::Website {
                template: dir.path().join("missing_template.html"),
                output: output.clone(),
                title: "Friday Night Picks".to_string(),
            },
        )
        .await
        .unwrap();

        let page = get_file_content(&output);
        assert!(page.contains("https://www.imdb.com/title/tt1375666"));
        assert!(page.contains("No Notes Added"));
        assert!(page.contains("<title>Friday Night Picks</title>"));
    }

    #[tokio::test]
    async fn adding_without_api_key_fails() {
        let dir = TempDir::new().unwrap();
        let app: MovieApp<StubSource> =
            MovieApp::new(open_storage(dir.path().join("movies.json")).unwrap(), None);

        assert!(matches!(
            run(&app, add("Inception")).await,
            Err(MovieDbError::MissingApiKey)
        ));
        let listed = run(&app, Command::List).await.unwrap();
        assert!(listed.contains("No movies found in the database."));
    }

    #[tokio::test]
    async fn interactive_menu_drives_the_database() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("movies.json");
        let app = app_for(&path);

        let input = "2\ninception\n\n\
                     2\nInception\n\n\
                     42\n\
                     4\nINCEPTION\ndream within a dream\n\n\
                     1\n\n\
                     0\n";
        let mut out = Vec::new();
        app.run_interactive(Cursor::new(input), &mut out)
            .await
            .unwrap();
        let transcript = String::from_utf8(out).unwrap();

        assert!(transcript.contains("Movie Inception successfully added"));
        assert!(transcript.contains("Movie Inception already exists!"));
        assert!(transcript.contains("Invalid choice"));
        assert!(transcript.contains("Movie Inception updated successfully!"));
        assert!(transcript.contains("Notes: dream within a dream"));
        assert!(transcript.ends_with("Goodbye!\n"));
    }

    #[tokio::test]
    async fn interactive_menu_stops_at_end_of_input() {
        let dir = TempDir::new().unwrap();
        let app = app_for(&dir.path().join("movies.csv"));

        let mut out = Vec::new();
        app.run_interactive(Cursor::new("1\n"), &mut out)
            .await
            .unwrap();

        assert!(String::from_utf8(out)
            .unwrap()
            .contains("No movies found in the database."));
    }

    fn get_file_content(file_path: &Path) -> String {
        let mut file = match File::open(file_path) {
            Ok(file) => file,
            Err(e) => panic!("Error opening {}: {}", file_path.display(), e),
        };

        let mut content = String::new();
        if let Err(e) = file.read_to_string(&mut content) {
            panic!("Failed to read {}: {}", file_path.display(), e);
        }

        content
    }
}
