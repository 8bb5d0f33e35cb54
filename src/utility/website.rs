use std::{fs, io::ErrorKind, path::Path};

use crate::{error::Result, model::movie::Movie};

pub const DEFAULT_TEMPLATE: &str = include_str!("../../static/index_template.html");
pub const DEFAULT_POSTER: &str = "https://images.unsplash.com/photo-1531297484001-80022131f5a1?auto=format&fit=crop&w=1420&q=80";
pub const DEFAULT_SITE_TITLE: &str = "My Movies Database";

const TITLE_PLACEHOLDER: &str = "__TEMPLATE_TITLE__";
const GRID_PLACEHOLDER: &str = "__TEMPLATE_MOVIE_GRID__";
const LEGACY_GRID_PLACEHOLDER: &str = "$movie_list";

pub fn generate_movie_html(movie: &Movie) -> String {
    let title = escape_html(&movie.title);
    let poster = movie
        .poster_url
        .as_deref()
        .filter(|p| {
            let p = p.trim();
            !p.is_empty() && p != "N/A"
        })
        .unwrap_or(DEFAULT_POSTER);
    let notes = movie.notes.as_deref().unwrap_or("No Notes Added");

    format!(
        r#"
        <div class="col-md-4 mb-4">
            <a href="{link}" target="_blank">
                <div class="card h-100 shadow">
                    <img class="card-img-top movie-poster" src="{poster}" alt="{title}">
                    <div class="card-body">
                        <h5 class="card-title movie-title">{title}</h5>
                        <div class="d-flex justify-content-between movie-details">
                            <p class="card-text movie-year badge badge-primary p-2"><strong>Year:</strong> {year}</p>
                            <p class="card-text movie-rating badge badge-success p-2"><strong>Rating:</strong> {rating}</p>
                        </div>
                        <p class="card-text movie-genre">{genre}</p>
                    </div>
                    <div class="card-footer">
                        <p class="card-text notes">{notes}</p>
                    </div>
                </div>
            </a>
        </div>
"#,
        link = escape_html(&movie.imdb_link()),
        poster = escape_html(poster),
        title = title,
        year = movie.year,
        rating = movie.display_rating(),
        genre = escape_html(&movie.genre),
        notes = escape_html(notes),
    )
}

pub fn render_website(template: &str, movies: &[Movie], site_title: &str) -> String {
    let grid: String = movies.iter().map(generate_movie_html).collect();

    // Grid goes in last so movie text is never substituted again.
    template
        .replace(LEGACY_GRID_PLACEHOLDER, GRID_PLACEHOLDER)
        .replace(TITLE_PLACEHOLDER, &escape_html(site_title))
        .replace(GRID_PLACEHOLDER, &grid)
}

/// Renders `movies` into `output_path`. A missing template file falls back
/// to the bundled one.
pub fn generate_website(
    template_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    movies: &[Movie],
    site_title: &str,
) -> Result<()> {
    let template_path = template_path.as_ref();
    let template = match fs::read_to_string(template_path) {
        Ok(template) => template,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::info!(
                "Template {} not found, using the bundled one",
                template_path.display()
            );
            DEFAULT_TEMPLATE.to_string()
        }
        Err(e) => return Err(e.into()),
    };

    let output_path = output_path.as_ref();
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(
        output_path,
        render_website(&template, movies, site_title),
    )?;
    log::info!(
        "Generated website with {} movies at {}",
        movies.len(),
        output_path.display()
    );
    Ok(())
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
