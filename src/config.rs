use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::{clients::omdb_client::DEFAULT_BASE_URL, utility::website::DEFAULT_SITE_TITLE};

pub const DEFAULT_TEMPLATE_PATH: &str = "static/index_template.html";
pub const DEFAULT_WEBSITE_PATH: &str = "static/index.html";
pub const DEFAULT_HISTOGRAM_BINS: usize = 10;

/// Personal movie database backed by a CSV or JSON file.
#[derive(Debug, Parser)]
#[command(name = "moviedb", version, about)]
pub struct Cli {
    /// Storage file, .json or .csv
    pub file_path: PathBuf,

    /// OMDb API key
    #[arg(long, env = "OMDB_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, env = "OMDB_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Runs the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// List all movies
    List,
    /// Fetch a movie from OMDb and store it
    Add { title: String },
    /// Delete one or more movies
    Delete {
        #[arg(required = true)]
        titles: Vec<String>,
    },
    /// Set the notes of a movie
    Update { title: String, notes: String },
    /// Average, median, best and worst ratings
    Stats,
    /// Suggest a random movie
    Random,
    /// Case-insensitive title search
    Search { query: String },
    /// List movies by rating, best first
    Sorted {
        /// Order by release year, newest first, instead
        #[arg(long)]
        by_year: bool,
    },
    /// Rating histogram
    Histogram {
        #[arg(long, default_value_t = DEFAULT_HISTOGRAM_BINS)]
        bins: usize,
        /// Also write the chart to this file
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Generate a static website from the database
    Website {
        #[arg(long, default_value = DEFAULT_TEMPLATE_PATH)]
        template: PathBuf,
        #[arg(long, default_value = DEFAULT_WEBSITE_PATH)]
        output: PathBuf,
        /// Page heading and <title>
        #[arg(long, default_value = DEFAULT_SITE_TITLE)]
        title: String,
    },
}

impl Cli {
    /// `API_KEY` is still honoured for `.env` files written for older setups.
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("API_KEY").ok())
            .filter(|key| !key.trim().is_empty())
    }
}
