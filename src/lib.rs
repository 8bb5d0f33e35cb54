use std::io;

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod model;
pub mod persisters;
pub mod utility;

use app::MovieApp;
use clients::omdb_client::OmdbClient;
use config::Cli;
use error::Result;

pub async fn run(cli: Cli) -> Result<()> {
    let storage = persisters::open_storage(&cli.file_path)?;
    log::info!("Using movie database {}", cli.file_path.display());

    let client = match cli.resolved_api_key() {
        Some(api_key) => Some(OmdbClient::new(&cli.base_url, &api_key)),
        None => {
            log::warn!("No OMDb API key configured, adding movies is disabled");
            None
        }
    };
    let app = MovieApp::new(storage, client);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Some(command) => app.execute(command, &mut out).await,
        None => app.run_interactive(io::stdin().lock(), &mut out).await,
    }
}
