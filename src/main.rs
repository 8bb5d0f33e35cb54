use clap::Parser;
use std::process;

use moviedb::config::Cli;

mod logging;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::setup_logging(cli.verbose);

    if let Err(e) = moviedb::run(cli).await {
        log::error!("{}", e);
        process::exit(1);
    }
}
