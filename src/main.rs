//! # CineSearch Main Entry Point
//!
//! Terminal movie search over the TMDB API.

use std::io;

use anyhow::Result;
use cinesearch::cmd_args::CommandLineArgs;
use cinesearch::config::{self, AppConfig};
use cinesearch::{logging, print_mode};
use cinesearch::{AppController, TmdbClient};

#[tokio::main]
async fn main() -> Result<()> {
    let cmd_args = CommandLineArgs::parse();

    if let Err(e) = logging::init_logging(cmd_args.verbose()) {
        eprintln!("warning: logging disabled: {e:#}");
    }

    let profile_path = config::get_profile_path();
    let config = AppConfig::load(cmd_args.profile(), &profile_path)?;

    if cmd_args.print() {
        let client = TmdbClient::new(&config)?;
        let query = cmd_args.query().unwrap_or_default();
        return print_mode::print_movies(&client, query, cmd_args.page(), &mut io::stdout()).await;
    }

    let mut app = AppController::new(cmd_args, &config)?;
    app.run().await?;

    println!("Thanks for using CineSearch!");
    Ok(())
}
