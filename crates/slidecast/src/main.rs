//! Slidecast CLI binary.
//!
//! This binary provides command-line access to Slidecast:
//! - Generate a presentation for a question
//! - Simulate playback of a saved deck
//! - Serve the HTTP API

use clap::Parser;
use slidecast::{init_tracing, SlidecastConfig, suggestions};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use cli::{Cli, Commands, ask, play, serve};

    // API keys may live in a .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let config = match &cli.config {
        Some(path) => SlidecastConfig::from_file(path)?,
        None => SlidecastConfig::load()?,
    };

    match cli.command {
        Commands::Ask { question, chat } => {
            ask(&config, &question, chat).await?;
        }

        Commands::Play { deck, step_ms } => {
            play(&deck, step_ms).await?;
        }

        Commands::Suggest => {
            for suggestion in suggestions() {
                println!("{}", suggestion.prompt());
            }
        }

        Commands::Serve { bind } => {
            serve(&config, bind).await?;
        }
    }

    Ok(())
}
