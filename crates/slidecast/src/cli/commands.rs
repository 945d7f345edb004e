//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Slidecast - turn questions into narrated slide presentations
#[derive(Parser, Debug)]
#[command(name = "slidecast")]
#[command(about = "Turn questions into narrated slide presentations", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file to overlay on the bundled defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a presentation for a question and print the deck JSON
    Ask {
        /// The question
        question: String,

        /// Existing chat to ask in
        #[arg(long)]
        chat: Option<i64>,
    },

    /// Simulate playback of a saved deck
    Play {
        /// Path to a deck JSON file
        deck: PathBuf,

        /// Milliseconds each clip "plays" for
        #[arg(long, default_value = "500")]
        step_ms: u64,
    },

    /// Print four suggested questions
    Suggest,

    /// Serve the HTTP API
    Serve {
        /// Address to bind, overriding the configuration
        #[arg(long)]
        bind: Option<String>,
    },
}
