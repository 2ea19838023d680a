//! Command-line interface for the arbiter.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe arbiter - validates every move against the authoritative record
#[derive(Parser, Debug)]
#[command(name = "arbiter")]
#[command(about = "Authoritative tic-tac-toe arbiter", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file (optional)
    #[arg(short, long, default_value = "arbiter.toml", global = true)]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay a TOML match script through the arbiter
    Replay {
        /// Path to the match script
        script: PathBuf,

        /// Print the final record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play a hot-seat game on this terminal
    Play {
        /// Identity of the first player (X); overrides the config
        #[arg(long)]
        initiator: Option<String>,

        /// Identity of the second player (O); overrides the config
        #[arg(long)]
        opponent: Option<String>,
    },
}
