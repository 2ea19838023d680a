//! Tic-tac-toe arbiter - command-line entry point.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use tictactoe_arbiter::PlayerId;
use tictactoe_arbiter_cli::{Cli, CliConfig, Command, HotSeat, MatchScript, replay};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CliConfig::load_or_default(&cli.config)?;
    init_tracing(&config);

    match cli.command {
        Command::Replay { script, json } => run_replay(&config, &script, json),
        Command::Play { initiator, opponent } => run_hot_seat(config.with_players(initiator, opponent)),
    }
}

/// Logs go to stderr so stdout stays clean for boards and JSON.
fn init_tracing(config: &CliConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();
}

#[instrument(skip(config, script), fields(path = %script.display()))]
fn run_replay(config: &CliConfig, script: &std::path::Path, json: bool) -> Result<()> {
    let script = MatchScript::from_file(script)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let report = replay(&script, &mut out, *config.show_boards() && !json)?;
    info!(accepted = report.accepted, rejected = report.rejected.len(), "Replay complete");

    if json {
        serde_json::to_writer_pretty(&mut out, &report.record)?;
        writeln!(out)?;
    } else {
        writeln!(
            out,
            "Final: turn {}, {} ({} accepted, {} rejected)",
            report.record.turn(),
            report.record.status(),
            report.accepted,
            report.rejected.len()
        )?;
        writeln!(out, "{}", report.record.board())?;
    }
    Ok(())
}

#[instrument(skip_all)]
fn run_hot_seat(config: CliConfig) -> Result<()> {
    let game = HotSeat::new(
        PlayerId::new(config.initiator().as_str()),
        PlayerId::new(config.opponent().as_str()),
    )?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    game.run(stdin.lock(), &mut stdout.lock())?;
    Ok(())
}
