//! Local front end for the tic-tac-toe arbiter.
//!
//! - **Config**: optional `arbiter.toml` with player names and log filter
//! - **Scripts**: TOML match scripts replayed move by move
//! - **Runner**: script replay and hot-seat play over an in-memory arbiter

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod runner;
mod script;

pub use cli::{Cli, Command};
pub use config::{CliConfig, ConfigError};
pub use runner::{Command as HotSeatCommand, HotSeat, Rejection, ReplayReport, parse_command, replay};
pub use script::{MatchScript, ScriptedMove};
