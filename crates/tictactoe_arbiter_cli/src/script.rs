//! Match scripts: a TOML description of players and moves to replay.
//!
//! ```toml
//! game_id = "demo"
//! initiator = "alice"
//! opponent = "bob"
//!
//! [[moves]]
//! player = "alice"
//! row = 0
//! column = 0
//! ```

use crate::config::ConfigError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_arbiter::{GameId, Move, PlayerId, Tile};
use tracing::{debug, info, instrument};

/// One scripted move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedMove {
    /// Identity submitting the move.
    pub player: String,
    /// Target row.
    pub row: u8,
    /// Target column.
    pub column: u8,
}

impl ScriptedMove {
    /// Converts into an engine move.
    pub fn to_move(&self) -> Move {
        Move::new(PlayerId::new(self.player.as_str()), Tile::new(self.row, self.column))
    }
}

/// A full match script.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchScript {
    /// Handle the game is stored under.
    #[serde(default = "default_game_id")]
    game_id: String,
    /// First seat (X).
    initiator: String,
    /// Second seat (O).
    opponent: String,
    /// Moves in submission order, rejected ones included.
    #[serde(default)]
    moves: Vec<ScriptedMove>,
}

fn default_game_id() -> String {
    "replay".to_string()
}

impl MatchScript {
    /// Parses a script from TOML text.
    #[instrument(skip(content))]
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let script: Self =
            toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse script: {}", e)))?;
        debug!(moves = script.moves.len(), "Script parsed");
        Ok(script)
    }

    /// Reads and parses a script file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read script: {}", e)))?;
        let script = Self::parse(&content)?;
        info!(game_id = %script.game_id, moves = script.moves.len(), "Script loaded");
        Ok(script)
    }

    /// Store handle for the replayed game.
    pub fn id(&self) -> GameId {
        GameId::new(self.game_id.as_str())
    }

    /// The two seats, initiator first.
    pub fn players(&self) -> (PlayerId, PlayerId) {
        (PlayerId::new(self.initiator.as_str()), PlayerId::new(self.opponent.as_str()))
    }
}
