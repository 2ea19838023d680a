//! First-class move actions.
//!
//! A move is the player's intent. It can be validated against a record
//! before anything is applied, logged, and replayed.

use crate::identity::PlayerId;
use crate::types::Tile;
use serde::{Deserialize, Serialize};

/// A player placing their sign on a tile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: PlayerId,
    /// Where the player wants their sign.
    pub tile: Tile,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: impl Into<PlayerId>, tile: Tile) -> Self {
        Self {
            player: player.into(),
            tile,
        }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> &PlayerId {
        &self.player
    }

    /// Returns the target tile.
    pub fn tile(&self) -> Tile {
        self.tile
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.tile)
    }
}
