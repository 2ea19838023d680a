//! The persisted state of one match.

use crate::identity::PlayerId;
use crate::types::{Board, Sign};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Status of a match.
///
/// Only `Active -> Won` and `Active -> Tie` are possible; both end states
/// are terminal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Moves are being accepted.
    Active,
    /// A player completed a line.
    Won {
        /// The player who placed the winning mark.
        winner: PlayerId,
    },
    /// The board filled without a completed line.
    Tie,
}

impl GameStatus {
    /// Whether the game still accepts moves.
    pub fn is_active(&self) -> bool {
        matches!(self, GameStatus::Active)
    }

    /// Whether the game has ended.
    pub fn is_terminal(&self) -> bool {
        !self.is_active()
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Active => write!(f, "active"),
            GameStatus::Won { winner } => write!(f, "won by {}", winner),
            GameStatus::Tie => write!(f, "tie"),
        }
    }
}

/// Full state of one match.
///
/// Records are produced by [`GameEngine`](crate::GameEngine) only; callers
/// get read access through the getters. Whose turn it is gets derived from
/// `turn` and the player order rather than stored.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameRecord {
    /// Initiator (X) then opponent (O).
    players: [PlayerId; 2],
    /// 1-based move counter.
    turn: u8,
    /// Current status.
    status: GameStatus,
    /// The board.
    board: Board,
}

impl GameRecord {
    pub(crate) fn new(initiator: PlayerId, opponent: PlayerId) -> Self {
        Self {
            players: [initiator, opponent],
            turn: 1,
            status: GameStatus::Active,
            board: Board::new(),
        }
    }

    /// Rebuilds a record from stored parts without checking any rule.
    ///
    /// Storage collaborators use this to rehydrate what they persisted;
    /// run [`RecordInvariants`](crate::RecordInvariants) over the result
    /// if the source is not trusted.
    ///
    /// The engine only checks postconditions in debug builds. A release
    /// build will accept a move against an inconsistent record and hand
    /// back an inconsistent successor, so rehydrated records must be
    /// validated before they reach [`GameEngine`](crate::GameEngine).
    pub fn from_parts(players: [PlayerId; 2], turn: u8, status: GameStatus, board: Board) -> Self {
        Self {
            players,
            turn,
            status,
            board,
        }
    }

    /// Index into `players` of whoever moves at the current turn.
    pub fn current_index(&self) -> usize {
        (self.turn.saturating_sub(1) as usize) % 2
    }

    /// The player expected to move now.
    pub fn current_player(&self) -> &PlayerId {
        &self.players[self.current_index()]
    }

    /// Sign the current player places.
    pub fn current_sign(&self) -> Sign {
        Sign::for_player_index(self.current_index())
    }

    /// Sign assigned to `player`, if they are in this match.
    ///
    /// When both seats hold the same identity the first seat wins.
    pub fn sign_of(&self, player: &PlayerId) -> Option<Sign> {
        self.players
            .iter()
            .position(|p| p == player)
            .map(Sign::for_player_index)
    }

    /// The player who placed `sign`.
    pub fn player_for(&self, sign: Sign) -> &PlayerId {
        match sign {
            Sign::X => &self.players[0],
            Sign::O => &self.players[1],
        }
    }

    /// Whether the game still accepts moves.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// The winner, if the game was won.
    pub fn winner(&self) -> Option<&PlayerId> {
        match &self.status {
            GameStatus::Won { winner } => Some(winner),
            _ => None,
        }
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    pub(crate) fn advance_turn(&mut self) {
        self.turn = self.turn.saturating_add(1);
    }
}
