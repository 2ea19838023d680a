//! The game engine: the only producer of new game records.
//!
//! Every operation here is a pure transition. [`GameEngine::play_move`]
//! reads an immutable snapshot and returns either a complete successor
//! record or an error, so a caller never observes a half-applied move.

use crate::action::Move;
use crate::contracts::{Contract, MoveContract};
use crate::error::GameError;
use crate::identity::PlayerId;
use crate::record::{GameRecord, GameStatus};
use crate::rules::{is_full, winning_line};
use crate::types::Tile;
use tracing::{debug, info, instrument, warn};

/// Orchestrates game setup and moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameEngine;

impl GameEngine {
    /// Creates a fresh record: `players = [initiator, opponent]`, turn 1,
    /// empty board, active.
    ///
    /// The initiator plays X and moves first. Identical identities are
    /// accepted; the engine only warns about them.
    #[instrument(fields(initiator = %initiator, opponent = %opponent))]
    pub fn setup_game(initiator: PlayerId, opponent: PlayerId) -> Result<GameRecord, GameError> {
        if initiator == opponent {
            warn!("Both seats hold the same identity");
        }
        let record = GameRecord::new(initiator, opponent);
        info!("Game set up");
        Ok(record)
    }

    /// Applies `actor`'s sign at `tile` and returns the successor record.
    ///
    /// # Errors
    ///
    /// Checked in this order, first failure wins:
    /// [`GameError::NotPlayersTurn`], [`GameError::TileOutOfBounds`],
    /// [`GameError::GameAlreadyOver`], [`GameError::TileAlreadySet`].
    /// Debug builds also return [`GameError::InvariantViolation`] if the
    /// successor breaks a record or transition invariant.
    #[instrument(skip(record), fields(turn = *record.turn(), actor = %actor, tile = %tile))]
    pub fn play_move(record: &GameRecord, actor: &PlayerId, tile: Tile) -> Result<GameRecord, GameError> {
        Self::apply(record, &Move::new(actor.clone(), tile))
    }

    /// Applies a first-class [`Move`]; see [`GameEngine::play_move`].
    #[instrument(skip_all, fields(mov = %action))]
    pub fn apply(record: &GameRecord, action: &Move) -> Result<GameRecord, GameError> {
        MoveContract::pre(record, action)?;

        let mut next = record.clone();
        let sign = next.current_sign();
        next.board_mut().place(action.tile(), sign)?;

        if let Some((line, _)) = winning_line(next.board()) {
            info!(winner = %action.player(), ?line, "Game won");
            next.set_status(GameStatus::Won {
                winner: action.player().clone(),
            });
        } else if is_full(next.board()) {
            info!("Game tied");
            next.set_status(GameStatus::Tie);
        } else {
            next.advance_turn();
            debug!(turn = *next.turn(), "Turn advanced");
        }

        #[cfg(debug_assertions)]
        MoveContract::post(record, &next)?;

        Ok(next)
    }

    /// Plays `moves` from a fresh game, stopping at the first rejection.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(initiator: PlayerId, opponent: PlayerId, moves: &[Move]) -> Result<GameRecord, GameError> {
        let mut record = Self::setup_game(initiator, opponent)?;
        for action in moves {
            record = Self::apply(&record, action)?;
        }
        Ok(record)
    }

    /// Tiles the current player may still take; empty once the game ends.
    pub fn legal_tiles(record: &GameRecord) -> Vec<Tile> {
        if record.is_active() {
            record.board().empty_tiles()
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Sign};

    fn alice() -> PlayerId {
        PlayerId::new("alice")
    }

    fn bob() -> PlayerId {
        PlayerId::new("bob")
    }

    #[test]
    fn test_setup_game() {
        let record = GameEngine::setup_game(alice(), bob()).unwrap();
        assert_eq!(*record.turn(), 1);
        assert_eq!(record.status(), &GameStatus::Active);
        assert_eq!(record.board(), &Board::new());
        assert_eq!(record.players(), &[alice(), bob()]);
    }

    #[test]
    fn test_setup_accepts_identical_players() {
        let record = GameEngine::setup_game(alice(), alice()).unwrap();
        assert_eq!(record.players(), &[alice(), alice()]);
        // The same identity can then move on both turns.
        let record = GameEngine::play_move(&record, &alice(), Tile::new(0, 0)).unwrap();
        let record = GameEngine::play_move(&record, &alice(), Tile::new(1, 1)).unwrap();
        assert_eq!(record.board().get(Tile::new(1, 1)), Some(Some(Sign::O)));
    }

    #[test]
    fn test_first_move() {
        let record = GameEngine::setup_game(alice(), bob()).unwrap();
        let next = GameEngine::play_move(&record, &alice(), Tile::new(0, 0)).unwrap();

        assert_eq!(*next.turn(), 2);
        assert!(next.is_active());
        assert_eq!(next.board().get(Tile::new(0, 0)), Some(Some(Sign::X)));
        assert_eq!(next.current_player(), &bob());
        // The snapshot is untouched.
        assert_eq!(*record.turn(), 1);
        assert_eq!(record.board().occupied(), 0);
    }

    #[test]
    fn test_rejection_leaves_record_unchanged() {
        let record = GameEngine::setup_game(alice(), bob()).unwrap();
        let snapshot = record.clone();
        assert!(GameEngine::play_move(&record, &bob(), Tile::new(0, 0)).is_err());
        assert_eq!(record, snapshot);
    }

    #[test]
    fn test_replay_win() {
        let moves = [
            Move::new(alice(), Tile::new(0, 0)),
            Move::new(bob(), Tile::new(1, 0)),
            Move::new(alice(), Tile::new(0, 1)),
            Move::new(bob(), Tile::new(1, 1)),
            Move::new(alice(), Tile::new(0, 2)),
        ];
        let record = GameEngine::replay(alice(), bob(), &moves).unwrap();
        assert_eq!(record.winner(), Some(&alice()));
        assert_eq!(*record.turn(), 5);
    }

    #[test]
    fn test_replay_stops_at_first_error() {
        let moves = [
            Move::new(alice(), Tile::new(0, 0)),
            Move::new(alice(), Tile::new(1, 0)),
            Move::new(bob(), Tile::new(1, 0)),
        ];
        let err = GameEngine::replay(alice(), bob(), &moves).unwrap_err();
        assert_eq!(err.compared_values(), Some((&bob(), &alice())));
    }

    #[test]
    fn test_legal_tiles() {
        let record = GameEngine::setup_game(alice(), bob()).unwrap();
        assert_eq!(GameEngine::legal_tiles(&record).len(), 9);

        let record = GameEngine::play_move(&record, &alice(), Tile::new(1, 1)).unwrap();
        let tiles = GameEngine::legal_tiles(&record);
        assert_eq!(tiles.len(), 8);
        assert!(!tiles.contains(&Tile::new(1, 1)));
    }

    #[test]
    fn test_legal_tiles_empty_after_win() {
        let moves = [
            Move::new(alice(), Tile::new(0, 0)),
            Move::new(bob(), Tile::new(1, 0)),
            Move::new(alice(), Tile::new(1, 1)),
            Move::new(bob(), Tile::new(2, 0)),
            Move::new(alice(), Tile::new(2, 2)),
        ];
        let record = GameEngine::replay(alice(), bob(), &moves).unwrap();
        assert_eq!(record.winner(), Some(&alice()));
        assert!(GameEngine::legal_tiles(&record).is_empty());
    }
}
