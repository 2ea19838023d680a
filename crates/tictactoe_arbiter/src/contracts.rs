//! Move validation as contracts.
//!
//! Preconditions are checked in a fixed order, and that order is the
//! tie-break when a move fails several checks at once: turn ownership,
//! then bounds, then the terminal guard, then occupancy.

use crate::action::Move;
use crate::error::GameError;
use crate::invariants::{InvariantSet, RecordInvariants, TransitionInvariantSet, TransitionInvariants, describe};
use crate::record::GameRecord;
use tracing::{debug, instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions of a state transition.
///
/// - Precondition: {P(state, action)} must hold before applying action
/// - Postcondition: {Q(before, after)} must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the mover is the player expected at this turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with [`GameError::NotPlayersTurn`] carrying (expected, actual).
    #[instrument(skip(record), fields(turn = *record.turn()))]
    pub fn check(mov: &Move, record: &GameRecord) -> Result<(), GameError> {
        let expected = record.current_player();
        if mov.player() != expected {
            warn!(expected = %expected, actual = %mov.player(), "Move out of turn");
            return Err(GameError::NotPlayersTurn {
                expected: expected.clone(),
                actual: mov.player().clone(),
            });
        }
        Ok(())
    }
}

/// Precondition: the tile lies on the board.
pub struct TileInBounds;

impl TileInBounds {
    /// Fails with [`GameError::TileOutOfBounds`].
    #[instrument]
    pub fn check(mov: &Move) -> Result<(), GameError> {
        if mov.tile().in_bounds() {
            Ok(())
        } else {
            Err(GameError::TileOutOfBounds)
        }
    }
}

/// Precondition: the game still accepts moves.
pub struct GameActive;

impl GameActive {
    /// Fails with [`GameError::GameAlreadyOver`].
    #[instrument(skip(record), fields(status = %record.status()))]
    pub fn check(record: &GameRecord) -> Result<(), GameError> {
        if record.is_active() {
            Ok(())
        } else {
            Err(GameError::GameAlreadyOver)
        }
    }
}

/// Precondition: the target cell is empty.
pub struct TileIsEmpty;

impl TileIsEmpty {
    /// Fails with [`GameError::TileAlreadySet`].
    #[instrument(skip(record))]
    pub fn check(mov: &Move, record: &GameRecord) -> Result<(), GameError> {
        if record.board().is_empty_at(mov.tile()) {
            Ok(())
        } else {
            Err(GameError::TileAlreadySet)
        }
    }
}

/// Composite precondition: all four checks, in precedence order.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip_all, fields(mov = %mov))]
    pub fn check(mov: &Move, record: &GameRecord) -> Result<(), GameError> {
        PlayersTurn::check(mov, record)?;
        TileInBounds::check(mov)?;
        GameActive::check(record)?;
        TileIsEmpty::check(mov, record)?;
        debug!("Move is legal");
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions: see [`LegalMove`].
///
/// Postconditions:
/// - the resulting record satisfies [`RecordInvariants`]
/// - the step satisfies [`TransitionInvariants`]
pub struct MoveContract;

impl Contract<GameRecord, Move> for MoveContract {
    fn pre(record: &GameRecord, action: &Move) -> Result<(), GameError> {
        LegalMove::check(action, record)
    }

    fn post(before: &GameRecord, after: &GameRecord) -> Result<(), GameError> {
        let mut violations = Vec::new();
        if let Err(found) = RecordInvariants::check_all(after) {
            violations.extend(found);
        }
        if let Err(found) = TransitionInvariants::check_all(before, after) {
            violations.extend(found);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            let descriptions = describe(&violations);
            warn!(%descriptions, "Postcondition failed");
            Err(GameError::InvariantViolation(format!(
                "Postcondition failed: {}",
                descriptions
            )))
        }
    }
}
