//! Error taxonomy for the arbiter.
//!
//! Rejected moves are reported with stable numeric codes that clients key
//! off, so the values below must never be renumbered.

use crate::identity::PlayerId;
use crate::store::StoreError;
use serde::{Deserialize, Serialize};

/// Wire-stable identifier of a move rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::IntoStaticStr, strum::EnumIter)]
#[repr(u32)]
pub enum ErrorCode {
    /// Row or column is 3 or more.
    TileOutOfBounds = 6000,
    /// Target cell already holds a sign.
    TileAlreadySet = 6001,
    /// The game has already been won or tied.
    GameAlreadyOver = 6002,
    /// The acting player is not the one expected for this turn.
    NotPlayersTurn = 6003,
}

impl ErrorCode {
    /// Numeric value sent over the wire.
    pub fn as_u32(self) -> u32 {
        self as u32
    }

    /// Symbolic name, e.g. `"TileOutOfBounds"`.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Decodes a wire value.
    pub fn from_u32(code: u32) -> Option<Self> {
        match code {
            6000 => Some(ErrorCode::TileOutOfBounds),
            6001 => Some(ErrorCode::TileAlreadySet),
            6002 => Some(ErrorCode::GameAlreadyOver),
            6003 => Some(ErrorCode::NotPlayersTurn),
            _ => None,
        }
    }
}

impl From<ErrorCode> for u32 {
    fn from(code: ErrorCode) -> Self {
        code.as_u32()
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.as_u32())
    }
}

/// Reasons a move (or a transition) is rejected.
///
/// The four coded variants are the expected, recoverable rejections. They
/// are raised before any mutation, so the record is always left as it was.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, strum::IntoStaticStr)]
pub enum GameError {
    /// Row or column outside `0..3`.
    #[display("Tile is out of bounds")]
    TileOutOfBounds,

    /// The target cell is already occupied.
    #[display("Tile is already set")]
    TileAlreadySet,

    /// The game is no longer active.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// Someone other than the expected player tried to move.
    #[display("Not this player's turn: expected {expected}, got {actual}")]
    NotPlayersTurn {
        /// Player whose turn it is.
        expected: PlayerId,
        /// Player who attempted the move.
        actual: PlayerId,
    },

    /// A postcondition failed after applying a move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for GameError {}

impl GameError {
    /// Wire code, or `None` for internal failures that have no code.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            GameError::TileOutOfBounds => Some(ErrorCode::TileOutOfBounds),
            GameError::TileAlreadySet => Some(ErrorCode::TileAlreadySet),
            GameError::GameAlreadyOver => Some(ErrorCode::GameAlreadyOver),
            GameError::NotPlayersTurn { .. } => Some(ErrorCode::NotPlayersTurn),
            GameError::InvariantViolation(_) => None,
        }
    }

    /// Symbolic variant name.
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// `(expected, actual)` players for a turn-ownership rejection.
    pub fn compared_values(&self) -> Option<(&PlayerId, &PlayerId)> {
        match self {
            GameError::NotPlayersTurn { expected, actual } => Some((expected, actual)),
            _ => None,
        }
    }
}

/// Failure of an arbiter operation: either the game rejected the move or
/// the store could not serve the record.
#[derive(Debug, Clone, derive_more::Display, derive_more::From)]
pub enum ArbiterError {
    /// Rule violation; the stored record is unchanged.
    #[display("{}", _0)]
    Game(GameError),
    /// Storage failure; the stored record is unchanged.
    #[display("{}", _0)]
    Store(StoreError),
}

impl std::error::Error for ArbiterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArbiterError::Game(err) => Some(err),
            ArbiterError::Store(err) => Some(err),
        }
    }
}

impl ArbiterError {
    /// The game error, if this is a rule violation.
    pub fn as_game(&self) -> Option<&GameError> {
        match self {
            ArbiterError::Game(err) => Some(err),
            ArbiterError::Store(_) => None,
        }
    }

    /// Wire code of the underlying rejection, if any.
    pub fn code(&self) -> Option<ErrorCode> {
        self.as_game().and_then(GameError::code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(ErrorCode::TileOutOfBounds.as_u32(), 6000);
        assert_eq!(ErrorCode::TileAlreadySet.as_u32(), 6001);
        assert_eq!(ErrorCode::GameAlreadyOver.as_u32(), 6002);
        assert_eq!(ErrorCode::NotPlayersTurn.as_u32(), 6003);
    }

    #[test]
    fn test_code_decoding() {
        for code in ErrorCode::iter() {
            assert_eq!(ErrorCode::from_u32(code.as_u32()), Some(code));
        }
        assert_eq!(ErrorCode::from_u32(6004), None);
        assert_eq!(ErrorCode::from_u32(0), None);
    }

    #[test]
    fn test_error_names_match_codes() {
        let errors = [
            GameError::TileOutOfBounds,
            GameError::TileAlreadySet,
            GameError::GameAlreadyOver,
            GameError::NotPlayersTurn {
                expected: PlayerId::new("alice"),
                actual: PlayerId::new("bob"),
            },
        ];
        for err in errors {
            let code = err.code().expect("coded error");
            assert_eq!(err.name(), code.name());
        }
    }

    #[test]
    fn test_compared_values() {
        let err = GameError::NotPlayersTurn {
            expected: PlayerId::new("bob"),
            actual: PlayerId::new("alice"),
        };
        let (expected, actual) = err.compared_values().unwrap();
        assert_eq!(expected.as_str(), "bob");
        assert_eq!(actual.as_str(), "alice");
        assert!(GameError::TileAlreadySet.compared_values().is_none());
    }

    #[test]
    fn test_invariant_violation_has_no_code() {
        let err = GameError::InvariantViolation("broken".to_string());
        assert_eq!(err.code(), None);
        assert_eq!(err.name(), "InvariantViolation");
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn test_code_display() {
        assert_eq!(ErrorCode::TileAlreadySet.to_string(), "TileAlreadySet (6001)");
    }
}
