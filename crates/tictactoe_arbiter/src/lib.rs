//! Authoritative tic-tac-toe arbiter.
//!
//! A trusted, deterministic engine for two-player tic-tac-toe. Clients can
//! only change a game by submitting moves; every move is validated against
//! the stored record before anything changes.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Sign`], [`Tile`] and the [`GameRecord`] that
//!   holds one match
//! - **Rules**: pure win and tie detection in [`rules`]
//! - **Contracts**: ordered move preconditions plus postconditions backed
//!   by [`invariants`]
//! - **Engine**: [`GameEngine`], the only producer of new records
//! - **Store**: the [`GameStore`] seam and the in-memory [`MemoryStore`]
//! - **Arbiter**: [`Arbiter`], engine plus store behind game handles
//!
//! # Example
//!
//! ```
//! use tictactoe_arbiter::{Arbiter, GameId, GameStatus, MemoryStore, PlayerId, Tile};
//!
//! # fn main() -> Result<(), tictactoe_arbiter::ArbiterError> {
//! let arbiter = Arbiter::new(MemoryStore::new());
//! let (alice, bob) = (PlayerId::new("alice"), PlayerId::new("bob"));
//! let game = GameId::new("game-1");
//!
//! arbiter.setup_game(game.clone(), alice.clone(), bob.clone())?;
//! let record = arbiter.play_move(&game, &alice, Tile::new(1, 1))?;
//! assert_eq!(*record.turn(), 2);
//! assert_eq!(record.status(), &GameStatus::Active);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod arbiter;
mod contracts;
mod engine;
mod error;
mod identity;
mod record;
mod store;
mod types;

pub mod invariants;
pub mod rules;

pub use action::Move;
pub use arbiter::Arbiter;
pub use contracts::{Contract, GameActive, LegalMove, MoveContract, PlayersTurn, TileInBounds, TileIsEmpty};
pub use engine::GameEngine;
pub use error::{ArbiterError, ErrorCode, GameError};
pub use identity::{GameId, PlayerId};
pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, RecordInvariants, TransitionInvariant, TransitionInvariantSet,
    TransitionInvariants,
};
pub use record::{GameRecord, GameStatus};
pub use store::{GameStore, MemoryStore, StoreError, StoreErrorKind};
pub use types::{BOARD_SIZE, Board, CELL_COUNT, Cell, Sign, Tile};
