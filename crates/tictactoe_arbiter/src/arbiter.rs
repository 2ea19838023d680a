//! Handle-based entry point binding the engine to a store.

use crate::engine::GameEngine;
use crate::error::ArbiterError;
use crate::identity::{GameId, PlayerId};
use crate::record::GameRecord;
use crate::store::GameStore;
use crate::types::Tile;
use tracing::{info, instrument, warn};

/// Trusted arbiter for any number of independent games.
///
/// Moves against one game are serialized by the store; moves against
/// different games may run in parallel from any thread.
#[derive(Debug, Clone, Default)]
pub struct Arbiter<S> {
    store: S,
}

impl<S: GameStore> Arbiter<S> {
    /// Creates an arbiter over `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Sets up a game and persists it under `id`.
    ///
    /// # Errors
    ///
    /// A store error if `id` is already in use.
    #[instrument(skip(self), fields(game_id = %id))]
    pub fn setup_game(&self, id: GameId, initiator: PlayerId, opponent: PlayerId) -> Result<GameRecord, ArbiterError> {
        let record = GameEngine::setup_game(initiator, opponent)?;
        self.store.insert(id, record.clone())?;
        Ok(record)
    }

    /// Plays a move against the stored game and returns the updated record.
    ///
    /// # Errors
    ///
    /// The engine's rejection (see [`GameEngine::play_move`]) or a store
    /// error. Either way the stored record is left as it was.
    #[instrument(skip(self), fields(game_id = %id, actor = %actor, tile = %tile))]
    pub fn play_move(&self, id: &GameId, actor: &PlayerId, tile: Tile) -> Result<GameRecord, ArbiterError> {
        let result = self.store.update(id, |record| GameEngine::play_move(record, actor, tile));
        match &result {
            Ok(record) => info!(turn = *record.turn(), status = %record.status(), "Move accepted"),
            Err(err) => warn!(error = %err, code = ?err.code(), "Move rejected"),
        }
        result
    }

    /// Returns the current record.
    #[instrument(skip(self), fields(game_id = %id))]
    pub fn fetch(&self, id: &GameId) -> Result<GameRecord, ArbiterError> {
        Ok(self.store.fetch(id)?)
    }
}
