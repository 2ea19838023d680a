//! Storage seam for game records.
//!
//! A [`GameStore`] owns records by [`GameId`] and is responsible for
//! serializing writers to the same record. [`MemoryStore`] is the in-process
//! implementation: the map sits behind an `RwLock`, each record behind its
//! own `Mutex`, so different games never contend with each other.

use crate::error::{ArbiterError, GameError};
use crate::identity::GameId;
use crate::record::GameRecord;
use derive_more::{Display, Error};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use tracing::{debug, info, instrument, warn};

/// What went wrong in a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum StoreErrorKind {
    /// No record under the requested id.
    #[display("not found")]
    NotFound,
    /// A record already exists under the id.
    #[display("already exists")]
    AlreadyExists,
    /// A lock was poisoned by a panicking writer.
    #[display("poisoned")]
    Poisoned,
}

/// Store error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Store error ({}): {} at {}:{}", kind, message, file, line)]
pub struct StoreError {
    /// Failure category.
    pub kind: StoreErrorKind,
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new store error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(kind: StoreErrorKind, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }

    #[track_caller]
    fn not_found(id: &GameId) -> Self {
        Self::new(StoreErrorKind::NotFound, format!("no game '{}'", id))
    }

    #[track_caller]
    fn poisoned(id: &GameId) -> Self {
        Self::new(StoreErrorKind::Poisoned, format!("lock poisoned for '{}'", id))
    }
}

/// Persistence collaborator for game records.
///
/// Implementations must give [`GameStore::update`] exclusive access to the
/// record for the whole call, and must store the returned record only when
/// the transition succeeds.
pub trait GameStore: Send + Sync {
    /// Stores a new record.
    ///
    /// # Errors
    ///
    /// [`StoreErrorKind::AlreadyExists`] if the id is taken.
    fn insert(&self, id: GameId, record: GameRecord) -> Result<(), StoreError>;

    /// Returns a copy of the stored record.
    ///
    /// # Errors
    ///
    /// [`StoreErrorKind::NotFound`] for an unknown id.
    fn fetch(&self, id: &GameId) -> Result<GameRecord, StoreError>;

    /// Runs `transition` against the stored record while holding it
    /// exclusively, committing the result only if it is `Ok`.
    fn update<F>(&self, id: &GameId, transition: F) -> Result<GameRecord, ArbiterError>
    where
        F: FnOnce(&GameRecord) -> Result<GameRecord, GameError>;
}

/// In-memory [`GameStore`].
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    games: Arc<RwLock<HashMap<GameId, Arc<Mutex<GameRecord>>>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored games.
    ///
    /// Reports zero if the map lock is poisoned.
    pub fn len(&self) -> usize {
        match self.games.read() {
            Ok(games) => games.len(),
            Err(_) => {
                warn!("Game map lock poisoned, reporting an empty store");
                0
            }
        }
    }

    /// Whether no game is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[instrument(skip(self))]
    fn slot(&self, id: &GameId) -> Result<Arc<Mutex<GameRecord>>, StoreError> {
        let games = self.games.read().map_err(|_| StoreError::poisoned(id))?;
        games.get(id).cloned().ok_or_else(|| {
            debug!("Game not found");
            StoreError::not_found(id)
        })
    }
}

impl GameStore for MemoryStore {
    #[instrument(skip(self, record), fields(game_id = %id))]
    fn insert(&self, id: GameId, record: GameRecord) -> Result<(), StoreError> {
        let mut games = self.games.write().map_err(|_| StoreError::poisoned(&id))?;
        if games.contains_key(&id) {
            warn!("Game id already taken");
            return Err(StoreError::new(
                StoreErrorKind::AlreadyExists,
                format!("game '{}' already exists", id),
            ));
        }
        games.insert(id, Arc::new(Mutex::new(record)));
        info!(count = games.len(), "Game stored");
        Ok(())
    }

    #[instrument(skip(self), fields(game_id = %id))]
    fn fetch(&self, id: &GameId) -> Result<GameRecord, StoreError> {
        let slot = self.slot(id)?;
        let record = slot.lock().map_err(|_| StoreError::poisoned(id))?;
        Ok(record.clone())
    }

    #[instrument(skip(self, transition), fields(game_id = %id))]
    fn update<F>(&self, id: &GameId, transition: F) -> Result<GameRecord, ArbiterError>
    where
        F: FnOnce(&GameRecord) -> Result<GameRecord, GameError>,
    {
        let slot = self.slot(id)?;
        let mut record = slot.lock().map_err(|_| StoreError::poisoned(id))?;
        let next = transition(&*record)?;
        *record = next.clone();
        debug!(turn = *next.turn(), status = %next.status(), "Game updated");
        Ok(next)
    }
}
