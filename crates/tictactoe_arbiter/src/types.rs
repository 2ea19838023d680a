//! Core domain types for tic-tac-toe.

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Mark placed by a player.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, strum::EnumIter,
)]
pub enum Sign {
    /// Placed by the initiating player (moves first).
    X,
    /// Placed by the opponent.
    O,
}

impl Sign {
    /// Returns the other sign.
    pub fn opponent(self) -> Self {
        match self {
            Sign::X => Sign::O,
            Sign::O => Sign::X,
        }
    }

    /// Sign assigned to the player at `index` in the player pair.
    pub fn for_player_index(index: usize) -> Self {
        if index % 2 == 0 { Sign::X } else { Sign::O }
    }
}

/// A single board cell: empty until written once.
pub type Cell = Option<Sign>;

/// A board coordinate as submitted by a player.
///
/// Any `u8` pair is representable; bounds are checked during move
/// validation, not at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("({row}, {column})")]
pub struct Tile {
    /// Zero-based row.
    pub row: u8,
    /// Zero-based column.
    pub column: u8,
}

impl Tile {
    /// Creates a tile.
    pub fn new(row: u8, column: u8) -> Self {
        Self { row, column }
    }

    /// Whether the tile lies on the 3x3 board.
    pub fn in_bounds(&self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.column as usize) < BOARD_SIZE
    }

    /// All nine on-board tiles in row-major order.
    pub fn all() -> impl Iterator<Item = Tile> {
        (0..BOARD_SIZE as u8).flat_map(|row| (0..BOARD_SIZE as u8).map(move |column| Tile::new(row, column)))
    }
}

/// 3x3 tic-tac-toe board.
///
/// Cells are write-once: [`Board::place`] refuses to overwrite an occupied
/// cell, so a mark can never change or clear after it lands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from raw rows.
    ///
    /// Used to rehydrate a stored record; no game rules are checked.
    pub fn from_rows(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Returns the cell at `tile`, or `None` if the tile is off the board.
    pub fn get(&self, tile: Tile) -> Option<Cell> {
        self.cells
            .get(tile.row as usize)
            .and_then(|row| row.get(tile.column as usize))
            .copied()
    }

    /// Checks if the cell at `tile` is on the board and empty.
    pub fn is_empty_at(&self, tile: Tile) -> bool {
        matches!(self.get(tile), Some(None))
    }

    /// Writes `sign` into an empty cell.
    ///
    /// # Errors
    ///
    /// [`GameError::TileOutOfBounds`] for an off-board tile and
    /// [`GameError::TileAlreadySet`] for an occupied one.
    #[instrument(skip(self))]
    pub(crate) fn place(&mut self, tile: Tile, sign: Sign) -> Result<(), GameError> {
        let cell = self
            .cells
            .get_mut(tile.row as usize)
            .and_then(|row| row.get_mut(tile.column as usize))
            .ok_or(GameError::TileOutOfBounds)?;
        if cell.is_some() {
            return Err(GameError::TileAlreadySet);
        }
        *cell = Some(sign);
        Ok(())
    }

    /// Rows of the board, top to bottom.
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Iterates every cell with its tile, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Tile, Cell)> + '_ {
        Tile::all().map(|tile| (tile, self.cells[tile.row as usize][tile.column as usize]))
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Number of cells holding `sign`.
    pub fn count(&self, sign: Sign) -> usize {
        self.cells.iter().flatten().filter(|cell| **cell == Some(sign)).count()
    }

    /// Empty on-board tiles, row-major.
    pub fn empty_tiles(&self) -> Vec<Tile> {
        self.cells().filter(|(_, cell)| cell.is_none()).map(|(tile, _)| tile).collect()
    }

    /// Formats the board as a human-readable grid.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let symbol = match cell {
                    Some(sign) => sign.to_string(),
                    None => ".".to_string(),
                };
                result.push_str(&symbol);
                if c < BOARD_SIZE - 1 {
                    result.push('|');
                }
            }
            if r < BOARD_SIZE - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}
