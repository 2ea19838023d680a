//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Sign, Tile};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the eight winning triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Row `0..3`.
    Row(u8),
    /// Column `0..3`.
    Column(u8),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// All eight lines: rows, then columns, then diagonals.
    pub const ALL: [Line; 8] = [
        Line::Row(0),
        Line::Row(1),
        Line::Row(2),
        Line::Column(0),
        Line::Column(1),
        Line::Column(2),
        Line::Diagonal,
        Line::AntiDiagonal,
    ];

    /// The three tiles making up this line.
    pub fn tiles(self) -> [Tile; 3] {
        match self {
            Line::Row(r) => [Tile::new(r, 0), Tile::new(r, 1), Tile::new(r, 2)],
            Line::Column(c) => [Tile::new(0, c), Tile::new(1, c), Tile::new(2, c)],
            Line::Diagonal => [Tile::new(0, 0), Tile::new(1, 1), Tile::new(2, 2)],
            Line::AntiDiagonal => [Tile::new(0, 2), Tile::new(1, 1), Tile::new(2, 0)],
        }
    }
}

/// Returns the first completed line and the sign that owns it.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Line, Sign)> {
    Line::ALL.into_iter().find_map(|line| {
        let [a, b, c] = line.tiles();
        match (board.get(a)?, board.get(b)?, board.get(c)?) {
            (Some(x), Some(y), Some(z)) if x == y && y == z => Some((line, x)),
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(sign)` if a sign fills any row, column or diagonal.
/// The engine runs this once per move, and a single placement can only
/// complete lines of its own sign, so scan order does not matter.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Sign> {
    winning_line(board).map(|(_, sign)| sign)
}
