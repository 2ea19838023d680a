//! Tie detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::types::{Board, CELL_COUNT};
use tracing::instrument;

/// Checks if every cell is occupied.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.occupied() == CELL_COUNT
}

/// A full board with no completed line.
#[instrument(skip(board))]
pub fn is_tie(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
