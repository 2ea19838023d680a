//! Status consistency invariant: the status agrees with the board.

use super::Invariant;
use crate::rules::{is_full, is_tie, winning_line};
use crate::{GameRecord, GameStatus};

/// Invariant: the status is exactly what the board implies.
///
/// - `Active`: no completed line and at least one empty cell.
/// - `Won`: a completed line exists, it belongs to the player who moved
///   last (the turn does not advance on the winning move) and that player
///   is the recorded winner.
/// - `Tie`: full board, no completed line.
pub struct StatusConsistentInvariant;

impl Invariant<GameRecord> for StatusConsistentInvariant {
    fn holds(record: &GameRecord) -> bool {
        let board = record.board();
        match record.status() {
            GameStatus::Active => winning_line(board).is_none() && !is_full(board),
            GameStatus::Won { winner } => match winning_line(board) {
                Some((_, sign)) => {
                    sign == record.current_sign() && record.player_for(sign) == winner
                }
                None => false,
            },
            GameStatus::Tie => is_tie(board),
        }
    }

    fn description() -> &'static str {
        "Status agrees with the board"
    }
}
