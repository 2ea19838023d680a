//! Turn count invariant: the turn counter matches the number of marks.

use super::Invariant;
use crate::GameRecord;

/// Invariant: occupied cells equal `turn - 1` while active and `turn` once
/// terminal.
///
/// The terminating move places a mark without advancing the counter, so a
/// finished record has exactly one more mark than an active one would.
pub struct TurnCountInvariant;

impl Invariant<GameRecord> for TurnCountInvariant {
    fn holds(record: &GameRecord) -> bool {
        let turn = *record.turn() as usize;
        if turn == 0 {
            return false;
        }

        let occupied = record.board().occupied();
        if record.is_active() {
            occupied == turn - 1
        } else {
            occupied == turn
        }
    }

    fn description() -> &'static str {
        "Occupied cells match the turn counter"
    }
}
