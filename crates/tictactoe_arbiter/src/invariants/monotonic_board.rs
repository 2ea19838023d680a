//! Monotonic board invariant: marks never change once set.

use super::TransitionInvariant;
use crate::GameRecord;

/// Invariant: a move adds exactly one mark and leaves every existing mark
/// where it was.
pub struct MonotonicBoardInvariant;

impl TransitionInvariant<GameRecord> for MonotonicBoardInvariant {
    fn holds(before: &GameRecord, after: &GameRecord) -> bool {
        let mut added = 0;
        for ((_, old), (_, new)) in before.board().cells().zip(after.board().cells()) {
            match (old, new) {
                (Some(a), Some(b)) if a != b => return false,
                (Some(_), None) => return false,
                (None, Some(_)) => added += 1,
                _ => {}
            }
        }
        added == 1
    }

    fn description() -> &'static str {
        "Board cells are write-once and a move adds exactly one mark"
    }
}
