//! Turn step invariant: the counter and status move together.

use super::TransitionInvariant;
use crate::GameRecord;

/// Invariant: a move is only taken from an active record, and either keeps
/// it active with `turn + 1` or ends it with `turn` unchanged. Players stay
/// seated where they were.
pub struct TurnStepInvariant;

impl TransitionInvariant<GameRecord> for TurnStepInvariant {
    fn holds(before: &GameRecord, after: &GameRecord) -> bool {
        if !before.is_active() || before.players() != after.players() {
            return false;
        }

        let (old, new) = (*before.turn(), *after.turn());
        if after.is_active() {
            old.checked_add(1) == Some(new)
        } else {
            old == new
        }
    }

    fn description() -> &'static str {
        "Turn advances by one on ordinary moves and freezes on the final move"
    }
}
