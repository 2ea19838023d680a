//! Sign balance invariant: X leads O by at most one mark.

use super::Invariant;
use crate::{GameRecord, Sign};
use tracing::warn;

/// Invariant: the board holds as many X marks as O marks, or one more.
///
/// X always moves first and players alternate, so any other balance means
/// a mark was written outside the engine.
pub struct SignBalanceInvariant;

impl Invariant<GameRecord> for SignBalanceInvariant {
    fn holds(record: &GameRecord) -> bool {
        let x_count = record.board().count(Sign::X);
        let o_count = record.board().count(Sign::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Sign balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X leads O by at most one mark"
    }
}
