//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). They never touch a
//! record, so the engine and the invariant checks can share them.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::{Line, check_winner, winning_line};
