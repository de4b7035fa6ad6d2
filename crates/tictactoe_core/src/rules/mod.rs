//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board): line evaluation through a
//! single square and the post-move win check built on it. Both only look at
//! the lines through the probed square, never the whole board.

pub mod lines;
pub mod win;

pub use lines::max_run;
pub use win::{has_won, status_after};
