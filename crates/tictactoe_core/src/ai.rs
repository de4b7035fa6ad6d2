//! Heuristic computer player.
//!
//! One ply of lookahead. A square that completes a line for the computer is
//! taken immediately; otherwise every empty square is scored by how strong
//! the opponent's best line through it already is, and a uniformly random
//! square among the top scorers is chosen by reservoir sampling.
//!
//! There is no explicit block rule. Blocking happens because the square that
//! completes the opponent's line usually carries the top score. When the
//! opponent has a strong line elsewhere on the board the heuristic can miss
//! the block.

use super::rules::max_run;
use super::{Board, Mark, Position, SIZE};
use rand::Rng;
use tracing::{debug, instrument, trace};

/// Picks the computer's square without touching the board.
///
/// Returns `None` when the board has no empty square.
#[instrument(skip(board, rng))]
pub fn choose_move<R: Rng>(
    board: &Board,
    opponent: Mark,
    ai: Mark,
    rng: &mut R,
) -> Option<Position> {
    let mut candidate = None;
    let mut rank = 0;
    let mut count = 0u32;

    for pos in board.empty_cells() {
        if max_run(board, pos, ai) == SIZE - 1 {
            debug!(%pos, "Completing own line");
            return Some(pos);
        }

        let score = max_run(board, pos, opponent);
        if score > rank {
            count = 0;
            rank = score;
        }
        if score == rank {
            count += 1;
            if rng.random_range(0..count) == 0 {
                trace!(%pos, score, count, "Replacing candidate");
                candidate = Some(pos);
            }
        }
    }

    debug!(?candidate, rank, ties = count, "Heuristic choice");
    candidate
}

/// Picks the computer's square and places `ai` there.
///
/// Returns `None`, leaving the board untouched, when no square is empty.
pub fn select_move<R: Rng>(
    board: &mut Board,
    opponent: Mark,
    ai: Mark,
    rng: &mut R,
) -> Option<Position> {
    let pos = choose_move(board, opponent, ai, rng)?;
    board.place(pos, ai).ok()?;
    Some(pos)
}
