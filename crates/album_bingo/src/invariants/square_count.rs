//! Square count invariant: a board has exactly `dimension²` squares.

use super::Invariant;
use crate::board::Board;

/// Invariant: the board holds exactly `dimension²` squares.
pub struct SquareCountInvariant;

impl Invariant<Board> for SquareCountInvariant {
    fn holds(board: &Board) -> bool {
        board
            .square_count()
            .is_ok_and(|count| board.squares().len() == count)
    }

    fn description() -> &'static str {
        "Board has exactly dimension² squares"
    }
}
