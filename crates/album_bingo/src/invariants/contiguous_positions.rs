//! Position invariant: squares are ordered, in range and never duplicated.

use super::Invariant;
use crate::board::Board;

/// Invariant: positions are strictly increasing and below `dimension²`.
///
/// Together with [`SquareCountInvariant`](super::SquareCountInvariant) this
/// means the positions are exactly `0..dimension²`.
pub struct ContiguousPositionsInvariant;

impl Invariant<Board> for ContiguousPositionsInvariant {
    fn holds(board: &Board) -> bool {
        let Ok(limit) = board.square_count() else {
            return false;
        };
        let in_range = board
            .squares()
            .iter()
            .all(|square| *square.position() < limit);
        let ordered = board
            .squares()
            .windows(2)
            .all(|pair| pair[0].position() < pair[1].position());
        in_range && ordered
    }

    fn description() -> &'static str {
        "Square positions are unique, ordered and within the board"
    }
}
