//! Dimension invariant: the grid size is usable.

use super::Invariant;
use crate::board::Board;

/// Largest side length any board may have, whatever its policy.
pub const MAX_DIMENSION: usize = 32;

/// Invariant: `1 <= dimension <= MAX_DIMENSION`.
///
/// Every other check derives its bounds from `dimension²`, so this one has
/// to hold before they mean anything.
pub struct DimensionInvariant;

impl Invariant<Board> for DimensionInvariant {
    fn holds(board: &Board) -> bool {
        (1..=MAX_DIMENSION).contains(board.dimension())
    }

    fn description() -> &'static str {
        "Board dimension is between 1 and 32"
    }
}
