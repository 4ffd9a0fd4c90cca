//! Bingo line detection.

use crate::board::Board;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, instrument};

/// Completion state of a board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BingoResult {
    /// True if at least one line is complete.
    has_bingo: bool,
    /// Every position that belongs to a complete line.
    winning_positions: BTreeSet<usize>,
    /// Number of complete lines.
    completed_lines: usize,
}

impl BingoResult {
    /// True if at least one line is complete.
    pub fn has_bingo(&self) -> bool {
        self.has_bingo
    }

    /// Positions belonging to at least one complete line, ascending.
    pub fn winning_positions(&self) -> &BTreeSet<usize> {
        &self.winning_positions
    }

    /// Number of complete lines.
    pub fn completed_lines(&self) -> usize {
        self.completed_lines
    }
}

/// Every candidate line of a `dimension`-sized grid, as row-major positions:
/// rows, then columns, then the two main diagonals.
#[instrument]
pub fn winning_lines(dimension: usize) -> Vec<Vec<usize>> {
    let n = dimension;
    let mut lines: Vec<Vec<usize>> = Vec::with_capacity(2 * n + 2);

    // Rows
    for row in 0..n {
        lines.push((0..n).map(|col| row * n + col).collect());
    }
    // Columns
    for col in 0..n {
        lines.push((0..n).map(|row| row * n + col).collect());
    }
    // Diagonals
    lines.push((0..n).map(|i| i * n + i).collect());
    lines.push((0..n).map(|i| i * n + (n - 1 - i)).collect());

    lines
}

/// Finds every complete line on `board`.
///
/// All lines are evaluated; the winning positions are the union of every
/// complete line, so a square shared by two lines appears once. Missing
/// squares count as unfilled.
#[instrument(skip(board), fields(board_id = %board.id(), dimension = *board.dimension()))]
pub fn compute_bingo(board: &Board) -> BingoResult {
    let dimension = *board.dimension();
    if dimension == 0 {
        return BingoResult::default();
    }

    let filled: HashSet<usize> = board
        .squares()
        .iter()
        .filter(|s| s.is_filled())
        .map(|s| *s.position())
        .collect();

    let mut winning_positions = BTreeSet::new();
    let mut completed_lines = 0;
    for line in winning_lines(dimension) {
        if line.iter().all(|pos| filled.contains(pos)) {
            completed_lines += 1;
            winning_positions.extend(line);
        }
    }

    debug!(completed_lines, "Bingo computed");
    BingoResult {
        has_bingo: completed_lines > 0,
        winning_positions,
        completed_lines,
    }
}
