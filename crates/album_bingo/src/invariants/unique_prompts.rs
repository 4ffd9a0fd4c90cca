//! Prompt uniqueness invariant: no prompt repeats within a board.

use super::Invariant;
use crate::board::Board;
use crate::types::PromptPolicy;
use std::collections::HashSet;

/// Invariant: every square carries a distinct prompt key.
///
/// Waived for boards generated under [`PromptPolicy::Cycle`], which repeat
/// prompts on purpose.
pub struct UniquePromptsInvariant;

impl Invariant<Board> for UniquePromptsInvariant {
    fn holds(board: &Board) -> bool {
        if *board.policy() == PromptPolicy::Cycle {
            return true;
        }
        let mut seen = HashSet::new();
        board
            .squares()
            .iter()
            .all(|square| seen.insert(square.prompt_key().as_str()))
    }

    fn description() -> &'static str {
        "No prompt key repeats within a board"
    }
}
