//! Property-based tests for board generation and win detection.
//!
//! Uses proptest to check the board guarantees across many seeds.

use album_bingo::{
    AlbumDetails, AlbumFill, BoardGenerator, BoardInvariants, BoardSquare, InvariantSet, Seed,
    compute_bingo, list_prompts, shuffle,
};
use chrono::Utc;
use proptest::prelude::*;
use std::collections::HashSet;

fn arbitrary_seed() -> impl Strategy<Value = Seed> {
    prop_oneof![
        any::<u32>().prop_map(Seed::Numeric),
        "[ -~]{0,24}".prop_map(Seed::Text),
    ]
}

proptest! {
    /// Property: the same seed always yields the same layout
    #[test]
    fn generation_is_deterministic(seed in arbitrary_seed(), dimension in 1usize..=5) {
        let generator = BoardGenerator::new();
        let a = generator.generate(dimension, seed.clone()).unwrap();
        let b = generator.generate(dimension, seed).unwrap();
        prop_assert_eq!(a.squares(), b.squares());
    }

    /// Property: generated boards are complete and never repeat a prompt
    #[test]
    fn generated_boards_hold_invariants(seed in arbitrary_seed(), dimension in 1usize..=5) {
        let board = BoardGenerator::new().generate(dimension, seed).unwrap();

        prop_assert_eq!(board.squares().len(), dimension * dimension);
        let positions: Vec<usize> = board.squares().iter().map(|s| *s.position()).collect();
        prop_assert_eq!(positions, (0..dimension * dimension).collect::<Vec<_>>());

        let keys: HashSet<&String> = board.squares().iter().map(|s| s.prompt_key()).collect();
        prop_assert_eq!(keys.len(), board.squares().len());
        prop_assert!(BoardInvariants::check_all(&board).is_ok());
    }

    /// Property: shuffling is a permutation
    #[test]
    fn shuffle_is_permutation(seed in arbitrary_seed(), items in prop::collection::vec(any::<u16>(), 0..64)) {
        let mut shuffled = shuffle(&items, &seed);
        let mut original = items.clone();
        shuffled.sort_unstable();
        original.sort_unstable();
        prop_assert_eq!(shuffled, original);
    }

    /// Property: independent backfills of the same gaps agree with full generation
    #[test]
    fn backfill_converges(seed in arbitrary_seed(), keep in prop::collection::vec(any::<bool>(), 25)) {
        let generator = BoardGenerator::new();
        let full = generator.generate(5, seed.clone()).unwrap();
        let existing: Vec<BoardSquare> = full
            .squares()
            .iter()
            .zip(&keep)
            .filter(|(_, keep)| **keep)
            .map(|(s, _)| s.clone())
            .collect();

        let first = generator.ensure_complete(&existing, 5, &seed).unwrap();
        let second = BoardGenerator::new().ensure_complete(&existing, 5, &seed).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len() + existing.len(), 25);
        for square in &first {
            prop_assert_eq!(Some(square), full.square(*square.position()));
        }
    }

    /// Property: filling one full row always produces exactly that row
    #[test]
    fn single_row_is_exact(row in 0usize..5) {
        let mut board = BoardGenerator::new().generate(5, "rows").unwrap();
        let details = AlbumDetails::new("a", "Album", "Artist");
        for col in 0..5 {
            board.fill(row * 5 + col, AlbumFill::from_details(&details, Utc::now())).unwrap();
        }

        let result = compute_bingo(&board);
        prop_assert!(result.has_bingo());
        let expected: Vec<usize> = (row * 5..row * 5 + 5).collect();
        prop_assert_eq!(result.winning_positions().iter().copied().collect::<Vec<_>>(), expected);
    }
}

#[test]
fn test_catalog_size_bounds_strict_generation() {
    let generator = BoardGenerator::new();
    let largest = (1..)
        .take_while(|n| n * n <= list_prompts().len())
        .last()
        .unwrap();
    assert!(generator.generate(largest, "max").is_ok());
    assert!(generator.generate(largest + 1, "max").is_err());
}
