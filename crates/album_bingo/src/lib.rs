//! Album Bingo - prompt validation and board-completion engine
//!
//! Players fill an N×N board of prompts ("Released in the 2010s",
//! "Title contains a color word", ...) with albums from a music catalog.
//! This crate is the pure core of that game: it owns no I/O, no clock
//! beyond board timestamps, and no shared state.
//!
//! # Architecture
//!
//! - **Prompts**: the static prompt catalog
//! - **Shuffle**: seeded, platform-independent permutation
//! - **Board**: deterministic generation, idempotent backfill, fills
//! - **Rules**: table-driven prompt evaluation over [`AlbumDetails`]
//! - **Win**: bingo line detection
//! - **Invariants**: structural board guarantees, checked at boundaries
//!
//! # Example
//!
//! ```
//! use album_bingo::{AlbumDetails, BoardGenerator, compute_bingo, validate};
//!
//! # fn example() -> Result<(), album_bingo::BingoError> {
//! let board = BoardGenerator::new().generate(5, "2026-10-19")?;
//! let square = board.square(0).expect("complete board");
//!
//! let album = AlbumDetails::new("4aawyAB9vmqN3uQ7FjRGTy", "Global Warming", "Pitbull")
//!     .with_total_tracks(14)
//!     .with_release_date("2012-11-16".to_string());
//! let result = validate(square.prompt_key(), &album);
//! println!("{}: {}", square.prompt_text(), result.reason());
//!
//! assert!(!compute_bingo(&board).has_bingo());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod invariants;
mod prompts;
mod rules;
mod shuffle;
mod types;
mod win;

// Crate-level exports - Errors
pub use error::{BingoError, BingoErrorKind};

// Crate-level exports - Prompt catalog
pub use prompts::{PromptDef, find_prompt, list_prompts};

// Crate-level exports - Shuffler
pub use shuffle::{Seed, SeededRng, fnv1a_32, shuffle, shuffle_in_place};

// Crate-level exports - Domain types
pub use types::{AlbumDetails, AlbumFill, BoardMode, BoardSquare, PromptPolicy, daily_seed};

// Crate-level exports - Board lifecycle
pub use board::{Board, BoardGenerator};

// Crate-level exports - Rule evaluation
pub use rules::{OK_REASON, ValidationResult, validate};

// Crate-level exports - Win detection
pub use win::{BingoResult, compute_bingo, winning_lines};

// Crate-level exports - Invariants
pub use invariants::{
    BoardInvariants, ContiguousPositionsInvariant, DimensionInvariant, Invariant, InvariantSet,
    InvariantViolation, LayoutInvariants, MAX_DIMENSION, SquareCountInvariant,
    UniquePromptsInvariant,
};
