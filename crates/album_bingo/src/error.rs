//! Error types for board generation and mutation.
//!
//! Validation rejections are not errors: they come back as a
//! [`ValidationResult`](crate::ValidationResult) with `accepted == false`.

use derive_more::{Display, Error};
use tracing::instrument;

/// Specific failure conditions raised by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BingoErrorKind {
    /// The prompt catalog cannot fill a board of the requested size without repeats.
    #[display(
        "Configuration error: a {dimension}x{dimension} board needs {required} distinct prompts, catalog has {available}"
    )]
    CatalogTooSmall {
        /// Requested side length.
        dimension: usize,
        /// Number of prompts the board needs.
        required: usize,
        /// Number of prompts in the catalog.
        available: usize,
    },

    /// Board dimension was zero, or the catalog was empty.
    #[display("Configuration error: {_0}")]
    InvalidDimension(String),

    /// A mutation referenced a square outside the board.
    #[display("Position {position} is outside a board of {squares} squares")]
    PositionOutOfRange {
        /// Requested position.
        position: usize,
        /// Number of squares on the board.
        squares: usize,
    },

    /// A position inside the grid whose square has not been generated yet.
    #[display("Square {position} is missing from this board; backfill it first")]
    MissingSquare {
        /// Requested position.
        position: usize,
    },

    /// A board broke one or more structural invariants.
    #[display("Invariant violation: {_0}")]
    InvariantViolation(String),
}

/// Engine error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("{} at {}:{}", kind, file, line)]
pub struct BingoError {
    /// What went wrong.
    pub kind: BingoErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BingoError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    #[instrument(skip(kind))]
    pub fn new(kind: BingoErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &BingoErrorKind {
        &self.kind
    }

    /// True for fatal configuration problems (catalog too small, bad dimension).
    pub fn is_configuration(&self) -> bool {
        matches!(
            self.kind,
            BingoErrorKind::CatalogTooSmall { .. } | BingoErrorKind::InvalidDimension(_)
        )
    }
}

impl From<BingoErrorKind> for BingoError {
    #[track_caller]
    fn from(kind: BingoErrorKind) -> Self {
        Self::new(kind)
    }
}
