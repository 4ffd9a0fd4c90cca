//! Board generation, backfill and square mutation.

use crate::error::{BingoError, BingoErrorKind};
use crate::invariants::{BoardInvariants, InvariantSet, MAX_DIMENSION};
use crate::prompts::{PromptDef, list_prompts};
use crate::rules::{ValidationResult, validate};
use crate::shuffle::{Seed, shuffle};
use crate::types::{AlbumDetails, AlbumFill, BoardMode, BoardSquare, PromptPolicy, daily_seed};
use chrono::{DateTime, NaiveDate, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// An N×N bingo board.
///
/// Squares are kept in position order. Prompt assignments never change after
/// generation; only fills are added, replaced or cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    /// Opaque board identifier.
    id: String,
    /// Side length of the grid.
    dimension: usize,
    /// Seed the prompt layout was generated from.
    seed: Seed,
    /// Sharing mode.
    #[serde(default)]
    mode: BoardMode,
    /// Day this board belongs to, for daily boards.
    #[serde(default)]
    daily_date: Option<NaiveDate>,
    /// Policy the board was generated under.
    #[serde(default)]
    policy: PromptPolicy,
    /// Squares in position order.
    squares: Vec<BoardSquare>,
    /// Creation time.
    created_at: DateTime<Utc>,
}

impl Board {
    /// Number of squares a complete board has (`dimension²`).
    ///
    /// Fails only for a dimension whose square overflows `usize`, which a
    /// deserialized board can carry.
    pub fn square_count(&self) -> Result<usize, BingoError> {
        self.dimension.checked_mul(self.dimension).ok_or_else(|| {
            BingoError::new(BingoErrorKind::InvalidDimension(format!(
                "board dimension {} is too large",
                self.dimension
            )))
        })
    }

    /// Returns the square at `position`, if present.
    pub fn square(&self, position: usize) -> Option<&BoardSquare> {
        self.squares.iter().find(|s| *s.position() == position)
    }

    /// Number of filled squares.
    pub fn filled_count(&self) -> usize {
        self.squares.iter().filter(|s| s.is_filled()).count()
    }

    /// Sets the sharing mode.
    ///
    /// Use [`Board::with_daily_date`] for daily boards so the day is
    /// recorded alongside the mode.
    pub fn with_mode(mut self, mode: BoardMode) -> Self {
        self.mode = mode;
        if mode != BoardMode::Daily {
            self.daily_date = None;
        }
        self
    }

    /// Marks this as the daily board for `date`.
    pub fn with_daily_date(mut self, date: NaiveDate) -> Self {
        self.mode = BoardMode::Daily;
        self.daily_date = Some(date);
        self
    }

    /// Places `fill` at `position`, returning the fill it replaced.
    ///
    /// No validation happens here; see [`Board::attempt_fill`].
    #[instrument(skip(self, fill), fields(board_id = %self.id, album_id = %fill.catalog_id()))]
    pub fn fill(
        &mut self,
        position: usize,
        fill: AlbumFill,
    ) -> Result<Option<AlbumFill>, BingoError> {
        let square = self.square_mut(position)?;
        let previous = square.replace_fill(Some(fill));
        info!(position, replaced = previous.is_some(), "Square filled");
        Ok(previous)
    }

    /// Clears the fill at `position`, returning what was there.
    #[instrument(skip(self), fields(board_id = %self.id))]
    pub fn clear(&mut self, position: usize) -> Result<Option<AlbumFill>, BingoError> {
        let square = self.square_mut(position)?;
        let previous = square.replace_fill(None);
        info!(position, was_filled = previous.is_some(), "Square cleared");
        Ok(previous)
    }

    /// Validates `details` against the square's prompt and fills the square
    /// only if the album is accepted.
    ///
    /// A rejection leaves the board untouched and is reported through the
    /// returned [`ValidationResult`], not as an error.
    #[instrument(skip(self, details), fields(board_id = %self.id, album_id = %details.id()))]
    pub fn attempt_fill(
        &mut self,
        position: usize,
        details: &AlbumDetails,
        placed_at: DateTime<Utc>,
    ) -> Result<ValidationResult, BingoError> {
        let square = self.square_mut(position)?;
        let result = validate(square.prompt_key(), details);

        if result.accepted() {
            square.replace_fill(Some(AlbumFill::from_details(details, placed_at)));
            info!(position, prompt = %square.prompt_key(), "Album accepted");
        } else {
            warn!(position, prompt = %square.prompt_key(), reason = %result.reason(), "Album rejected");
        }

        Ok(result)
    }

    /// Adds every missing square, exactly as full generation would have
    /// placed it, then re-checks the board invariants.
    ///
    /// Existing squares (and their fills) are never touched. The result is
    /// checked before it replaces the board, so on error the board is left
    /// as it was. Returns the number of squares added.
    #[instrument(skip(self, generator), fields(board_id = %self.id))]
    pub fn backfill(&mut self, generator: &BoardGenerator<'_>) -> Result<usize, BingoError> {
        let generator = generator.with_policy(self.policy);
        let additions = generator.ensure_complete(&self.squares, self.dimension, &self.seed)?;
        let added = additions.len();

        let mut candidate = self.clone();
        candidate.squares.extend(additions);
        candidate.squares.sort_by_key(|s| *s.position());
        candidate.check_invariants()?;
        *self = candidate;

        info!(added, "Board backfilled");
        Ok(added)
    }

    /// Checks every board invariant, reporting all violations at once.
    #[instrument(skip(self), fields(board_id = %self.id))]
    pub fn check_invariants(&self) -> Result<(), BingoError> {
        BoardInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Board invariants violated");
            BingoError::new(BingoErrorKind::InvariantViolation(descriptions))
        })
    }

    fn square_mut(&mut self, position: usize) -> Result<&mut BoardSquare, BingoError> {
        let squares = self.square_count()?;
        if position >= squares {
            return Err(BingoErrorKind::PositionOutOfRange { position, squares }.into());
        }
        self.squares
            .iter_mut()
            .find(|s| *s.position() == position)
            .ok_or_else(|| BingoError::new(BingoErrorKind::MissingSquare { position }))
    }
}

/// Deterministic board generator over a prompt catalog.
#[derive(Debug, Clone, Copy)]
pub struct BoardGenerator<'a> {
    catalog: &'a [PromptDef],
    policy: PromptPolicy,
}

impl BoardGenerator<'static> {
    /// Generator over the built-in catalog with the strict policy.
    pub fn new() -> Self {
        Self::with_catalog(list_prompts())
    }
}

impl Default for BoardGenerator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> BoardGenerator<'a> {
    /// Generator over a custom catalog with the strict policy.
    pub fn with_catalog(catalog: &'a [PromptDef]) -> Self {
        Self {
            catalog,
            policy: PromptPolicy::Strict,
        }
    }

    /// Returns a copy of this generator using `policy`.
    pub fn with_policy(self, policy: PromptPolicy) -> Self {
        Self { policy, ..self }
    }

    /// The catalog prompts are drawn from.
    pub fn catalog(&self) -> &'a [PromptDef] {
        self.catalog
    }

    /// The policy applied when the catalog is smaller than the board.
    pub fn policy(&self) -> PromptPolicy {
        self.policy
    }

    /// The prompt every position of a `dimension`-sized board receives for
    /// `seed`, indexed by position.
    ///
    /// This is a pure function of its inputs; generation and backfill both
    /// derive from it, which is what lets concurrent backfills agree.
    #[instrument(skip(self), fields(catalog_len = self.catalog.len(), policy = %self.policy, seed = %seed))]
    pub fn assignments(
        &self,
        dimension: usize,
        seed: &Seed,
    ) -> Result<Vec<&'a PromptDef>, BingoError> {
        if dimension == 0 {
            return Err(BingoErrorKind::InvalidDimension(
                "board dimension must be at least 1".to_string(),
            )
            .into());
        }
        if dimension > MAX_DIMENSION {
            return Err(BingoErrorKind::InvalidDimension(format!(
                "board dimension {} exceeds the maximum of {}",
                dimension, MAX_DIMENSION
            ))
            .into());
        }
        let required = dimension.checked_mul(dimension).ok_or_else(|| {
            BingoError::new(BingoErrorKind::InvalidDimension(format!(
                "board dimension {} is too large",
                dimension
            )))
        })?;
        if self.catalog.is_empty() {
            return Err(
                BingoErrorKind::InvalidDimension("prompt catalog is empty".to_string()).into(),
            );
        }

        let available = self.catalog.len();
        if required > available {
            match self.policy {
                PromptPolicy::Strict => {
                    warn!(required, available, "Catalog too small for board");
                    return Err(BingoErrorKind::CatalogTooSmall {
                        dimension,
                        required,
                        available,
                    }
                    .into());
                }
                PromptPolicy::Cycle => {
                    debug!(required, available, "Cycling catalog, prompts will repeat");
                }
            }
        }

        let prompts: Vec<&'a PromptDef> = self.catalog.iter().collect();
        Ok(shuffle(&prompts, seed)
            .into_iter()
            .cycle()
            .take(required)
            .collect())
    }

    /// Generates a fresh, unfilled solo board.
    #[instrument(skip(self, seed))]
    pub fn generate(&self, dimension: usize, seed: impl Into<Seed>) -> Result<Board, BingoError> {
        let seed = seed.into();
        let squares = self
            .assignments(dimension, &seed)?
            .into_iter()
            .enumerate()
            .map(|(position, prompt)| BoardSquare::new(position, prompt))
            .collect();

        let board = Board {
            id: Uuid::new_v4().to_string(),
            dimension,
            seed,
            mode: BoardMode::Solo,
            daily_date: None,
            policy: self.policy,
            squares,
            created_at: Utc::now(),
        };

        info!(board_id = %board.id, seed = %board.seed, "Board generated");
        Ok(board)
    }

    /// Generates the daily board for `date`; every caller gets the same layout.
    #[instrument(skip(self))]
    pub fn generate_daily(&self, dimension: usize, date: NaiveDate) -> Result<Board, BingoError> {
        Ok(self
            .generate(dimension, daily_seed(date))?
            .with_daily_date(date))
    }

    /// Squares that must be added so `existing` covers every position.
    ///
    /// Existing positions are never reassigned, and each missing position
    /// receives the prompt full generation would give it. Calling this twice,
    /// or from two racing callers, yields the same squares.
    #[instrument(skip(self, existing), fields(existing = existing.len(), seed = %seed))]
    pub fn ensure_complete(
        &self,
        existing: &[BoardSquare],
        dimension: usize,
        seed: &Seed,
    ) -> Result<Vec<BoardSquare>, BingoError> {
        let present: HashSet<usize> = existing.iter().map(|s| *s.position()).collect();
        let additions: Vec<BoardSquare> = self
            .assignments(dimension, seed)?
            .into_iter()
            .enumerate()
            .filter(|(position, _)| !present.contains(position))
            .map(|(position, prompt)| BoardSquare::new(position, prompt))
            .collect();

        debug!(missing = additions.len(), "Computed backfill");
        Ok(additions)
    }
}
