//! Command implementations.
//!
//! Each command reads its inputs from disk, runs the engine, and returns a
//! serializable value; printing is left to the binary.

use crate::catalog::load_album_details;
use crate::config::BingoConfig;
use album_bingo::{
    BingoResult, Board, BoardGenerator, BoardMode, InvariantSet, LayoutInvariants, PromptDef,
    PromptPolicy, Seed, ValidationResult, compute_bingo, list_prompts, validate,
};
use anyhow::{Context, Result, bail};
use chrono::{DateTime, NaiveDate, Utc};
use derive_getters::Getters;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Options for generating a board; unset fields fall back to the config.
#[derive(Debug, Clone, Default)]
pub struct NewBoardOptions {
    /// Board side length.
    pub dimension: Option<usize>,
    /// Layout seed.
    pub seed: Option<String>,
    /// Sharing mode, parsed leniently.
    pub mode: Option<String>,
    /// Generation policy.
    pub policy: Option<PromptPolicy>,
}

/// Result of a fill attempt.
#[derive(Debug, Clone, Serialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct FillOutcome {
    position: usize,
    validation: ValidationResult,
    bingo: BingoResult,
}

/// Result of a backfill.
#[derive(Debug, Clone, Serialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct BackfillOutcome {
    added: usize,
    board: Board,
}

/// Reads a seed argument: a decimal that fits in `u32` is numeric,
/// anything else is text.
pub fn parse_seed(input: &str) -> Seed {
    match input.parse::<u32>() {
        Ok(n) if !input.starts_with('+') => Seed::Numeric(n),
        _ => Seed::Text(input.to_string()),
    }
}

/// The prompt catalog.
pub fn prompts() -> &'static [PromptDef] {
    list_prompts()
}

/// Generates a board. Daily boards without an explicit seed use `today`.
#[instrument(skip(config))]
pub fn new_board(
    config: &BingoConfig,
    options: NewBoardOptions,
    today: NaiveDate,
) -> Result<Board> {
    let dimension = options.dimension.unwrap_or(*config.default_dimension());
    let mode = options
        .mode
        .as_deref()
        .map(BoardMode::normalize)
        .unwrap_or(*config.default_mode());
    let policy = options.policy.unwrap_or(*config.policy());
    let generator = BoardGenerator::new().with_policy(policy);

    let board = match (mode, options.seed.as_deref()) {
        (BoardMode::Daily, None) => generator.generate_daily(dimension, today)?,
        (mode, seed) => {
            let seed = seed
                .map(parse_seed)
                .unwrap_or_else(|| Seed::Text(Uuid::new_v4().to_string()));
            let board = generator.generate(dimension, seed)?;
            match mode {
                BoardMode::Daily => board.with_daily_date(today),
                mode => board.with_mode(mode),
            }
        }
    };

    info!(board_id = %board.id(), %mode, %policy, "New board ready");
    Ok(board)
}

/// Adds missing squares to the board at `path`, rewriting it if anything
/// was added.
#[instrument]
pub fn backfill(path: &Path) -> Result<BackfillOutcome> {
    let mut board = read_board(path)?;
    let added = board.backfill(&BoardGenerator::new())?;
    if added > 0 {
        write_board(path, &board)?;
    }
    Ok(BackfillOutcome { added, board })
}

/// Checks an album against a prompt without touching any board.
#[instrument]
pub fn validate_album(
    prompt_key: &str,
    album: &Path,
    artist: Option<&Path>,
) -> Result<ValidationResult> {
    let details = load_album_details(album, artist)?;
    Ok(validate(prompt_key, &details))
}

/// Validates an album against the square at `position` and, if accepted,
/// places it and rewrites the board file.
#[instrument(skip(placed_at))]
pub fn fill(
    board_path: &Path,
    position: usize,
    album: &Path,
    artist: Option<&Path>,
    placed_at: DateTime<Utc>,
) -> Result<FillOutcome> {
    let mut board = read_board(board_path)?;
    let details = load_album_details(album, artist)?;

    let validation = board.attempt_fill(position, &details, placed_at)?;
    if validation.accepted() {
        write_board(board_path, &board)?;
    }

    Ok(FillOutcome {
        position,
        validation,
        bingo: compute_bingo(&board),
    })
}

/// Clears the square at `position` and rewrites the board file.
#[instrument]
pub fn clear(board_path: &Path, position: usize) -> Result<Board> {
    let mut board = read_board(board_path)?;
    board.clear(position)?;
    write_board(board_path, &board)?;
    Ok(board)
}

/// Completion state of the board at `path`.
#[instrument]
pub fn bingo(path: &Path) -> Result<BingoResult> {
    let board = read_board(path)?;
    Ok(compute_bingo(&board))
}

/// Loads a board from JSON.
///
/// Squares may be missing (see [`backfill`]), but those present must be
/// ordered, in range, and carry distinct prompts. A strict board may not be
/// larger than the built-in catalog can fill.
#[instrument]
pub fn read_board(path: &Path) -> Result<Board> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read board file {}", path.display()))?;
    let board: Board = serde_json::from_str(&content)
        .with_context(|| format!("Invalid board JSON in {}", path.display()))?;
    if let Err(violations) = LayoutInvariants::check_all(&board) {
        let descriptions: Vec<&str> = violations.iter().map(|v| v.description.as_str()).collect();
        bail!("Board {} is malformed: {}", path.display(), descriptions.join("; "));
    }
    let required = board.square_count()?;
    let available = list_prompts().len();
    if *board.policy() == PromptPolicy::Strict && required > available {
        bail!(
            "Board {} needs {} prompts but the catalog has {}",
            path.display(),
            required,
            available
        );
    }
    debug!(board_id = %board.id(), squares = board.squares().len(), "Board loaded");
    Ok(board)
}

/// Writes a board as pretty-printed JSON.
#[instrument(skip(board), fields(board_id = %board.id()))]
pub fn write_board(path: &Path, board: &Board) -> Result<()> {
    let json = serde_json::to_string_pretty(board)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write board file {}", path.display()))?;
    debug!("Board written");
    Ok(())
}
