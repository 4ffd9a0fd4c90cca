//! Album Bingo command-line front end
//!
//! Wraps the `album_bingo` engine with file-based boards, TOML
//! configuration, and a normalizer for catalog album/artist payloads.
//!
//! # Example
//!
//! ```no_run
//! use album_bingo_cli::{BingoConfig, NewBoardOptions, new_board, write_board};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = BingoConfig::load(None)?;
//! let board = new_board(&config, NewBoardOptions::default(), chrono::Utc::now().date_naive())?;
//! write_board(Path::new("board.json"), &board)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod catalog;
mod cli;
mod commands;
mod config;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{BingoConfig, ConfigError, DEFAULT_CONFIG_FILE};

// Crate-level exports - Catalog normalization
pub use catalog::{CatalogAlbum, CatalogArtist, CatalogError, load_album_details, normalize};

// Crate-level exports - Commands
pub use commands::{
    BackfillOutcome, FillOutcome, NewBoardOptions, backfill, bingo, clear, fill, new_board,
    parse_seed, prompts, read_board, validate_album, write_board,
};
