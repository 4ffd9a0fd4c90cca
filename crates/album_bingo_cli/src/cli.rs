//! Command-line interface for album bingo.

use album_bingo::PromptPolicy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Album Bingo - generate, fill and score album-cover bingo boards
#[derive(Parser, Debug)]
#[command(name = "album_bingo")]
#[command(about = "Generate, fill and score album bingo boards", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the prompt catalog
    Prompts,

    /// Generate a new board and print it as JSON
    New {
        /// Board side length (defaults to the configured dimension)
        #[arg(short, long)]
        dimension: Option<usize>,

        /// Layout seed; digits are read as a number. Random if omitted,
        /// today's date for daily boards.
        #[arg(short, long)]
        seed: Option<String>,

        /// Sharing mode: solo, shared (live, party) or daily
        #[arg(short, long)]
        mode: Option<String>,

        /// What to do when the catalog is smaller than the board
        #[arg(long)]
        policy: Option<PromptPolicy>,

        /// Write the board here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Add any missing squares to a stored board
    Backfill {
        /// Board JSON file, rewritten in place
        #[arg(short, long)]
        board: PathBuf,
    },

    /// Check an album against a prompt
    Validate {
        /// Prompt key, e.g. tracks_11_15
        #[arg(short, long)]
        prompt: String,

        /// Album JSON (catalog payload or normalized record)
        #[arg(short, long)]
        album: PathBuf,

        /// Artist JSON for the album's primary artist
        #[arg(long)]
        artist: Option<PathBuf>,
    },

    /// Place an album on a square if it satisfies the prompt
    Fill {
        /// Board JSON file, rewritten on acceptance
        #[arg(short, long)]
        board: PathBuf,

        /// Square position, row-major from 0
        #[arg(short, long)]
        position: usize,

        /// Album JSON (catalog payload or normalized record)
        #[arg(short, long)]
        album: PathBuf,

        /// Artist JSON for the album's primary artist
        #[arg(long)]
        artist: Option<PathBuf>,
    },

    /// Remove the album from a square
    Clear {
        /// Board JSON file, rewritten in place
        #[arg(short, long)]
        board: PathBuf,

        /// Square position, row-major from 0
        #[arg(short, long)]
        position: usize,
    },

    /// Report completed bingo lines
    Bingo {
        /// Board JSON file
        #[arg(short, long)]
        board: PathBuf,
    },
}
