//! Album Bingo - Unified CLI
//!
//! Every command prints JSON on stdout; logs go to stderr.

use album_bingo_cli::{
    BingoConfig, Cli, Command, NewBoardOptions, backfill, bingo, clear, fill, new_board, prompts,
    validate_album, write_board,
};
use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use serde::Serialize;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = BingoConfig::load(cli.config.as_deref())?;
    initialize_tracing(&config);

    run(cli.command, &config)
}

#[instrument(skip(config))]
fn run(command: Command, config: &BingoConfig) -> Result<()> {
    match command {
        Command::Prompts => print_json(prompts()),
        Command::New {
            dimension,
            seed,
            mode,
            policy,
            out,
        } => {
            let options = NewBoardOptions {
                dimension,
                seed,
                mode,
                policy,
            };
            let board = new_board(config, options, Utc::now().date_naive())?;
            match out {
                Some(path) => {
                    write_board(&path, &board)?;
                    info!(path = %path.display(), "Board saved");
                    print_json(&board)
                }
                None => print_json(&board),
            }
        }
        Command::Backfill { board } => print_json(&backfill(&board)?),
        Command::Validate {
            prompt,
            album,
            artist,
        } => print_json(&validate_album(&prompt, &album, artist.as_deref())?),
        Command::Fill {
            board,
            position,
            album,
            artist,
        } => print_json(&fill(
            &board,
            position,
            &album,
            artist.as_deref(),
            Utc::now(),
        )?),
        Command::Clear { board, position } => print_json(&clear(&board, position)?),
        Command::Bingo { board } => print_json(&bingo(&board)?),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn initialize_tracing(config: &BingoConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Tracing initialized");
}
