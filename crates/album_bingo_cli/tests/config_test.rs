//! Tests for configuration loading and argument parsing.

use album_bingo::{BoardMode, PromptPolicy};
use album_bingo_cli::{BingoConfig, Cli, Command};
use clap::Parser;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_missing_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = BingoConfig::load(Some(dir.path().join("absent.toml").as_path())).expect("load");
    assert_eq!(config, BingoConfig::default());
}

#[test]
fn test_load_full_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("album_bingo.toml");
    fs::write(
        &path,
        "default_dimension = 4\ndefault_mode = \"daily\"\npolicy = \"cycle\"\nlog_level = \"debug\"\n",
    )
    .expect("Failed to write TOML");

    let config = BingoConfig::load(Some(path.as_path())).expect("load");
    assert_eq!(
        config,
        BingoConfig::new(4, BoardMode::Daily, PromptPolicy::Cycle, "debug".to_string())
    );
}

#[test]
fn test_invalid_toml_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "this is not valid toml !!!@@@").expect("Failed to write TOML");

    let err = BingoConfig::load(Some(path.as_path())).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_zero_dimension_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("zero.toml");
    fs::write(&path, "default_dimension = 0\n").expect("Failed to write TOML");
    assert!(BingoConfig::from_file(&path).is_err());
}

#[test]
fn test_parse_new_command() {
    let cli = Cli::try_parse_from([
        "album_bingo",
        "--config",
        "custom.toml",
        "new",
        "--dimension",
        "3",
        "--seed",
        "abc",
        "--policy",
        "cycle",
    ])
    .expect("parse");

    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("custom.toml")));
    match cli.command {
        Command::New {
            dimension,
            seed,
            policy,
            mode,
            out,
        } => {
            assert_eq!(dimension, Some(3));
            assert_eq!(seed.as_deref(), Some("abc"));
            assert_eq!(policy, Some(PromptPolicy::Cycle));
            assert!(mode.is_none());
            assert!(out.is_none());
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_parse_fill_command() {
    let cli = Cli::try_parse_from([
        "album_bingo", "fill", "-b", "board.json", "-p", "7", "-a", "album.json",
    ])
    .expect("parse");
    assert!(matches!(cli.command, Command::Fill { position: 7, .. }));
}

#[test]
fn test_unknown_policy_is_rejected() {
    assert!(Cli::try_parse_from(["album_bingo", "new", "--policy", "loose"]).is_err());
}
