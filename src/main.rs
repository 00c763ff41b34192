//! Tower Attack CLI entry point.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tower_attack::{Catalog, GameError, ScoreStore, Session};

/// Tower Attack - a turn-based tower assault game
#[derive(Parser, Debug)]
#[command(name = "tower-attack")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Score database path
    #[arg(long, default_value = "scores.db")]
    db: PathBuf,

    /// Random seed (default: entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file overriding the built-in tower catalog
    #[arg(long)]
    towers: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), GameError> {
    let catalog = match &args.towers {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::builtin(),
    };
    let store = ScoreStore::open(&args.db)?;
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut session = Session::new(catalog, &store, rng, stdin, stdout);
    session.run()?;
    Ok(())
}
