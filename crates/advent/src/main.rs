//! Colossal Cave Adventure
//!
//! Reads commands from stdin and prints the cave's replies to stdout.
//! Logging goes to stderr.

mod session;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use advent_core::{GameOptions, WorldState};
use advent_data::ClassicCave;
use advent_save::{default_save_path, list_saves, load_game};

use crate::session::{Ending, Session, retire_save};

/// Colossal Cave Adventure, the 350-point original
#[derive(Parser, Debug)]
#[command(name = "adventure")]
#[command(author, version, about = "Somewhere nearby is Colossal Cave...", long_about = None)]
struct Args {
    /// Fixed random seed
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Options file (key=value lines)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Resume a suspended game
    #[arg(short = 'l', long = "load")]
    load: Option<PathBuf>,

    /// Where `suspend` writes the game
    #[arg(short = 's', long = "save")]
    save: Option<PathBuf>,

    /// Show suspended games in the save directory and exit
    #[arg(long = "list-saves")]
    list_saves: bool,

    /// Write the effective options to a file and exit
    #[arg(long = "write-config", value_name = "PATH")]
    write_config: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn game_options(args: &Args) -> Result<GameOptions, Box<dyn std::error::Error>> {
    let mut options = match &args.config {
        Some(path) => GameOptions::load_from_file(path)?,
        None => GameOptions::default(),
    };
    if args.seed.is_some() {
        options.seed = args.seed;
    }
    Ok(options)
}

fn starting_state(args: &Args) -> Result<WorldState, Box<dyn std::error::Error>> {
    if let Some(path) = &args.load {
        info!(path = %path.display(), "resuming saved game");
        return Ok(load_game(path)?);
    }

    let options = game_options(args)?;
    info!(seed = ?options.seed, lamp_fuel = options.lamp_fuel, "new game");
    Ok(WorldState::with_options(&options))
}

fn print_saves() -> Result<(), Box<dyn std::error::Error>> {
    let saves = list_saves()?;
    if saves.is_empty() {
        println!("No suspended games.");
    }
    for (path, header) in saves {
        println!(
            "{}  turn {}  room {}  saved at {}",
            path.display(),
            header.turns,
            header.location,
            header.timestamp
        );
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.list_saves {
        return print_saves();
    }
    if let Some(path) = &args.write_config {
        game_options(&args)?.save_to_file(path)?;
        info!(path = %path.display(), "options written");
        return Ok(());
    }

    let state = starting_state(&args)?;
    let save_path = args
        .save
        .clone()
        .or_else(|| args.load.clone())
        .unwrap_or_else(default_save_path);

    let cave = ClassicCave::new();
    let mut session = Session::new(state, &cave, save_path);
    let stdin = io::stdin();
    let ending = session.run(stdin.lock(), io::stdout().lock())?;

    match ending {
        Ending::Finished(outcome) => {
            info!(?outcome, "game over");
            if let Some(path) = &args.load {
                retire_save(path)?;
            }
        }
        Ending::Suspended(path) => info!(path = %path.display(), "game suspended"),
        Ending::EndOfInput => info!("input closed"),
    }
    Ok(())
}
