//! Command-line configuration of the application.

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

/// Game that can be opened directly from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum GameChoice {
    /// Maze clean-up game.
    Maze,
    /// Reef rescue game.
    Reef,
}

/// Options accepted on the command line.
///
/// Every option is optional; without any of them the application opens the main menu, seeds its
/// random number generator from the operating system and does not log anywhere.
#[derive(Debug, Default, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Seed for the random number generator, making boards and falling items reproducible
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
    /// File to append log records to; the filter is read from `RUST_LOG`
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
    /// Game to open on launch instead of the main menu
    #[arg(long, value_enum)]
    game: Option<GameChoice>,
}

impl Config {
    /// Returns the requested random seed, if any.
    pub(crate) const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the log file path, if any.
    pub(crate) fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Returns the game to open on launch, if any.
    pub(crate) const fn game(&self) -> Option<GameChoice> {
        self.game
    }
}
