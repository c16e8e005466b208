//! Maze clean-up game.
//!
//! The player walks a randomly generated board collecting dirt and planting seedlings, and has to
//! reach the exit before the countdown runs out. Four levels of growing size make up a run.

mod game;
mod generator;
mod grid;
mod levels;

pub(crate) use game::{MazeGame, MazePhase};
pub(crate) use grid::{Cell, Direction, Position};
pub(crate) use levels::LEVELS;
