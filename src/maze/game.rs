//! State machine of the maze game.

use std::collections::HashSet;

use log::info;
use rand::Rng;

use super::{
    generator,
    grid::{Cell, Direction, Grid, Position},
    levels::LevelDescriptor,
};

/// Points awarded for cleaning up a dirt cell.
pub(crate) const DIRT_POINTS: u32 = 10;
/// Points awarded for planting on a seed cell.
pub(crate) const SEED_POINTS: u32 = 15;
/// Bonus points per second left on the countdown when reaching the exit.
const TIME_BONUS_PER_SECOND: u32 = 2;

/// Phase of a maze run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MazePhase {
    /// Briefing screen, before the first level.
    Menu,
    /// A level is being played and the countdown runs.
    Playing,
    /// The exit of the current level was reached.
    LevelComplete,
    /// The countdown ran out.
    GameOver,
    /// The last level was completed.
    Victory,
}

/// Result of a directional input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MoveOutcome {
    /// The game was not accepting moves, or the target lies off the board.
    Ignored,
    /// The target is a wall.
    Blocked,
    /// The player moved onto a cell with nothing left to collect.
    Moved,
    /// The player moved onto an uncollected dirt or seed cell.
    Collected {
        /// Kind of the collected cell.
        cell: Cell,
        /// Points awarded.
        points: u32,
    },
    /// The player reached the exit.
    Exited {
        /// Time bonus awarded.
        bonus: u32,
    },
}

/// Whole state of a maze run.
///
/// The record is owned by the application and only ever mutated by the event handler that is
/// running, so every transition is a plain `&mut self` method. Out-of-phase calls are no-ops.
#[derive(Debug)]
pub(crate) struct MazeGame {
    /// Level table the run walks through.
    levels: &'static [LevelDescriptor],
    /// Current phase.
    phase: MazePhase,
    /// Index of the current level in [`levels`](MazeGame::levels).
    level: usize,
    /// Board of the current level.
    grid: Grid,
    /// Current player position; never a wall.
    position: Position,
    /// Seconds left on the countdown.
    time_left: u32,
    /// Dirt cells collected in the current level.
    dirt_collected: u32,
    /// Seed cells planted in the current level.
    seeds_planted: u32,
    /// Score accumulated over the whole run.
    score: u32,
    /// Collectible cells already rewarded in the current level.
    collected: HashSet<Position>,
}

impl MazeGame {
    /// Creates a run sitting on the briefing screen of the first level.
    pub(crate) fn new(levels: &'static [LevelDescriptor]) -> Self {
        let size = levels.first().map_or(0, |level| level.size);

        Self {
            levels,
            phase: MazePhase::Menu,
            level: 0,
            grid: Grid::bordered(size),
            position: Grid::start(),
            time_left: 0,
            dirt_collected: 0,
            seeds_planted: 0,
            score: 0,
            collected: HashSet::new(),
        }
    }

    /// Returns the current phase.
    pub(crate) const fn phase(&self) -> MazePhase {
        self.phase
    }

    /// Returns whether the countdown should be running.
    pub(crate) const fn is_playing(&self) -> bool {
        matches!(self.phase, MazePhase::Playing)
    }

    /// Returns the one-based number of the current level.
    pub(crate) const fn level_number(&self) -> usize {
        self.level + 1
    }

    /// Returns the number of levels in the run.
    pub(crate) const fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Returns the descriptor of the current level.
    pub(crate) fn descriptor(&self) -> Option<&'static LevelDescriptor> {
        self.levels.get(self.level)
    }

    /// Returns the descriptor of the level following the current one, if any.
    pub(crate) fn upcoming_descriptor(&self) -> Option<&'static LevelDescriptor> {
        self.levels.get(self.level + 1)
    }

    /// Returns whether the current level is the last one.
    pub(crate) const fn is_last_level(&self) -> bool {
        self.level + 1 >= self.levels.len()
    }

    /// Returns the board of the current level.
    pub(crate) const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the player position.
    pub(crate) const fn position(&self) -> Position {
        self.position
    }

    /// Returns the seconds left on the countdown.
    pub(crate) const fn time_left(&self) -> u32 {
        self.time_left
    }

    /// Returns the dirt cells collected in the current level.
    pub(crate) const fn dirt_collected(&self) -> u32 {
        self.dirt_collected
    }

    /// Returns the seed cells planted in the current level.
    pub(crate) const fn seeds_planted(&self) -> u32 {
        self.seeds_planted
    }

    /// Returns the run score.
    pub(crate) const fn score(&self) -> u32 {
        self.score
    }

    /// Returns whether the collectible at `position` was already rewarded.
    pub(crate) fn is_collected(&self, position: Position) -> bool {
        self.collected.contains(&position)
    }

    /// Leaves the briefing screen and starts the current level.
    pub(crate) fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.phase == MazePhase::Menu {
            self.begin_level(rng);
        }
    }

    /// Generates the board of the current level and resets the per-level state.
    ///
    /// The run score is kept.
    fn begin_level<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let Some(level) = self.descriptor() else {
            return;
        };

        self.grid = generator::generate(level.size, level.dirt_count, level.seed_count, rng);
        self.position = Grid::start();
        self.time_left = level.time_limit;
        self.dirt_collected = 0;
        self.seeds_planted = 0;
        self.collected.clear();
        self.phase = MazePhase::Playing;

        info!(
            "maze level {} started: size {}, {}s on the clock, score {}",
            self.level_number(),
            level.size,
            level.time_limit,
            self.score
        );
    }

    /// Advances the countdown by one second.
    ///
    /// Only meaningful while playing; reaching zero ends the run with a game over.
    pub(crate) fn tick(&mut self) {
        if self.phase != MazePhase::Playing {
            return;
        }

        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            self.phase = MazePhase::GameOver;
            info!(
                "maze level {} lost on time with {} dirt and {} seeds",
                self.level_number(),
                self.dirt_collected,
                self.seeds_planted
            );
        }
    }

    /// Moves the player one cell in `direction`, collecting whatever lies there.
    pub(crate) fn step(&mut self, direction: Direction) -> MoveOutcome {
        if self.phase != MazePhase::Playing {
            return MoveOutcome::Ignored;
        }
        let Some(target) = self.position.step(direction) else {
            return MoveOutcome::Ignored;
        };
        let Some(cell) = self.grid.get(target) else {
            return MoveOutcome::Ignored;
        };
        if !cell.is_passable() {
            return MoveOutcome::Blocked;
        }

        self.position = target;

        match cell {
            Cell::Dirt | Cell::Seed if self.collected.insert(target) => {
                let points = if cell == Cell::Dirt {
                    self.dirt_collected += 1;
                    DIRT_POINTS
                } else {
                    self.seeds_planted += 1;
                    SEED_POINTS
                };
                self.score += points;
                MoveOutcome::Collected { cell, points }
            }
            Cell::Exit => {
                let bonus = self.time_left * TIME_BONUS_PER_SECOND;
                self.score += bonus;
                self.phase = MazePhase::LevelComplete;
                info!(
                    "maze level {} complete with a {bonus} point time bonus, score {}",
                    self.level_number(),
                    self.score
                );
                MoveOutcome::Exited { bonus }
            }
            _ => MoveOutcome::Moved,
        }
    }

    /// Moves on from a completed level to the next one.
    ///
    /// Does nothing on the last level, which can only be finished.
    pub(crate) fn next_level<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.phase == MazePhase::LevelComplete && !self.is_last_level() {
            self.level += 1;
            self.begin_level(rng);
        }
    }

    /// Ends the run with a victory after completing the last level.
    pub(crate) fn finish(&mut self) {
        if self.phase == MazePhase::LevelComplete && self.is_last_level() {
            self.phase = MazePhase::Victory;
            info!("maze run won with {} points", self.score);
        }
    }

    /// Replays the current level after a game over.
    pub(crate) fn retry<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.phase == MazePhase::GameOver {
            self.begin_level(rng);
        }
    }

    /// Returns to the briefing screen of the first level with a zero score.
    pub(crate) fn reset(&mut self) {
        self.phase = MazePhase::Menu;
        self.level = 0;
        self.score = 0;
    }
}
