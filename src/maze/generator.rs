//! Randomised maze generation.
//!
//! Walls are sprinkled over the inner part of the board, then a breadth-first sweep from the start
//! knocks some of them down again and records which cells it could reach. Collectibles and mud are
//! only ever dropped on floor inside that swept region.

use std::collections::{HashSet, VecDeque};

use log::{debug, warn};
use rand::Rng;

use super::grid::{Cell, Direction, Grid, Position};

/// Wall probability for an inner cell before the size adjustment.
const BASE_WALL_DENSITY: f64 = 0.35;
/// Chance for a wall met by the sweep to be turned back into floor.
const WALL_OPENING_CHANCE: f64 = 0.3;
/// Placement attempts granted per requested collectible.
const ATTEMPTS_PER_ITEM: usize = 10;
/// Mud placement attempts per unit of board size.
const HAZARD_RATIO: f64 = 0.4;

/// Generates a maze of side `size` holding up to `dirt_count` dirt and `seed_count` seed cells.
///
/// The requested counts are targets: on cramped boards the sampler may run out of attempts and
/// place fewer, but it never places more. The start and the exit are always joined by the floor
/// ring just inside the border, which the wall pass never touches.
pub(crate) fn generate<R: Rng + ?Sized>(
    size: usize,
    dirt_count: usize,
    seed_count: usize,
    rng: &mut R,
) -> Grid {
    let mut grid = Grid::bordered(size);
    let size = grid.size();

    let density = wall_density(size);
    for y in 2..size - 2 {
        for x in 2..size - 2 {
            if rng.gen_bool(density) {
                grid.set(Position::new(x, y), Cell::Wall);
            }
        }
    }

    let reachable = sweep(&mut grid, rng);

    let exit = grid.exit();
    for position in [
        Grid::start(),
        Position::new(2, 1),
        Position::new(1, 2),
        Position::new(exit.x - 1, exit.y),
        Position::new(exit.x, exit.y - 1),
    ] {
        grid.set(position, Cell::Floor);
    }
    grid.set(exit, Cell::Exit);

    let dirt = scatter(
        &mut grid,
        &reachable,
        Cell::Dirt,
        dirt_count,
        dirt_count.saturating_mul(ATTEMPTS_PER_ITEM),
        rng,
    );
    let seeds = scatter(
        &mut grid,
        &reachable,
        Cell::Seed,
        seed_count,
        seed_count.saturating_mul(ATTEMPTS_PER_ITEM),
        rng,
    );
    let hazard_attempts = hazard_attempts(size);
    let hazards = scatter(
        &mut grid,
        &reachable,
        Cell::Hazard,
        hazard_attempts,
        hazard_attempts,
        rng,
    );

    if dirt < dirt_count || seeds < seed_count {
        warn!(
            "maze of size {size} holds {dirt}/{dirt_count} dirt and {seeds}/{seed_count} seeds"
        );
    }
    debug!("generated maze with {hazards} mud cells and density {density:.2}:\n{grid}");
    debug_assert!(
        grid.connects(Grid::start(), exit),
        "the floor ring must join the start and the exit"
    );

    grid
}

/// Returns the probability for an inner cell to start out as a wall.
fn wall_density(size: usize) -> f64 {
    let size = u32::try_from(size).map_or(f64::MAX, f64::from);
    (BASE_WALL_DENSITY + size / 100.).min(1.)
}

/// Returns the number of mud placement attempts for a board of side `size`.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "The value is a non-negative whole number bounded by the board size."
)]
fn hazard_attempts(size: usize) -> usize {
    let size = u32::try_from(size).map_or(f64::MAX, f64::from);
    (size * HAZARD_RATIO).floor() as usize
}

/// Sweeps the board breadth-first from the start, opening some walls on the way.
///
/// Every inner neighbour is looked at once. Walls are opened with [`WALL_OPENING_CHANCE`] and only
/// non-wall cells are expanded further. All visited positions are returned, including walls that
/// stayed closed; placement additionally requires floor, so those never receive items.
fn sweep<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> HashSet<Position> {
    let start = Grid::start();
    let mut visited = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        for direction in Direction::ALL {
            let Some(next) = current.step(direction) else {
                continue;
            };
            if !grid.is_interior(next) || !visited.insert(next) {
                continue;
            }

            if grid.get(next) == Some(Cell::Wall) && rng.gen_bool(WALL_OPENING_CHANCE) {
                grid.set(next, Cell::Floor);
            }
            if grid.get(next).is_some_and(Cell::is_passable) {
                queue.push_back(next);
            }
        }
    }

    visited
}

/// Drops up to `target` copies of `cell` on reachable floor by rejection sampling.
///
/// Candidates are drawn uniformly from the inner block at least two steps away from the border.
/// Returns how many cells were actually placed.
fn scatter<R: Rng + ?Sized>(
    grid: &mut Grid,
    reachable: &HashSet<Position>,
    cell: Cell,
    target: usize,
    attempts: usize,
    rng: &mut R,
) -> usize {
    let upper = grid.size() - 2;
    let mut placed = 0;

    for _ in 0..attempts {
        if placed >= target {
            break;
        }

        let candidate = Position::new(rng.gen_range(2..upper), rng.gen_range(2..upper));
        if grid.get(candidate) == Some(Cell::Floor) && reachable.contains(&candidate) {
            grid.set(candidate, cell);
            placed += 1;
        }
    }

    placed
}
