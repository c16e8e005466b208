//! Square grid of maze cells and the coordinate types used to walk it.

use std::{
    collections::{HashSet, VecDeque},
    fmt,
};

/// Smallest grid side for which the start, the exit and their forced neighbours are all interior.
pub(crate) const MIN_SIZE: usize = 5;

/// Content of a single maze cell.
///
/// Collectible cells keep their variant after being picked up; whether they still award points is
/// tracked by the game through its collected set, so the board can keep drawing them as restored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Cell {
    /// Open floor.
    Floor,
    /// Impassable wall.
    Wall,
    /// Mud to be cleaned up.
    Dirt,
    /// Spot where a seedling can be planted.
    Seed,
    /// Puddle of mud.
    ///
    /// Purely decorative; the player walks over it freely.
    Hazard,
    /// Level exit.
    Exit,
}

impl Cell {
    /// Returns the numeric code of the cell in the classic `0`-`5` grid notation.
    pub(crate) const fn code(self) -> u8 {
        match self {
            Self::Floor => 0,
            Self::Wall => 1,
            Self::Dirt => 2,
            Self::Seed => 3,
            Self::Hazard => 4,
            Self::Exit => 5,
        }
    }

    /// Returns whether the player may stand on the cell.
    pub(crate) const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

/// One of the four moves available to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    /// Towards row zero.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column zero.
    Left,
    /// Towards the last column.
    Right,
}

impl Direction {
    /// All directions, in the order neighbours are explored during generation.
    pub(crate) const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the `(dx, dy)` offset of a single step in this direction.
    const fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Grid coordinate, with `x` the column and `y` the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Position {
    /// Column index.
    pub(crate) x: usize,
    /// Row index.
    pub(crate) y: usize,
}

impl Position {
    /// Builds a position from a column and a row.
    pub(crate) const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring position in `direction`, or `None` when it would leave the first
    /// quadrant.
    pub(crate) const fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.offset();
        let Some(x) = self.x.checked_add_signed(dx) else {
            return None;
        };
        let Some(y) = self.y.checked_add_signed(dy) else {
            return None;
        };

        Some(Self { x, y })
    }
}

/// Square maze board.
///
/// Cells are stored row-major. Every constructor yields a board whose outer ring is wall.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Grid {
    /// Side length of the board.
    size: usize,
    /// Row-major cell storage of `size * size` entries.
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds an all-floor board surrounded by a ring of walls.
    ///
    /// Sizes below [`MIN_SIZE`] are raised to it.
    pub(crate) fn bordered(size: usize) -> Self {
        let size = size.max(MIN_SIZE);
        let cells = (0..size * size)
            .map(|idx| {
                let (x, y) = (idx % size, idx / size);
                if x == 0 || y == 0 || x == size - 1 || y == size - 1 {
                    Cell::Wall
                } else {
                    Cell::Floor
                }
            })
            .collect();

        Self { size, cells }
    }

    /// Returns the side length of the board.
    pub(crate) const fn size(&self) -> usize {
        self.size
    }

    /// Returns the fixed starting position of the player.
    pub(crate) const fn start() -> Position {
        Position::new(1, 1)
    }

    /// Returns the position of the exit cell, next to the bottom-right corner.
    pub(crate) const fn exit(&self) -> Position {
        Position::new(self.size - 2, self.size - 2)
    }

    /// Maps a position to its index in the cell storage.
    const fn index(&self, position: Position) -> Option<usize> {
        if position.x < self.size && position.y < self.size {
            Some(position.y * self.size + position.x)
        } else {
            None
        }
    }

    /// Returns the cell at `position`, or `None` when it lies outside the board.
    pub(crate) fn get(&self, position: Position) -> Option<Cell> {
        self.index(position)
            .and_then(|idx| self.cells.get(idx).copied())
    }

    /// Overwrites the cell at `position`. Positions outside the board are ignored.
    pub(crate) fn set(&mut self, position: Position, cell: Cell) {
        if let Some(slot) = self
            .index(position)
            .and_then(|idx| self.cells.get_mut(idx))
        {
            *slot = cell;
        }
    }

    /// Returns whether `position` lies inside the board but off the outer ring.
    pub(crate) const fn is_interior(&self, position: Position) -> bool {
        position.x > 0 && position.y > 0 && position.x < self.size - 1 && position.y < self.size - 1
    }

    /// Iterates over every cell together with its position, row by row.
    pub(crate) fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, cell)| (Position::new(idx % self.size, idx / self.size), *cell))
    }

    /// Counts the cells holding `cell`.
    pub(crate) fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|other| **other == cell).count()
    }

    /// Collects every position reachable from `origin` through passable cells.
    ///
    /// The result is empty when `origin` itself is not passable.
    pub(crate) fn reachable_from(&self, origin: Position) -> HashSet<Position> {
        let mut seen = HashSet::new();
        if !self.get(origin).is_some_and(Cell::is_passable) {
            return seen;
        }

        let mut queue = VecDeque::from([origin]);
        let _ = seen.insert(origin);
        while let Some(current) = queue.pop_front() {
            for direction in Direction::ALL {
                let Some(next) = current.step(direction) else {
                    continue;
                };
                if self.get(next).is_some_and(Cell::is_passable) && seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        seen
    }

    /// Returns whether a path of passable cells joins `from` and `to`.
    pub(crate) fn connects(&self, from: Position, to: Position) -> bool {
        self.reachable_from(from).contains(&to)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            for cell in row {
                write!(f, "{}", cell.code())?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bordered_grid_has_wall_ring() {
        let grid = Grid::bordered(9);

        assert_eq!(grid.size(), 9);
        for (position, cell) in grid.cells() {
            if grid.is_interior(position) {
                assert_eq!(cell, Cell::Floor, "interior cell {position:?} should be floor");
            } else {
                assert_eq!(cell, Cell::Wall, "border cell {position:?} should be wall");
            }
        }
    }

    #[test]
    fn test_bordered_grid_clamps_small_sizes() {
        assert_eq!(Grid::bordered(0).size(), MIN_SIZE);
        assert_eq!(Grid::bordered(3).size(), MIN_SIZE);
        assert_eq!(Grid::bordered(7).size(), 7);
    }

    #[test]
    fn test_get_and_set_ignore_out_of_bounds() {
        let mut grid = Grid::bordered(5);
        let outside = Position::new(5, 2);

        grid.set(outside, Cell::Dirt);

        assert_eq!(grid.get(outside), None);
        assert_eq!(grid.count(Cell::Dirt), 0);
    }

    #[test]
    fn test_position_step() {
        let origin = Position::new(0, 0);
        let inner = Position::new(3, 4);

        assert_eq!(origin.step(Direction::Up), None);
        assert_eq!(origin.step(Direction::Left), None);
        assert_eq!(inner.step(Direction::Up), Some(Position::new(3, 3)));
        assert_eq!(inner.step(Direction::Down), Some(Position::new(3, 5)));
        assert_eq!(inner.step(Direction::Left), Some(Position::new(2, 4)));
        assert_eq!(inner.step(Direction::Right), Some(Position::new(4, 4)));
    }

    #[test]
    fn test_cell_codes() {
        let codes: Vec<u8> = [
            Cell::Floor,
            Cell::Wall,
            Cell::Dirt,
            Cell::Seed,
            Cell::Hazard,
            Cell::Exit,
        ]
        .into_iter()
        .map(Cell::code)
        .collect();

        assert_eq!(codes, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_only_walls_block() {
        assert!(!Cell::Wall.is_passable());
        assert!(Cell::Floor.is_passable());
        assert!(Cell::Dirt.is_passable());
        assert!(Cell::Seed.is_passable());
        assert!(Cell::Hazard.is_passable());
        assert!(Cell::Exit.is_passable());
    }

    #[test]
    fn test_connects_through_passable_cells() {
        let mut grid = Grid::bordered(5);
        let exit = grid.exit();
        grid.set(Position::new(2, 2), Cell::Hazard);
        grid.set(Position::new(3, 2), Cell::Dirt);

        assert!(grid.connects(Grid::start(), exit));

        for y in 1..4 {
            grid.set(Position::new(2, y), Cell::Wall);
        }

        assert!(!grid.connects(Grid::start(), exit));
        assert!(grid.reachable_from(Position::new(0, 0)).is_empty());
    }

    #[test]
    fn test_display_uses_cell_codes() {
        let mut grid = Grid::bordered(5);
        grid.set(Position::new(3, 3), Cell::Exit);
        grid.set(Position::new(2, 1), Cell::Seed);

        assert_eq!(grid.to_string(), "11111\n10301\n10001\n10051\n11111\n");
    }
}
