//! 2D grid for the world.

use crate::random::RandomSource;
use reef_core::{Census, Cell, Direction, Error, Position, Result, WorldConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A bounded 2D grid. Positions past the edges do not exist; there is no wrapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-empty grid
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let size = width as usize * height as usize;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Empty; size],
        })
    }

    /// Create and populate a grid from world configuration
    pub fn from_config<R: RandomSource>(config: &WorldConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let mut grid = Self::new(config.width, config.height)?;
        grid.randomize(config.rock_chance, config.creature_chance, rng);
        Ok(grid)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Get cell at position
    pub fn get(&self, pos: Position) -> Result<Cell> {
        self.check_bounds(pos)?;
        Ok(self.cell(pos))
    }

    /// Set cell at position
    pub fn set(&mut self, pos: Position, cell: Cell) -> Result<()> {
        self.check_bounds(pos)?;
        self.put(pos, cell);
        Ok(())
    }

    /// Values of the cells adjacent to `pos`, diagonals included.
    ///
    /// Positions outside the grid are skipped, so a corner has 3 neighbors and
    /// an interior cell 8. The order follows [`Direction::all`].
    pub fn neighbors(&self, pos: Position) -> Result<Vec<Cell>> {
        self.check_bounds(pos)?;
        Ok(self.neighbor_cells(pos).collect())
    }

    /// Number of neighbors of `pos` holding `kind`
    pub fn count_neighbors(&self, pos: Position, kind: Cell) -> Result<usize> {
        self.check_bounds(pos)?;
        Ok(self.neighbor_cells(pos).filter(|&cell| cell == kind).count())
    }

    /// Populate the grid: a rock pass over every cell, then a creature pass over
    /// the cells the rock pass left empty. Both passes scan in row-major order.
    pub fn randomize<R: RandomSource>(&mut self, rock_chance: u8, creature_chance: u8, rng: &mut R) {
        for cell in self.cells.iter_mut() {
            if rng.chance(rock_chance) {
                *cell = Cell::Rock;
            }
        }

        for cell in self.cells.iter_mut() {
            if *cell == Cell::Empty && rng.chance(creature_chance) {
                *cell = rng.species();
            }
        }

        let census = self.census();
        debug!(
            rocks = census.rock,
            fish = census.fish,
            shrimp = census.shrimp,
            "Populated {}x{} grid",
            self.width,
            self.height
        );
    }

    /// Count every kind of cell on the grid
    pub fn census(&self) -> Census {
        self.cells.iter().copied().collect()
    }

    /// Get position from index
    pub fn index_to_pos(&self, index: usize) -> Position {
        let x = (index as i32) % self.width;
        let y = (index as i32) / self.width;
        Position::new(x, y)
    }

    /// Iterator over all cells with positions, in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (self.index_to_pos(i), cell))
    }

    /// Rows of cells from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width as usize)
    }

    /// Neighbor values for an in-bounds position
    pub(crate) fn neighbor_cells(&self, pos: Position) -> impl Iterator<Item = Cell> + '_ {
        Direction::all()
            .into_iter()
            .map(move |direction| pos.step(direction))
            .filter(move |&neighbor| self.contains(neighbor))
            .map(move |neighbor| self.cell(neighbor))
    }

    /// Unchecked read; callers guarantee `pos` is in bounds
    pub(crate) fn cell(&self, pos: Position) -> Cell {
        self.cells[self.pos_to_index(pos)]
    }

    /// Unchecked write; callers guarantee `pos` is in bounds
    pub(crate) fn put(&mut self, pos: Position, cell: Cell) {
        let index = self.pos_to_index(pos);
        self.cells[index] = cell;
    }

    fn check_bounds(&self, pos: Position) -> Result<()> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                x: pos.x,
                y: pos.y,
                width: self.width,
                height: self.height,
            })
        }
    }

    fn pos_to_index(&self, pos: Position) -> usize {
        (pos.y * self.width + pos.x) as usize
    }
}
