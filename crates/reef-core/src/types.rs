//! Core type definitions for the simulation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 2D position in the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn add(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.to_delta();
        self.add(dx, dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Direction towards one of the eight adjacent cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    pub fn to_delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::NorthEast => (1, -1),
            Direction::NorthWest => (-1, -1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (-1, 1),
        }
    }

    /// All directions in neighbor enumeration order: the west column,
    /// then the east column, then straight up and down.
    pub fn all() -> [Direction; 8] {
        [
            Direction::West,
            Direction::NorthWest,
            Direction::SouthWest,
            Direction::East,
            Direction::NorthEast,
            Direction::SouthEast,
            Direction::North,
            Direction::South,
        ]
    }
}

/// State of a single grid position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Rock,
    Fish,
    Shrimp,
}

impl Cell {
    pub fn is_creature(&self) -> bool {
        matches!(self, Cell::Fish | Cell::Shrimp)
    }

    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cell::Empty => "empty",
            Cell::Rock => "rock",
            Cell::Fish => "fish",
            Cell::Shrimp => "shrimp",
        };
        f.write_str(name)
    }
}

/// Per-kind cell counts for a grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Census {
    pub empty: usize,
    pub rock: usize,
    pub fish: usize,
    pub shrimp: usize,
}

impl Census {
    pub fn record(&mut self, cell: Cell) {
        match cell {
            Cell::Empty => self.empty += 1,
            Cell::Rock => self.rock += 1,
            Cell::Fish => self.fish += 1,
            Cell::Shrimp => self.shrimp += 1,
        }
    }

    pub fn creatures(&self) -> usize {
        self.fish + self.shrimp
    }

    pub fn total(&self) -> usize {
        self.empty + self.rock + self.fish + self.shrimp
    }
}

impl FromIterator<Cell> for Census {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        let mut census = Census::default();
        for cell in iter {
            census.record(cell);
        }
        census
    }
}
