//! Death and birth rules that advance the grid by one generation.

use crate::grid::Grid;
use reef_core::{Cell, Position, UpdatePolicy};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Fewest same-species neighbors a creature needs to survive
pub const MIN_SURVIVAL_NEIGHBORS: usize = 2;
/// Most same-species neighbors a creature can have and survive
pub const MAX_SURVIVAL_NEIGHBORS: usize = 3;
/// Exact neighbor count of the majority species needed for a birth
pub const BIRTH_NEIGHBORS: usize = 3;

/// Outcome of one generation step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub deaths: usize,
    pub births: usize,
}

/// Applies the generation rules. Holds no grid state between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleEngine {
    policy: UpdatePolicy,
}

impl RuleEngine {
    pub fn new(policy: UpdatePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> UpdatePolicy {
        self.policy
    }

    /// Death pass: a creature with fewer than 2 or more than 3 neighbors of
    /// its own species becomes empty. Returns the number of deaths.
    pub fn kill_creatures(&self, grid: &mut Grid) -> usize {
        let deaths = self.apply_pass(grid, survival);
        trace!(deaths, "Death pass complete");
        deaths
    }

    /// Birth pass: an empty cell takes the majority species among its
    /// neighbors when that species has exactly 3 of them. A tie goes to
    /// shrimp. Returns the number of births.
    pub fn create_creatures(&self, grid: &mut Grid) -> usize {
        let births = self.apply_pass(grid, birth);
        trace!(births, "Birth pass complete");
        births
    }

    /// One full generation: the death pass, then the birth pass
    pub fn step(&self, grid: &mut Grid) -> GenerationReport {
        let deaths = self.kill_creatures(grid);
        let births = self.create_creatures(grid);
        GenerationReport { deaths, births }
    }

    fn apply_pass<F>(&self, grid: &mut Grid, decide: F) -> usize
    where
        F: Fn(&Grid, Position, Cell) -> Option<Cell>,
    {
        match self.policy {
            UpdatePolicy::Snapshot => {
                let before: &Grid = grid;
                let changes: Vec<(Position, Cell)> = before
                    .iter()
                    .filter_map(|(pos, cell)| decide(before, pos, cell).map(|next| (pos, next)))
                    .collect();
                for &(pos, next) in &changes {
                    grid.put(pos, next);
                }
                changes.len()
            }
            UpdatePolicy::InPlace => {
                let mut changed = 0;
                for y in 0..grid.height() {
                    for x in 0..grid.width() {
                        let pos = Position::new(x, y);
                        if let Some(next) = decide(grid, pos, grid.cell(pos)) {
                            grid.put(pos, next);
                            changed += 1;
                        }
                    }
                }
                changed
            }
        }
    }
}

fn survival(grid: &Grid, pos: Position, cell: Cell) -> Option<Cell> {
    if !cell.is_creature() {
        return None;
    }
    let kin = grid.neighbor_cells(pos).filter(|&n| n == cell).count();
    if kin < MIN_SURVIVAL_NEIGHBORS || kin > MAX_SURVIVAL_NEIGHBORS {
        Some(Cell::Empty)
    } else {
        None
    }
}

fn birth(grid: &Grid, pos: Position, cell: Cell) -> Option<Cell> {
    if cell != Cell::Empty {
        return None;
    }
    let (fish, shrimp) = grid
        .neighbor_cells(pos)
        .fold((0, 0), |(fish, shrimp), n| match n {
            Cell::Fish => (fish + 1, shrimp),
            Cell::Shrimp => (fish, shrimp + 1),
            _ => (fish, shrimp),
        });

    if fish > shrimp {
        (fish == BIRTH_NEIGHBORS).then_some(Cell::Fish)
    } else {
        (shrimp == BIRTH_NEIGHBORS).then_some(Cell::Shrimp)
    }
}
