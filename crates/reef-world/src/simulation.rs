//! Simulation state for a single reef.

use crate::grid::Grid;
use crate::rules::{GenerationReport, RuleEngine};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use reef_core::{Census, Result, RunConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Owns the grid for the lifetime of a run and advances it one generation at a time
pub struct Simulation {
    grid: Grid,
    engine: RuleEngine,
    seed: u64,
    tick: u64,
    total_deaths: u64,
    total_births: u64,
    extinct: bool,
}

impl Simulation {
    /// Generate a world from configuration. Without a configured seed one is
    /// drawn from entropy; either way it is reported by [`Simulation::seed`].
    pub fn new(config: &RunConfig) -> Result<Self> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let grid = Grid::from_config(&config.world, &mut rng)?;

        let census = grid.census();
        info!(
            seed,
            width = grid.width(),
            height = grid.height(),
            rocks = census.rock,
            fish = census.fish,
            shrimp = census.shrimp,
            policy = ?config.update_policy,
            "Generated world"
        );

        Ok(Self::with_seed(grid, RuleEngine::new(config.update_policy), seed))
    }

    /// Wrap an existing grid
    pub fn from_grid(grid: Grid, engine: RuleEngine) -> Self {
        Self::with_seed(grid, engine, 0)
    }

    fn with_seed(grid: Grid, engine: RuleEngine, seed: u64) -> Self {
        let extinct = grid.census().creatures() == 0;
        Self {
            grid,
            engine,
            seed,
            tick: 0,
            total_deaths: 0,
            total_births: 0,
            extinct,
        }
    }

    /// Advance one generation: the death pass, then the birth pass
    #[instrument(skip(self), fields(tick = self.tick + 1))]
    pub fn step(&mut self) -> GenerationReport {
        let report = self.engine.step(&mut self.grid);
        self.tick += 1;
        self.total_deaths += report.deaths as u64;
        self.total_births += report.births as u64;

        let census = self.grid.census();
        debug!(
            deaths = report.deaths,
            births = report.births,
            fish = census.fish,
            shrimp = census.shrimp,
            "Generation complete"
        );

        if census.creatures() == 0 && !self.extinct {
            info!(tick = self.tick, "All creatures have died out");
        }
        self.extinct = census.creatures() == 0;

        report
    }

    /// Run a fixed number of generations without any pacing
    pub fn run(&mut self, ticks: u64) -> RunSummary {
        for _ in 0..ticks {
            self.step();
        }
        self.summary()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of generations applied so far
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// True when neither fish nor shrimp remain. Nothing can be born afterwards.
    pub fn is_extinct(&self) -> bool {
        self.extinct
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            seed: self.seed,
            ticks: self.tick,
            census: self.grid.census(),
            total_deaths: self.total_deaths,
            total_births: self.total_births,
        }
    }
}

/// Totals for a run so far
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub seed: u64,
    pub ticks: u64,
    pub census: Census,
    pub total_deaths: u64,
    pub total_births: u64,
}
