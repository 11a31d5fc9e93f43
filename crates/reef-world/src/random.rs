//! Randomness used while populating a grid.

use rand::Rng;
use reef_core::Cell;

/// Source of the random trials used by grid generation.
///
/// Implemented for every [`rand::Rng`], so a seeded `ChaCha8Rng` gives
/// reproducible worlds.
pub trait RandomSource {
    /// Returns true with probability `percent / 100`. Values above 100 always succeed.
    fn chance(&mut self, percent: u8) -> bool;

    /// Picks Fish or Shrimp with equal probability.
    fn species(&mut self) -> Cell;
}

impl<R: Rng> RandomSource for R {
    fn chance(&mut self, percent: u8) -> bool {
        self.gen_range(0..100u8) < percent
    }

    fn species(&mut self) -> Cell {
        if self.gen_bool(0.5) {
            Cell::Fish
        } else {
            Cell::Shrimp
        }
    }
}
