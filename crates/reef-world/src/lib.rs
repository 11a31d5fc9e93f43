//! World simulation engine.
//!
//! This module implements the bounded 2D grid where fish and shrimp compete
//! for the space left between rocks, and the rules that advance it.

pub mod grid;
pub mod random;
pub mod rules;
pub mod simulation;

pub use grid::Grid;
pub use random::RandomSource;
pub use rules::{GenerationReport, RuleEngine};
pub use simulation::{RunSummary, Simulation};
